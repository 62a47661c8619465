//! Session layer: turn state machine and the game controller.

pub mod controller;
pub mod machine;

pub use controller::{GameSession, GameSnapshot, SessionBuilder};
pub use machine::GameStateMachine;
