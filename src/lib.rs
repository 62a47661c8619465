//! # rust-hex
//!
//! A two-player Hex connection-game engine with incremental win detection.
//!
//! Players alternately place stones on a hexagonal board and win by forming
//! an unbroken chain of their own stones between their two assigned board
//! edges: Red connects North to South, Blue connects West to East.
//!
//! ## Design Principles
//!
//! 1. **Session-Owned State**: One [`GameSession`] per game. No globals,
//!    no singletons; independent sessions run in parallel with no
//!    coordination.
//!
//! 2. **Atomic Moves**: A move is validated in full before anything is
//!    committed. A rejected move leaves the session byte-for-byte unchanged.
//!
//! 3. **Incremental Connectivity**: Win detection is a union-find query
//!    over cells plus four virtual edge sentinels, not a board search.
//!    Each placement performs at most six unions; "has this player won?"
//!    is a single set-membership check.
//!
//! 4. **Players Are Data**: Both players run identical code paths. Player
//!    identity is a two-variant enum, never a branch in the rules.
//!
//! ## Modules
//!
//! - `core`: Players, coordinates, cells, moves, errors, game state
//! - `board`: Board geometry: cell storage, adjacency, edge rules
//! - `rules`: Move legality checks
//! - `connectivity`: Union-find and the edge-sentinel win tracker
//! - `session`: Turn state machine and the session controller
//!
//! ## Quick Start
//!
//! ```
//! use rust_hex::{Coord, GameSession, GameStatus, Player};
//!
//! let mut session = GameSession::new(5);
//!
//! // Red moves first by default.
//! let snapshot = session.apply_move(Player::Red, Coord::new(2, 0)).unwrap();
//! assert_eq!(snapshot.current_player, Player::Blue);
//! assert_eq!(snapshot.status, GameStatus::InProgress);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod connectivity;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Cell, Coord, GameState, GameStatus, Move, MoveError, MoveRecord, PerPlayer, Player, PlayerKind,
};

pub use crate::board::{BoardEdge, BoardGrid};

pub use crate::rules::MoveValidator;

pub use crate::connectivity::{ConnectivityTracker, DisjointSet};

pub use crate::session::{GameSession, GameSnapshot, GameStateMachine, SessionBuilder};
