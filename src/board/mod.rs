//! Board geometry: cell storage, bounds, adjacency, and edge rules.

pub mod grid;

pub use grid::{BoardEdge, BoardGrid};
