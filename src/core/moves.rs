//! Move submission and history records.
//!
//! A [`Move`] is what a caller proposes; a [`MoveRecord`] is what the
//! session keeps once the move has been validated and committed. History is
//! append-only: accepted records are never edited or removed.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::Player;

/// A proposed stone placement: who, and where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player claiming to move.
    pub player: Player,
    /// The target cell.
    pub coord: Coord,
}

impl Move {
    /// Create a new move proposal.
    #[must_use]
    pub const fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }
}

/// An accepted move, as stored in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,
    /// Where the stone was placed.
    pub coord: Coord,
    /// Turn number, starting at 1 for the first move of the game.
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new history record.
    #[must_use]
    pub const fn new(player: Player, coord: Coord, turn: u32) -> Self {
        Self {
            player,
            coord,
            turn,
        }
    }
}
