//! Typed move rejection reasons.

use super::coord::Coord;
use super::player::Player;

/// Why a submitted move was rejected.
///
/// Every variant is a normal, recoverable outcome returned to the caller;
/// none of them aborts the session, and a rejected move leaves the session
/// exactly as it was. Variants are listed in the order the checks run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The game already has a winner; no further moves are accepted.
    GameAlreadyOver {
        /// The player who won.
        winner: Player,
    },
    /// The submitting player is not the player to move.
    NotYourTurn {
        /// The player whose turn it actually is.
        expected: Player,
    },
    /// The coordinate lies outside the board.
    InvalidCoordinate(Coord),
    /// The target cell already holds a stone.
    CellOccupied(Coord),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::GameAlreadyOver { winner } => {
                write!(f, "game is already over, {winner} won")
            }
            MoveError::NotYourTurn { expected } => {
                write!(f, "it is {expected}'s turn to move")
            }
            MoveError::InvalidCoordinate(coord) => {
                write!(f, "coordinate {coord} is outside the board")
            }
            MoveError::CellOccupied(coord) => {
                write!(f, "cell {coord} is already occupied")
            }
        }
    }
}

impl std::error::Error for MoveError {}
