//! Pure-read move validation.
//!
//! Validation never mutates anything: it looks at the game state and board
//! and either clears the move or names the first rule it breaks. The
//! session commits a move only after validation passes in full, which is
//! what makes move application atomic.

use crate::board::BoardGrid;
use crate::core::{GameState, GameStatus, Move, MoveError};

/// Decides whether a proposed move is legal.
///
/// Checks run in a fixed order, and the first failure wins:
///
/// 1. The game is still in progress, else [`MoveError::GameAlreadyOver`]
/// 2. The mover is the player to move, else [`MoveError::NotYourTurn`]
/// 3. The coordinate is on the board, else [`MoveError::InvalidCoordinate`]
/// 4. The target cell is empty, else [`MoveError::CellOccupied`]
pub struct MoveValidator;

impl MoveValidator {
    /// Validate a proposed move against the current state and board.
    ///
    /// # Errors
    ///
    /// Returns the first failed check, in the order documented above.
    ///
    /// ```
    /// use rust_hex::{BoardGrid, Coord, GameState, Move, MoveError, MoveValidator, Player};
    ///
    /// let state = GameState::new(Player::Red);
    /// let board = BoardGrid::new(3);
    ///
    /// let out_of_turn = Move::new(Player::Blue, Coord::new(0, 0));
    /// assert_eq!(
    ///     MoveValidator::validate(&state, &board, out_of_turn),
    ///     Err(MoveError::NotYourTurn { expected: Player::Red })
    /// );
    /// ```
    pub fn validate(state: &GameState, board: &BoardGrid, mov: Move) -> Result<(), MoveError> {
        if let GameStatus::Won(winner) = state.status() {
            return Err(MoveError::GameAlreadyOver { winner });
        }

        if mov.player != state.current_player() {
            return Err(MoveError::NotYourTurn {
                expected: state.current_player(),
            });
        }

        if !board.contains(mov.coord) {
            return Err(MoveError::InvalidCoordinate(mov.coord));
        }

        if board.owner_of(mov.coord).is_some() {
            return Err(MoveError::CellOccupied(mov.coord));
        }

        Ok(())
    }
}
