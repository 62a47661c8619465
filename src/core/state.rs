//! Game progression state: whose turn it is, whether anyone has won, and
//! the history of accepted moves.
//!
//! `GameState` is deliberately passive. Its mutators are crate-private and
//! are driven only by the session layer: the state machine flips turns and
//! declares winners, the controller appends history. External code reads it
//! through accessors or through [`GameSnapshot`](crate::GameSnapshot).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::moves::MoveRecord;
use super::player::Player;

/// Overall status of a game.
///
/// There is no draw variant: under hexagonal adjacency a filled board
/// always contains a winning chain for exactly one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game continues; moves are accepted.
    InProgress,
    /// The given player has connected their edges. Terminal.
    Won(Player),
}

impl GameStatus {
    /// Check whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    /// Get the winner, if the game has one.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player),
        }
    }
}

/// Mutable per-game state: player to move, status, and move history.
///
/// History uses a persistent vector, so cloning it into a snapshot is O(1)
/// structural sharing rather than a copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    current_player: Player,
    status: GameStatus,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create the state for a fresh game.
    #[must_use]
    pub fn new(first_player: Player) -> Self {
        Self {
            current_player: first_player,
            status: GameStatus::InProgress,
            history: Vector::new(),
        }
    }

    /// The player whose turn it is.
    ///
    /// Once the game is over this stays at the winning mover; the validator
    /// rejects all further moves before turn order matters.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Current game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// All accepted moves, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of accepted moves so far.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// Hand the turn to the opponent.
    pub(crate) fn pass_turn(&mut self) {
        debug_assert!(!self.is_over(), "no turns after the game ends");
        self.current_player = self.current_player.opponent();
    }

    /// Enter the terminal won state.
    pub(crate) fn set_won(&mut self, winner: Player) {
        debug_assert!(!self.is_over(), "a game is won at most once");
        self.status = GameStatus::Won(winner);
    }

    /// Append an accepted move to the history.
    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}
