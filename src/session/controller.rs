//! The session controller: one owned game from first move to win.
//!
//! `GameSession` composes the board, the connectivity tracker, and the
//! game state, and is the only public mutation surface. Every session
//! exclusively owns its parts; there is no shared or process-wide state,
//! so any number of sessions can run side by side.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::BoardGrid;
use crate::connectivity::ConnectivityTracker;
use crate::core::{
    Coord, GameState, GameStatus, Move, MoveError, MoveRecord, PerPlayer, Player, PlayerKind,
};
use crate::rules::MoveValidator;

use super::machine::GameStateMachine;

/// Configures and creates a [`GameSession`].
///
/// ## Example
///
/// ```
/// use rust_hex::{Player, PlayerKind, SessionBuilder};
///
/// let session = SessionBuilder::new()
///     .board_size(9)
///     .first_player(Player::Blue)
///     .player_kind(Player::Red, PlayerKind::Engine)
///     .build();
///
/// assert_eq!(session.board_size(), 9);
/// assert_eq!(session.state().current_player(), Player::Blue);
/// ```
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    board_size: u16,
    first_player: Player,
    kinds: PerPlayer<PlayerKind>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            board_size: BoardGrid::DEFAULT_SIZE,
            first_player: Player::Red,
            kinds: PerPlayer::with_value(PlayerKind::Human),
        }
    }
}

impl SessionBuilder {
    /// Create a builder with defaults: 11×11 board, Red first, two humans.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board side length.
    ///
    /// Panics if outside `1..=BoardGrid::MAX_SIZE`.
    #[must_use]
    pub fn board_size(mut self, size: u16) -> Self {
        assert!(
            (1..=BoardGrid::MAX_SIZE).contains(&size),
            "Board size must be 1-{}",
            BoardGrid::MAX_SIZE
        );
        self.board_size = size;
        self
    }

    /// Set which player moves first.
    #[must_use]
    pub fn first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Tag a seat as human- or engine-controlled.
    #[must_use]
    pub fn player_kind(mut self, player: Player, kind: PlayerKind) -> Self {
        self.kinds[player] = kind;
        self
    }

    /// Build the session.
    #[must_use]
    pub fn build(self) -> GameSession {
        GameSession {
            board: BoardGrid::new(self.board_size),
            tracker: ConnectivityTracker::new(self.board_size),
            state: GameState::new(self.first_player),
            kinds: self.kinds,
        }
    }
}

/// A single game session, exclusively owning its board, connectivity
/// tracker, and state.
///
/// Moves are applied atomically: validation runs first as a pure read, and
/// a rejected move returns an error with the session untouched.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: BoardGrid,
    tracker: ConnectivityTracker,
    state: GameState,
    kinds: PerPlayer<PlayerKind>,
}

impl GameSession {
    /// Create a session on an empty board of the given size, Red to move.
    #[must_use]
    pub fn new(board_size: u16) -> Self {
        SessionBuilder::new().board_size(board_size).build()
    }

    /// Start configuring a session.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &BoardGrid {
        &self.board
    }

    /// The game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Board side length.
    #[must_use]
    pub fn board_size(&self) -> u16 {
        self.board.size()
    }

    /// What controls the given seat.
    #[must_use]
    pub fn player_kind(&self, player: Player) -> PlayerKind {
        self.kinds[player]
    }

    /// Apply a move for `player` at `coord`.
    ///
    /// On success the stone is committed, connectivity is updated, the
    /// turn machine advances, the move is appended to history, and the new
    /// snapshot is returned. On failure nothing changes and the first
    /// violated rule comes back as the error.
    ///
    /// # Errors
    ///
    /// See [`MoveError`] for the rejection reasons, checked in order.
    #[instrument(skip(self), fields(player = %player, coord = %coord))]
    pub fn apply_move(&mut self, player: Player, coord: Coord) -> Result<GameSnapshot, MoveError> {
        MoveValidator::validate(&self.state, &self.board, Move::new(player, coord))?;

        self.board.set_occupant(coord, player);
        self.tracker.on_placement(&self.board, coord, player);
        let winning_move = self.tracker.has_won(player);
        GameStateMachine::transition(&mut self.state, player, winning_move);

        let turn = self.state.moves_played() as u32 + 1;
        self.state.record_move(MoveRecord::new(player, coord, turn));

        debug!(turn, occupied = self.board.occupied_count(), "move committed");
        if winning_move {
            info!(winner = %player, turns = turn, "game over");
        }

        Ok(self.current_state())
    }

    /// Snapshot the current session state.
    ///
    /// A pure read: consecutive calls with no intervening `apply_move`
    /// return equal snapshots. The history clone is O(1) structural
    /// sharing; the cell listing is rebuilt in sorted order so snapshots
    /// are deterministic.
    #[must_use]
    pub fn current_state(&self) -> GameSnapshot {
        let mut cells: Vec<(Coord, Player)> = self.board.occupied_cells().collect();
        cells.sort_unstable_by_key(|&(coord, _)| coord);

        GameSnapshot {
            board_size: self.board.size(),
            cells,
            current_player: self.state.current_player(),
            status: self.state.status(),
            history: self.state.history().clone(),
        }
    }

    /// Every legal placement for the side to move, row-major.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.state.is_over() {
            return Vec::new();
        }

        let n = i32::from(self.board.size());
        let mut moves = Vec::with_capacity(self.board.cell_count() - self.board.occupied_count());
        for r in 0..n {
            for q in 0..n {
                let coord = Coord::new(q, r);
                if self.board.owner_of(coord).is_none() {
                    moves.push(coord);
                }
            }
        }
        moves
    }
}

/// An immutable view of a session at one point in time.
///
/// This is the engine's read model for UIs, servers, and tests: board
/// occupancy (sorted by coordinate), the player to move, the status, and
/// the full move history. Serializable as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board side length.
    pub board_size: u16,
    /// Owned cells, sorted by coordinate.
    pub cells: Vec<(Coord, Player)>,
    /// The player to move (the winning mover once the game is over).
    pub current_player: Player,
    /// Game status.
    pub status: GameStatus,
    /// All accepted moves, in order.
    pub history: Vector<MoveRecord>,
}

impl GameSnapshot {
    /// Number of owned cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// Owner of a cell in this snapshot, if any.
    #[must_use]
    pub fn owner_of(&self, coord: Coord) -> Option<Player> {
        self.cells
            .binary_search_by_key(&coord, |&(c, _)| c)
            .ok()
            .map(|i| self.cells[i].1)
    }
}
