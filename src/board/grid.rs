//! The board grid: a fixed-size rhombus of hexagonal cells.
//!
//! The playable area is an N×N rhombus in axial coordinates: `0 <= q < N`,
//! `0 <= r < N`. Storage is sparse: only owned cells are kept, in a hash
//! map keyed by coordinate, so an empty board of any size costs nothing.
//!
//! ## Edges
//!
//! Each board side is a [`BoardEdge`]. Red must connect North (`r == 0`)
//! to South (`r == N-1`); Blue must connect West (`q == 0`) to East
//! (`q == N-1`). Corner cells lie on two edges and count for both.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, Coord, MoveError, Player};

/// One of the four board sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardEdge {
    /// The `r == 0` row.
    North,
    /// The `r == N-1` row.
    South,
    /// The `q == 0` column.
    West,
    /// The `q == N-1` column.
    East,
}

impl BoardEdge {
    /// The pair of edges a player must connect, in (first, second) order.
    ///
    /// ```
    /// use rust_hex::{BoardEdge, Player};
    ///
    /// assert_eq!(BoardEdge::targets(Player::Red), [BoardEdge::North, BoardEdge::South]);
    /// assert_eq!(BoardEdge::targets(Player::Blue), [BoardEdge::West, BoardEdge::East]);
    /// ```
    #[must_use]
    pub const fn targets(player: Player) -> [BoardEdge; 2] {
        match player {
            Player::Red => [BoardEdge::North, BoardEdge::South],
            Player::Blue => [BoardEdge::West, BoardEdge::East],
        }
    }
}

/// A fixed-size hexagonal board.
///
/// The size is chosen at creation and immutable for the session lifetime.
/// Cells only ever go from empty to owned; nothing here un-places a stone.
#[derive(Clone, Debug)]
pub struct BoardGrid {
    size: u16,
    /// Owned cells only; absence means empty.
    cells: FxHashMap<Coord, Player>,
}

impl BoardGrid {
    /// Default side length, the standard competitive Hex board.
    pub const DEFAULT_SIZE: u16 = 11;

    /// Largest supported side length. Keeps every cell index (and the four
    /// sentinel nodes above them) comfortably inside `u32`.
    pub const MAX_SIZE: u16 = 255;

    /// Create an empty board with the given side length.
    ///
    /// Panics if `size` is zero or exceeds [`MAX_SIZE`](Self::MAX_SIZE);
    /// board size is construction-time configuration, not user input.
    #[must_use]
    pub fn new(size: u16) -> Self {
        assert!(
            (1..=Self::MAX_SIZE).contains(&size),
            "Board size must be 1-{}",
            Self::MAX_SIZE
        );

        Self {
            size,
            cells: FxHashMap::default(),
        }
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Total number of cells (`size * size`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }

    /// Check whether a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        let n = i32::from(self.size);
        (0..n).contains(&coord.q) && (0..n).contains(&coord.r)
    }

    /// Read a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] if the coordinate is
    /// outside the board.
    pub fn cell_at(&self, coord: Coord) -> Result<Cell, MoveError> {
        if !self.contains(coord) {
            return Err(MoveError::InvalidCoordinate(coord));
        }

        Ok(self
            .cells
            .get(&coord)
            .copied()
            .map_or(Cell::Empty, Cell::Owned))
    }

    /// Owner of a cell, or `None` when the cell is empty or off-board.
    #[must_use]
    pub fn owner_of(&self, coord: Coord) -> Option<Player> {
        self.cells.get(&coord).copied()
    }

    /// Place a stone.
    ///
    /// The target must be in bounds and empty; the validator guarantees
    /// both before any commit, so this is a pure write.
    pub fn set_occupant(&mut self, coord: Coord, player: Player) {
        debug_assert!(self.contains(coord), "placement at {coord} is off-board");
        let previous = self.cells.insert(coord, player);
        debug_assert!(previous.is_none(), "cell {coord} was already owned");
    }

    /// In-bounds neighbors of a cell, in [`Coord::NEIGHBOR_OFFSETS`] order.
    ///
    /// Interior cells have six; edge cells have four; the two acute corners
    /// have two and the two obtuse corners three.
    ///
    /// ```
    /// use rust_hex::{BoardGrid, Coord};
    ///
    /// let board = BoardGrid::new(5);
    /// assert_eq!(board.neighbors_of(Coord::new(2, 2)).len(), 6);
    /// assert_eq!(board.neighbors_of(Coord::new(0, 0)).len(), 2);
    /// assert_eq!(board.neighbors_of(Coord::new(4, 0)).len(), 3);
    /// ```
    #[must_use]
    pub fn neighbors_of(&self, coord: Coord) -> SmallVec<[Coord; 6]> {
        coord
            .neighbors()
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// Check whether an in-bounds coordinate lies on the given edge.
    ///
    /// Off-board coordinates lie on no edge.
    #[must_use]
    pub fn touches_edge(&self, coord: Coord, edge: BoardEdge) -> bool {
        if !self.contains(coord) {
            return false;
        }

        let last = i32::from(self.size) - 1;
        match edge {
            BoardEdge::North => coord.r == 0,
            BoardEdge::South => coord.r == last,
            BoardEdge::West => coord.q == 0,
            BoardEdge::East => coord.q == last,
        }
    }

    /// Number of owned cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// Check whether every cell is owned.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.cell_count()
    }

    /// Iterate over owned cells in unspecified order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Coord, Player)> + '_ {
        self.cells.iter().map(|(&coord, &player)| (coord, player))
    }
}
