//! Axial hexagonal coordinates.
//!
//! Cells are addressed by an axial pair `(q, r)`: `q` grows eastward, `r`
//! grows southward. On an N-sized board the playable rhombus is
//! `0 <= q < N`, `0 <= r < N`; bounds are a board property, not a
//! coordinate property, so `Coord` itself is unconstrained data.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An axial hex coordinate.
///
/// Ordering is lexicographic on `(q, r)`, which gives deterministic cell
/// listings without caring about hash iteration order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    /// Column axis, growing eastward.
    pub q: i32,
    /// Row axis, growing southward.
    pub r: i32,
}

impl Coord {
    /// The six axial neighbor offsets, counterclockwise from due East.
    ///
    /// The order is fixed and part of the public contract: everything that
    /// enumerates neighbors does so in this order, so tests and replays are
    /// reproducible.
    pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] =
        [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

    /// Create a new coordinate.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The six geometric neighbors, in [`NEIGHBOR_OFFSETS`] order.
    ///
    /// Purely geometric: no bounds filtering is applied here. Use
    /// [`BoardGrid::neighbors_of`](crate::BoardGrid::neighbors_of) for
    /// in-bounds neighbors.
    ///
    /// [`NEIGHBOR_OFFSETS`]: Self::NEIGHBOR_OFFSETS
    ///
    /// ```
    /// use rust_hex::Coord;
    ///
    /// let neighbors = Coord::new(0, 0).neighbors();
    /// assert_eq!(neighbors.len(), 6);
    /// assert_eq!(neighbors[0], Coord::new(1, 0));
    /// assert_eq!(neighbors[5], Coord::new(0, 1));
    /// ```
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Coord; 6]> {
        Self::NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dq, dr)| Coord::new(self.q + dq, self.r + dr))
            .collect()
    }
}

impl From<(i32, i32)> for Coord {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
