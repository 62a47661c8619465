//! Incremental win detection via edge sentinels.
//!
//! Cells map to union-find nodes row-major (`r * N + q`); four virtual
//! sentinel nodes sit above them, one per board edge that matters: Red's
//! North/South pair and Blue's West/East pair. Placing a stone unions it
//! with its same-owner neighbors and with the sentinel of any target edge
//! it touches. A player has won exactly when their two sentinels share a
//! set.
//!
//! Only the mover's connectivity can change on a move, so the winner is
//! known the instant the connecting union happens and simultaneous wins
//! cannot occur.

use crate::board::{BoardEdge, BoardGrid};
use crate::core::{Coord, PerPlayer, Player};

use super::disjoint_set::DisjointSet;

/// Tracks same-owner connectivity for one board, including edge contact.
///
/// Feed it every committed placement exactly once, in order, via
/// [`on_placement`](Self::on_placement); ask [`has_won`](Self::has_won)
/// immediately after. It is the sole win-detection authority in the
/// engine.
#[derive(Clone, Debug)]
pub struct ConnectivityTracker {
    size: u16,
    sets: DisjointSet,
    /// Sentinel node ids per player, aligned with `BoardEdge::targets`.
    sentinels: PerPlayer<[usize; 2]>,
}

impl ConnectivityTracker {
    /// Create a tracker for an empty board with the given side length.
    #[must_use]
    pub fn new(board_size: u16) -> Self {
        let cells = usize::from(board_size) * usize::from(board_size);

        Self {
            size: board_size,
            sets: DisjointSet::new(cells + 4),
            sentinels: PerPlayer::new([cells, cells + 1], [cells + 2, cells + 3]),
        }
    }

    /// Union-find node for an in-bounds coordinate.
    fn node(&self, coord: Coord) -> usize {
        coord.r as usize * usize::from(self.size) + coord.q as usize
    }

    /// Fold a committed placement into the connectivity structure.
    ///
    /// Must be called exactly once per accepted move, after the stone has
    /// been written to `board`. Unions the placed cell with every
    /// same-owner neighbor and with each of the player's target-edge
    /// sentinels the coordinate touches.
    pub fn on_placement(&mut self, board: &BoardGrid, coord: Coord, player: Player) {
        debug_assert_eq!(board.size(), self.size, "tracker bound to a different board");
        debug_assert_eq!(
            board.owner_of(coord),
            Some(player),
            "placement must be committed before tracking"
        );

        let node = self.node(coord);

        for neighbor in board.neighbors_of(coord) {
            if board.owner_of(neighbor) == Some(player) {
                self.sets.union(node, self.node(neighbor));
            }
        }

        let sentinels = self.sentinels[player];
        for (edge, sentinel) in BoardEdge::targets(player).into_iter().zip(sentinels) {
            if board.touches_edge(coord, edge) {
                self.sets.union(node, sentinel);
            }
        }
    }

    /// Check whether the player's two target edges are connected.
    ///
    /// Takes `&mut self` because the underlying find compresses paths; the
    /// partition itself is not changed.
    pub fn has_won(&mut self, player: Player) -> bool {
        let [first, second] = self.sentinels[player];
        self.sets.connected(first, second)
    }

    /// Check whether two stones of the same chain are connected.
    ///
    /// Both coordinates must be in bounds for the tracked board size.
    pub fn are_connected(&mut self, a: Coord, b: Coord) -> bool {
        let (a, b) = (self.node(a), self.node(b));
        self.sets.connected(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Place a stone on the board and feed it to the tracker, the way the
    /// session layer does.
    fn place(
        board: &mut BoardGrid,
        tracker: &mut ConnectivityTracker,
        player: Player,
        coord: Coord,
    ) {
        board.set_occupant(coord, player);
        tracker.on_placement(board, coord, player);
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let mut tracker = ConnectivityTracker::new(5);
        assert!(!tracker.has_won(Player::Red));
        assert!(!tracker.has_won(Player::Blue));
    }

    #[test]
    fn test_straight_column_wins_for_red() {
        let mut board = BoardGrid::new(5);
        let mut tracker = ConnectivityTracker::new(5);

        for r in 0..4 {
            place(&mut board, &mut tracker, Player::Red, Coord::new(2, r));
            assert!(!tracker.has_won(Player::Red), "premature win at r={r}");
        }

        place(&mut board, &mut tracker, Player::Red, Coord::new(2, 4));
        assert!(tracker.has_won(Player::Red));
        assert!(!tracker.has_won(Player::Blue));
    }

    #[test]
    fn test_straight_row_wins_for_blue() {
        let mut board = BoardGrid::new(4);
        let mut tracker = ConnectivityTracker::new(4);

        for q in 0..4 {
            place(&mut board, &mut tracker, Player::Blue, Coord::new(q, 1));
        }

        assert!(tracker.has_won(Player::Blue));
        assert!(!tracker.has_won(Player::Red));
    }

    #[test]
    fn test_row_does_not_win_for_red() {
        // A West-East chain is Blue's goal; Red gains nothing from it.
        let mut board = BoardGrid::new(4);
        let mut tracker = ConnectivityTracker::new(4);

        for q in 0..4 {
            place(&mut board, &mut tracker, Player::Red, Coord::new(q, 1));
        }

        assert!(!tracker.has_won(Player::Red));
    }

    #[test]
    fn test_diagonal_chain_wins() {
        // (0, r) steps to (1, r) via the East offset and down via (0, 1);
        // a staircase using the (1, -1) / (-1, 1) diagonals also connects.
        let mut board = BoardGrid::new(3);
        let mut tracker = ConnectivityTracker::new(3);

        // Staircase: (2,0) -> (1,1) -> (0,2) uses the SW diagonal twice.
        place(&mut board, &mut tracker, Player::Red, Coord::new(2, 0));
        place(&mut board, &mut tracker, Player::Red, Coord::new(1, 1));
        assert!(!tracker.has_won(Player::Red));
        place(&mut board, &mut tracker, Player::Red, Coord::new(0, 2));

        assert!(tracker.has_won(Player::Red));
    }

    #[test]
    fn test_gap_does_not_connect() {
        let mut board = BoardGrid::new(3);
        let mut tracker = ConnectivityTracker::new(3);

        place(&mut board, &mut tracker, Player::Red, Coord::new(1, 0));
        place(&mut board, &mut tracker, Player::Red, Coord::new(1, 2));

        assert!(!tracker.has_won(Player::Red));
        assert!(!tracker.are_connected(Coord::new(1, 0), Coord::new(1, 2)));

        // Filling the gap joins the chain and the edges.
        place(&mut board, &mut tracker, Player::Red, Coord::new(1, 1));
        assert!(tracker.are_connected(Coord::new(1, 0), Coord::new(1, 2)));
        assert!(tracker.has_won(Player::Red));
    }

    #[test]
    fn test_opponent_stones_do_not_link() {
        let mut board = BoardGrid::new(3);
        let mut tracker = ConnectivityTracker::new(3);

        place(&mut board, &mut tracker, Player::Red, Coord::new(1, 0));
        place(&mut board, &mut tracker, Player::Blue, Coord::new(1, 1));
        place(&mut board, &mut tracker, Player::Red, Coord::new(1, 2));

        // Blue's stone sits between the two Red stones but joins nothing.
        assert!(!tracker.are_connected(Coord::new(1, 0), Coord::new(1, 2)));
        assert!(!tracker.has_won(Player::Red));
    }

    #[test]
    fn test_single_cell_board_wins_immediately() {
        let mut board = BoardGrid::new(1);
        let mut tracker = ConnectivityTracker::new(1);

        place(&mut board, &mut tracker, Player::Red, Coord::new(0, 0));
        // The one cell touches both of Red's edges (and both of Blue's,
        // but it is not Blue's stone).
        assert!(tracker.has_won(Player::Red));
        assert!(!tracker.has_won(Player::Blue));
    }

    #[test]
    fn test_edge_contact_alone_is_not_a_win() {
        let mut board = BoardGrid::new(5);
        let mut tracker = ConnectivityTracker::new(5);

        place(&mut board, &mut tracker, Player::Red, Coord::new(2, 0));
        place(&mut board, &mut tracker, Player::Red, Coord::new(2, 4));

        // Touching both edges with disconnected stones is not a chain.
        assert!(!tracker.has_won(Player::Red));
    }

    #[test]
    fn test_merging_two_groups_completes_win() {
        let mut board = BoardGrid::new(5);
        let mut tracker = ConnectivityTracker::new(5);

        // Upper group touching North, lower group touching South.
        for r in 0..2 {
            place(&mut board, &mut tracker, Player::Red, Coord::new(1, r));
        }
        for r in 3..5 {
            place(&mut board, &mut tracker, Player::Red, Coord::new(1, r));
        }
        assert!(!tracker.has_won(Player::Red));

        place(&mut board, &mut tracker, Player::Red, Coord::new(1, 2));
        assert!(tracker.has_won(Player::Red));
    }
}
