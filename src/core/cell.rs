//! Board cell occupancy.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// The occupant of a single board cell.
///
/// A cell is either empty or owned by exactly one player. There are no
/// captures in Hex: once owned, a cell never reverts to empty or changes
/// owner, and no API on the board allows either.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No stone has been placed here.
    #[default]
    Empty,
    /// A stone belonging to the given player.
    Owned(Player),
}

impl Cell {
    /// Check whether the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the owner, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Owned(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::default().owner(), None);
    }

    #[test]
    fn test_owned_cell() {
        let cell = Cell::Owned(Player::Blue);
        assert!(!cell.is_empty());
        assert_eq!(cell.owner(), Some(Player::Blue));
    }

    #[test]
    fn test_from_player() {
        assert_eq!(Cell::from(Player::Red), Cell::Owned(Player::Red));
    }
}
