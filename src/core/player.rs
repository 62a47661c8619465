//! Player identity and per-player data storage.
//!
//! ## Player
//!
//! Hex is strictly a two-player game, so player identity is a closed
//! two-variant enum rather than a numeric id. Red moves first and connects
//! the North and South edges; Blue connects West and East.
//!
//! ## PerPlayer
//!
//! Fixed two-slot storage indexed by `Player`. Used wherever the engine
//! keeps symmetric per-player data (seat kinds, sentinel node pairs).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
///
/// Identity is data: the rules never branch on *which* player is moving,
/// only on whose stones and edges are involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// First mover; connects the North and South edges.
    Red,
    /// Second mover; connects the West and East edges.
    Blue,
}

impl Player {
    /// Both players, Red first.
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    /// Get the other player.
    ///
    /// ```
    /// use rust_hex::Player;
    ///
    /// assert_eq!(Player::Red.opponent(), Player::Blue);
    /// assert_eq!(Player::Blue.opponent(), Player::Red);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Get the player name for display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What is sitting in a seat.
///
/// A closed tag, not a trait object: the engine itself never consults it,
/// it exists so an external layer (UI, AI driver) can mark a seat as
/// machine-controlled without subclassing anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves are supplied by a person.
    #[default]
    Human,
    /// Moves are supplied by an engine opponent.
    Engine,
}

/// Per-player data storage with one slot per seat.
///
/// ## Example
///
/// ```
/// use rust_hex::{PerPlayer, Player};
///
/// let mut stones: PerPlayer<u32> = PerPlayer::with_value(0);
/// stones[Player::Red] += 1;
///
/// assert_eq!(stones[Player::Red], 1);
/// assert_eq!(stones[Player::Blue], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    red: T,
    blue: T,
}

impl<T> PerPlayer<T> {
    /// Create from explicit values for each seat.
    #[must_use]
    pub const fn new(red: T, blue: T) -> Self {
        Self { red, blue }
    }

    /// Create with both slots set to the same value.
    #[must_use]
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            red: value.clone(),
            blue: value,
        }
    }

    /// Create with values from a factory function.
    #[must_use]
    pub fn from_fn(factory: impl Fn(Player) -> T) -> Self {
        Self {
            red: factory(Player::Red),
            blue: factory(Player::Blue),
        }
    }

    /// Get a reference to a player's slot.
    #[must_use]
    pub const fn get(&self, player: Player) -> &T {
        match player {
            Player::Red => &self.red,
            Player::Blue => &self.blue,
        }
    }

    /// Get a mutable reference to a player's slot.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::Red => &mut self.red,
            Player::Blue => &mut self.blue,
        }
    }

    /// Iterate over (Player, &T) pairs, Red first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [(Player::Red, &self.red), (Player::Blue, &self.blue)].into_iter()
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
