//! Turn state machine.
//!
//! Two states, one transition rule: while waiting for a move the current
//! player may act; a committed move either ends the game (the tracker
//! reported a connection) or hands the turn to the opponent. The won state
//! is terminal and has no outgoing transitions: the validator refuses
//! every later move before this machine is ever consulted again.

use crate::core::{GameState, Player};

/// Applies the turn/termination transition to a [`GameState`].
///
/// This is the only place the engine flips turns or declares a winner, and
/// it is symmetric in the two players: the mover's identity is data
/// flowing through one rule, not a code path.
pub struct GameStateMachine;

impl GameStateMachine {
    /// Advance the state for a move that has just been committed.
    ///
    /// `winning_move` is the connectivity tracker's verdict for the mover,
    /// queried immediately after the placement was folded in.
    ///
    /// ```
    /// use rust_hex::{GameState, GameStateMachine, GameStatus, Player};
    ///
    /// let mut state = GameState::new(Player::Red);
    ///
    /// GameStateMachine::transition(&mut state, Player::Red, false);
    /// assert_eq!(state.current_player(), Player::Blue);
    ///
    /// GameStateMachine::transition(&mut state, Player::Blue, true);
    /// assert_eq!(state.status(), GameStatus::Won(Player::Blue));
    /// ```
    pub fn transition(state: &mut GameState, mover: Player, winning_move: bool) {
        debug_assert!(!state.is_over(), "no transitions out of a finished game");
        debug_assert_eq!(
            state.current_player(),
            mover,
            "transition for a player out of turn"
        );

        if winning_move {
            state.set_won(mover);
        } else {
            state.pass_turn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;

    #[test]
    fn test_non_winning_move_flips_turn() {
        let mut state = GameState::new(Player::Red);

        GameStateMachine::transition(&mut state, Player::Red, false);
        assert_eq!(state.current_player(), Player::Blue);
        assert_eq!(state.status(), GameStatus::InProgress);

        GameStateMachine::transition(&mut state, Player::Blue, false);
        assert_eq!(state.current_player(), Player::Red);
    }

    #[test]
    fn test_winning_move_ends_game() {
        let mut state = GameState::new(Player::Red);

        GameStateMachine::transition(&mut state, Player::Red, true);
        assert_eq!(state.status(), GameStatus::Won(Player::Red));
        assert!(state.is_over());
    }

    #[test]
    fn test_machine_is_symmetric() {
        // Blue moving first and winning behaves exactly like Red would.
        let mut state = GameState::new(Player::Blue);

        GameStateMachine::transition(&mut state, Player::Blue, false);
        GameStateMachine::transition(&mut state, Player::Red, true);
        assert_eq!(state.status(), GameStatus::Won(Player::Red));
    }
}
