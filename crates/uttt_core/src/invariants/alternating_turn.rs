//! Alternating turn invariant: mark counts match the player to move.

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: X moves first and players alternate.
///
/// With X to move both players have made the same number of marks; with O
/// to move X is exactly one mark ahead.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let count = |player: Player| {
            state
                .board()
                .sub_boards()
                .iter()
                .flat_map(|sub| sub.squares().iter())
                .filter(|sq| **sq == Square::Occupied(player))
                .count()
        };
        let (x, o) = (count(Player::X), count(Player::O));

        match state.to_move() {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_holds_across_turns() {
        let mut state = GameState::new();
        assert!(AlternatingTurnInvariant::holds(&state));
        state
            .apply_move(Move::new(Position::Center, Position::Center), Player::X)
            .unwrap();
        assert!(AlternatingTurnInvariant::holds(&state));
        state
            .apply_move(Move::new(Position::Center, Position::TopLeft), Player::O)
            .unwrap();
        assert!(AlternatingTurnInvariant::holds(&state));
    }
}
