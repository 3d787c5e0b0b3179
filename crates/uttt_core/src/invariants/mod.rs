//! First-class invariants for ultimate tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`]. They are checked after each applied move in debug builds
//! and can be tested independently.

use crate::GameState;
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod active_target;
pub mod alternating_turn;
pub mod cached_winners;

pub use active_target::ActiveTargetOpenInvariant;
pub use alternating_turn::AlternatingTurnInvariant;
pub use cached_winners::CachedWinnersInvariant;

/// All game invariants as a composable set.
pub type UltimateInvariants = (
    ActiveTargetOpenInvariant,
    CachedWinnersInvariant,
    AlternatingTurnInvariant,
);

/// Asserts that all game invariants hold (panics on violation in debug builds).
pub fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = UltimateInvariants::check_all(state)
    {
        error!(?violations, "invariant violated");
        panic!("invariant violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(UltimateInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut state = GameState::new();
        for _ in 0..20 {
            let Some(mov) = state.legal_moves().first().copied() else {
                break;
            };
            state.apply_move(mov, state.to_move()).unwrap();
            assert!(UltimateInvariants::check_all(&state).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        // O marked twice in a row: the alternation invariant fails.
        let mut board = crate::MetaBoard::new();
        board
            .apply(Move::new(Position::Center, Position::TopLeft), Player::O)
            .unwrap();
        let state = GameState::from_parts(board, Player::X);

        let violations = UltimateInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            AlternatingTurnInvariant::description()
        );
    }
}
