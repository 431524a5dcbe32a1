//! First-class invariants for match sessions.
//!
//! Invariants are logical properties that must hold throughout session
//! execution. They are testable independently and serve as
//! documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
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
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_marks;
pub mod replay_consistent;
pub mod score_ledger;

pub use alternating_marks::AlternatingMarksInvariant;
pub use replay_consistent::ReplayConsistentInvariant;
pub use score_ledger::ScoreLedgerInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    AlternatingMarksInvariant,
    ReplayConsistentInvariant,
    ScoreLedgerInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::MoveRecord;
    use crate::position::Position;
    use crate::session::MatchSession;
    use crate::types::Mark;

    #[test]
    fn test_invariant_set_holds_for_fresh_session() {
        let session = MatchSession::new("Ada".to_string(), "Grace".to_string());
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut session = MatchSession::new("Ada".to_string(), "Grace".to_string());
        session.apply_move(0, 0).expect("Valid move");
        session.apply_move(1, 4).expect("Valid move");
        session.apply_move(2, 8).expect("Valid move");

        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut session = MatchSession::new("Ada".to_string(), "Grace".to_string());
        session.apply_move(0, 0).expect("Valid move");

        // Corrupt the history with a second consecutive X move
        session
            .history
            .push(MoveRecord::new(Mark::X, Position::Center, Position::Center));

        let result = SessionInvariants::check_all(&session);
        assert!(result.is_err());

        let violations = result.unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = MatchSession::new("Ada".to_string(), "Grace".to_string());

        type TwoInvariants = (AlternatingMarksInvariant, ScoreLedgerInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
