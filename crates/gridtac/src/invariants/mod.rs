//! First-class invariants for the game state machine.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

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
///
/// Implementations are provided for tuples, enabling composition of
/// multiple invariants into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or `Err` with the list
    /// of violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($name:ident),+) => {
        impl<S, $($name: Invariant<S>),+> InvariantSet<S> for ($($name,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$name::holds(state) {
                        violations.push(InvariantViolation::new($name::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod alternating_turn;
pub mod board_sized;
pub mod status_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use board_sized::BoardSizedInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    BoardSizedInvariant,
    AlternatingTurnInvariant,
    StatusConsistentInvariant,
);
