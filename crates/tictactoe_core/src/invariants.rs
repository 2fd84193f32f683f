//! First-class invariants for a tic-tac-toe round.
//!
//! Invariants are logical properties of a [`GameState`] that hold after every
//! engine operation. The engine checks them in debug builds; tests can check
//! them directly.

use crate::rules;
use crate::types::{GameState, Outcome};
use std::fmt;

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
    pub description: &'static str,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.description)
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation {
            description: I::description(),
        });
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// The opener has placed as many marks as the other player, or one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let opener = state.board().marks_of(state.starting_player());
        let other = state.board().marks_of(state.starting_player().opponent());
        opener == other || opener == other + 1
    }

    fn description() -> &'static str {
        "Opening player has the same number of marks as the opponent, or one more"
    }
}

/// While a round is in progress, the turn follows mark-count parity.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        if state.is_over() {
            return true;
        }
        let expected = if state.board().mark_count() % 2 == 0 {
            state.starting_player()
        } else {
            state.starting_player().opponent()
        };
        state.current_turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting from the round's opener"
    }
}

/// The terminal flag and outcome agree with each other and with the board.
pub struct TerminalFlagInvariant;

impl Invariant<GameState> for TerminalFlagInvariant {
    fn holds(state: &GameState) -> bool {
        if state.is_over() != state.outcome().is_terminal() {
            return false;
        }
        let board = state.board();
        match state.outcome() {
            Outcome::InProgress => rules::check_winner(board).is_none() && !rules::is_full(board),
            Outcome::XWins | Outcome::OWins => state
                .outcome()
                .winner()
                .is_some_and(|winner| rules::has_won(board, winner)),
            Outcome::Tie => rules::is_tie(board),
        }
    }

    fn description() -> &'static str {
        "Outcome and over flag match the board"
    }
}

/// All round invariants as a composable set.
pub type RoundInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    TerminalFlagInvariant,
);
