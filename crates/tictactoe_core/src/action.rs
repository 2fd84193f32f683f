//! Move results and rejection reasons.
//!
//! A move attempt always yields a [`MoveResult`]. Rejections are ordinary
//! values; the engine never panics on bad input and never mutates state when
//! it rejects.

use crate::types::{Coord, Outcome, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum MoveRejected {
    /// The round already reached a terminal outcome.
    #[display("Game is already over")]
    GameOver,
    /// The coordinates fall outside the 3x3 grid.
    #[display("Position is outside the board")]
    OutOfBounds,
    /// The target cell already holds a mark.
    #[display("Cell is already occupied")]
    CellOccupied,
}

/// A mark that was placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The player whose mark was placed.
    pub mark: Player,
    /// Where it was placed.
    pub coord: Coord,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}

/// Outcome of a single `apply_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    verdict: Result<Placement, MoveRejected>,
    outcome: Outcome,
}

impl MoveResult {
    pub(crate) fn accepted(placement: Placement, outcome: Outcome) -> Self {
        Self {
            verdict: Ok(placement),
            outcome,
        }
    }

    pub(crate) fn rejected(reason: MoveRejected, outcome: Outcome) -> Self {
        Self {
            verdict: Err(reason),
            outcome,
        }
    }

    /// Checks if the mark was placed.
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_ok()
    }

    /// The placed mark and cell, if accepted.
    pub fn placement(&self) -> Option<Placement> {
        self.verdict.ok()
    }

    /// The rejection reason, if rejected.
    pub fn rejection(&self) -> Option<MoveRejected> {
        self.verdict.err()
    }

    /// Round outcome after this call. Unchanged from before when rejected.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Checks if this move ended the round.
    pub fn ended_round(&self) -> bool {
        self.is_accepted() && self.outcome.is_terminal()
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verdict {
            Ok(placement) => write!(f, "{placement} ({})", self.outcome),
            Err(reason) => write!(f, "rejected: {reason}"),
        }
    }
}
