//! Session score totals.

use crate::types::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Wins and ties accumulated over a session.
///
/// Only terminal outcomes are counted. The board is never consulted here;
/// the engine records each round exactly once when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl ScoreBoard {
    /// Creates a score board with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Rounds won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Rounds that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total rounds finished this session.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    /// Increments the counter matching a terminal outcome.
    #[instrument]
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWins => self.x_wins += 1,
            Outcome::OWins => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => return,
        }
        debug!(x = self.x_wins, o = self.o_wins, ties = self.ties, "Score updated");
    }
}

impl fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player X: {} | Player O: {} | Ties: {}",
            self.x_wins, self.o_wins, self.ties
        )
    }
}
