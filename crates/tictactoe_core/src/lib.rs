//! Pure tic-tac-toe rules engine.
//!
//! The crate has no I/O. A [`GameEngine`] owns one round's [`GameState`] and
//! the session's [`ScoreBoard`], and exposes three commands:
//!
//! - [`GameEngine::new_session`] starts with an empty board and X to move.
//! - [`GameEngine::apply_move`] places the current player's mark and reports
//!   the result as a [`MoveResult`].
//! - [`GameEngine::reset_round`] clears the board and alternates the opener.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, MoveRejected, Outcome};
//!
//! let mut engine = GameEngine::new_session();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     engine.apply_move(row, col);
//! }
//! assert_eq!(engine.outcome(), Outcome::XWins);
//! assert_eq!(engine.scores().x_wins(), 1);
//! assert_eq!(engine.apply_move(2, 2).rejection(), Some(MoveRejected::GameOver));
//! ```

#![warn(missing_docs)]

mod action;
mod engine;
pub mod invariants;
pub mod rules;
mod score;
mod types;

pub use action::{MoveRejected, MoveResult, Placement};
pub use engine::GameEngine;
pub use score::ScoreBoard;
pub use types::{BOARD_DIM, Board, Cell, Coord, GameState, Outcome, Player};
