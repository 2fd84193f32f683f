//! The game engine: one active round plus the session score.

use crate::action::{MoveRejected, MoveResult, Placement};
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::rules;
use crate::score::ScoreBoard;
use crate::types::{Board, Cell, Coord, GameState, Outcome, Player};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine.
///
/// Owns the current [`GameState`] and the session's [`ScoreBoard`]. All
/// mutation goes through [`apply_move`](Self::apply_move) and
/// [`reset_round`](Self::reset_round). The engine is a plain value; hold one
/// per session and wrap it in a lock if several threads need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
    scores: ScoreBoard,
}

impl GameEngine {
    /// Starts a session: empty board, X to open, all scores zero.
    #[instrument]
    pub fn new_session() -> Self {
        info!("Starting new session");
        Self {
            state: GameState::new(Player::X),
            scores: ScoreBoard::new(),
        }
    }

    /// Starts a new round, handing the opening move to the other player.
    ///
    /// Scores carry over.
    #[instrument(skip(self), fields(previous_opener = %self.state.starting_player()))]
    pub fn reset_round(&mut self) {
        let opener = self.state.starting_player().opponent();
        self.state = GameState::new(opener);
        info!(%opener, "Round reset");
        self.debug_check_invariants();
    }

    /// Attempts to place the current player's mark at `(row, col)`.
    ///
    /// Rejections leave the state untouched. A move that completes a line or
    /// fills the board ends the round and updates the score.
    #[instrument(skip(self), fields(player = %self.state.current_turn()))]
    pub fn apply_move(&mut self, row: i32, col: i32) -> MoveResult {
        let coord = match self.check_move(row, col) {
            Ok(coord) => coord,
            Err(reason) => {
                debug!(%reason, "Move rejected");
                return MoveResult::rejected(reason, self.state.outcome());
            }
        };

        let mark = self.state.current_turn();
        self.state.place(coord, mark);

        // Only the mover's marks changed, so only the mover can have a line.
        let outcome = if rules::has_won(self.state.board(), mark) {
            Outcome::win_for(mark)
        } else if rules::is_full(self.state.board()) {
            Outcome::Tie
        } else {
            Outcome::InProgress
        };

        if outcome.is_terminal() {
            self.state.finish(outcome);
            self.scores.record(outcome);
            info!(%outcome, scores = %self.scores, "Round finished");
        } else {
            self.state.pass_turn();
        }

        self.debug_check_invariants();
        debug!(%coord, %outcome, "Move applied");
        MoveResult::accepted(Placement { mark, coord }, outcome)
    }

    fn check_move(&self, row: i32, col: i32) -> Result<Coord, MoveRejected> {
        if self.state.is_over() {
            return Err(MoveRejected::GameOver);
        }
        let coord = Coord::checked(row, col).ok_or(MoveRejected::OutOfBounds)?;
        if !self.state.board().get(coord).is_empty() {
            return Err(MoveRejected::CellOccupied);
        }
        Ok(coord)
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = RoundInvariants::check_all(&self.state)
        {
            panic!("round invariants violated: {violations:?}");
        }
    }

    /// Snapshot of the current round.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Contents of one cell.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.state.board().get(coord)
    }

    /// The player to move.
    pub fn current_turn(&self) -> Player {
        self.state.current_turn()
    }

    /// The player who opened the current round.
    pub fn starting_player(&self) -> Player {
        self.state.starting_player()
    }

    /// The current round's outcome.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Checks if the current round has ended.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Session score totals.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// The line that decided a won round.
    pub fn winning_line(&self) -> Option<[Coord; 3]> {
        self.state
            .outcome()
            .winner()
            .and_then(|winner| rules::winning_line(self.state.board(), winner))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new_session()
    }
}
