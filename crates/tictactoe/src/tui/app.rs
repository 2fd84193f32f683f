//! Application state and event handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use derive_getters::Getters;
use derive_new::new;
use ratatui::layout::{Position, Rect};
use tictactoe_core::{Coord, GameEngine, MoveRejected, MoveResult, Outcome, ScoreBoard};
use tracing::{debug, info, instrument};

use super::input::{self, Command};
use super::ui;
use crate::audio::Audio;
use crate::geometry::BoardGeometry;

/// Snapshot shown in the end-of-round popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct RoundSummary {
    /// How the round ended.
    outcome: Outcome,
    /// Session totals including this round.
    scores: ScoreBoard,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    audio: Audio,
    cursor: Coord,
    summary: Option<RoundSummary>,
    notice: Option<String>,
    viewport: Rect,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh session.
    ///
    /// `viewport` is the terminal area the screen is laid out in. It is used
    /// to map mouse clicks until the first frame is drawn.
    pub fn new(audio: Audio, viewport: Rect) -> Self {
        Self {
            engine: GameEngine::new_session(),
            audio,
            cursor: Coord::new(1, 1),
            summary: None,
            notice: None,
            viewport,
            should_quit: false,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The audio output.
    pub fn audio(&self) -> &Audio {
        &self.audio
    }

    /// The keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// The open end-of-round popup, if any.
    pub fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    /// Checks if the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The terminal area used for layout.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Records the area of the last drawn frame.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Where the board currently sits on screen.
    pub fn board_geometry(&self) -> BoardGeometry {
        BoardGeometry::new(ui::layout(self.viewport).board)
    }

    /// Text for the status line.
    pub fn status_line(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        if self.engine.is_over() {
            return format!("{}. Press n for a new game.", self.engine.outcome());
        }
        format!("Player {}'s turn", self.engine.current_turn())
    }

    /// Dispatches a terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row);
            }
            Event::Resize(width, height) => {
                self.set_viewport(Rect::new(0, 0, *width, *height));
            }
            _ => {}
        }
    }

    /// Handles a key press.
    ///
    /// While the round summary is open any key closes it. `q` still quits
    /// and `n` also starts the next round; Esc only closes the popup.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let command = input::command_for(key);

        if self.summary.take().is_some() {
            debug!("Round summary dismissed by key");
            match command {
                Some(Command::Quit) if key.code != KeyCode::Esc => self.quit(),
                Some(Command::NewGame) => self.new_game(),
                _ => {}
            }
            return;
        }

        match command {
            Some(Command::Quit) => self.quit(),
            Some(Command::NewGame) => self.new_game(),
            Some(Command::Confirm) if self.engine.is_over() => self.new_game(),
            Some(Command::Confirm) => {
                let cursor = self.cursor;
                self.play(cursor.row as i32, cursor.col as i32);
            }
            Some(Command::Place(coord)) => {
                self.cursor = coord;
                self.play(coord.row as i32, coord.col as i32);
            }
            Some(Command::MoveCursor(direction)) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            None => {}
        }
    }

    /// Handles a left click at a terminal position.
    ///
    /// A click on the board is mapped to a cell and played. A click anywhere
    /// closes an open round summary.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let on_button = ui::layout(self.viewport)
            .button
            .contains(Position::new(column, row));

        if self.summary.take().is_some() {
            debug!("Round summary dismissed by click");
            if on_button {
                self.new_game();
            }
            return;
        }

        if on_button {
            self.new_game();
            return;
        }

        let (logical_row, logical_col) = self.board_geometry().to_logical(column, row);
        self.play(logical_row, logical_col);
    }

    /// Submits a move and reacts to the result.
    ///
    /// Out-of-bounds attempts come from clicks off the board and are
    /// ignored silently.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: i32, col: i32) -> MoveResult {
        let result = self.engine.apply_move(row, col);
        self.audio.play_for(&result);

        match result.rejection() {
            None => {
                self.notice = None;
                if let Some(placement) = result.placement() {
                    self.cursor = placement.coord;
                }
                if result.ended_round() {
                    info!(outcome = %result.outcome(), scores = %self.engine.scores(), "Round over");
                    self.summary = Some(RoundSummary::new(result.outcome(), *self.engine.scores()));
                }
            }
            Some(MoveRejected::OutOfBounds) => {
                debug!("Click outside the board ignored");
            }
            Some(MoveRejected::CellOccupied) => {
                self.notice = Some(format!("{}. Pick an empty cell.", MoveRejected::CellOccupied));
            }
            Some(MoveRejected::GameOver) => {
                self.notice = Some("Round over. Press n for a new game.".to_string());
            }
        }
        result
    }

    /// Starts a new round, keeping the session scores.
    pub fn new_game(&mut self) {
        self.engine.reset_round();
        self.summary = None;
        self.notice = None;
        self.cursor = Coord::new(1, 1);
        info!(opener = %self.engine.starting_player(), "New round");
    }

    fn quit(&mut self) {
        info!("User quit");
        self.should_quit = true;
    }
}
