//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_DIM: usize = 3;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (opens the first round of a session).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// Returns the player whose mark occupies this cell.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A location on the board. Row 0 is the top row, column 0 the leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0-2).
    pub row: usize,
    /// Column index (0-2).
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate without range checking.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts signed coordinates, returning `None` outside the 3x3 grid.
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        let row = usize::try_from(row).ok().filter(|r| *r < BOARD_DIM)?;
        let col = usize::try_from(col).ok().filter(|c| *c < BOARD_DIM)?;
        Some(Self { row, col })
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < BOARD_DIM * BOARD_DIM).then(|| Self::new(index / BOARD_DIM, index % BOARD_DIM))
    }

    /// Row-major index of this coordinate (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_DIM + self.col
    }

    /// All nine coordinates in reading order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_DIM * BOARD_DIM).map(|i| Coord::new(i / BOARD_DIM, i % BOARD_DIM))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_DIM]; BOARD_DIM],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    ///
    /// Coordinates outside the grid read as [`Cell::Empty`].
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
            .unwrap_or_default()
    }

    /// Places a cell value. Out-of-range coordinates are ignored.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        if let Some(slot) = self
            .cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
        {
            *slot = cell;
        }
    }

    /// Iterates every cell with its coordinate in reading order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(|coord| (coord, self.get(coord)))
    }

    /// Number of marks placed by any player.
    pub fn mark_count(&self) -> usize {
        self.iter().filter(|(_, cell)| !cell.is_empty()).count()
    }

    /// Number of marks placed by the given player.
    pub fn marks_of(&self, player: Player) -> usize {
        self.iter()
            .filter(|(_, cell)| cell.mark() == Some(player))
            .count()
    }

    /// Coordinates of every empty cell.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
    }
}

impl fmt::Display for Board {
    /// Renders the board as text, numbering empty cells 1-9.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.cells.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", row_idx * BOARD_DIM + col_idx + 1)?,
                    Cell::X => f.write_str("X")?,
                    Cell::O => f.write_str("O")?,
                }
                if col_idx < BOARD_DIM - 1 {
                    f.write_str("|")?;
                }
            }
            if row_idx < BOARD_DIM - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// Round is ongoing.
    #[default]
    #[display("In progress")]
    InProgress,
    /// X completed a line.
    #[display("Winner: Player X")]
    XWins,
    /// O completed a line.
    #[display("Winner: Player O")]
    OWins,
    /// Board filled with no line.
    #[display("Game Tied!")]
    Tie,
}

impl Outcome {
    /// The winning outcome for the given player.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }

    /// The winner, if the round was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// Checks if the outcome ends the round.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Complete state of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_turn: Player,
    starting_player: Player,
    outcome: Outcome,
    is_over: bool,
}

impl GameState {
    /// Creates an empty round opened by `starting_player`.
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_turn: starting_player,
            starting_player,
            outcome: Outcome::InProgress,
            is_over: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Returns the player who opened this round.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Returns the round outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Checks if the round has reached a terminal outcome.
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub(crate) fn place(&mut self, coord: Coord, player: Player) {
        self.board.set(coord, Cell::from(player));
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.is_over = outcome.is_terminal();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
