//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Coord, Player};
use tracing::instrument;

/// The eight winning triples: rows, columns, then diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
    // Columns
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
    // Diagonals
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
];

/// Returns the first line fully marked by `player`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<[Coord; 3]> {
    LINES
        .into_iter()
        .find(|line| line.iter().all(|coord| board.get(*coord).mark() == Some(player)))
}

/// Checks whether `player` has three in a row.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Checks if either player has three in a row.
///
/// X is examined first. Legal play never produces lines for both players.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| has_won(board, *player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn board_with(marks: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(row, col, player) in marks {
            board.set(Coord::new(row, col), Cell::from(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let marks: Vec<_> = line.iter().map(|c| (c.row, c.col, player)).collect();
                let board = board_with(&marks);
                assert!(has_won(&board, player), "{line:?} should win for {player}");
                assert!(!has_won(&board, player.opponent()));
                assert_eq!(winning_line(&board, player), Some(line));
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board_with(&[(0, 0, Player::X), (1, 1, Player::X)]);
        assert!(!has_won(&board, Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, 0, Player::X), (0, 1, Player::O), (0, 2, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(0, 2, Player::O), (1, 1, Player::O), (2, 0, Player::O)]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }
}
