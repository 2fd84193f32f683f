//! Scenario tests for the tic-tac-toe engine.

use tictactoe_core::{Cell, Coord, GameEngine, MoveRejected, Outcome, Player};

fn play(engine: &mut GameEngine, moves: &[(i32, i32)]) {
    for &(row, col) in moves {
        let result = engine.apply_move(row, col);
        assert!(result.is_accepted(), "({row}, {col}) should be legal: {result}");
    }
}

#[test]
fn test_x_wins_main_diagonal() {
    let mut engine = GameEngine::new_session();

    play(&mut engine, &[(0, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(engine.outcome(), Outcome::InProgress);

    let result = engine.apply_move(2, 2);
    assert!(result.ended_round());
    assert_eq!(result.outcome(), Outcome::XWins);
    assert_eq!(engine.outcome(), Outcome::XWins);
    assert!(engine.is_over());
    assert_eq!(engine.scores().x_wins(), 1);
    assert_eq!(engine.scores().o_wins(), 0);
    assert_eq!(engine.scores().ties(), 0);
}

#[test]
fn test_full_board_without_line_is_tie() {
    let mut engine = GameEngine::new_session();

    // X: (0,0) (0,1) (1,2) (2,0) (2,2)   O: (0,2) (1,0) (1,1) (2,1)
    play(
        &mut engine,
        &[(0, 0), (0, 2), (0, 1), (1, 0), (1, 2), (1, 1), (2, 0), (2, 1), (2, 2)],
    );

    assert_eq!(engine.outcome(), Outcome::Tie);
    assert!(engine.is_over());
    assert_eq!(engine.scores().ties(), 1);
    assert_eq!(engine.scores().x_wins(), 0);
    assert_eq!(engine.scores().o_wins(), 0);
}

#[test]
fn test_out_of_bounds_leaves_state_unchanged() {
    let mut engine = GameEngine::new_session();
    let before = engine.clone();

    let result = engine.apply_move(5, 5);
    assert!(!result.is_accepted());
    assert_eq!(result.rejection(), Some(MoveRejected::OutOfBounds));
    assert_eq!(result.outcome(), Outcome::InProgress);
    assert_eq!(engine, before);

    for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 3)] {
        assert_eq!(
            engine.apply_move(row, col).rejection(),
            Some(MoveRejected::OutOfBounds)
        );
    }
    assert_eq!(engine, before);
}

#[test]
fn test_reset_alternates_starting_player() {
    let mut engine = GameEngine::new_session();
    let first = engine.starting_player();
    assert_eq!(first, Player::X);

    engine.reset_round();
    assert_eq!(engine.starting_player(), first.opponent());
    assert_eq!(engine.current_turn(), first.opponent());

    engine.reset_round();
    assert_eq!(engine.starting_player(), first);
    assert_eq!(engine.current_turn(), first);
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut engine = GameEngine::new_session();
    play(&mut engine, &[(1, 1)]);
    let before = engine.clone();

    let result = engine.apply_move(1, 1);
    assert_eq!(result.rejection(), Some(MoveRejected::CellOccupied));
    assert_eq!(result.placement(), None);
    assert_eq!(engine, before);
    assert_eq!(engine.current_turn(), Player::O);
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut engine = GameEngine::new_session();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let before = engine.clone();

    for (row, col) in [(2, 2), (0, 0), (7, 7)] {
        let result = engine.apply_move(row, col);
        assert_eq!(result.rejection(), Some(MoveRejected::GameOver));
        assert_eq!(result.outcome(), Outcome::XWins);
    }
    assert_eq!(engine, before);
}

#[test]
fn test_reset_keeps_scores_and_clears_board() {
    let mut engine = GameEngine::new_session();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(engine.scores().x_wins(), 1);

    engine.reset_round();
    assert!(engine.board().iter().all(|(_, cell)| cell == Cell::Empty));
    assert_eq!(engine.outcome(), Outcome::InProgress);
    assert!(!engine.is_over());
    assert_eq!(engine.scores().x_wins(), 1);

    // O opens the second round and wins the left column.
    assert_eq!(engine.current_turn(), Player::O);
    play(&mut engine, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
    assert_eq!(engine.outcome(), Outcome::OWins);
    assert_eq!(engine.scores().o_wins(), 1);
    assert_eq!(engine.scores().rounds(), 2);
    assert_eq!(
        engine.winning_line(),
        Some([Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)])
    );
}

#[test]
fn test_two_marks_on_diagonal_is_not_a_win() {
    let mut engine = GameEngine::new_session();
    play(&mut engine, &[(0, 0), (0, 1), (1, 1)]);
    assert_eq!(engine.outcome(), Outcome::InProgress);
    assert_eq!(engine.winning_line(), None);
}
