//! Tests for the round engine.

use tictactoe_core::{BoardEngine, Cell, InvalidMove, Mark, RoundOutcome};

fn play(engine: &mut BoardEngine, moves: &[(usize, usize)]) -> RoundOutcome {
    let mut outcome = engine.outcome();
    for &(row, col) in moves {
        outcome = engine.place(row, col).expect("Valid move");
    }
    outcome
}

#[test]
fn test_top_row_win() {
    let mut engine = BoardEngine::new();
    let outcome = play(&mut engine, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

    assert_eq!(outcome, RoundOutcome::Won(Mark::X));
    assert_eq!(engine.outcome(), RoundOutcome::Won(Mark::X));
    assert_eq!(engine.cell_at(1, 1), Some(Cell::Marked(Mark::O)));
}

#[test]
fn test_o_wins_and_is_reported() {
    let mut engine = BoardEngine::new();
    // X scatters, O takes the middle column.
    let outcome = play(
        &mut engine,
        &[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)],
    );

    assert_eq!(outcome, RoundOutcome::Won(Mark::O));
    assert_eq!(engine.turn(), Mark::O);
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let mut engine = BoardEngine::new();
    // X O X / X O O / O X X
    let outcome = play(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(outcome, RoundOutcome::Drawn);
    assert_eq!(engine.board().count(Mark::X), 5);
    assert_eq!(engine.board().count(Mark::O), 4);
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut engine = BoardEngine::new();
    engine.place(1, 1).expect("Valid move");
    let before = engine.board().clone();

    assert_eq!(
        engine.place(1, 1),
        Err(InvalidMove::Occupied { row: 1, col: 1 })
    );
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.turn(), Mark::O);
}

#[test]
fn test_place_after_win_rejected() {
    let mut engine = BoardEngine::new();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    let before = engine.board().clone();

    assert_eq!(engine.place(2, 2), Err(InvalidMove::RoundOver));
    assert_eq!(engine.board(), &before);
}

#[test]
fn test_reset_restores_fresh_round() {
    let mut engine = BoardEngine::new();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1)]);

    engine.reset();

    let board = engine.board();
    assert!(board.iter().all(|(_, _, cell)| cell == Cell::Empty));
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.outcome(), RoundOutcome::InProgress);
}

#[test]
fn test_cell_at_off_board() {
    let engine = BoardEngine::new();
    assert_eq!(engine.cell_at(0, 0), Some(Cell::Empty));
    assert_eq!(engine.cell_at(3, 3), None);
}
