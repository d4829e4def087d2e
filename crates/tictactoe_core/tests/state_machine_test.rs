//! Tests for the menu/play state machine.

use tictactoe_core::{
    Board, GameStateMachine, InputEvent, Interaction, Mark, Mode, RoundOutcome, Transition,
};

fn click(x: u32, y: u32) -> InputEvent {
    InputEvent::PointerClick { x, y }
}

#[test]
fn test_board_click_in_menu_is_ignored() {
    let mut machine = GameStateMachine::new();

    assert_eq!(machine.board_interaction(1, 1), Transition::Ignored);
    assert_eq!(machine.mode(), Mode::Menu);
    assert_eq!(machine.engine().board(), &Board::new());
}

#[test]
fn test_select_quit_terminates() {
    let mut machine = GameStateMachine::new();

    assert_eq!(machine.select_quit(), Transition::Terminated);
    assert_eq!(machine.mode(), Mode::Terminated);
    assert!(machine.is_terminated());
}

#[test]
fn test_select_start_begins_fresh_round() {
    let mut machine = GameStateMachine::new();

    assert_eq!(machine.select_start(), Transition::Started);
    assert_eq!(machine.mode(), Mode::Playing);
    assert_eq!(machine.engine().turn(), Mark::X);
    assert_eq!(machine.engine().outcome(), RoundOutcome::InProgress);
}

#[test]
fn test_full_session_through_clicks() {
    let mut machine = GameStateMachine::new();

    // Miss the buttons first.
    assert_eq!(machine.handle_event(click(20, 20)), Transition::Ignored);
    assert_eq!(machine.handle_event(click(300, 250)), Transition::Started);

    let clicks = [(50, 50), (300, 300), (250, 50), (50, 250), (450, 50)];
    let transitions: Vec<_> = clicks
        .iter()
        .map(|&(x, y)| machine.handle_event(click(x, y)))
        .collect();

    assert_eq!(
        transitions.last(),
        Some(&Transition::Placed(RoundOutcome::Won(Mark::X)))
    );
    assert_eq!(machine.mode(), Mode::Playing);

    // Round is decided: further clicks change nothing.
    assert_eq!(machine.handle_event(click(550, 550)), Transition::Ignored);
    assert_eq!(machine.engine().board().count(Mark::O), 2);
}

#[test]
fn test_click_past_grid_is_ignored() {
    let mut machine = GameStateMachine::new();
    machine.select_start();

    assert_eq!(machine.handle_event(click(650, 10)), Transition::Ignored);
    assert_eq!(machine.engine().board(), &Board::new());
}

#[test]
fn test_quit_button_from_menu() {
    let mut machine = GameStateMachine::new();
    assert_eq!(
        machine.handle_event(click(300, 350)),
        Transition::Terminated
    );
}

#[test]
fn test_window_close_while_playing() {
    let mut machine = GameStateMachine::new();
    machine.select_start();
    machine.board_interaction(0, 0);

    assert_eq!(
        machine.handle_event(InputEvent::Quit),
        Transition::Terminated
    );
    assert_eq!(machine.mode(), Mode::Terminated);
    assert_eq!(machine.board_interaction(1, 1), Transition::Ignored);
}

#[test]
fn test_close_interaction_from_menu() {
    let mut machine = GameStateMachine::new();
    assert_eq!(machine.apply(Interaction::Close), Transition::Terminated);
}
