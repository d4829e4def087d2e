//! Tests for frame presentation.

use tictactoe_core::{
    DisplayList, DrawCommand, GameStateMachine, MENU_PROMPT, MENU_QUIT, MENU_START, Palette, Point,
    RenderError, Renderer, Rgb, SCREEN_HEIGHT, SCREEN_WIDTH, present,
};

fn frame(machine: &GameStateMachine) -> DisplayList {
    let mut list = DisplayList::new(SCREEN_WIDTH, SCREEN_HEIGHT, 4);
    present(machine, &mut list, &Palette::default());
    list
}

fn lines(list: &DisplayList) -> usize {
    list.commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count()
}

#[test]
fn test_menu_frame_shows_prompt_and_buttons() {
    let list = frame(&GameStateMachine::new());

    assert_eq!(
        list.texts().collect::<Vec<_>>(),
        vec![MENU_PROMPT, MENU_START, MENU_QUIT]
    );
    assert_eq!(list.background(), Rgb::WHITE);
    assert_eq!(lines(&list), 0);
}

#[test]
fn test_empty_round_draws_only_grid() {
    let mut machine = GameStateMachine::new();
    machine.select_start();
    let list = frame(&machine);

    assert_eq!(lines(&list), 4);
    assert_eq!(list.texts().count(), 0);
}

#[test]
fn test_marks_are_drawn() {
    let mut machine = GameStateMachine::new();
    machine.select_start();
    machine.board_interaction(0, 0); // X
    machine.board_interaction(1, 1); // O
    let list = frame(&machine);

    // Grid plus the two strokes of X.
    assert_eq!(lines(&list), 6);

    let disc = list
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::Points { coords, color } => Some((coords, *color)),
            _ => None,
        })
        .expect("O disc");
    assert_eq!(disc.1, Rgb::BLUE);
    // Disc stays inside the centre cell.
    let centre_cell = |p: &Point| (200..400).contains(&p.x) && (200..400).contains(&p.y);
    assert!(disc.0.iter().all(centre_cell));
    // Sampled on a 4px stride from (210, 210).
    assert!(disc.0.contains(&Point::new(298, 298)));
    assert!(!disc.0.contains(&Point::new(210, 210)));
}

#[test]
fn test_banner_names_mark_that_just_moved() {
    let mut machine = GameStateMachine::new();
    machine.select_start();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
        machine.board_interaction(row, col);
    }
    let list = frame(&machine);

    assert_eq!(list.texts().collect::<Vec<_>>(), vec!["X wins!"]);
    let anchor = list.commands().iter().find_map(|c| match c {
        DrawCommand::Text { at, .. } => Some(*at),
        _ => None,
    });
    assert_eq!(anchor, Some(Point::new(225, 275)));
}

#[test]
fn test_draw_banner() {
    let mut machine = GameStateMachine::new();
    machine.select_start();
    for (row, col) in [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ] {
        machine.board_interaction(row, col);
    }
    let list = frame(&machine);

    assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Draw!"]);
}

/// Renderer whose text output always fails.
#[derive(Default)]
struct BrokenText {
    inner: Option<DisplayList>,
    failures: usize,
}

impl Renderer for BrokenText {
    fn clear(&mut self, color: Rgb) {
        self.inner
            .get_or_insert_with(|| DisplayList::new(SCREEN_WIDTH, SCREEN_HEIGHT, 4))
            .clear(color);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) {
        if let Some(list) = self.inner.as_mut() {
            list.draw_line(from, to, color);
        }
    }

    fn fill_region(
        &mut self,
        origin: Point,
        size: u32,
        inside: &dyn Fn(i32, i32) -> bool,
        color: Rgb,
    ) {
        if let Some(list) = self.inner.as_mut() {
            list.fill_region(origin, size, inside, color);
        }
    }

    fn draw_text(&mut self, _text: &str, _at: Point, _color: Rgb) -> Result<(), RenderError> {
        self.failures += 1;
        Err(RenderError::EmptyText)
    }
}

#[test]
fn test_text_failure_does_not_abort_frame() {
    let mut machine = GameStateMachine::new();
    machine.select_start();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
        machine.board_interaction(row, col);
    }

    let mut renderer = BrokenText::default();
    present(&machine, &mut renderer, &Palette::default());

    assert_eq!(renderer.failures, 1);
    let list = renderer.inner.expect("frame was cleared");
    // Grid and three X marks (two strokes each) are still drawn.
    assert_eq!(lines(&list), 4 + 6);
}
