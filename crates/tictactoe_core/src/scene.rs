//! Presents the state machine through a [`Renderer`].

use crate::layout::{CELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::surface::{Point, Renderer, Rgb};
use crate::{BOARD_SIZE, Cell, GameStateMachine, Mark, Mode, RoundOutcome};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Question shown above the menu buttons.
pub const MENU_PROMPT: &str = "Do you want to play Tic-Tac-Toe?";
/// Label of the start button.
pub const MENU_START: &str = "Yes";
/// Label of the quit button.
pub const MENU_QUIT: &str = "No";

/// Gap between a cell's edge and the O disc.
const DISC_MARGIN: u32 = 10;

/// Colors used to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Surface fill.
    pub background: Rgb,
    /// Grid lines.
    pub grid: Rgb,
    /// X strokes.
    pub mark_x: Rgb,
    /// O discs.
    pub mark_o: Rgb,
    /// Menu and banner text.
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            grid: Rgb::BLACK,
            mark_x: Rgb::RED,
            mark_o: Rgb::BLUE,
            text: Rgb::RED,
        }
    }
}

/// Draws one full frame for the machine's current mode.
///
/// Text that fails to render is logged and skipped; everything else in
/// the frame is still drawn.
#[instrument(skip(machine, renderer, palette), fields(mode = %machine.mode()))]
pub fn present<R: Renderer>(machine: &GameStateMachine, renderer: &mut R, palette: &Palette) {
    renderer.clear(palette.background);

    match machine.mode() {
        Mode::Menu => draw_menu(renderer, palette),
        Mode::Playing => {
            draw_grid(renderer, palette);
            for (row, col, cell) in machine.engine().board().iter() {
                if let Cell::Marked(mark) = cell {
                    draw_mark(renderer, palette, row, col, mark);
                }
            }
            draw_banner(renderer, palette, machine.engine().outcome());
        }
        Mode::Terminated => {}
    }
}

fn draw_menu<R: Renderer>(renderer: &mut R, palette: &Palette) {
    let left = (SCREEN_WIDTH / 4) as i32;
    let lines = [
        (MENU_PROMPT, SCREEN_HEIGHT / 4),
        (MENU_START, SCREEN_HEIGHT / 3),
        (MENU_QUIT, SCREEN_HEIGHT / 2),
    ];
    for (text, top) in lines {
        draw_text(renderer, text, Point::new(left, top as i32), palette.text);
    }
}

fn draw_grid<R: Renderer>(renderer: &mut R, palette: &Palette) {
    for i in 1..BOARD_SIZE as i32 {
        let offset = i * CELL_SIZE as i32;
        renderer.draw_line(
            Point::new(offset, 0),
            Point::new(offset, SCREEN_HEIGHT as i32),
            palette.grid,
        );
        renderer.draw_line(
            Point::new(0, offset),
            Point::new(SCREEN_WIDTH as i32, offset),
            palette.grid,
        );
    }
}

fn draw_mark<R: Renderer>(renderer: &mut R, palette: &Palette, row: usize, col: usize, mark: Mark) {
    let cell = CELL_SIZE as i32;
    let left = col as i32 * cell;
    let top = row as i32 * cell;

    match mark {
        Mark::X => {
            renderer.draw_line(
                Point::new(left, top),
                Point::new(left + cell, top + cell),
                palette.mark_x,
            );
            renderer.draw_line(
                Point::new(left + cell, top),
                Point::new(left, top + cell),
                palette.mark_x,
            );
        }
        Mark::O => {
            let radius = (CELL_SIZE / 2 - DISC_MARGIN) as i32;
            let origin = Point::new(left + cell / 2 - radius, top + cell / 2 - radius);
            let inside = move |dx: i32, dy: i32| {
                let (dx, dy) = (radius - dx, radius - dy);
                dx * dx + dy * dy <= radius * radius
            };
            renderer.fill_region(origin, (radius * 2) as u32, &inside, palette.mark_o);
        }
    }
}

fn draw_banner<R: Renderer>(renderer: &mut R, palette: &Palette, outcome: RoundOutcome) {
    let center = Point::new((SCREEN_WIDTH / 2) as i32, (SCREEN_HEIGHT / 2) as i32);
    let at = match outcome {
        RoundOutcome::InProgress => return,
        RoundOutcome::Drawn => Point::new(center.x - 50, center.y - 25),
        RoundOutcome::Won(_) => Point::new(center.x - 75, center.y - 25),
    };
    draw_text(renderer, &outcome.to_string(), at, palette.text);
}

fn draw_text<R: Renderer>(renderer: &mut R, text: &str, at: Point, color: Rgb) {
    if let Err(e) = renderer.draw_text(text, at, color) {
        warn!(error = %e, text, "Text render failed, skipping");
    }
}
