//! Surface geometry and hit-testing.
//!
//! The game is laid out on a fixed 600x600 pixel surface. Each board cell
//! is a 200 pixel square; the menu's two buttons are horizontal bands in
//! the middle of the surface.

use tracing::instrument;

/// Surface width in pixels.
pub const SCREEN_WIDTH: u32 = 600;
/// Surface height in pixels.
pub const SCREEN_HEIGHT: u32 = 600;
/// Side of one board cell in pixels.
pub const CELL_SIZE: u32 = 200;

/// Buttons offered by the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// "Yes": start a round.
    Start,
    /// "No": leave the game.
    Quit,
}

/// Maps a click to a menu button.
///
/// Both buttons span the middle half of the width. "Start" covers the
/// band between one third and one half of the height, "Quit" the band
/// between one half and two thirds. Band edges belong to neither button.
#[instrument]
pub fn menu_hit(x: u32, y: u32) -> Option<MenuChoice> {
    if x <= SCREEN_WIDTH / 4 || x >= 3 * SCREEN_WIDTH / 4 {
        return None;
    }
    if y > SCREEN_HEIGHT / 3 && y < SCREEN_HEIGHT / 2 {
        Some(MenuChoice::Start)
    } else if y > SCREEN_HEIGHT / 2 && y < 2 * SCREEN_HEIGHT / 3 {
        Some(MenuChoice::Quit)
    } else {
        None
    }
}

/// Maps a click to a `(row, col)` board coordinate by integer division.
///
/// No bounds check: clicks past the grid yield coordinates the engine
/// rejects.
#[instrument]
pub fn cell_hit(x: u32, y: u32) -> (usize, usize) {
    ((y / CELL_SIZE) as usize, (x / CELL_SIZE) as usize)
}
