//! Contracts for the display and input collaborators.
//!
//! The core never owns a window. It reads [`InputEvent`]s produced by an
//! input source and describes each frame through a [`Renderer`].

use serde::{Deserialize, Serialize};

/// A pixel coordinate on the surface. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Point {
    /// Horizontal offset, growing to the right.
    pub x: i32,
    /// Vertical offset, growing downwards.
    pub y: i32,
}

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure white.
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    /// Pure black.
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Pure red.
    pub const RED: Rgb = Rgb(255, 0, 0);
    /// Pure blue.
    pub const BLUE: Rgb = Rgb(0, 0, 255);
}

/// A discrete event delivered by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the game.
    Quit,
    /// Primary button pressed at a surface pixel.
    PointerClick {
        /// Horizontal pixel.
        x: u32,
        /// Vertical pixel.
        y: u32,
    },
}

/// Failure to present a single visual element.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RenderError {
    /// Nothing to draw.
    #[display("Cannot render empty text")]
    EmptyText,
    /// Anchor lies outside the surface.
    #[display("Text anchor ({x}, {y}) is outside the surface")]
    OffSurface {
        /// Anchor x.
        x: i32,
        /// Anchor y.
        y: i32,
    },
}

/// Drawing primitives a display surface offers the core.
pub trait Renderer {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    /// Draws a straight line between two pixels.
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb);

    /// Fills every pixel of the `size` x `size` square at `origin` whose
    /// offset `(dx, dy)` satisfies `inside`.
    fn fill_region(
        &mut self,
        origin: Point,
        size: u32,
        inside: &dyn Fn(i32, i32) -> bool,
        color: Rgb,
    );

    /// Draws `text` with its top-left corner at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the text cannot be rendered; the rest of
    /// the frame is unaffected.
    fn draw_text(&mut self, text: &str, at: Point, color: Rgb) -> Result<(), RenderError>;
}
