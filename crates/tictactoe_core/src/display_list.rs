//! A [`Renderer`] that records one frame as a list of draw commands.
//!
//! Frontends that cannot draw immediately (a terminal canvas paints from
//! inside its own closure) replay the recorded commands instead.

use crate::surface::{Point, RenderError, Renderer, Rgb};
use tracing::instrument;

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Straight line.
    Line {
        /// Start pixel.
        from: Point,
        /// End pixel.
        to: Point,
        /// Stroke color.
        color: Rgb,
    },
    /// Individual pixels, produced by rasterizing a filled region.
    Points {
        /// Pixels to light.
        coords: Vec<Point>,
        /// Fill color.
        color: Rgb,
    },
    /// A text run anchored at its top-left corner.
    Text {
        /// Text to show.
        text: String,
        /// Anchor pixel.
        at: Point,
        /// Text color.
        color: Rgb,
    },
}

/// Recorded frame for a `width` x `height` surface.
#[derive(Debug, Clone)]
pub struct DisplayList {
    width: u32,
    height: u32,
    fill_stride: u32,
    background: Rgb,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Creates an empty frame.
    ///
    /// Filled regions are sampled every `fill_stride` pixels on both axes;
    /// a stride of zero is treated as one.
    #[instrument]
    pub fn new(width: u32, height: u32, fill_stride: u32) -> Self {
        Self {
            width,
            height,
            fill_stride: fill_stride.max(1),
            background: Rgb::WHITE,
            commands: Vec::new(),
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color set by the last [`Renderer::clear`].
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Commands recorded since the last clear, in drawing order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Texts recorded in this frame.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn contains(&self, at: Point) -> bool {
        at.x >= 0 && at.y >= 0 && (at.x as u32) < self.width && (at.y as u32) < self.height
    }
}

impl Renderer for DisplayList {
    fn clear(&mut self, color: Rgb) {
        self.background = color;
        self.commands.clear();
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn fill_region(
        &mut self,
        origin: Point,
        size: u32,
        inside: &dyn Fn(i32, i32) -> bool,
        color: Rgb,
    ) {
        let stride = self.fill_stride as usize;
        let coords: Vec<Point> = (0..size as i32)
            .step_by(stride)
            .flat_map(|dx| (0..size as i32).step_by(stride).map(move |dy| (dx, dy)))
            .filter(|&(dx, dy)| inside(dx, dy))
            .map(|(dx, dy)| Point::new(origin.x + dx, origin.y + dy))
            .collect();

        if !coords.is_empty() {
            self.commands.push(DrawCommand::Points { coords, color });
        }
    }

    fn draw_text(&mut self, text: &str, at: Point, color: Rgb) -> Result<(), RenderError> {
        if text.is_empty() {
            return Err(RenderError::EmptyText);
        }
        if !self.contains(at) {
            return Err(RenderError::OffSurface { x: at.x, y: at.y });
        }
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            color,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_commands() {
        let mut list = DisplayList::new(600, 600, 1);
        list.draw_line(Point::new(0, 0), Point::new(10, 10), Rgb::BLACK);
        list.clear(Rgb::BLUE);
        assert!(list.commands().is_empty());
        assert_eq!(list.background(), Rgb::BLUE);
    }

    #[test]
    fn test_fill_region_samples_predicate() {
        let mut list = DisplayList::new(600, 600, 1);
        list.fill_region(Point::new(10, 20), 4, &|dx, dy| dx == dy, Rgb::RED);
        let expected: Vec<Point> = (0..4).map(|d| Point::new(10 + d, 20 + d)).collect();
        assert_eq!(
            list.commands(),
            &[DrawCommand::Points {
                coords: expected,
                color: Rgb::RED
            }]
        );
    }

    #[test]
    fn test_fill_region_respects_stride() {
        let mut list = DisplayList::new(600, 600, 2);
        list.fill_region(Point::new(0, 0), 4, &|_, _| true, Rgb::RED);
        match &list.commands()[0] {
            DrawCommand::Points { coords, .. } => assert_eq!(coords.len(), 4),
            other => panic!("Expected points, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_region_records_nothing() {
        let mut list = DisplayList::new(600, 600, 0);
        list.fill_region(Point::new(0, 0), 8, &|_, _| false, Rgb::RED);
        assert!(list.commands().is_empty());
    }

    #[test]
    fn test_text_outside_surface_fails() {
        let mut list = DisplayList::new(600, 600, 1);
        assert_eq!(
            list.draw_text("hi", Point::new(-1, 5), Rgb::RED),
            Err(RenderError::OffSurface { x: -1, y: 5 })
        );
        assert_eq!(
            list.draw_text("", Point::new(5, 5), Rgb::RED),
            Err(RenderError::EmptyText)
        );
        assert!(list.draw_text("hi", Point::new(599, 599), Rgb::RED).is_ok());
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["hi"]);
    }
}
