//! Terminal display surface: a ratatui canvas driven by crossterm mouse input.
//!
//! The 600x600 game surface is mapped onto a canvas that fills as much of
//! the terminal as it can while staying square on screen. Terminal cells
//! are roughly twice as tall as they are wide, so the canvas uses two
//! columns per row.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use derive_more::{Display, Error};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Context, Line as CanvasLine, Points},
};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_core::{DisplayList, DrawCommand, InputEvent, Rgb, SCREEN_HEIGHT, SCREEN_WIDTH};
use tracing::{debug, info, instrument, warn};

/// A display surface the frame loop can drive.
pub trait Surface {
    /// Drains the events that are pending right now.
    fn pending_events(&mut self) -> impl Iterator<Item = Result<InputEvent, SurfaceError>> + '_;

    /// Shows a recorded frame.
    fn present(&mut self, frame: &DisplayList) -> Result<(), SurfaceError>;
}

/// Display surface error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Surface error: {} at {}:{}", message, file, line)]
pub struct SurfaceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SurfaceError {
    /// Creates a new surface error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<io::Error> for SurfaceError {
    #[track_caller]
    fn from(err: io::Error) -> Self {
        Self::new(format!("Terminal I/O error: {}", err))
    }
}

/// The terminal in raw mode with mouse capture, released on drop.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    marker: Marker,
    canvas_area: Rect,
}

impl TerminalSurface {
    /// Takes over the terminal: raw mode, alternate screen, mouse capture.
    ///
    /// # Errors
    ///
    /// Fails when the terminal cannot be switched into game mode. Whatever
    /// was already switched is restored before returning.
    #[instrument]
    pub fn acquire(marker: Marker) -> Result<Self, SurfaceError> {
        enable_raw_mode()
            .map_err(|e| SurfaceError::new(format!("Failed to enable raw mode: {}", e)))?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore();
            return Err(SurfaceError::new(format!(
                "Failed to enable mouse capture: {}",
                e
            )));
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore();
                return Err(SurfaceError::new(format!("Failed to open terminal: {}", e)));
            }
        };

        info!("Terminal surface acquired");
        Ok(Self {
            terminal,
            marker,
            canvas_area: Rect::default(),
        })
    }
}

impl Surface for TerminalSurface {
    fn pending_events(&mut self) -> impl Iterator<Item = Result<InputEvent, SurfaceError>> + '_ {
        PendingEvents {
            area: self.canvas_area,
        }
    }

    #[instrument(skip(self, frame))]
    fn present(&mut self, frame: &DisplayList) -> Result<(), SurfaceError> {
        let marker = self.marker;
        let mut drawn = self.canvas_area;
        self.terminal.draw(|f| drawn = paint(f, frame, marker))?;
        if drawn != self.canvas_area {
            debug!(?drawn, "Canvas area changed");
            self.canvas_area = drawn;
        }
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        restore();
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
        info!("Terminal surface released");
    }
}

/// Leaves game mode. Failures are logged; there is nothing left to undo.
fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Events waiting in the terminal's queue at the time of polling.
struct PendingEvents {
    area: Rect,
}

impl Iterator for PendingEvents {
    type Item = Result<InputEvent, SurfaceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(false) => return None,
                Ok(true) => {}
                Err(e) => return Some(Err(e.into())),
            }
            match event::read() {
                Ok(raw) => {
                    if let Some(input) = decode(&raw, self.area) {
                        return Some(Ok(input));
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Translates a terminal event into a game input event.
///
/// Esc, `q` and Ctrl-C close the game. A left-button press inside the
/// canvas becomes a click on the surface pixel under it. Everything else
/// is dropped.
pub fn decode(raw: &Event, area: Rect) -> Option<InputEvent> {
    match raw {
        Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            _ => None,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            let (x, y) = to_surface(area, mouse.column, mouse.row)?;
            Some(InputEvent::PointerClick { x, y })
        }
        _ => None,
    }
}

/// Maps a terminal cell to the surface pixel at its centre.
///
/// Returns `None` for cells outside `area`.
pub fn to_surface(area: Rect, column: u16, row: u16) -> Option<(u32, u32)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x || row < area.y {
        return None;
    }
    let (dx, dy) = (column - area.x, row - area.y);
    if dx >= area.width || dy >= area.height {
        return None;
    }
    let columns = Axis::new(SCREEN_WIDTH, area.width);
    let rows = Axis::new(SCREEN_HEIGHT, area.height);
    Some((columns.pixel_at(dx), rows.pixel_at(dy)))
}

/// Largest centred area of `available` that looks square on screen.
pub fn canvas_area(available: Rect) -> Rect {
    let width = available.width.min(available.height.saturating_mul(2));
    let height = (width / 2).min(available.height);
    Rect {
        x: available.x + (available.width - width) / 2,
        y: available.y + (available.height - height) / 2,
        width,
        height,
    }
}

/// Paints a recorded frame into the canvas area of `f` and returns that area.
pub fn paint(f: &mut Frame<'_>, frame: &DisplayList, marker: Marker) -> Rect {
    let area = canvas_area(f.area());
    f.render_widget(canvas(frame, marker, area), area);
    area
}

/// One canvas axis: `cells` terminal cells laid over `extent` surface pixels.
///
/// The canvas puts text on cell `floor(v * (cells - 1) / extent)`, so a
/// cell spans `extent / (cells - 1)` pixels and the last one only holds
/// the far edge. Shapes land within half a dot of the same cells.
#[derive(Debug, Clone, Copy)]
struct Axis {
    extent: u32,
    cells: u16,
}

impl Axis {
    fn new(extent: u32, cells: u16) -> Self {
        Self { extent, cells }
    }

    fn scale(self) -> u32 {
        u32::from(self.cells.saturating_sub(1))
    }

    /// Cell holding surface offset `v`.
    fn cell_of(self, v: i32) -> u16 {
        let v = u32::try_from(v).unwrap_or(0).min(self.extent);
        let cell = v * self.scale() / self.extent.max(1);
        u16::try_from(cell).unwrap_or(u16::MAX)
    }

    /// First cell lying wholly past surface offset `v`.
    fn cell_after(self, v: i32) -> u16 {
        self.cell_of(v)
            .saturating_add(1)
            .min(self.cells.saturating_sub(1))
    }

    /// Surface pixel at the middle of `cell`.
    fn pixel_at(self, cell: u16) -> u32 {
        let scale = self.scale();
        if scale == 0 {
            return self.extent / 2;
        }
        let pixel = (u32::from(cell) * 2 + 1) * self.extent / (scale * 2);
        pixel.min(self.extent.saturating_sub(1))
    }

    /// Canvas coordinate at the middle of `cell`, kept inside the bounds.
    fn middle(self, cell: u16) -> f64 {
        let scale = self.scale();
        if scale == 0 {
            return 0.0;
        }
        let extent = f64::from(self.extent);
        let middle = (f64::from(cell) + 0.5) * extent / f64::from(scale);
        middle.min(extent)
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Builds the canvas widget replaying a recorded frame onto `area`.
///
/// Canvas y grows upwards, surface y grows downwards. Text runs right and
/// down from its anchor, so it starts on the first cell wholly past it.
fn canvas(
    frame: &DisplayList,
    marker: Marker,
    area: Rect,
) -> Canvas<'_, impl Fn(&mut Context<'_>) + '_> {
    let width = f64::from(frame.width());
    let height = f64::from(frame.height());
    let columns = Axis::new(frame.width(), area.width);
    let rows = Axis::new(frame.height(), area.height);
    Canvas::default()
        .background_color(color(frame.background()))
        .marker(marker)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            for command in frame.commands() {
                match command {
                    DrawCommand::Line { from, to, color: c } => ctx.draw(&CanvasLine::new(
                        f64::from(from.x),
                        height - f64::from(from.y),
                        f64::from(to.x),
                        height - f64::from(to.y),
                        color(*c),
                    )),
                    DrawCommand::Points { coords, color: c } => {
                        let coords: Vec<(f64, f64)> = coords
                            .iter()
                            .map(|p| (f64::from(p.x), height - f64::from(p.y)))
                            .collect();
                        ctx.draw(&Points {
                            coords: &coords,
                            color: color(*c),
                        });
                    }
                    DrawCommand::Text { text, at, color: c } => {
                        let x = columns.middle(columns.cell_after(at.x));
                        let y = height - rows.middle(rows.cell_after(at.y));
                        let style = Style::default().fg(color(*c));
                        ctx.print(x, y, Line::styled(text.clone(), style));
                    }
                }
            }
        })
}
