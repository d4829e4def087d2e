//! The frame loop: drain input, update the state machine, draw once.

use std::time::Duration;

use tictactoe_core::{
    DisplayList, GameStateMachine, InputEvent, Mode, Palette, SCREEN_HEIGHT, SCREEN_WIDTH,
    Transition, present,
};
use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::terminal::{Surface, SurfaceError};

/// Game session state owned by the frame loop.
#[derive(Debug)]
pub struct App {
    machine: GameStateMachine,
    frame: DisplayList,
    palette: Palette,
    frame_delay: Duration,
}

impl App {
    /// Creates a session sitting at the start menu.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            machine: GameStateMachine::new(),
            frame: DisplayList::new(SCREEN_WIDTH, SCREEN_HEIGHT, *config.fill_stride()),
            palette: *config.palette(),
            frame_delay: config.frame_delay(),
        }
    }

    /// Current state machine.
    pub fn machine(&self) -> &GameStateMachine {
        &self.machine
    }

    /// The most recently drawn frame.
    pub fn frame(&self) -> &DisplayList {
        &self.frame
    }

    /// Applies one input event.
    #[instrument(skip(self))]
    pub fn step(&mut self, event: InputEvent) -> Transition {
        let transition = self.machine.handle_event(event);
        match transition {
            Transition::Ignored => {}
            Transition::Started => info!("Board ready, X to move"),
            Transition::Placed(outcome) => {
                debug!(%outcome, next = %self.machine.engine().turn(), "Move applied");
            }
            Transition::Terminated => info!("Session ending"),
        }
        transition
    }

    /// Runs frames until the session terminates.
    ///
    /// Each frame drains every pending event, then draws once and sleeps
    /// for the configured frame delay.
    ///
    /// # Errors
    ///
    /// Returns the first [`SurfaceError`] raised while polling or drawing.
    #[instrument(skip(self, surface))]
    pub fn run<S: Surface>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        info!("Starting frame loop");

        while self.machine.mode() != Mode::Terminated {
            for event in surface.pending_events() {
                self.step(event?);
            }
            if self.machine.is_terminated() {
                break;
            }

            present(&self.machine, &mut self.frame, &self.palette);
            surface.present(&self.frame)?;

            std::thread::sleep(self.frame_delay);
        }

        info!("Frame loop finished");
        Ok(())
    }
}
