//! Top-level state machine: start menu, a round in play, and shutdown.

use crate::layout::{self, MenuChoice};
use crate::surface::InputEvent;
use crate::{BoardEngine, RoundOutcome};
use tracing::{debug, info, instrument};

/// Top-level UI phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum Mode {
    /// Start menu is shown. Initial mode.
    #[default]
    Menu,
    /// A round is on the board.
    Playing,
    /// The session is over; the run loop stops.
    Terminated,
}

/// Input already decoded into game terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// "Yes" chosen in the menu.
    SelectStart,
    /// "No" chosen in the menu.
    SelectQuit,
    /// A board cell was clicked.
    Board {
        /// Clicked row.
        row: usize,
        /// Clicked column.
        col: usize,
    },
    /// Window closed or quit key pressed.
    Close,
}

/// What an interaction did to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Not meaningful in the current mode; nothing changed.
    Ignored,
    /// Menu left for a fresh round.
    Started,
    /// A mark was placed; carries the resulting outcome.
    Placed(RoundOutcome),
    /// The session ended.
    Terminated,
}

/// Owns the mode and the round engine across the session.
///
/// Interactions outside the defined transitions are ignored rather than
/// reported.
#[derive(Debug, Clone, Default)]
pub struct GameStateMachine {
    mode: Mode,
    engine: BoardEngine,
}

impl GameStateMachine {
    /// Creates a machine showing the start menu.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Read-only access to the round engine.
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    /// True once the session has ended.
    pub fn is_terminated(&self) -> bool {
        self.mode == Mode::Terminated
    }

    /// Menu "Yes": resets the board and starts playing.
    pub fn select_start(&mut self) -> Transition {
        self.apply(Interaction::SelectStart)
    }

    /// Menu "No": ends the session.
    pub fn select_quit(&mut self) -> Transition {
        self.apply(Interaction::SelectQuit)
    }

    /// Forwards a cell click to the engine while playing.
    pub fn board_interaction(&mut self, row: usize, col: usize) -> Transition {
        self.apply(Interaction::Board { row, col })
    }

    /// Decodes a raw input event for the current mode.
    ///
    /// Clicks are hit-tested against the menu buttons in [`Mode::Menu`]
    /// and against the grid in [`Mode::Playing`].
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn interpret(&self, event: InputEvent) -> Option<Interaction> {
        match (self.mode, event) {
            (Mode::Terminated, _) => None,
            (_, InputEvent::Quit) => Some(Interaction::Close),
            (Mode::Menu, InputEvent::PointerClick { x, y }) => {
                layout::menu_hit(x, y).map(|choice| match choice {
                    MenuChoice::Start => Interaction::SelectStart,
                    MenuChoice::Quit => Interaction::SelectQuit,
                })
            }
            (Mode::Playing, InputEvent::PointerClick { x, y }) => {
                let (row, col) = layout::cell_hit(x, y);
                Some(Interaction::Board { row, col })
            }
        }
    }

    /// Decodes and applies a raw input event.
    pub fn handle_event(&mut self, event: InputEvent) -> Transition {
        match self.interpret(event) {
            Some(interaction) => self.apply(interaction),
            None => {
                debug!(?event, mode = %self.mode, "Event has no meaning here");
                Transition::Ignored
            }
        }
    }

    /// Applies an interaction according to the current mode.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn apply(&mut self, interaction: Interaction) -> Transition {
        match (self.mode, interaction) {
            (Mode::Terminated, _) => Transition::Ignored,

            (_, Interaction::Close) => {
                info!("Quit requested");
                self.mode = Mode::Terminated;
                Transition::Terminated
            }

            (Mode::Menu, Interaction::SelectStart) => {
                self.engine.reset();
                self.mode = Mode::Playing;
                info!("Round started");
                Transition::Started
            }

            (Mode::Menu, Interaction::SelectQuit) => {
                info!("Quit chosen from menu");
                self.mode = Mode::Terminated;
                Transition::Terminated
            }

            (Mode::Playing, Interaction::Board { row, col }) => match self.engine.place(row, col) {
                Ok(outcome) => {
                    if outcome.is_over() {
                        info!(%outcome, "Round decided");
                    }
                    Transition::Placed(outcome)
                }
                Err(e) => {
                    debug!(error = %e, "Click ignored");
                    Transition::Ignored
                }
            },

            (mode, interaction) => {
                debug!(%mode, ?interaction, "Interaction not valid in this mode");
                Transition::Ignored
            }
        }
    }
}
