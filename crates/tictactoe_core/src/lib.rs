//! Tic-tac-toe game core.
//!
//! Pure game state for a two-player, mouse-driven tic-tac-toe: the round
//! engine, the menu/play state machine, surface geometry, and the
//! contracts a display surface implements.
//!
//! # Architecture
//!
//! - **Engine**: [`BoardEngine`] owns one round's board and turn
//! - **Machine**: [`GameStateMachine`] gates input by [`Mode`]
//! - **Surface**: [`Renderer`] and [`InputEvent`] are implemented by a frontend
//! - **Scene**: [`present`] draws the current state through a [`Renderer`]
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameStateMachine, InputEvent, Mode, RoundOutcome, Transition};
//!
//! let mut machine = GameStateMachine::new();
//! machine.handle_event(InputEvent::PointerClick { x: 300, y: 250 });
//! assert_eq!(machine.mode(), Mode::Playing);
//!
//! let transition = machine.board_interaction(1, 1);
//! assert_eq!(transition, Transition::Placed(RoundOutcome::InProgress));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod display_list;
mod engine;
mod layout;
mod machine;
pub mod rules;
mod scene;
mod surface;
mod types;

pub use display_list::{DisplayList, DrawCommand};
pub use engine::{BoardEngine, InvalidMove};
pub use layout::{CELL_SIZE, MenuChoice, SCREEN_HEIGHT, SCREEN_WIDTH, cell_hit, menu_hit};
pub use machine::{GameStateMachine, Interaction, Mode, Transition};
pub use scene::{MENU_PROMPT, MENU_QUIT, MENU_START, Palette, present};
pub use surface::{InputEvent, Point, RenderError, Renderer, Rgb};
pub use types::{BOARD_SIZE, Board, Cell, Mark, RoundOutcome};
