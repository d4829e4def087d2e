//! Mouse-driven tic-tac-toe on a terminal canvas.
//!
//! Wires the pure game core from `tictactoe_core` to a concrete display
//! surface and a frame loop.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with CLI overrides
//! - **Terminal**: ratatui canvas output and crossterm mouse input
//! - **App**: the single-threaded frame loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod terminal;

pub use app::App;
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, GlyphSet};
pub use terminal::{Surface, SurfaceError, TerminalSurface, canvas_area, decode, paint, to_surface};
