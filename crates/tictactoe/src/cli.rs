//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe played with the mouse
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe played with the mouse", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Glyph set for drawing: braille, half-block, block, dot or bar
    #[arg(long)]
    pub glyphs: Option<String>,

    /// Pause between frames in milliseconds
    #[arg(long)]
    pub frame_delay_ms: Option<u64>,
}
