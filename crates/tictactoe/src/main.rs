//! Tic-tac-toe - two players, one mouse.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::Path;
use std::process::ExitCode;
use tictactoe::{App, AppConfig, TerminalSurface};
use tracing::{error, info, instrument};

fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "Fatal error");
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Loads configuration, takes over the terminal and plays until quit.
fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    initialize_tracing(config.log_file())?;
    info!(
        glyphs = %config.glyphs(),
        frame_delay_ms = config.frame_delay_ms(),
        "Starting tictactoe"
    );

    let mut surface = TerminalSurface::acquire(config.glyphs().marker())
        .context("Failed to initialize display surface")?;

    let mut app = App::new(&config);
    app.run(&mut surface).context("Frame loop failed")?;

    info!("Goodbye");
    Ok(())
}

/// Merges the config file with command-line overrides.
fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?;

    if let Some(name) = &cli.glyphs {
        config = config.with_glyphs(name)?;
    }
    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path.clone());
    }
    if let Some(millis) = cli.frame_delay_ms {
        config = config.with_frame_delay_ms(millis);
    }

    Ok(config)
}

/// Sends tracing output to a file so it does not garble the terminal.
#[instrument(skip(path))]
fn initialize_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    info!(path = %path.display(), "Tracing initialized");
    Ok(())
}
