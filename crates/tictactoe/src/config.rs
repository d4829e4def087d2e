//! Runtime configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::symbols::Marker;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tictactoe_core::Palette;
use tracing::{debug, info, instrument};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Glyphs the canvas rasterizes lines, discs and text cells with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GlyphSet {
    /// Braille dots, 2x4 per terminal cell.
    #[default]
    Braille,
    /// Upper/lower half blocks, 1x2 per terminal cell.
    HalfBlock,
    /// Full blocks.
    Block,
    /// A single dot per cell.
    Dot,
    /// Vertical bars.
    Bar,
}

impl GlyphSet {
    /// Canvas marker for this glyph set.
    pub fn marker(self) -> Marker {
        match self {
            GlyphSet::Braille => Marker::Braille,
            GlyphSet::HalfBlock => Marker::HalfBlock,
            GlyphSet::Block => Marker::Block,
            GlyphSet::Dot => Marker::Dot,
            GlyphSet::Bar => Marker::Bar,
        }
    }
}

/// Game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Pause between frames, in milliseconds.
    #[serde(default = "default_frame_delay_ms")]
    frame_delay_ms: u64,

    /// Glyph set used to draw the board.
    #[serde(default)]
    glyphs: GlyphSet,

    /// Sampling step, in surface pixels, when filling the O disc.
    #[serde(default = "default_fill_stride")]
    fill_stride: u32,

    /// File the tracing subscriber writes to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Frame colors.
    #[serde(default)]
    palette: Palette,
}

#[instrument]
fn default_frame_delay_ms() -> u64 {
    16
}

#[instrument]
fn default_fill_stride() -> u32 {
    4
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: default_frame_delay_ms(),
            glyphs: GlyphSet::default(),
            fill_stride: default_fill_stride(),
            log_file: default_log_file(),
            palette: Palette::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.fill_stride == 0 {
            return Err(ConfigError::new(
                "fill_stride must be at least 1".to_string(),
            ));
        }

        info!(glyphs = %config.glyphs, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicitly requested file must load. Without one, the default
    /// file is used when present and built-in defaults otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    info!(
                        "Config file not found at {}, using defaults",
                        path.display()
                    );
                    Ok(Self::default())
                }
            }
        }
    }

    /// Overrides the glyph set by name.
    #[instrument(skip(self))]
    pub fn with_glyphs(mut self, name: &str) -> Result<Self, ConfigError> {
        self.glyphs = GlyphSet::from_str(name)
            .map_err(|_| ConfigError::new(format!("Unknown glyph set: {}", name)))?;
        Ok(self)
    }

    /// Overrides the log file.
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = path;
        self
    }

    /// Overrides the frame delay.
    pub fn with_frame_delay_ms(mut self, millis: u64) -> Self {
        self.frame_delay_ms = millis;
        self
    }

    /// Frame delay as a [`Duration`].
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
