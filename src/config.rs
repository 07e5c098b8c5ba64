//! Settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default settings file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Board colors.
    #[serde(default)]
    colors: ColorSettings,
}

/// Color names understood by ratatui (`"red"`, `"lightgreen"`, `"#8abd91"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ColorSettings {
    /// Color of X marks.
    #[serde(default = "default_x_color")]
    x: String,
    /// Color of O marks.
    #[serde(default = "default_o_color")]
    o: String,
    /// Background of winning cells.
    #[serde(default = "default_highlight_color")]
    highlight: String,
    /// Background of the keyboard cursor.
    #[serde(default = "default_cursor_color")]
    cursor: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_timeline.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_highlight_color() -> String {
    "#8abd91".to_string()
}

fn default_cursor_color() -> String {
    "white".to_string()
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            x: default_x_color(),
            o: default_o_color(),
            highlight: default_highlight_color(),
            cursor: default_cursor_color(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            colors: ColorSettings::default(),
        }
    }
}

/// Colors resolved from [`ColorSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color of X marks.
    pub x: Color,
    /// Color of O marks.
    pub o: Color,
    /// Background of winning cells.
    pub highlight: Color,
    /// Background of the keyboard cursor.
    pub cursor: Color,
}

impl ColorSettings {
    /// Parses every color name.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("x", &self.x)?,
            o: parse_color("o", &self.o)?,
            highlight: parse_color("highlight", &self.highlight)?,
            cursor: parse_color("cursor", &self.cursor)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    value
        .parse::<Color>()
        .map_err(|_| ConfigError::new(format!("Invalid color for colors.{}: {:?}", key, value)))
}

impl Settings {
    /// Parses settings from TOML text and validates colors.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        settings.colors.palette()?;
        Ok(settings)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(log_file = %settings.log_file.display(), "Config loaded successfully");
        Ok(settings)
    }

    /// Loads the explicit path, or the default file if present, or built-in defaults.
    ///
    /// An explicitly requested file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
