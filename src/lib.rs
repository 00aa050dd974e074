//! FOLIO - terminal portfolio
//!
//! An interactive TUI portfolio: content sections rendered as navigable
//! screens, a handful of built-in mini-games, and a persisted theme and
//! accent-color preference store.

use std::fmt;

// Public re-exports
pub mod app;
pub mod content;
pub mod games;
pub mod prefs;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum FolioError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration or preference parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Preference persistence error
    PersistenceError(String),
    /// Portfolio content loading error
    ContentError(String),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::IoError(err) => write!(f, "I/O error: {}", err),
            FolioError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            FolioError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            FolioError::PersistenceError(msg) => write!(f, "Preference persistence error: {}", msg),
            FolioError::ContentError(msg) => write!(f, "Content error: {}", msg),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FolioError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::IoError(err)
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::ContentError(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for FolioError {
    fn from(err: toml::ser::Error) -> Self {
        FolioError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Error handling utilities
pub mod error {
    use super::FolioError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_message(error: &FolioError) -> String {
        match error {
            FolioError::PersistenceError(_) => {
                "Failed to save preferences. Check permissions on your config directory."
                    .to_string()
            }
            FolioError::ContentError(msg) => format!(
                "Could not load portfolio content: {}. Delete or fix content.json to use the built-in defaults.",
                msg
            ),
            FolioError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your preferences file.", msg)
            }
            FolioError::TuiError(_) => {
                "Terminal error. Make sure you are running in an interactive terminal of at least 80x24."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "folio";
pub const PREFS_FILE: &str = "preferences.toml";
pub const CONTENT_FILE: &str = "content.json";
