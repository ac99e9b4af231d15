//! Error types for folio.
//!
//! The `Display` text of the interpreter variants is exactly the line the
//! terminal shows to the visitor, so handlers never format errors twice.

use std::io;

/// Errors produced by the folio crates.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    #[error("{command}: {file}: No such file or directory")]
    NoSuchFile { command: String, file: String },

    #[error("{command}: {file}: File not found")]
    FileNotFound { command: String, file: String },

    #[error("{command}: {message}")]
    MissingArgument { command: String, message: String },

    /// Fixed refusal for privileged-looking commands.
    #[error("{0}")]
    Refused(String),

    #[error("{0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl FolioError {
    /// Shorthand for a missing-operand usage error.
    pub fn missing(command: &str, message: &str) -> Self {
        Self::MissingArgument {
            command: command.to_string(),
            message: message.to_string(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
