// std imports
use std::io::{self, IsTerminal, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("file {filename:?} not found")]
    FileNotFound { filename: String },
    #[error("failed to read {source_name}: {source}")]
    Input { source_name: String, source: io::Error },
}

impl Error {
    /// Writes the error to stderr, highlighting the prefix if stderr is a terminal.
    pub fn log(&self) {
        let mut stderr = io::stderr().lock();
        let result = if stderr.is_terminal() {
            writeln!(stderr, "{} {}", "error:".bright_red().bold(), self)
        } else {
            writeln!(stderr, "error: {}", self)
        };
        result.ok();
    }

    /// Returns true if the error is caused by the output being closed by the reader.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
