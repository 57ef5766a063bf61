// third-party imports
use thiserror::Error;

/// Error is an error which may occur when set handling routines are used directly.
///
/// Top-level matching never produces these errors, a malformed set there is matched literally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("the use of sets is disabled")]
    SetsDisabled,
    #[error("pattern does not contain a valid set at position {position}")]
    InvalidSet { position: usize },
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
