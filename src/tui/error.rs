//! TUI-specific error types.

use thiserror::Error;

use crate::board::BoardError;
use crate::fixtures::FixtureError;

/// Errors that can occur in the TUI application.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error (terminal setup and teardown).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal rendering error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Board state error.
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    /// The fixture loader could not be built.
    #[error("Fixture error: {0}")]
    Fixture(#[from] FixtureError),
}
