//! Session Errors
//!
//! Failures raised while the session reads and parses user input.

use thiserror::Error;

/// Failures raised while reading user input
///
/// Only `Io` is fatal. The others are handled inside the session loop.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid {field}: '{input}'")]
    InvalidNumber { field: &'static str, input: String },

    #[error("input ended")]
    EndOfInput,

    #[error("session I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
