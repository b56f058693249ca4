//! CLI-specific error types.

use thiserror::Error;

use crate::codec::CodecError;
use crate::schema::SchemaError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("line {line}: {source}")]
    Decode { line: usize, source: CodecError },

    #[error("{failures} of {records} records failed to decode")]
    CheckFailed { records: usize, failures: usize },
}

impl CliError {
    /// A decode error tagged with its 1-based line number.
    pub fn decode(line: usize, source: CodecError) -> Self {
        CliError::Decode { line, source }
    }
}
