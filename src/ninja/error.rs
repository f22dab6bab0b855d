//! Errors raised while serializing Ninja statements.

use std::io;
use thiserror::Error;

/// Failure modes of the Ninja writer.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The sink rejected a write. Bytes already appended stay on the sink.
    #[error("failed to write build file: {0}")]
    Io(#[from] io::Error),

    /// The configured width cannot hold even the continuation marker.
    #[error("line width {width} is too small (minimum is {min})")]
    WidthTooSmall { width: usize, min: usize },

    /// A value passed to `escape` contains a newline, which Ninja cannot represent.
    #[error("value contains a newline and cannot be escaped: {0:?}")]
    NewlineInValue(String),

    /// A `$name` reference had no binding and the policy forbids empty expansion.
    #[error("undefined variable '{name}' at position {position}")]
    UndefinedVariable { name: String, position: usize },
}

/// Result type alias for writer operations.
pub type Result<T> = std::result::Result<T, WriteError>;
