//! Error types for the ninjagen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::ninja::WriteError;
use thiserror::Error;

/// Main error type for ninjagen operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum NinjagenError {
    /// User provided invalid arguments or the target is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// The project manifest could not be read, parsed or validated.
    #[error("invalid manifest: {0}")]
    ConfigError(String),

    /// Project files could not be created.
    #[error("failed to scaffold project: {0}")]
    ScaffoldError(String),

    /// The build file could not be serialized.
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl NinjagenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            NinjagenError::UserError(_) => exit_codes::USER_ERROR,
            NinjagenError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            NinjagenError::ScaffoldError(_) => exit_codes::WRITE_FAILURE,
            NinjagenError::Write(WriteError::Io(_)) => exit_codes::WRITE_FAILURE,
            NinjagenError::Write(_) => exit_codes::CONFIG_ERROR,
        }
    }
}

/// Result type alias for ninjagen operations.
pub type Result<T> = std::result::Result<T, NinjagenError>;
