//! Error types for the numcontract CLI

use numcontract_core::CheckError;
use thiserror::Error;

use crate::ExitCode;

/// Errors that stop the CLI before a report can be produced
#[derive(Error, Debug)]
pub enum CliError {
    /// Error raised by the checker itself
    #[error(transparent)]
    Check(#[from] CheckError),

    /// Invalid arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Report or listing could not be serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Writing output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        match self {
            CliError::Check(e) => !matches!(e, CheckError::SerializationError(_)),
            CliError::InvalidInput(_) => true,
            CliError::SerializationError(_) | CliError::Output(_) => false,
        }
    }

    /// Exit code this error maps to
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Check(e) if e.is_configuration_error() => ExitCode::ConfigurationError,
            CliError::Check(CheckError::FileError(_)) => ExitCode::FileError,
            CliError::Check(CheckError::ParseError(_)) | CliError::InvalidInput(_) => {
                ExitCode::InvalidInput
            }
            _ => ExitCode::InternalError,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::SerializationError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::SerializationError(format!("YAML error: {}", err))
    }
}
