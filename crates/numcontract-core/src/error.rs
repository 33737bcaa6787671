//! Error types for numcontract
//!
//! Mismatches between declared and observed behavior are never errors; they
//! are collected as [`Violation`](crate::Violation)s. The variants here cover
//! the configuration problems that make a check impossible to run at all.

use thiserror::Error;

/// Main error type for conformance checking
#[derive(Error, Debug)]
pub enum CheckError {
    /// A contract or case names a type the runtime cannot introspect
    #[error("Unknown type: '{0}' cannot be introspected")]
    UnknownType(String),

    /// A contract breaks its own invariants (min > max, zero size, ...)
    #[error("Invalid contract '{name}': {reason}")]
    InvalidContract { name: String, reason: String },

    /// An edge case cannot be evaluated as written
    #[error("Invalid edge case '{description}': {reason}")]
    InvalidCase { description: String, reason: String },

    /// A numeric literal or number field failed to parse
    #[error("Parse error: {0}")]
    ParseError(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    FileError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CheckError {
    /// Create an unknown type error
    pub fn unknown_type(name: impl Into<String>) -> Self {
        CheckError::UnknownType(name.into())
    }

    /// Create an invalid contract error
    pub fn invalid_contract(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CheckError::InvalidContract {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid edge case error
    pub fn invalid_case(description: impl Into<String>, reason: impl Into<String>) -> Self {
        CheckError::InvalidCase {
            description: description.into(),
            reason: reason.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        CheckError::ParseError(msg.into())
    }

    /// Whether the suite itself is misconfigured, as opposed to an I/O or
    /// serialization failure around it
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CheckError::UnknownType(_)
                | CheckError::InvalidContract { .. }
                | CheckError::InvalidCase { .. }
        )
    }
}

impl From<std::io::Error> for CheckError {
    fn from(err: std::io::Error) -> Self {
        CheckError::FileError(err.to_string())
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(err: serde_json::Error) -> Self {
        CheckError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for CheckError {
    fn from(err: serde_yaml::Error) -> Self {
        CheckError::ParseError(format!("YAML error: {}", err))
    }
}

impl From<toml::de::Error> for CheckError {
    fn from(err: toml::de::Error) -> Self {
        CheckError::ParseError(format!("TOML error: {}", err))
    }
}

/// Result type alias for conformance operations
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckError::unknown_type("quad");
        assert_eq!(err.to_string(), "Unknown type: 'quad' cannot be introspected");

        let err = CheckError::invalid_contract("int", "min is greater than max");
        assert_eq!(err.to_string(), "Invalid contract 'int': min is greater than max");
    }

    #[test]
    fn test_is_configuration_error() {
        assert!(CheckError::unknown_type("x").is_configuration_error());
        assert!(CheckError::invalid_case("x", "y").is_configuration_error());
        assert!(!CheckError::FileError("missing".to_string()).is_configuration_error());
        assert!(!CheckError::parse_error("bad").is_configuration_error());
    }

    #[test]
    fn test_from_toml_error() {
        let err: CheckError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(matches!(err, CheckError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error: TOML error"));
    }
}
