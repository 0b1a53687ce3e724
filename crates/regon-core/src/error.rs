//! Core error types for the registry client.
//!
//! [`RegistryError`] is the closed taxonomy every public operation returns.
//! Remote-specific faults never leak past the handler boundary; they are
//! attached as the `source()` of one of these variants instead.

use crate::types::IdentifierKind;
use thiserror::Error;

/// Boxed error used to carry the original cause of a domain error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Central error type for registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Identifier failed its structural or checksum rule. Raised before any I/O.
    #[error("Invalid {kind} number: {value}")]
    InvalidIdentifier {
        /// Kind the value was validated as
        kind: IdentifierKind,
        /// Rejected value, verbatim
        value: String,
    },

    /// The registry confirmed there is no match
    #[error("{message}")]
    NotFound {
        /// Human-readable message
        message: String,
        /// Original failure, if any
        #[source]
        source: Option<BoxError>,
    },

    /// Credentials were rejected. Retrying will not help.
    #[error("{message}")]
    Authentication {
        /// Human-readable message
        message: String,
        /// Original failure, if any
        #[source]
        source: Option<BoxError>,
    },

    /// Transport failure or any unclassified error. Safe to retry.
    #[error("{message}")]
    Connection {
        /// Human-readable message
        message: String,
        /// Original failure, if any
        #[source]
        source: Option<BoxError>,
    },

    /// A single-result lookup returned several records
    #[error("Multiple results found when single expected")]
    AmbiguousResult {
        /// Number of records returned
        count: usize,
    },

    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RegistryError {
    /// Build a [`RegistryError::NotFound`] with an attached cause.
    pub fn not_found(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::NotFound {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Build a [`RegistryError::Authentication`] with an attached cause.
    pub fn authentication(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Authentication {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Build a [`RegistryError::Connection`] with an attached cause.
    pub fn connection(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Connection {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Whether the caller may retry the operation that produced this error.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `RegistryError`.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = RegistryError::InvalidIdentifier {
            kind: IdentifierKind::Regon,
            value: "123".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid REGON number: 123");

        let err = RegistryError::AmbiguousResult { count: 2 };
        assert_eq!(err.to_string(), "Multiple results found when single expected");

        let err = ConfigError::NoConfigDir;
        assert_eq!(
            err.to_string(),
            "could not determine config directory (XDG base directories not available)"
        );
    }

    #[test]
    fn test_source_is_preserved() {
        let cause = std::io::Error::new(std::io::ErrorKind::TimedOut, "socket timed out");
        let err = RegistryError::connection("Failed to connect to GUS API", cause);

        assert_eq!(err.to_string(), "Failed to connect to GUS API");
        let source = err.source().expect("source attached");
        assert_eq!(source.to_string(), "socket timed out");
    }

    #[test]
    fn test_only_connection_errors_are_retryable() {
        assert!(RegistryError::connection("down", "timeout").is_retryable());
        assert!(!RegistryError::authentication("Invalid API key", "bad key").is_retryable());
        assert!(!RegistryError::not_found("gone", "missing").is_retryable());
        assert!(!RegistryError::InvalidIdentifier {
            kind: IdentifierKind::Nip,
            value: "1".to_string(),
        }
        .is_retryable());
        assert!(!RegistryError::AmbiguousResult { count: 3 }.is_retryable());
    }

    #[test]
    fn test_error_from_config() {
        let config_err = ConfigError::NoConfigDir;
        let err: RegistryError = config_err.into();
        assert!(matches!(err, RegistryError::Config(_)));
    }
}
