//! Shared types used across the registry client.
//!
//! This module defines the validated identifier newtype and the small enums
//! that describe which registry and which remote environment are in play.

use crate::error::{ConfigError, RegistryError};
use crate::validator::{validate_krs, validate_nip, validate_regon};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three identifier kinds the registry can be searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// National statistical number (9 or 14 digits)
    Regon,
    /// Tax identification number (10 digits)
    Nip,
    /// Court register number (10 digits)
    Krs,
}

impl IdentifierKind {
    /// Upper-case label used in messages and log fields.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Regon => "REGON",
            Self::Nip => "NIP",
            Self::Krs => "KRS",
        }
    }

    /// Check `value` against the rule for this kind.
    #[must_use]
    pub fn validate(self, value: &str) -> bool {
        match self {
            Self::Regon => validate_regon(value),
            Self::Nip => validate_nip(value),
            Self::Krs => validate_krs(value),
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An identifier that has passed validation for its kind.
///
/// The only way to build one is [`Identifier::new`], so holding an
/// `Identifier` means the value is safe to send to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    kind: IdentifierKind,
    value: String,
}

impl Identifier {
    /// Validate `value` as an identifier of `kind`.
    ///
    /// # Errors
    /// Returns [`RegistryError::InvalidIdentifier`] if the value has the wrong
    /// length, contains anything but ASCII digits, or fails its checksum.
    pub fn new(kind: IdentifierKind, value: impl Into<String>) -> Result<Self, RegistryError> {
        let value = value.into();
        if kind.validate(&value) {
            Ok(Self { kind, value })
        } else {
            Err(RegistryError::InvalidIdentifier { kind, value })
        }
    }

    /// Shorthand for a REGON identifier.
    pub fn regon(value: impl Into<String>) -> Result<Self, RegistryError> {
        Self::new(IdentifierKind::Regon, value)
    }

    /// Shorthand for a NIP identifier.
    pub fn nip(value: impl Into<String>) -> Result<Self, RegistryError> {
        Self::new(IdentifierKind::Nip, value)
    }

    /// Shorthand for a KRS identifier.
    pub fn krs(value: impl Into<String>) -> Result<Self, RegistryError> {
        Self::new(IdentifierKind::Krs, value)
    }

    /// The identifier kind.
    #[must_use]
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// The raw digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.value)
    }
}

/// Remote environment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Public sandbox
    #[default]
    Test,
    /// Production service
    Production,
}

impl Environment {
    /// Configuration spelling (`test` / `production`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Production => "production",
        }
    }

    /// Environment name understood by the remote transport (`dev` / `prod`).
    #[must_use]
    pub fn api_name(self) -> &'static str {
        match self {
            Self::Test => "dev",
            Self::Production => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test" => Ok(Self::Test),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::InvalidValue {
                field: "environment".to_string(),
                reason: format!("Invalid environment specified: '{other}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_accepts_valid_values() {
        let regon = Identifier::regon("123456785").expect("valid REGON");
        assert_eq!(regon.kind(), IdentifierKind::Regon);
        assert_eq!(regon.as_str(), "123456785");

        assert!(Identifier::regon("12345678512347").is_ok());
        assert!(Identifier::nip("5260250274").is_ok());
        assert!(Identifier::krs("0000123456").is_ok());
    }

    #[test]
    fn test_identifier_rejects_invalid_values() {
        let err = Identifier::regon("123456786").unwrap_err();
        assert_eq!(err.to_string(), "Invalid REGON number: 123456786");

        let err = Identifier::nip("5260250275").unwrap_err();
        assert_eq!(err.to_string(), "Invalid NIP number: 5260250275");

        let err = Identifier::krs("12345").unwrap_err();
        assert_eq!(err.to_string(), "Invalid KRS number: 12345");
    }

    #[test]
    fn test_identifier_display() {
        let nip = Identifier::nip("5260250274").expect("valid NIP");
        assert_eq!(nip.to_string(), "NIP 5260250274");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(IdentifierKind::Regon.label(), "REGON");
        assert_eq!(IdentifierKind::Nip.to_string(), "NIP");
        assert_eq!(IdentifierKind::Krs.to_string(), "KRS");
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("test".parse::<Environment>().expect("test"), Environment::Test);
        assert_eq!(
            "production".parse::<Environment>().expect("production"),
            Environment::Production
        );

        let err = "staging".parse::<Environment>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_environment_api_names() {
        assert_eq!(Environment::Test.api_name(), "dev");
        assert_eq!(Environment::Production.api_name(), "prod");
        assert_eq!(Environment::default(), Environment::Test);
    }

    #[test]
    fn test_environment_serialization() {
        let json = serde_json::to_string(&Environment::Production).expect("serialize");
        assert_eq!(json, "\"production\"");
    }
}
