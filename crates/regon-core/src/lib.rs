//! Regon Core - Foundation crate for the REGON registry client.
//!
//! This crate provides the pieces every other crate in the workspace depends on:
//! identifier validation, the domain error taxonomy and configuration loading.
//!
//! # Modules
//!
//! - [`validator`] - Checksum and structural validators for REGON, NIP and KRS
//! - [`types`] - Validated `Identifier` newtype, `IdentifierKind` and `Environment`
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths and env overrides
//!
//! # Example
//!
//! ```rust
//! use regon_core::{Identifier, IdentifierKind, RegistryError};
//!
//! let regon = Identifier::new(IdentifierKind::Regon, "123456785").expect("valid REGON");
//! assert_eq!(regon.as_str(), "123456785");
//!
//! let err = Identifier::new(IdentifierKind::Nip, "5260250275").unwrap_err();
//! assert!(matches!(err, RegistryError::InvalidIdentifier { .. }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use config::{
    CacheConfig, RegistryConfig, DEFAULT_RESULT_TTL_SECS, DEFAULT_SESSION_TTL_SECS,
    MAX_RESULT_TTL_SECS,
};
pub use error::{ConfigError, ConfigResult, RegistryError, Result};
pub use types::{Environment, Identifier, IdentifierKind};
pub use validator::{IdentifierValidator, KrsValidator, NipValidator, RegonValidator};
