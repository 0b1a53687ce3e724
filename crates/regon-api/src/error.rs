//! Faults raised by the remote registry client.

use regon_core::RegistryError;
use thiserror::Error;

/// A failure reported by a [`RegistryApi`](crate::RegistryApi) implementation.
///
/// The variants are the only distinctions the layers above care about;
/// transports fold everything they cannot classify into [`ApiFault::Other`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiFault {
    /// The registry has no entity for the query
    #[error("not found: {0}")]
    NotFound(String),

    /// The API key was rejected
    #[error("invalid user key: {0}")]
    InvalidUserKey(String),

    /// The request never completed (DNS, TLS, SOAP envelope, HTTP status)
    #[error("transport error: {0}")]
    Transport(String),

    /// Anything the transport could not classify
    #[error("{0}")]
    Other(String),
}

/// Result type for remote registry calls.
pub type Result<T> = std::result::Result<T, ApiFault>;

/// Message used for every rejected API key.
pub const INVALID_API_KEY: &str = "Invalid API key";

/// Message used for every transport failure.
pub const CONNECTION_FAILED: &str = "Failed to connect to GUS API";

/// Context-free mapping into the domain taxonomy. The fault is kept as
/// `source()`. Search handlers replace the not-found message with one naming
/// the identifier.
impl From<ApiFault> for RegistryError {
    fn from(fault: ApiFault) -> Self {
        match fault {
            ApiFault::NotFound(_) => {
                let message = fault.to_string();
                RegistryError::not_found(message, fault)
            }
            ApiFault::InvalidUserKey(_) => RegistryError::authentication(INVALID_API_KEY, fault),
            ApiFault::Transport(_) => RegistryError::connection(CONNECTION_FAILED, fault),
            ApiFault::Other(ref msg) => {
                let message = format!("Unexpected error: {msg}");
                RegistryError::connection(message, fault)
            }
        }
    }
}
