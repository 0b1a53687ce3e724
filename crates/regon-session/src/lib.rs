//! Regon Session - Session lifecycle against the registry.
//!
//! Every lookup needs a live remote session. A session is opened with the API
//! key, stays valid for 60 minutes remotely, and should be closed when done.
//!
//! # Implementations
//!
//! - [`ApiSession`]: logs in and out through the remote client directly
//! - [`CachedSession`]: wraps any [`Session`] and keeps the issued token in a
//!   [`CacheStore`](regon_cache::CacheStore), so a new process sharing that
//!   store can reuse the token instead of logging in again
//!
//! # State Machine
//!
//! ```text
//! LoggedOut --login()--------> LoggedIn
//! LoggedOut --restore(token)-> LoggedIn
//! LoggedIn  --logout()-------> LoggedOut
//! ```
//!
//! Session tokens held in memory are zeroized on drop.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod api_session;
pub mod cached;
pub mod key;
pub mod session;

// Re-export commonly used types
pub use api_session::ApiSession;
pub use cached::CachedSession;
pub use key::session_cache_key;
pub use session::{Session, SessionState};
