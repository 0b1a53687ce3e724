//! Regon Cache - Cache stores for session tokens and search results.
//!
//! The session layer persists its token here so a new process can skip the
//! network login, and the client can keep search results for a day. Both
//! treat the cache strictly as an optimization: every failure is logged by
//! the caller and handled as a miss.
//!
//! # Stores
//!
//! - [`MemoryCache`]: process-local, cloneable handle to one shared map
//! - [`FileCache`]: one JSON file per key, shared across processes
//! - [`NullCache`]: always misses, used when caching is disabled
//!
//! # Example
//!
//! ```rust
//! use regon_cache::{CacheStore, MemoryCache};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), regon_cache::CacheError> {
//! let cache = MemoryCache::new();
//! cache.set("gus_session_abc", "token", Duration::from_secs(3300)).await?;
//! assert_eq!(cache.get("gus_session_abc").await?.as_deref(), Some("token"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod file;
pub mod memory;
pub mod null;
pub mod report_cache;
pub mod store;

// Re-export commonly used types
pub use error::{CacheError, Result};
pub use file::FileCache;
pub use memory::MemoryCache;
pub use null::NullCache;
pub use report_cache::{ReportCache, DEFAULT_REPORT_TTL};
pub use store::CacheStore;
