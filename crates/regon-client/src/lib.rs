//! Regon Client - Search handlers and the registry client facade.
//!
//! [`RegistryClient`] is the entry point. It owns one session and makes sure
//! it is logged in before every remote lookup, then hands the lookup to the
//! handler for the identifier kind.
//!
//! # Lookups
//!
//! - **Single result**: `get_by_regon`, `get_by_nip`, `get_by_krs` return one
//!   [`SearchReport`](regon_api::SearchReport). No match yields an empty
//!   placeholder report, not an error.
//! - **Collection**: `search_by_*` return a [`SearchReportCollection`] of every
//!   record the registry sent back.
//! - **Full report**: `get_full_report` fetches a named report for a record
//!   found earlier.
//!
//! # Example
//!
//! ```rust,no_run
//! use regon_api::RegistryApi;
//! use regon_client::RegistryClient;
//! use regon_core::RegistryConfig;
//! use std::sync::Arc;
//!
//! # async fn example(api: Arc<dyn RegistryApi>) -> regon_core::Result<()> {
//! let config = RegistryConfig::load_with_env()?;
//! let mut client = RegistryClient::from_config(api, &config, None)?;
//!
//! let company = client.get_by_nip("5261040828").await?;
//! println!("{:?}", company.name);
//!
//! client.logout().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod collection;
pub mod handler;

// Re-export commonly used types
pub use client::{RegistryClient, RegistryLookup};
pub use collection::SearchReportCollection;
pub use handler::{
    FullReportHandler, KrsSearchHandler, NipSearchHandler, RegonSearchHandler, SearchHandler,
};
