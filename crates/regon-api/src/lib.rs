//! Regon API - Remote registry client abstraction.
//!
//! The wire transport to the registry (SOAP over HTTPS) lives behind the
//! [`RegistryApi`] trait. Everything above it (sessions, search handlers,
//! the client facade) depends only on this trait and on the records it returns.
//!
//! # Features
//!
//! - **Remote contract**: [`RegistryApi`] with login/logout, token injection,
//!   the three identifier searches and full-report fetching
//! - **Tagged faults**: [`ApiFault`] replaces transport-specific exception types
//! - **Records**: [`SearchReport`] as returned by a search, plus full-report rows
//! - **DTOs**: [`BusinessData`], [`Address`], [`PkdCode`] for presenting results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod dto;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use client::RegistryApi;
pub use dto::{Address, BusinessData, PkdCode};
pub use error::{ApiFault, Result, CONNECTION_FAILED, INVALID_API_KEY};
pub use report::{report_names, EntityType, FullReport, ReportRow, SearchReport};
