//! The remote registry client trait.

use crate::error::Result;
use crate::report::{FullReport, SearchReport};
use async_trait::async_trait;

/// Contract of a remote registry client.
///
/// Implementations own the session token and must be thread-safe
/// (Send + Sync), since the session and the search handlers share one
/// instance. Token mutation therefore goes through `&self`.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// Authenticate with the configured API key and store the issued token.
    ///
    /// # Errors
    /// [`ApiFault::InvalidUserKey`](crate::ApiFault::InvalidUserKey) for a
    /// rejected key, [`ApiFault::Transport`](crate::ApiFault::Transport) when
    /// the service is unreachable.
    async fn login(&self) -> Result<()>;

    /// End the current remote session.
    async fn logout(&self) -> Result<()>;

    /// Use `token` for subsequent calls without logging in.
    fn set_session_token(&self, token: &str);

    /// The token of the current session, if one was issued.
    fn session_token(&self) -> Option<String>;

    /// Search by REGON.
    async fn search_by_regon(&self, regon: &str) -> Result<Vec<SearchReport>>;

    /// Search by NIP.
    async fn search_by_nip(&self, nip: &str) -> Result<Vec<SearchReport>>;

    /// Search by KRS.
    async fn search_by_krs(&self, krs: &str) -> Result<Vec<SearchReport>>;

    /// Fetch a named full report for a previously found entity.
    async fn full_report(&self, report: &SearchReport, report_name: &str) -> Result<FullReport>;
}
