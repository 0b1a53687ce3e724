//! NIP (tax number) lookups.

use super::SearchHandler;
use async_trait::async_trait;
use regon_api::{RegistryApi, SearchReport};
use regon_core::{Identifier, IdentifierKind};
use std::sync::Arc;

/// Searches the registry by NIP.
#[derive(Clone)]
pub struct NipSearchHandler {
    api: Arc<dyn RegistryApi>,
}

impl NipSearchHandler {
    /// Create a handler over a shared remote client.
    pub fn new(api: Arc<dyn RegistryApi>) -> Self {
        Self { api }
    }
}

impl std::fmt::Debug for NipSearchHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NipSearchHandler").finish_non_exhaustive()
    }
}

#[async_trait]
impl SearchHandler for NipSearchHandler {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Nip
    }

    async fn perform_search(
        &self,
        identifier: &Identifier,
    ) -> regon_api::Result<Vec<SearchReport>> {
        self.api.search_by_nip(identifier.as_str()).await
    }
}
