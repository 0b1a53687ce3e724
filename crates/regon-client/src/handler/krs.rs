//! KRS lookups.

use super::SearchHandler;
use async_trait::async_trait;
use regon_api::{RegistryApi, SearchReport};
use regon_core::{Identifier, IdentifierKind};
use std::sync::Arc;

/// Searches the registry by KRS number. Only entities entered in the court
/// register have one.
#[derive(Clone)]
pub struct KrsSearchHandler {
    api: Arc<dyn RegistryApi>,
}

impl KrsSearchHandler {
    /// Create a handler over a shared remote client.
    pub fn new(api: Arc<dyn RegistryApi>) -> Self {
        Self { api }
    }
}

impl std::fmt::Debug for KrsSearchHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrsSearchHandler").finish_non_exhaustive()
    }
}

#[async_trait]
impl SearchHandler for KrsSearchHandler {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Krs
    }

    async fn perform_search(
        &self,
        identifier: &Identifier,
    ) -> regon_api::Result<Vec<SearchReport>> {
        self.api.search_by_krs(identifier.as_str()).await
    }
}
