//! REGON lookups.

use super::SearchHandler;
use async_trait::async_trait;
use regon_api::{RegistryApi, SearchReport};
use regon_core::{Identifier, IdentifierKind};
use std::sync::Arc;

/// Searches the registry by REGON. Both the 9-digit and the 14-digit (local
/// unit) forms are accepted.
#[derive(Clone)]
pub struct RegonSearchHandler {
    api: Arc<dyn RegistryApi>,
}

impl RegonSearchHandler {
    /// Create a handler over a shared remote client.
    pub fn new(api: Arc<dyn RegistryApi>) -> Self {
        Self { api }
    }
}

impl std::fmt::Debug for RegonSearchHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegonSearchHandler").finish_non_exhaustive()
    }
}

#[async_trait]
impl SearchHandler for RegonSearchHandler {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Regon
    }

    async fn perform_search(
        &self,
        identifier: &Identifier,
    ) -> regon_api::Result<Vec<SearchReport>> {
        self.api.search_by_regon(identifier.as_str()).await
    }
}
