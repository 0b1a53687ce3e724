//! Search result caching on top of a [`CacheStore`].

use crate::store::CacheStore;
use regon_api::SearchReport;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default lifetime of a cached search result (one day).
pub const DEFAULT_REPORT_TTL: Duration = Duration::from_secs(86_400);

const KEY_PREFIX: &str = "gus_";

/// Caches single search results under sanitized, prefixed keys.
///
/// Every store failure is logged and reported as a miss (`None`) or as
/// `false`; callers never see a cache error.
#[derive(Clone)]
pub struct ReportCache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl std::fmt::Debug for ReportCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportCache")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl ReportCache {
    /// Wrap a store with the default TTL.
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self::with_ttl(store, DEFAULT_REPORT_TTL)
    }

    /// Wrap a store with a custom TTL.
    pub fn with_ttl(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Lifetime applied to new entries.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Full store key for a logical key: `gus_` prefix, and anything outside
    /// `[A-Za-z0-9_-]` replaced with `_`.
    #[must_use]
    pub fn cache_key(key: &str) -> String {
        let sanitized: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{KEY_PREFIX}{sanitized}")
    }

    /// Look up a cached result.
    pub async fn get(&self, key: &str) -> Option<SearchReport> {
        let cache_key = Self::cache_key(key);
        let raw = match self.store.get(&cache_key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %cache_key, "Cache miss");
                return None;
            }
            Err(e) => {
                warn!(key = %cache_key, error = %e, "Cache get failed");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(report) => {
                debug!(key = %cache_key, "Cache hit");
                Some(report)
            }
            Err(e) => {
                warn!(key = %cache_key, error = %e, "Cache entry could not be decoded");
                None
            }
        }
    }

    /// Store a result. Returns `false` if the store rejected it.
    pub async fn set(&self, key: &str, report: &SearchReport) -> bool {
        let cache_key = Self::cache_key(key);
        let raw = match serde_json::to_string(report) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %cache_key, error = %e, "Cache set failed");
                return false;
            }
        };

        match self.store.set(&cache_key, &raw, self.ttl).await {
            Ok(()) => {
                debug!(key = %cache_key, ttl_secs = self.ttl.as_secs(), "Cache set successful");
                true
            }
            Err(e) => {
                warn!(key = %cache_key, error = %e, "Cache set failed");
                false
            }
        }
    }

    /// Remove a result. Returns `true` if an entry was removed.
    pub async fn delete(&self, key: &str) -> bool {
        let cache_key = Self::cache_key(key);
        match self.store.delete(&cache_key).await {
            Ok(removed) => {
                debug!(key = %cache_key, removed, "Cache delete");
                removed
            }
            Err(e) => {
                warn!(key = %cache_key, error = %e, "Cache delete failed");
                false
            }
        }
    }

    /// Remove everything in the underlying store.
    pub async fn clear(&self) -> bool {
        match self.store.clear().await {
            Ok(()) => {
                info!("Cache cleared successfully");
                true
            }
            Err(e) => {
                warn!(error = %e, "Cache clear failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CacheError, Result};
    use crate::MemoryCache;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl CacheStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(CacheError::Unavailable("down".into()))
        }
        async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<()> {
            Err(CacheError::Unavailable("down".into()))
        }
        async fn delete(&self, _key: &str) -> Result<bool> {
            Err(CacheError::Unavailable("down".into()))
        }
        async fn clear(&self) -> Result<()> {
            Err(CacheError::Unavailable("down".into()))
        }
    }

    fn report() -> SearchReport {
        SearchReport {
            regon: Some("000331501".to_string()),
            nip: Some("5261040828".to_string()),
            name: Some("GŁÓWNY URZĄD STATYSTYCZNY".to_string()),
            ..SearchReport::default()
        }
    }

    #[test]
    fn test_cache_key_sanitizes() {
        assert_eq!(ReportCache::cache_key("nip_5261040828"), "gus_nip_5261040828");
        assert_eq!(ReportCache::cache_key("a b/c:d"), "gus_a_b_c_d");
        assert_eq!(ReportCache::cache_key("x-y"), "gus_x-y");
    }

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryCache::new();
        let cache = ReportCache::new(Arc::new(store.clone()));

        assert!(cache.get("regon_000331501").await.is_none());
        assert!(cache.set("regon_000331501", &report()).await);
        assert_eq!(cache.get("regon_000331501").await, Some(report()));

        // Stored under the prefixed key
        assert!(store.get("gus_regon_000331501").await.expect("get").is_some());
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let cache = ReportCache::new(Arc::new(MemoryCache::new()));
        cache.set("a", &report()).await;
        cache.set("b", &report()).await;

        assert!(cache.delete("a").await);
        assert!(!cache.delete("a").await);
        assert!(cache.clear().await);
        assert!(cache.get("b").await.is_none());
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_a_miss() {
        let store = MemoryCache::new();
        store
            .set("gus_key", "{not json", Duration::from_secs(60))
            .await
            .expect("set");

        let cache = ReportCache::new(Arc::new(store));
        assert!(cache.get("key").await.is_none());
    }

    #[tokio::test]
    async fn test_unrepresentable_ttl_is_a_failed_set() {
        let cache = ReportCache::with_ttl(
            Arc::new(MemoryCache::new()),
            Duration::from_secs(u64::MAX),
        );

        assert!(!cache.set("nip_5261040828", &report()).await);
        assert!(cache.get("nip_5261040828").await.is_none());
    }

    #[tokio::test]
    async fn test_failing_store_is_swallowed() {
        let cache = ReportCache::with_ttl(Arc::new(FailingStore), Duration::from_secs(5));
        assert_eq!(cache.ttl(), Duration::from_secs(5));

        assert!(cache.get("key").await.is_none());
        assert!(!cache.set("key", &report()).await);
        assert!(!cache.delete("key").await);
        assert!(!cache.clear().await);
    }
}
