//! A store that never holds anything.

use crate::error::Result;
use crate::store::CacheStore;
use async_trait::async_trait;
use std::time::Duration;

/// Cache store used when caching is disabled. Every read misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

#[async_trait]
impl CacheStore for NullCache {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }
}
