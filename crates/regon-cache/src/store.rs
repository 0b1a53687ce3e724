//! The cache store trait.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A key/value store with per-entry expiry.
///
/// Stores must be safe to share between client instances; a store that is
/// shared across processes lets a fresh process reuse a live session token.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Read a value. Expired and missing entries both return `None`.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value that expires after `ttl`.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Remove a value. Returns `true` if something was removed.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Remove every value.
    async fn clear(&self) -> Result<()>;
}
