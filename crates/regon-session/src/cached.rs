//! Session decorator that persists the token in a cache store.

use crate::session::{Session, SessionState};
use async_trait::async_trait;
use regon_api::RegistryApi;
use regon_cache::CacheStore;
use regon_core::{Result, DEFAULT_SESSION_TTL_SECS};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Wraps a [`Session`] and shares its token through a [`CacheStore`].
///
/// On login the cache is consulted first; a hit restores the inner session
/// with the cached token and no network login happens. On a miss the inner
/// session logs in and the issued token is saved. On logout the entry is
/// removed before the inner session logs out, so no other reader of the
/// same store can pick up a token that is about to die.
///
/// Cache failures never fail the session: they are logged and treated as a
/// miss.
pub struct CachedSession<S> {
    inner: S,
    api: Arc<dyn RegistryApi>,
    cache: Arc<dyn CacheStore>,
    cache_key: String,
    ttl: Duration,
}

impl<S: std::fmt::Debug> std::fmt::Debug for CachedSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedSession")
            .field("inner", &self.inner)
            .field("cache_key", &self.cache_key)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl<S: Session> CachedSession<S> {
    /// Wrap `inner`. `api` must be the client `inner` logs in through, since
    /// the token to cache is read from it after login.
    pub fn new(
        inner: S,
        api: Arc<dyn RegistryApi>,
        cache: Arc<dyn CacheStore>,
        cache_key: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            api,
            cache,
            cache_key: cache_key.into(),
            ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }

    /// Set how long a saved token stays in the cache. Keep it below the
    /// remote session lifetime.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Key the token is stored under.
    #[must_use]
    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    /// Lifetime of a saved token.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The wrapped session.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    async fn cached_token(&self) -> Option<Zeroizing<String>> {
        match self.cache.get(&self.cache_key).await {
            Ok(Some(token)) if !token.is_empty() => Some(Zeroizing::new(token)),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "Failed to restore session from cache");
                None
            }
        }
    }

    async fn save_token(&self) {
        let Some(token) = self.api.session_token().map(Zeroizing::new) else {
            debug!("No session token to cache");
            return;
        };
        if token.is_empty() {
            debug!("No session token to cache");
            return;
        }

        match self.cache.set(&self.cache_key, &token, self.ttl).await {
            Ok(()) => debug!(ttl_secs = self.ttl.as_secs(), "Session saved to cache"),
            Err(e) => warn!(error = %e, "Failed to save session to cache"),
        }
    }
}

#[async_trait]
impl<S: Session> Session for CachedSession<S> {
    async fn login(&mut self) -> Result<()> {
        if self.inner.is_logged_in() {
            return Ok(());
        }

        if let Some(token) = self.cached_token().await {
            self.inner.restore(&token);
            debug!("Session restored from cache");
            return Ok(());
        }

        self.inner.login().await?;
        self.save_token().await;
        Ok(())
    }

    async fn logout(&mut self) {
        match self.cache.delete(&self.cache_key).await {
            Ok(removed) => debug!(removed, "Session removed from cache"),
            Err(e) => warn!(error = %e, "Failed to remove session from cache"),
        }
        self.inner.logout().await;
    }

    fn restore(&mut self, token: &str) {
        self.inner.restore(token);
    }

    fn state(&self) -> SessionState {
        self.inner.state()
    }
}
