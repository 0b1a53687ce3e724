//! The registry client facade.

use crate::collection::SearchReportCollection;
use crate::handler::{
    FullReportHandler, KrsSearchHandler, NipSearchHandler, RegonSearchHandler, SearchHandler,
};
use async_trait::async_trait;
use regon_api::{FullReport, RegistryApi, SearchReport};
use regon_cache::{CacheStore, FileCache, ReportCache};
use regon_core::{Environment, Identifier, IdentifierKind, RegistryConfig, Result};
use regon_session::{session_cache_key, ApiSession, CachedSession, Session};
use std::sync::Arc;
use tracing::{debug, info};

/// Lookup surface of [`RegistryClient`], for callers that want to swap in a
/// fake.
#[async_trait]
pub trait RegistryLookup: Send {
    /// Single record by REGON.
    async fn get_by_regon(&mut self, regon: &str) -> Result<SearchReport>;

    /// Single record by NIP.
    async fn get_by_nip(&mut self, nip: &str) -> Result<SearchReport>;

    /// Single record by KRS.
    async fn get_by_krs(&mut self, krs: &str) -> Result<SearchReport>;

    /// Every record for a REGON.
    async fn search_by_regon(&mut self, regon: &str) -> Result<SearchReportCollection>;

    /// Every record for a NIP.
    async fn search_by_nip(&mut self, nip: &str) -> Result<SearchReportCollection>;

    /// Every record for a KRS.
    async fn search_by_krs(&mut self, krs: &str) -> Result<SearchReportCollection>;

    /// Named full report for a record found earlier.
    async fn get_full_report(
        &mut self,
        report: &SearchReport,
        report_name: &str,
    ) -> Result<FullReport>;

    /// Open the session now instead of on first lookup.
    async fn login(&mut self) -> Result<()>;

    /// Close the session. Never fails.
    async fn logout(&mut self);

    /// Whether a session is open.
    fn is_logged_in(&self) -> bool;
}

/// Client for the REGON business registry.
///
/// Holds one session and logs it in before every remote lookup. Lookups take
/// `&mut self`; share an instance between tasks behind a mutex.
pub struct RegistryClient {
    session: Box<dyn Session>,
    regon: RegonSearchHandler,
    nip: NipSearchHandler,
    krs: KrsSearchHandler,
    full_report: FullReportHandler,
    report_cache: Option<ReportCache>,
}

impl std::fmt::Debug for RegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryClient")
            .field("logged_in", &self.session.is_logged_in())
            .field("report_cache", &self.report_cache)
            .finish_non_exhaustive()
    }
}

impl RegistryClient {
    /// Client without any caching.
    pub fn new(api: Arc<dyn RegistryApi>) -> Self {
        let session = Box::new(ApiSession::new(api.clone()));
        Self::with_session(api, session, None)
    }

    /// Client that caches its session token and search results in `cache`
    /// with the default TTLs.
    pub fn with_cache(
        api: Arc<dyn RegistryApi>,
        cache: Arc<dyn CacheStore>,
        api_key: &str,
        environment: Environment,
    ) -> Self {
        let session = CachedSession::new(
            ApiSession::new(api.clone()),
            api.clone(),
            cache.clone(),
            session_cache_key(api_key, environment),
        );
        Self::with_session(api, Box::new(session), Some(ReportCache::new(cache)))
    }

    /// Client built from configuration.
    ///
    /// With caching enabled, `cache` is used when given, otherwise a
    /// [`FileCache`] in the configured cache directory. TTLs come from the
    /// configuration.
    pub fn from_config(
        api: Arc<dyn RegistryApi>,
        config: &RegistryConfig,
        cache: Option<Arc<dyn CacheStore>>,
    ) -> Result<Self> {
        config.validate()?;

        if !config.cache.enabled {
            debug!(environment = %config.environment, "Caching disabled");
            return Ok(Self::new(api));
        }

        let cache: Arc<dyn CacheStore> = match cache {
            Some(cache) => cache,
            None => Arc::new(FileCache::new(config.cache_dir()?)),
        };

        let session = CachedSession::new(
            ApiSession::new(api.clone()),
            api.clone(),
            cache.clone(),
            session_cache_key(&config.api_key, config.environment),
        )
        .with_ttl(config.cache.session_ttl());
        let report_cache = ReportCache::with_ttl(cache, config.cache.ttl());

        Ok(Self::with_session(api, Box::new(session), Some(report_cache)))
    }

    /// Client over an explicit session and optional result cache.
    pub fn with_session(
        api: Arc<dyn RegistryApi>,
        session: Box<dyn Session>,
        report_cache: Option<ReportCache>,
    ) -> Self {
        Self {
            session,
            regon: RegonSearchHandler::new(api.clone()),
            nip: NipSearchHandler::new(api.clone()),
            krs: KrsSearchHandler::new(api.clone()),
            full_report: FullReportHandler::new(api),
            report_cache,
        }
    }

    fn handler(&self, kind: IdentifierKind) -> &dyn SearchHandler {
        match kind {
            IdentifierKind::Regon => &self.regon,
            IdentifierKind::Nip => &self.nip,
            IdentifierKind::Krs => &self.krs,
        }
    }

    async fn lookup(&mut self, kind: IdentifierKind, value: &str) -> Result<SearchReport> {
        // Reject bad input before touching the cache or the session
        let identifier = Identifier::new(kind, value)?;
        let key = format!("{}_{}", kind.label().to_ascii_lowercase(), identifier.as_str());

        if let Some(cache) = &self.report_cache {
            if let Some(report) = cache.get(&key).await {
                return Ok(report);
            }
        }

        self.session.ensure_logged_in().await?;
        let report = self.handler(kind).search_single(value).await?;

        if let Some(cache) = &self.report_cache {
            if !report.is_empty() {
                cache.set(&key, &report).await;
            }
        }
        Ok(report)
    }

    async fn lookup_all(
        &mut self,
        kind: IdentifierKind,
        value: &str,
    ) -> Result<SearchReportCollection> {
        Identifier::new(kind, value)?;
        self.session.ensure_logged_in().await?;
        self.handler(kind).search(value).await
    }

    /// Single record by REGON.
    pub async fn get_by_regon(&mut self, regon: &str) -> Result<SearchReport> {
        self.lookup(IdentifierKind::Regon, regon).await
    }

    /// Single record by NIP.
    pub async fn get_by_nip(&mut self, nip: &str) -> Result<SearchReport> {
        self.lookup(IdentifierKind::Nip, nip).await
    }

    /// Single record by KRS.
    pub async fn get_by_krs(&mut self, krs: &str) -> Result<SearchReport> {
        self.lookup(IdentifierKind::Krs, krs).await
    }

    /// Every record for a REGON.
    pub async fn search_by_regon(&mut self, regon: &str) -> Result<SearchReportCollection> {
        self.lookup_all(IdentifierKind::Regon, regon).await
    }

    /// Every record for a NIP.
    pub async fn search_by_nip(&mut self, nip: &str) -> Result<SearchReportCollection> {
        self.lookup_all(IdentifierKind::Nip, nip).await
    }

    /// Every record for a KRS.
    pub async fn search_by_krs(&mut self, krs: &str) -> Result<SearchReportCollection> {
        self.lookup_all(IdentifierKind::Krs, krs).await
    }

    /// Named full report for a record found earlier. See
    /// [`report_names`](regon_api::report_names) for the known names.
    pub async fn get_full_report(
        &mut self,
        report: &SearchReport,
        report_name: &str,
    ) -> Result<FullReport> {
        self.session.ensure_logged_in().await?;
        self.full_report.fetch(report, report_name).await
    }

    /// Open the session now instead of on first lookup.
    pub async fn login(&mut self) -> Result<()> {
        self.session.login().await
    }

    /// Close the session.
    pub async fn logout(&mut self) {
        self.session.logout().await;
    }

    /// Whether a session is open.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Clear the whole underlying cache store.
    ///
    /// The session token shares the store with search results, so it is
    /// dropped too and the next client built on this store logs in again.
    /// With a [`FileCache`] every `*.json` file in the
    /// cache directory is removed, whoever wrote it. Returns `false` without a
    /// result cache or when the store failed.
    pub async fn clear_cache(&self) -> bool {
        match &self.report_cache {
            Some(cache) => cache.clear().await,
            None => {
                info!("No result cache to clear");
                false
            }
        }
    }
}

#[async_trait]
impl RegistryLookup for RegistryClient {
    async fn get_by_regon(&mut self, regon: &str) -> Result<SearchReport> {
        RegistryClient::get_by_regon(self, regon).await
    }

    async fn get_by_nip(&mut self, nip: &str) -> Result<SearchReport> {
        RegistryClient::get_by_nip(self, nip).await
    }

    async fn get_by_krs(&mut self, krs: &str) -> Result<SearchReport> {
        RegistryClient::get_by_krs(self, krs).await
    }

    async fn search_by_regon(&mut self, regon: &str) -> Result<SearchReportCollection> {
        RegistryClient::search_by_regon(self, regon).await
    }

    async fn search_by_nip(&mut self, nip: &str) -> Result<SearchReportCollection> {
        RegistryClient::search_by_nip(self, nip).await
    }

    async fn search_by_krs(&mut self, krs: &str) -> Result<SearchReportCollection> {
        RegistryClient::search_by_krs(self, krs).await
    }

    async fn get_full_report(
        &mut self,
        report: &SearchReport,
        report_name: &str,
    ) -> Result<FullReport> {
        RegistryClient::get_full_report(self, report, report_name).await
    }

    async fn login(&mut self) -> Result<()> {
        RegistryClient::login(self).await
    }

    async fn logout(&mut self) {
        RegistryClient::logout(self).await;
    }

    fn is_logged_in(&self) -> bool {
        RegistryClient::is_logged_in(self)
    }
}
