//! File-backed cache store.
//!
//! Each key is written to `<dir>/<sha256(key)>.json`. Entries carry their
//! own expiry as an RFC 3339 timestamp so any process pointed at the same
//! directory can read them.

use crate::error::{CacheError, Result};
use crate::store::CacheStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize)]
struct FileEntry {
    key: String,
    value: String,
    expires_at: DateTime<Utc>,
}

/// Cache store that keeps one JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the cache files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.dir.join(format!("{}.json", hex::encode(digest)))
    }

    async fn remove_file(path: &Path) -> Result<bool> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CacheStore for FileCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let entry: FileEntry = serde_json::from_str(&raw)?;
        if entry.key != key {
            warn!(path = %path.display(), "cache file key mismatch");
            return Ok(None);
        }

        if entry.expires_at <= Utc::now() {
            debug!(key, "removing expired cache file");
            Self::remove_file(&path).await?;
            return Ok(None);
        }

        Ok(Some(entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .ok_or_else(|| CacheError::Unavailable(format!("ttl out of range: {ttl:?}")))?;
        let entry = FileEntry {
            key: key.to_string(),
            value: value.to_string(),
            expires_at,
        };
        let json = serde_json::to_vec(&entry)?;

        tokio::fs::create_dir_all(&self.dir).await?;

        // Write to a temp file first so readers never see a partial entry
        let path = self.entry_path(key);
        let tmp = path.with_extension(format!("json.{}.tmp", std::process::id()));
        tokio::fs::write(&tmp, json).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Self::remove_file(&self.entry_path(key)).await
    }

    async fn clear(&self) -> Result<()> {
        let mut dir = match tokio::fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        while let Some(item) = dir.next_entry().await? {
            let path = item.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Self::remove_file(&path).await?;
            }
        }

        Ok(())
    }
}
