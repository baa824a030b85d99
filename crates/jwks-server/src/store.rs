//! JWKS document source.
//!
//! By default every `load` goes to disk so a regenerated file is picked up
//! without a restart. With caching enabled the first successful parse is
//! kept until `invalidate` is called; failures are never cached.

use serde_json::Value;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::errors::JwksReadError;
use crate::observability::metrics::record_store_read;

#[derive(Debug)]
pub struct JwksStore {
    path: PathBuf,
    cache: Option<RwLock<Option<Value>>>,
}

impl JwksStore {
    pub fn new(path: impl Into<PathBuf>, cache_enabled: bool) -> Self {
        Self {
            path: path.into(),
            cache: cache_enabled.then(|| RwLock::new(None)),
        }
    }

    pub fn is_caching(&self) -> bool {
        self.cache.is_some()
    }

    /// Return the current JWKS document.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub async fn load(&self) -> Result<Value, JwksReadError> {
        let Some(cache) = &self.cache else {
            return self.read_from_disk().await;
        };

        if let Some(cached) = cache.read().await.as_ref() {
            record_store_read("cache");
            return Ok(cached.clone());
        }

        let mut slot = cache.write().await;
        // Another request may have filled the slot while we waited
        if let Some(cached) = slot.as_ref() {
            record_store_read("cache");
            return Ok(cached.clone());
        }

        let document = self.read_from_disk().await?;
        *slot = Some(document.clone());
        Ok(document)
    }

    /// Drop the cached document, if any. The next `load` reads the file again.
    pub async fn invalidate(&self) {
        if let Some(cache) = &self.cache {
            cache.write().await.take();
            debug!(target: "jwks.store", "JWKS cache invalidated");
        }
    }

    async fn read_from_disk(&self) -> Result<Value, JwksReadError> {
        let contents = tokio::fs::read(&self.path)
            .await
            .map_err(|source| JwksReadError::Io {
                path: self.path.clone(),
                source,
            })?;

        let document =
            serde_json::from_slice(&contents).map_err(|source| JwksReadError::Parse {
                path: self.path.clone(),
                source,
            })?;

        record_store_read("disk");
        Ok(document)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, value: &Value) -> PathBuf {
        let path = dir.path().join("jwks.json");
        std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_reads_file() {
        let dir = TempDir::new().unwrap();
        let doc = json!({"keys": [{"kid": "a"}]});
        let store = JwksStore::new(write_doc(&dir, &doc), false);

        assert_eq!(store.load().await.unwrap(), doc);
        assert!(!store.is_caching());
    }

    #[tokio::test]
    async fn test_load_without_cache_sees_file_changes() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, &json!({"keys": [{"kid": "first"}]}));
        let store = JwksStore::new(&path, false);

        assert_eq!(store.load().await.unwrap()["keys"][0]["kid"], "first");

        write_doc(&dir, &json!({"keys": [{"kid": "second"}]}));
        assert_eq!(store.load().await.unwrap()["keys"][0]["kid"], "second");
    }

    #[tokio::test]
    async fn test_cache_holds_until_invalidated() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, &json!({"keys": [{"kid": "first"}]}));
        let store = JwksStore::new(&path, true);
        assert!(store.is_caching());

        assert_eq!(store.load().await.unwrap()["keys"][0]["kid"], "first");

        write_doc(&dir, &json!({"keys": [{"kid": "second"}]}));
        assert_eq!(store.load().await.unwrap()["keys"][0]["kid"], "first");

        store.invalidate().await;
        assert_eq!(store.load().await.unwrap()["keys"][0]["kid"], "second");
    }

    #[tokio::test]
    async fn test_cache_survives_file_removal() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, &json!({"keys": []}));
        let store = JwksStore::new(&path, true);

        store.load().await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(store.load().await.unwrap(), json!({"keys": []}));
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jwks.json");
        let store = JwksStore::new(&path, true);

        assert!(matches!(
            store.load().await,
            Err(JwksReadError::Io { .. })
        ));

        std::fs::write(&path, br#"{"keys":[]}"#).unwrap();
        assert_eq!(store.load().await.unwrap(), json!({"keys": []}));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = JwksStore::new(dir.path().join("absent.json"), false);

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, JwksReadError::Io { ref path, .. } if path.ends_with("absent.json")));
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jwks.json");
        std::fs::write(&path, b"{\"keys\": [").unwrap();
        let store = JwksStore::new(&path, false);

        assert!(matches!(
            store.load().await,
            Err(JwksReadError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalidate_without_cache_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = JwksStore::new(write_doc(&dir, &json!({"keys": []})), false);

        store.invalidate().await;
        assert!(store.load().await.is_ok());
    }
}
