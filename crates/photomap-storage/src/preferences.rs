//! JSON-file preference store (secondary/driven adapter)
//!
//! Implements [`IPreferenceStore`] over a single JSON object file mapping
//! string keys to string values. The store holds exactly one small blob in
//! practice (the gallery index), so the whole map is re-read on `get` and
//! rewritten atomically on `set`.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use photomap_core::domain::newtypes::StorageKey;
use photomap_core::ports::preferences::IPreferenceStore;
use tracing::{debug, instrument};

use crate::StorageError;

/// Durable string key-value store backed by one JSON file
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    /// Create a store backed by the file at `path`
    ///
    /// The file is created on the first `set`; a missing file reads as an
    /// empty store.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load_map(&self) -> anyhow::Result<HashMap<String, String>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };
        let map = serde_json::from_str(&content)
            .map_err(|e| StorageError::CorruptPreferences(e.to_string()))?;
        Ok(map)
    }

    async fn store_map(&self, map: &HashMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp_path = {
            let mut p = self.path.as_os_str().to_owned();
            p.push(".tmp");
            PathBuf::from(p)
        };
        let content = serde_json::to_string(map)?;
        tokio::fs::write(&tmp_path, content).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl IPreferenceStore for JsonFilePreferenceStore {
    #[instrument(skip(self), fields(key = %key))]
    async fn get(&self, key: &StorageKey) -> anyhow::Result<Option<String>> {
        let map = self.load_map().await?;
        let value = map.get(key.as_str()).cloned();
        debug!(found = value.is_some(), "preference read");
        Ok(value)
    }

    #[instrument(skip(self, value), fields(key = %key, bytes = value.len()))]
    async fn set(&self, key: &StorageKey, value: &str) -> anyhow::Result<()> {
        let mut map = self.load_map().await?;
        map.insert(key.as_str().to_string(), value.to_string());
        self.store_map(&map).await?;
        debug!("preference stored");
        Ok(())
    }
}
