//! Preference store port (driven/secondary port)
//!
//! A durable string key-value store. The gallery uses exactly one key to
//! hold the JSON-serialized photo index; the store is a blob index, not a
//! relational store.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because storage errors are adapter-specific.
//! - A missing key is data-absence, not an error: `get` returns `None`.

use crate::domain::newtypes::StorageKey;

/// Port trait for durable key-value preference storage
#[async_trait::async_trait]
pub trait IPreferenceStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent
    async fn get(&self, key: &StorageKey) -> anyhow::Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set(&self, key: &StorageKey, value: &str) -> anyhow::Result<()>;
}
