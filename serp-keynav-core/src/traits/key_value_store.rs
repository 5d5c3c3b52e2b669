//! Durable key-value storage abstract Trait

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{NavError, NavResult};

/// Key-value store Trait
///
/// Models one storage namespace (synced options, or local navigation memory).
/// Platform implementations:
/// - TUI: `JsonFileStore` (one JSON object per file)
/// - Tests and embedding: `InMemoryKeyValueStore`
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the stored values for `keys`
    ///
    /// # Returns
    /// * Map containing only the keys that are present in storage
    async fn get(&self, keys: &[String]) -> NavResult<Map<String, Value>>;

    /// Merge `items` into storage, overwriting existing keys
    async fn set(&self, items: Map<String, Value>) -> NavResult<()>;
}

/// Read a typed record, using `defaults` for every key that is not stored
///
/// The field names of `defaults` are the keys requested from the store.
/// Stored values are merged one key at a time; a value that does not fit
/// its field is skipped and the default kept.
pub async fn get_with_defaults<T>(store: &dyn KeyValueStore, defaults: &T) -> NavResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = to_object(defaults)?;
    let keys: Vec<String> = merged.keys().cloned().collect();
    let stored = store.get(&keys).await?;
    for (key, value) in stored {
        let mut candidate = merged.clone();
        candidate.insert(key.clone(), value);
        match serde_json::from_value::<T>(Value::Object(candidate.clone())) {
            Ok(_) => merged = candidate,
            Err(e) => log::warn!("Ignoring stored value for '{key}': {e}"),
        }
    }
    Ok(serde_json::from_value(Value::Object(merged))?)
}

/// Write every field of `record`
pub async fn set_record<T: Serialize>(store: &dyn KeyValueStore, record: &T) -> NavResult<()> {
    store.set(to_object(record)?).await
}

fn to_object<T: Serialize>(value: &T) -> NavResult<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(NavError::SerializationError(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

/// In-memory key-value store
///
/// Default implementation, available on all platforms.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    items: Arc<RwLock<Map<String, Value>>>,
}

impl InMemoryKeyValueStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `items`
    #[must_use]
    pub fn with_items(items: Map<String, Value>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Snapshot of everything stored
    pub async fn snapshot(&self) -> Map<String, Value> {
        self.items.read().await.clone()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, keys: &[String]) -> NavResult<Map<String, Value>> {
        let items = self.items.read().await;
        Ok(keys
            .iter()
            .filter_map(|k| items.get(k).map(|v| (k.clone(), v.clone())))
            .collect())
    }

    async fn set(&self, items: Map<String, Value>) -> NavResult<()> {
        self.items.write().await.extend(items);
        Ok(())
    }
}
