//! JSON 文件存储
//!
//! 每个命名空间对应一个 JSON 对象文件
//! 实现 serp-keynav-core 的 KeyValueStore trait

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use serp_keynav_core::{KeyValueStore, NavError, NavResult};
use tokio::fs;
use tokio::sync::Mutex;

/// 选项文件名（同步命名空间）
pub const OPTIONS_FILE: &str = "options.json";
/// 导航记忆文件名（本地命名空间）
pub const MEMORY_FILE: &str = "last_navigation.json";

/// 获取默认配置目录路径
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("serp-keynav")
}

/// 基于 JSON 文件的键值存储
pub struct JsonFileStore {
    path: PathBuf,
    /// 内存缓存（None 表示尚未从文件加载）
    cache: Mutex<Option<Map<String, Value>>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 文件是否已存在
    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// 从文件加载全部条目
    async fn load_from_file(&self) -> NavResult<Map<String, Value>> {
        if !self.exists().await {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| NavError::StorageError(e.to_string()))?;

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(NavError::SerializationError(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
        }
    }

    /// 保存全部条目到文件
    async fn save_to_file(&self, items: &Map<String, Value>) -> NavResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| NavError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| NavError::StorageError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, keys: &[String]) -> NavResult<Map<String, Value>> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load_from_file().await?);
        }

        let items = cache.as_ref().map_or_else(Map::new, |all| {
            keys.iter()
                .filter_map(|k| all.get(k).map(|v| (k.clone(), v.clone())))
                .collect()
        });
        Ok(items)
    }

    async fn set(&self, items: Map<String, Value>) -> NavResult<()> {
        let mut cache = self.cache.lock().await;
        let mut all = match cache.take() {
            Some(all) => all,
            None => self.load_from_file().await?,
        };
        all.extend(items);

        // 写入失败时缓存保持未加载状态，下次重新读取文件
        self.save_to_file(&all).await?;
        *cache = Some(all);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use serp_keynav_core::traits::get_with_defaults;
    use serp_keynav_core::{LastNavigation, NavigationMemory};
    use std::sync::Arc;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("none.json"));

        let got = store.get(&["a".to_string()]).await.unwrap();
        assert!(got.is_empty());
        assert!(!store.exists().await);
    }

    #[tokio::test]
    async fn set_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(MEMORY_FILE);

        let first = JsonFileStore::new(&path);
        first.set(object(json!({"a": 1, "b": "x"}))).await.unwrap();
        first.set(object(json!({"b": "y"}))).await.unwrap();

        let second = JsonFileStore::new(&path);
        let got = second
            .get(&["a".to_string(), "b".to_string()])
            .await
            .unwrap();
        assert_eq!(got["a"], 1);
        assert_eq!(got["b"], "y");
    }

    #[tokio::test]
    async fn navigation_memory_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MEMORY_FILE);

        NavigationMemory::new(Arc::new(JsonFileStore::new(&path)))
            .save("https://www.google.com/search?q=cats", 4)
            .await;

        let loaded = NavigationMemory::new(Arc::new(JsonFileStore::new(&path)))
            .load()
            .await;
        assert_eq!(
            loaded,
            LastNavigation::new("https://www.google.com/search?q=cats", 4)
        );
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OPTIONS_FILE);
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileStore::new(&path);
        let result = get_with_defaults(&store, &LastNavigation::default()).await;
        assert!(matches!(result, Err(NavError::SerializationError(_))));
    }
}
