//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::{NavError, NavResult};
use crate::services::NavigationController;
use crate::traits::{InMemoryKeyValueStore, KeyValueStore, ResultPage};
use crate::types::{Link, Region};

// ===== FailingStore =====

/// 所有读写都失败的存储
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _keys: &[String]) -> NavResult<Map<String, Value>> {
        Err(NavError::StorageError("storage unavailable".to_string()))
    }

    async fn set(&self, _items: Map<String, Value>) -> NavResult<()> {
        Err(NavError::StorageError("storage unavailable".to_string()))
    }
}

// ===== FakePage =====

/// 固定内容的结果页面，第 i 个结果的链接为 `https://result/{i}`
pub struct FakePage {
    location: String,
    results: Vec<Link>,
    regions: HashMap<Region, Link>,
}

impl FakePage {
    pub fn new(location: &str, result_count: usize) -> Self {
        Self {
            location: location.to_string(),
            results: (0..result_count)
                .map(|i| Link::new(format!("Result {i}"), format!("https://result/{i}")))
                .collect(),
            regions: HashMap::new(),
        }
    }

    pub fn with_region(mut self, region: Region, href: &str) -> Self {
        self.regions
            .insert(region, Link::new(format!("{region:?}"), href));
        self
    }
}

impl ResultPage for FakePage {
    fn location(&self) -> &str {
        &self.location
    }

    fn result_links(&self) -> Vec<Link> {
        self.results.clone()
    }

    fn region_link(&self, region: Region) -> Option<Link> {
        self.regions.get(&region).cloned()
    }
}

// ===== 工厂方法 =====

/// 以 JSON 对象预置内容的内存存储
pub fn store_with(items: Value) -> Arc<dyn KeyValueStore> {
    let items = match items {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    Arc::new(InMemoryKeyValueStore::with_items(items))
}

pub fn controller_with(
    page: FakePage,
    options: Arc<dyn KeyValueStore>,
    memory: Arc<dyn KeyValueStore>,
) -> NavigationController<FakePage> {
    NavigationController::new(page, options, memory)
}
