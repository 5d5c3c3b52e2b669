//! 选项服务

use std::sync::Arc;

use crate::error::NavResult;
use crate::traits::{get_with_defaults, set_record, KeyValueStore};
use crate::types::Options;

/// 选项服务：在内置默认值之上合并已保存的配置
#[derive(Clone)]
pub struct OptionsService {
    store: Arc<dyn KeyValueStore>,
}

impl OptionsService {
    /// 创建选项服务实例
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// 加载选项（缺失项取默认值）
    pub async fn load(&self) -> NavResult<Options> {
        get_with_defaults(self.store.as_ref(), &Options::default()).await
    }

    /// 保存全部选项
    pub async fn save(&self, options: &Options) -> NavResult<()> {
        set_record(self.store.as_ref(), options).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::NavError;
    use crate::test_utils::FailingStore;
    use crate::traits::InMemoryKeyValueStore;

    #[tokio::test]
    async fn stored_values_override_defaults() {
        let store = InMemoryKeyValueStore::with_items(
            json!({"wrapNavigation": true, "navigateKey": "o"})
                .as_object()
                .cloned()
                .unwrap(),
        );
        let options = OptionsService::new(Arc::new(store)).load().await.unwrap();
        assert!(options.wrap_navigation);
        assert_eq!(options.navigate_key, "o");
        assert_eq!(options.next_key, Options::default().next_key);
    }

    #[tokio::test]
    async fn save_then_load() {
        let service = OptionsService::new(Arc::new(InMemoryKeyValueStore::new()));
        let options = Options {
            auto_select_first: false,
            ..Options::default()
        };
        service.save(&options).await.unwrap();
        assert_eq!(service.load().await.unwrap(), options);
    }

    #[tokio::test]
    async fn failure_is_reported() {
        let service = OptionsService::new(Arc::new(FailingStore));
        assert!(matches!(service.load().await, Err(NavError::StorageError(_))));
    }
}
