//! 导航记忆服务
//!
//! 持久化最后一次激活的 (页面地址, 焦点索引)。尽力而为：
//! 读取失败视同无记忆，写入失败只记录日志。

use std::sync::Arc;

use crate::traits::{get_with_defaults, set_record, KeyValueStore};
use crate::types::LastNavigation;

/// 导航记忆服务
#[derive(Clone)]
pub struct NavigationMemory {
    store: Arc<dyn KeyValueStore>,
}

impl NavigationMemory {
    /// 创建导航记忆服务实例
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// 保存位置，覆盖之前的记录（错误被吞掉）
    pub async fn save(&self, origin: &str, index: usize) {
        let record = LastNavigation::new(origin, index);
        match set_record(self.store.as_ref(), &record).await {
            Ok(()) => log::debug!("Remembered index {index} for {origin}"),
            Err(e) => log::warn!("Failed to save last navigation: {e}"),
        }
    }

    /// 读取上次保存的位置；不存在或读取失败时返回默认值
    pub async fn load(&self) -> LastNavigation {
        get_with_defaults(self.store.as_ref(), &LastNavigation::default())
            .await
            .unwrap_or_else(|e| {
                log::warn!("Failed to load last navigation, treating as none: {e}");
                LastNavigation::default()
            })
    }
}
