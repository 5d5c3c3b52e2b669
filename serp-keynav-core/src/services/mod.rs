//! 业务逻辑服务层

mod navigation_controller;
mod navigation_memory;
mod options_service;

pub use navigation_controller::{ControllerState, NavigationController};
pub use navigation_memory::NavigationMemory;
pub use options_service::OptionsService;

use std::sync::Arc;

use crate::traits::KeyValueStore;
use crate::types::Options;

/// 会话上下文 - 持有一次页面生命周期内的选项与记忆
///
/// 启动时创建一次，由控制器持有，替代全局可变状态。
#[derive(Clone)]
pub struct Session {
    /// 生效的选项（加载后只读）
    pub options: Options,
    /// 导航记忆
    pub memory: NavigationMemory,
}

impl Session {
    /// 以内置默认选项创建会话
    #[must_use]
    pub fn new(memory_store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            options: Options::default(),
            memory: NavigationMemory::new(memory_store),
        }
    }

    /// 加载选项；失败时回退到内置默认值
    pub async fn load_options(&mut self, options: &OptionsService) {
        self.options = options.load().await.unwrap_or_else(|e| {
            log::warn!("Failed to load options, using defaults: {e}");
            Options::default()
        });
    }
}
