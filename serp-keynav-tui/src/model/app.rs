//! 应用主状态结构

use std::sync::Arc;

use super::{Browser, SearchInput};
use crate::backend::UrlOpener;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面与历史
    pub browser: Browser,

    /// 搜索框
    pub search: SearchInput,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 在新上下文中打开链接
    pub opener: Arc<dyn UrlOpener>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(browser: Browser, opener: Arc<dyn UrlOpener>) -> Self {
        Self {
            should_quit: false,
            browser,
            search: SearchInput::new(),
            status_message: None,
            opener,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
