//! 应用主消息枚举

use super::{NavigationMessage, SearchMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 结果页导航相关消息
    Navigation(NavigationMessage),

    /// 搜索框相关消息
    Search(SearchMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
