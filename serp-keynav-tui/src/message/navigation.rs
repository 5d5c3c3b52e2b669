//! 导航相关消息

use serp_keynav_core::KeyPress;

/// 导航消息
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// 结果页上的按键，先交给导航控制器
    Key(KeyPress),
}
