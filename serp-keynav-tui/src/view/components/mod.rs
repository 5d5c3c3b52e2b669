//! 可复用的 UI 组件

pub mod results;
pub mod search;
pub mod statusbar;
