//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!     layout.rs               标题栏 + 搜索框 + 页面内容 + 状态栏
//!     components/results.rs   结果列表（高亮标记项）
//!     components/search.rs    搜索框
//!     components/statusbar.rs 快捷键提示与状态消息
//!     theme.rs                主题颜色

mod components;
mod layout;
pub mod theme;

pub use layout::render;
