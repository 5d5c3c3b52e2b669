//!
//! src/backend/mod.rs
//! Backend 层：存储与页面来源
//!
//! Backend 层与 UI 完全解耦，为 serp-keynav-core 提供平台实现。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod json_store;     // 键值存储（JSON 文件）
//!         mod snapshot;       // 结果页快照（JSON 文件）
//!         mod opener;         // 在系统浏览器中打开链接
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、键值存储（JsonFileStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     实现 serp-keynav-core 的 KeyValueStore trait。
//!     两个互相独立的命名空间各占一个文件：
//!
//!         ~/.config/serp-keynav/options.json            选项（同步命名空间）
//!         ~/.config/serp-keynav/last_navigation.json    导航记忆（本地命名空间）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、结果页快照（SnapshotLibrary / PageSnapshot）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     PageSnapshot 实现 serp-keynav-core 的 ResultPage trait。
//!     SnapshotLibrary 按地址索引快照；未知地址得到空白页。
//!     未指定目录时使用内置示例快照（snapshots/*.json）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按下 Enter
//!         ↓
//!     NavigationController 保存记忆（JsonFileStore）并返回 Command::Open
//!         ↓
//!     Update 层在 SnapshotLibrary 中查找目标页面并重新加载
//!         ↓
//!     View 层重新渲染
//!

mod json_store;
mod opener;
mod snapshot;

pub use json_store::{default_config_dir, JsonFileStore, MEMORY_FILE, OPTIONS_FILE};
pub use opener::{SystemOpener, UrlOpener};
pub use snapshot::{PageSnapshot, SnapshotLibrary};
