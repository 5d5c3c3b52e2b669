//! 结果页面抽象 Trait

use crate::types::{Link, Region};

/// 结果页面 Trait
///
/// 提供当前位置、按文档顺序排列的结果链接，以及各指定区域的链接。
/// 平台实现:
/// - TUI: `PageSnapshot`（JSON 快照文件）
pub trait ResultPage {
    /// 当前位置（完整地址），用作导航记忆的键
    fn location(&self) -> &str;

    /// 按文档顺序返回可聚焦的结果链接
    fn result_links(&self) -> Vec<Link>;

    /// 查找指定区域的链接
    ///
    /// # Returns
    /// * `None` - 页面上不存在该区域
    fn region_link(&self, region: Region) -> Option<Link>;
}
