//! 页面链接类型定义

use serde::{Deserialize, Serialize};

/// 可导航的链接（搜索结果或翻页等目标）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub title: String,
    pub href: String,
    /// 结果摘要
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl Link {
    #[must_use]
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            snippet: None,
        }
    }
}
