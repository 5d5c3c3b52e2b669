//! 导航记忆与动作类型定义

use serde::{Deserialize, Serialize};

/// 上一次激活的位置
///
/// 存储于本地命名空间，每次激活时整体覆盖。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LastNavigation {
    /// 激活时所在页面的完整地址
    pub last_query_url: Option<String>,
    /// 激活时的焦点索引
    pub last_focused_index: usize,
}

impl LastNavigation {
    #[must_use]
    pub fn new(origin: impl Into<String>, index: usize) -> Self {
        Self {
            last_query_url: Some(origin.into()),
            last_focused_index: index,
        }
    }

    /// 是否属于给定的页面地址
    pub fn applies_to(&self, origin: &str) -> bool {
        self.last_query_url.as_deref() == Some(origin)
    }
}

/// 页面上不属于结果列表的指定跳转目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    AllResults,
    Images,
    Videos,
    Maps,
    News,
    PreviousPage,
    NextPage,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::AllResults,
        Region::Images,
        Region::Videos,
        Region::Maps,
        Region::News,
        Region::PreviousPage,
        Region::NextPage,
    ];
}

/// 快捷键触发的语义动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    MoveNext,
    MovePrevious,
    /// 在当前上下文打开焦点项（并记忆位置）
    Activate,
    /// 在新上下文打开焦点项（不记忆）
    ActivateInNewContext,
    JumpToRegion(Region),
    FocusSearchInput,
}

/// 打开链接的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    CurrentContext,
    NewContext,
}

/// 交由宿主执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open { href: String, target: OpenTarget },
    FocusSearchInput,
}

impl Command {
    pub fn open(href: impl Into<String>, target: OpenTarget) -> Self {
        Self::Open {
            href: href.into(),
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_memory_has_no_origin() {
        let memory = LastNavigation::default();
        assert_eq!(memory.last_query_url, None);
        assert_eq!(memory.last_focused_index, 0);
        assert!(!memory.applies_to("https://x/search?q=cats"));
    }

    #[test]
    fn memory_applies_only_to_exact_origin() {
        let memory = LastNavigation::new("https://x/search?q=cats", 2);
        assert!(memory.applies_to("https://x/search?q=cats"));
        assert!(!memory.applies_to("https://x/search?q=cats&start=10"));
    }

    #[test]
    fn memory_uses_storage_keys() {
        let json = serde_json::to_value(LastNavigation::new("u", 3)).unwrap();
        assert_eq!(json, serde_json::json!({"lastQueryUrl": "u", "lastFocusedIndex": 3}));
    }
}
