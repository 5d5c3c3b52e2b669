//! 导航选项定义

use serde::{Deserialize, Serialize};

use super::{NavAction, Region};

/// 导航选项
///
/// 存储于同步命名空间，键名与浏览器扩展的存储键保持一致（camelCase）。
/// 缺失的字段取内置默认值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// 到达边界时是否循环
    pub wrap_navigation: bool,
    /// 页面加载后是否自动选中第一项
    pub auto_select_first: bool,

    pub next_key: String,
    pub previous_key: String,
    pub navigate_previous_result_page: String,
    pub navigate_next_result_page: String,
    pub navigate_key: String,
    pub navigate_new_tab_key: String,
    pub navigate_search_tab: String,
    pub navigate_images_tab: String,
    pub navigate_videos_tab: String,
    pub navigate_maps_tab: String,
    pub navigate_news_tab: String,
    pub focus_search_input: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            wrap_navigation: false,
            auto_select_first: true,
            next_key: "down, j".to_string(),
            previous_key: "up, k".to_string(),
            navigate_previous_result_page: "left, h".to_string(),
            navigate_next_result_page: "right, l".to_string(),
            navigate_key: "return, space".to_string(),
            navigate_new_tab_key: "ctrl+return, command+return, ctrl+space".to_string(),
            navigate_search_tab: "a, s".to_string(),
            navigate_images_tab: "i".to_string(),
            navigate_videos_tab: "v".to_string(),
            navigate_maps_tab: "m".to_string(),
            navigate_news_tab: "n".to_string(),
            focus_search_input: "/, escape".to_string(),
        }
    }
}

impl Options {
    /// 获取某个动作配置的快捷键文本
    pub fn pattern_for(&self, action: NavAction) -> &str {
        match action {
            NavAction::MoveNext => &self.next_key,
            NavAction::MovePrevious => &self.previous_key,
            NavAction::Activate => &self.navigate_key,
            NavAction::ActivateInNewContext => &self.navigate_new_tab_key,
            NavAction::FocusSearchInput => &self.focus_search_input,
            NavAction::JumpToRegion(region) => match region {
                Region::AllResults => &self.navigate_search_tab,
                Region::Images => &self.navigate_images_tab,
                Region::Videos => &self.navigate_videos_tab,
                Region::Maps => &self.navigate_maps_tab,
                Region::News => &self.navigate_news_tab,
                Region::PreviousPage => &self.navigate_previous_result_page,
                Region::NextPage => &self.navigate_next_result_page,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let options: Options =
            serde_json::from_str(r#"{"wrapNavigation": true, "nextKey": "n"}"#).unwrap();
        assert!(options.wrap_navigation);
        assert!(options.auto_select_first);
        assert_eq!(options.next_key, "n");
        assert_eq!(options.previous_key, "up, k");
    }

    #[test]
    fn serializes_with_storage_keys() {
        let json = serde_json::to_value(Options::default()).unwrap();
        assert_eq!(json["autoSelectFirst"], true);
        assert_eq!(json["navigateNewTabKey"], "ctrl+return, command+return, ctrl+space");
        assert_eq!(json["focusSearchInput"], "/, escape");
    }

    #[test]
    fn pattern_for_maps_regions() {
        let options = Options::default();
        assert_eq!(options.pattern_for(NavAction::JumpToRegion(Region::NextPage)), "right, l");
        assert_eq!(options.pattern_for(NavAction::JumpToRegion(Region::AllResults)), "a, s");
        assert_eq!(options.pattern_for(NavAction::Activate), "return, space");
    }
}
