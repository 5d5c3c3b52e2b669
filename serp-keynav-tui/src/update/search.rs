//! 搜索框更新逻辑

use serp_keynav_core::site;

use crate::message::SearchMessage;
use crate::model::App;

/// 不在搜索站点上时使用的搜索地址
const DEFAULT_SEARCH_BASE: &str = "https://www.google.com/search";

/// 处理搜索框消息
pub async fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Input(c) => app.search.input(c),

        SearchMessage::Backspace => app.search.backspace(),

        SearchMessage::Cancel => app.search.blur(),

        SearchMessage::Submit => {
            app.search.blur();
            let query = app.search.query.trim().to_string();
            if query.is_empty() {
                return;
            }

            let location = app.browser.location();
            let base = if site::is_search_host(location) {
                site::resolve(location, "/search")
            } else {
                DEFAULT_SEARCH_BASE.to_string()
            };

            match site::search_url(&base, &query) {
                Some(url) => {
                    app.clear_status();
                    app.browser.navigate(&url).await;
                }
                None => {
                    log::warn!("Cannot build a search URL from {base}");
                    app.set_status("Invalid search address");
                }
            }
        }
    }
}
