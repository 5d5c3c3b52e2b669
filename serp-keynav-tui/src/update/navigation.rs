//! 导航更新逻辑

use serp_keynav_core::{site, Command, KeyPress, OpenTarget};

use crate::event::DefaultKeymap;
use crate::message::NavigationMessage;
use crate::model::App;

/// 处理导航消息
pub async fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::Key(mut press) => {
            let command = match app.browser.controller_mut() {
                Some(controller) => controller.handle_key(&mut press).await,
                None => None,
            };
            if let Some(command) = command {
                execute(app, command).await;
            }
            if !press.is_suppressed() {
                native_key(app, &press).await;
            }
        }
    }
}

/// 执行控制器返回的命令
async fn execute(app: &mut App, command: Command) {
    match command {
        Command::Open {
            href,
            target: OpenTarget::CurrentContext,
        } => {
            app.clear_status();
            app.browser.navigate(&href).await;
        }

        Command::Open {
            href,
            target: OpenTarget::NewContext,
        } => {
            let url = site::resolve(app.browser.location(), &href);
            match app.opener.open(&url) {
                Ok(()) => app.set_status(format!("Opened in new window: {url}")),
                Err(e) => {
                    log::warn!("Failed to open {url}: {e}");
                    app.set_status(format!("Failed to open {url}: {e}"));
                }
            }
        }

        Command::FocusSearchInput => {
            let query = site::query_param(app.browser.location(), "q");
            app.search.focus(query);
        }
    }
}

/// 宿主自身的快捷键
async fn native_key(app: &mut App, press: &KeyPress) {
    if DefaultKeymap::QUIT.matches(press) {
        app.should_quit = true;
    } else if DefaultKeymap::BACK.matches(press) || DefaultKeymap::BACK_ALT.matches(press) {
        go_back(app).await;
    }
}

async fn go_back(app: &mut App) {
    if app.browser.back().await {
        app.clear_status();
    } else {
        app.set_status("No previous page");
    }
}

#[cfg(test)]
mod tests {
    use serp_keynav_core::{Key, Modifiers};

    use super::*;
    use crate::test_utils::{test_app, test_app_with_opener, CATS_URL};

    fn key(k: Key) -> NavigationMessage {
        NavigationMessage::Key(KeyPress::plain(k))
    }

    fn marked(app: &App) -> Option<usize> {
        app.browser.controller().and_then(|c| c.results().marked())
    }

    #[tokio::test]
    async fn navigation_keys_move_the_mark() {
        let mut app = test_app().await;
        update(&mut app, key(Key::Char('j'))).await;
        update(&mut app, key(Key::Down)).await;
        assert_eq!(marked(&app), Some(2));
        update(&mut app, key(Key::Char('k'))).await;
        assert_eq!(marked(&app), Some(1));
    }

    #[tokio::test]
    async fn activate_then_back_restores_the_mark() {
        let mut app = test_app().await;
        update(&mut app, key(Key::Down)).await;
        update(&mut app, key(Key::Enter)).await;
        assert_eq!(app.browser.location(), "https://www.aspca.org/pet-care/cat-care");

        update(&mut app, key(Key::Backspace)).await;
        assert_eq!(app.browser.location(), CATS_URL);
        assert_eq!(marked(&app), Some(1));
    }

    #[tokio::test]
    async fn new_context_goes_to_the_opener() {
        let (mut app, opener) = test_app_with_opener().await;
        let press = KeyPress::new(Key::Enter, Modifiers::CTRL);
        update(&mut app, NavigationMessage::Key(press)).await;

        assert_eq!(opener.opened(), vec!["https://en.wikipedia.org/wiki/Cat".to_string()]);
        assert_eq!(app.browser.location(), CATS_URL);
        assert!(app.status_message.is_some());
    }

    #[tokio::test]
    async fn region_jump_loads_the_next_page() {
        let mut app = test_app().await;
        update(&mut app, key(Key::Char('l'))).await;
        assert_eq!(app.browser.location(), "https://www.google.com/search?q=cats&start=10");
        assert!(app.browser.can_go_back());
    }

    #[tokio::test]
    async fn slash_focuses_search_with_current_query() {
        let mut app = test_app().await;
        update(&mut app, key(Key::Char('/'))).await;
        assert!(app.search.focused);
        assert_eq!(app.search.query, "cats");
    }

    #[tokio::test]
    async fn unbound_keys_fall_through_to_native_keymap() {
        let mut app = test_app().await;
        update(&mut app, key(Key::Char('q'))).await;
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn back_without_history_reports_status() {
        let mut app = test_app().await;
        update(&mut app, key(Key::Backspace)).await;
        assert_eq!(app.status_message.as_deref(), Some("No previous page"));
        assert_eq!(app.browser.location(), CATS_URL);
    }

    #[tokio::test]
    async fn plain_pages_only_get_native_keys() {
        let mut app = test_app().await;
        update(&mut app, key(Key::Enter)).await;
        assert!(app.browser.controller().is_none());

        update(&mut app, key(Key::Char('j'))).await;
        assert!(!app.should_quit);

        let press = KeyPress::new(Key::Left, Modifiers::ALT);
        update(&mut app, NavigationMessage::Key(press)).await;
        assert_eq!(app.browser.location(), CATS_URL);
    }
}
