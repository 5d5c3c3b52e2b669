//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use serp_keynav_core::{Key, KeyPress};

use crate::event::keymap::{to_key_press, DefaultKeymap};
use crate::message::{AppMessage, NavigationMessage, SearchMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    let Some(press) = to_key_press(&key) else {
        return AppMessage::Noop;
    };

    if DefaultKeymap::FORCE_QUIT.matches(&press) {
        return AppMessage::Quit;
    }

    // 搜索框获得焦点时，按键不交给导航控制器
    if app.search.focused {
        return handle_search_keys(&press);
    }

    AppMessage::Navigation(NavigationMessage::Key(press))
}

/// 处理搜索框的按键
fn handle_search_keys(press: &KeyPress) -> AppMessage {
    let msg = if DefaultKeymap::SEARCH_SUBMIT.matches(press) {
        SearchMessage::Submit
    } else if DefaultKeymap::SEARCH_CANCEL.matches(press) {
        SearchMessage::Cancel
    } else {
        match press.key {
            Key::Backspace => SearchMessage::Backspace,
            Key::Char(c) if !press.modifiers.ctrl && !press.modifiers.alt => SearchMessage::Input(c),
            _ => return AppMessage::Noop,
        }
    };
    AppMessage::Search(msg)
}
