//! 快捷键配置
//!
//! 宿主自身的快捷键（退出、后退），仅在导航控制器未拦截按键时生效。
//! 另提供 crossterm 按键到 serp-keynav-core `KeyPress` 的转换。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serp_keynav_core::{Chord, Key, KeyPress, Modifiers};

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: Chord = Chord::new(Key::Char('q'), Modifiers::NONE);
    pub const FORCE_QUIT: Chord = Chord::new(Key::Char('c'), Modifiers::CTRL);

    // 历史
    pub const BACK: Chord = Chord::new(Key::Backspace, Modifiers::NONE);
    pub const BACK_ALT: Chord = Chord::new(Key::Left, Modifiers::ALT);

    // 搜索框
    pub const SEARCH_SUBMIT: Chord = Chord::new(Key::Enter, Modifiers::NONE);
    pub const SEARCH_CANCEL: Chord = Chord::new(Key::Esc, Modifiers::NONE);
}

/// 将 crossterm 按键转换为 `KeyPress`，无对应键时返回 None
pub fn to_key_press(event: &KeyEvent) -> Option<KeyPress> {
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::F(n) => Key::F(n),
        _ => return None,
    };

    let m = event.modifiers;
    let modifiers = Modifiers {
        ctrl: m.contains(KeyModifiers::CONTROL),
        alt: m.contains(KeyModifiers::ALT),
        // BackTab 在部分终端上不带 SHIFT 标志
        shift: m.contains(KeyModifiers::SHIFT) || event.code == KeyCode::BackTab,
        meta: m.contains(KeyModifiers::SUPER) || m.contains(KeyModifiers::META),
    };

    Some(KeyPress::new(key, modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyPress {
        to_key_press(&KeyEvent::new(code, modifiers)).unwrap()
    }

    #[test]
    fn converts_named_keys() {
        assert_eq!(press(KeyCode::Down, KeyModifiers::NONE).key, Key::Down);
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE).key, Key::Enter);
        assert_eq!(press(KeyCode::F(5), KeyModifiers::NONE).key, Key::F(5));
    }

    #[test]
    fn converts_modifiers() {
        let p = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(p.modifiers, Modifiers::CTRL);

        let p = press(KeyCode::Enter, KeyModifiers::SUPER);
        assert!(p.modifiers.meta);

        let p = press(KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(p.key, Key::Tab);
        assert!(p.modifiers.shift);
    }

    #[test]
    fn unsupported_keys_are_dropped() {
        let event = KeyEvent::new(KeyCode::CapsLock, KeyModifiers::NONE);
        assert!(to_key_press(&event).is_none());
    }

    #[test]
    fn native_keymap_matches() {
        assert!(DefaultKeymap::FORCE_QUIT.matches(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!DefaultKeymap::QUIT.matches(&press(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(DefaultKeymap::BACK_ALT.matches(&press(KeyCode::Left, KeyModifiers::ALT)));
    }
}
