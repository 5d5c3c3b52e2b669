//! 文本工具

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 按显示宽度截断，超出时以 `…` 结尾
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("cats", 10), "cats");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(truncate("Cat - Wikipedia", 6), "Cat -…");
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(truncate("猫猫猫猫", 5), "猫猫…");
    }
}
