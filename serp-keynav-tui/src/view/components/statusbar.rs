//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use serp_keynav_core::{ChordPattern, NavAction, Options, Region};

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前页面与焦点生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Styles::status()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::bar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(String, &'static str)> {
    if app.search.focused {
        return vec![
            ("return".to_string(), "Search"),
            ("escape".to_string(), "Cancel"),
        ];
    }

    let mut hints = Vec::new();
    if let Some(controller) = app.browser.controller() {
        let options = controller.options();
        if controller.results_enabled() {
            hints.push((keys(options, NavAction::MoveNext), "Next"));
            hints.push((keys(options, NavAction::MovePrevious), "Previous"));
            hints.push((keys(options, NavAction::Activate), "Open"));
            hints.push((keys(options, NavAction::ActivateInNewContext), "New window"));
        }
        hints.push((keys(options, NavAction::JumpToRegion(Region::NextPage)), "Next page"));
        hints.push((keys(options, NavAction::FocusSearchInput), "Search"));
    }

    hints.push(("backspace".to_string(), "Back"));
    hints.push(("q".to_string(), "Quit"));
    hints
}

/// 以 `/` 连接的备选按键
///
/// 配置无效时控制器安装的是默认绑定，提示也显示默认值。
fn keys(options: &Options, action: NavAction) -> String {
    let parsed = options
        .pattern_for(action)
        .parse::<ChordPattern>()
        .or_else(|_| Options::default().pattern_for(action).parse::<ChordPattern>());
    match parsed {
        Ok(pattern) => pattern
            .alternatives()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => String::new(),
    }
}
