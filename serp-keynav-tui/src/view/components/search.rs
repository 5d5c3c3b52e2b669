//! 搜索框组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染搜索框，获得焦点时显示光标
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let search = &app.search;
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Styles::border(search.focused));

    let mut spans = vec![Span::raw(search.query.as_str())];
    if search.focused {
        spans.push(Span::styled("█", Styles::hint_key()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
