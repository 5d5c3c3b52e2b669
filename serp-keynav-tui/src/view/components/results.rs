//! 结果列表组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use serp_keynav_core::NavigationController;

use crate::backend::PageSnapshot;
use crate::util::truncate;
use crate::view::theme::Styles;

/// 渲染结果列表，标记项高亮显示
pub fn render(controller: &NavigationController<PageSnapshot>, frame: &mut Frame, area: Rect) {
    if !controller.results_enabled() {
        render_message(frame, area, "Result navigation is off on image search.");
        return;
    }

    let results = controller.results();
    if results.is_empty() {
        render_message(frame, area, "No results.");
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = results
        .items()
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let is_marked = results.is_marked(i);
            let (title_style, other_style) = if is_marked {
                (Styles::marked(), Styles::marked())
            } else {
                (Styles::title(), Style::default())
            };
            let pointer = if is_marked { "▶ " } else { "  " };

            let mut lines = vec![
                Line::from(vec![
                    Span::styled(pointer, title_style),
                    Span::styled(truncate(&link.title, width), title_style),
                ]),
                Line::from(vec![
                    Span::styled("  ", other_style),
                    Span::styled(truncate(&link.href, width), Styles::link().patch(other_style)),
                ]),
            ];
            if let Some(snippet) = &link.snippet {
                lines.push(Line::from(vec![
                    Span::styled("  ", other_style),
                    Span::styled(truncate(snippet, width), Styles::muted().patch(other_style)),
                ]));
            }
            lines.push(Line::from(""));

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    // 未标记时不滚动
    let mut state = ListState::default();
    state.select(results.marked());

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let content = vec![Line::from(""), Line::styled(format!("  {message}"), Styles::muted())];
    frame.render_widget(Paragraph::new(content), area);
}
