//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serp_keynav_core::ResultPage;

use crate::model::{App, LoadedPage};
use crate::util::truncate;

use super::components;
use super::theme::Styles;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 搜索框 + 页面内容 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(3), // 搜索框
            Constraint::Min(1),    // 页面内容
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    components::search::render(app, frame, main_layout[1]);
    render_page_content(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);
}

/// 渲染标题栏（当前地址）
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let back = if app.browser.can_go_back() { "◀ " } else { "  " };
    let text = format!(" {back}{}", app.browser.location());
    let title = Paragraph::new(truncate(&text, area.width as usize)).style(Styles::bar());
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let page = app.browser.current().snapshot();
    let title = match app.browser.current() {
        LoadedPage::Search(_) => format!(" Results ({}) ", page.result_links().len()),
        LoadedPage::Plain(_) => " Page ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(!app.search.focused));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.browser.current() {
        LoadedPage::Search(controller) => components::results::render(controller, frame, inner_area),
        LoadedPage::Plain(_) => render_plain_page(app, frame, inner_area),
    }
}

/// 非搜索页：只显示地址与后退提示
fn render_plain_page(app: &App, frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", truncate(app.browser.location(), width)),
            Styles::link(),
        ),
        Line::from(""),
    ];
    if !app.browser.has_snapshot() {
        lines.push(Line::styled("  No snapshot saved for this page.", Styles::muted()));
    }
    lines.push(Line::styled("  Keyboard navigation is not active on this page.", Styles::muted()));
    lines.push(Line::styled("  Press Backspace to go back.", Styles::muted()));
    frame.render_widget(Paragraph::new(lines), area);
}
