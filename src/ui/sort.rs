//! Results summary and sort selector rendering.

use crate::app::{App, UiMode};
use crate::ranker::SortKey;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Height of the summary bar.
pub const SUMMARY_HEIGHT: u16 = 4;

/// Render the results summary with the active sort key.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_summary(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(state) = app.results() else {
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Found "),
            Span::styled(
                format!("{} publications", state.ranked.len()),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" for \"{}\"", state.query)),
        ]),
        Line::from(vec![
            Span::styled("Sort by: ", Style::default().fg(Color::Cyan)),
            Span::styled(app.sort_name(), Style::default().fg(Color::Magenta)),
            Span::styled(
                "   (s: next, o: choose, b: back to search)",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title("Search Results")
            .borders(Borders::ALL),
    );
    Widget::render(paragraph, area, buf);
}

/// Render the sort selector as a dropdown under the summary.
///
/// # Details
/// Draws nothing unless the selector is open.
pub fn render_sort_menu(app: &App, anchor: Rect, buf: &mut Buffer) {
    if app.mode != UiMode::SortMenu {
        return;
    }
    let Some(state) = app.results() else {
        return;
    };

    let width = 20.min(anchor.width);
    let height = (SortKey::ALL.len() as u16 + 2).min(anchor.height);
    let area = Rect {
        x: anchor.x + anchor.width.saturating_sub(width + 1),
        y: anchor.y,
        width,
        height,
    };

    let items: Vec<ListItem> = SortKey::ALL
        .iter()
        .map(|key| {
            let marker = if state.sort_key == Some(*key) { "● " } else { "  " };
            ListItem::new(format!("{}{}", marker, key.label()))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(SortKey::ALL.iter().position(|key| *key == state.menu_key));

    let list = List::new(items)
        .block(
            Block::default()
                .title("Sort by")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    Widget::render(Clear, area, buf);
    StatefulWidget::render(list, area, buf, &mut list_state);
}
