//! Header widget rendering.
//!
//! Displays the product badge and the navigation entries.

use crate::app::{App, View};
use crate::content::{BADGE, PRODUCT_NAME};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Navigation entries with their shortcut keys.
const NAV_ENTRIES: [(&str, char, View); 3] = [
    ("Home", '1', View::Landing),
    ("Search", '2', View::Search),
    ("About", '3', View::About),
];

/// Render the header widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// The results view highlights "Search", since it is reached from there.
pub fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let active = match app.view() {
        View::Results => View::Search,
        view => view,
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", BADGE),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for (i, (label, key, view)) in NAV_ENTRIES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *view == active {
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("[{}] {}", key, label), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(PRODUCT_NAME)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    Widget::render(paragraph, area, buf);
}
