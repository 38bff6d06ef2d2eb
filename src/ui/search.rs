//! Search view rendering.
//!
//! Displays the query input bar and the suggested prompt.

use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Render the search view.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Displays a search input bar with the current query and, below it,
/// the suggested prompt with its shortcuts. Highlights when in input mode.
pub fn render_search(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(state) = app.search() else {
        return;
    };
    let is_active = app.mode == UiMode::Input;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input bar
            Constraint::Min(0),    // Suggestion
        ])
        .split(area);

    let line = Line::from(vec![
        Span::styled("Query: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            state.input.as_str(),
            Style::default().fg(if is_active { Color::White } else { Color::Gray }),
        ),
        Span::styled(
            if is_active { "_" } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let input = Paragraph::new(line).block(
        Block::default()
            .title("Search NASA bioscience publications")
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );
    Widget::render(input, chunks[0], buf);

    let lines = vec![
        Line::from(vec![
            Span::styled("Try: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                state.suggestion,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: search   Tab: use suggestion   Ctrl-R: another suggestion   Esc: home",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let suggestion = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Suggestions").borders(Borders::ALL));
    Widget::render(suggestion, chunks[1], buf);
}
