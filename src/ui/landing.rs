//! Landing view rendering.

use crate::app::{App, Screen};
use crate::content::{EVENT, PRODUCT_NAME, STATS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Render the landing view: hero, rotating call-to-action and headline stats.
pub fn render_landing(app: &App, area: Rect, buf: &mut Buffer) {
    let Screen::Landing { call_to_action } = app.screen else {
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(EVENT, Style::default().fg(Color::LightBlue))),
        Line::from(""),
        Line::from(Span::styled(
            PRODUCT_NAME,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            call_to_action,
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
    ];

    let mut stat_spans = Vec::new();
    for (i, stat) in STATS.iter().enumerate() {
        if i > 0 {
            stat_spans.push(Span::styled("   │   ", Style::default().fg(Color::DarkGray)));
        }
        stat_spans.push(Span::styled(
            stat.value,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ));
        stat_spans.push(Span::styled(
            format!(" {}", stat.label),
            Style::default().fg(Color::Gray),
        ));
    }
    lines.push(Line::from(stat_spans));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press '/' to start searching",
        Style::default().fg(Color::Yellow),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));

    Widget::render(paragraph, area, buf);
}
