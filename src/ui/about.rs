//! About view rendering.
//!
//! Displays the mission, headline figures, feature list and team.

use crate::app::App;
use crate::content::{ABOUT_HERO, CHALLENGE_FOCUS, FEATURES, MISSION, STATS, TEAM};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Render the about view.
///
/// # Arguments
/// * `_app` - Application state (the about view is static)
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_about(_app: &App, area: Rect, buf: &mut Buffer) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut left = vec![
        Line::from(Span::styled(ABOUT_HERO, Style::default().fg(Color::White))),
        Line::from(""),
        heading("Our Mission"),
    ];
    left.extend(MISSION.iter().map(|p| Line::from(*p)));
    left.push(Line::from(""));
    left.push(heading("Challenge Focus"));
    left.push(Line::from(CHALLENGE_FOCUS));

    let mission = Paragraph::new(left)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("About ESBN").borders(Borders::ALL));
    Widget::render(mission, columns[0], buf);

    let mut right = vec![heading("At a Glance")];
    right.extend(STATS.iter().map(|stat| {
        Line::from(vec![
            Span::styled(
                format!("{:>10} ", stat.value),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(stat.label, Style::default().fg(Color::Gray)),
        ])
    }));
    right.push(Line::from(""));
    right.push(heading("Key Features"));
    for feature in FEATURES {
        right.push(Line::from(Span::styled(
            feature.title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        right.push(Line::from(Span::styled(
            feature.description,
            Style::default().fg(Color::Gray),
        )));
    }
    right.push(Line::from(""));
    right.push(heading("Our Team"));
    right.extend(TEAM.iter().map(|member| {
        Line::from(vec![
            Span::styled(member.name, Style::default().fg(Color::White)),
            Span::styled(format!(" · {}", member.role), Style::default().fg(Color::Gray)),
        ])
    }));
    right.push(Line::from(""));
    right.push(Line::from(Span::styled(
        "Ready to explore? Press '/' to launch the search engine",
        Style::default().fg(Color::Yellow),
    )));

    let details = Paragraph::new(right)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    Widget::render(details, columns[1], buf);
}
