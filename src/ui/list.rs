//! Result list widget rendering.
//!
//! Displays a scrollable list of result cards with selection highlighting.

use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Lines taken by one result card (5 content + 1 separator).
pub const LINES_PER_RESULT: u16 = 6;

/// Render the result list widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each result takes multiple lines:
/// - Line 1: Title (bold) and relevance badge
/// - Line 2: Authors, year with age, institution
/// - Line 3: Citation count
/// - Line 4: Abstract (truncated to the available width)
/// - Line 5: Keywords
///
/// Highlights the selected result and keeps it centered while scrolling.
pub fn render_list(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(state) = app.results() else {
        return;
    };
    let ranked = &state.ranked;

    if ranked.is_empty() {
        let title = format!("Publications (0/{})", app.record_count());
        let list = List::new(vec![ListItem::new("No publications to display")])
            .block(Block::default().title(title).borders(Borders::ALL));
        Widget::render(list, area, buf);
        return;
    }

    let selected_index = state.selected_index.min(ranked.len().saturating_sub(1));

    let content_width = area.width.saturating_sub(2).max(10) as usize;
    let separator_line = "─".repeat(content_width);

    let available_height = area.height.saturating_sub(2);
    let visible = (available_height / LINES_PER_RESULT).max(1) as usize;
    let scroll_offset = scroll_offset(selected_index, visible, ranked.len());

    let items: Vec<ListItem> = ranked
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible)
        .map(|(idx, record)| {
            let is_selected = idx == selected_index;

            let title_style = Style::default()
                .fg(if is_selected {
                    Color::Yellow
                } else {
                    Color::White
                })
                .add_modifier(Modifier::BOLD);

            let line1 = Line::from(vec![
                Span::styled(record.title, title_style),
                Span::styled(
                    format!("  [{}]", record.relevance_badge()),
                    Style::default().fg(Color::LightBlue),
                ),
            ]);

            let line2 = Line::from(vec![
                Span::styled(record.authors_line(), Style::default().fg(Color::Cyan)),
                Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{} ({})", record.year, record.age_label(app.current_year)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                Span::styled(record.institution, Style::default().fg(Color::Magenta)),
            ]);

            let line3 = Line::from(Span::styled(
                record.citations_label(),
                Style::default().fg(Color::Gray),
            ));

            let line4 = Line::from(Span::styled(
                truncate(record.abstract_text, content_width),
                Style::default().fg(Color::Gray),
            ));

            let mut keyword_spans = Vec::new();
            for keyword in record.keywords {
                keyword_spans.push(Span::styled(
                    format!("#{}", keyword),
                    Style::default().fg(Color::Green),
                ));
                keyword_spans.push(Span::raw(" "));
            }
            let line5 = Line::from(keyword_spans);

            let separator = Line::from(Span::styled(
                separator_line.clone(),
                Style::default().fg(if is_selected {
                    Color::Blue
                } else {
                    Color::DarkGray
                }),
            ));

            ListItem::new(vec![line1, line2, line3, line4, line5, separator])
        })
        .collect();

    let title = format!("Publications ({}/{})", ranked.len(), app.record_count());

    let mut list_state = ListState::default();
    list_state.select(selected_index.checked_sub(scroll_offset));

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    StatefulWidget::render(list, area, buf, &mut list_state);
}

/// Compute the first visible index so the selection stays centered.
///
/// # Arguments
/// * `selected` - Selected index
/// * `visible` - Number of cards that fit
/// * `len` - Total number of cards
pub fn scroll_offset(selected: usize, visible: usize, len: usize) -> usize {
    let centered = selected.saturating_sub(visible / 2);
    centered.min(len.saturating_sub(visible))
}

/// Map a click row to a result index.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area the list was rendered in
/// * `row` - Terminal row of the click
///
/// # Returns
/// * `Option<usize>` - Index in the ranked list, or None outside a card
pub fn index_at_row(app: &App, area: Rect, row: u16) -> Option<usize> {
    let state = app.results()?;
    // Skip the top border
    if row <= area.y || row >= area.y + area.height.saturating_sub(1) {
        return None;
    }
    let visible = (area.height.saturating_sub(2) / LINES_PER_RESULT).max(1) as usize;
    let slot = ((row - area.y - 1) / LINES_PER_RESULT) as usize;
    // Rows below the last rendered card are blank
    if slot >= visible {
        return None;
    }
    let offset = scroll_offset(state.selected_index, visible, state.ranked.len());
    let index = offset + slot;
    (index < state.ranked.len()).then_some(index)
}

/// Shorten `text` to at most `width` characters, ending with "…" when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(width.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RECORDS;
    use crate::ranker::SortKey;
    use crate::route::Route;

    fn results_app() -> App {
        let mut app = App::new(&RECORDS, SortKey::Relevance, 3, 2025);
        app.navigate(Route::results("muscle"));
        app
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 3, 5), 0);
        assert_eq!(scroll_offset(2, 3, 5), 1);
        assert_eq!(scroll_offset(4, 3, 5), 2);
        assert_eq!(scroll_offset(4, 10, 5), 0);
    }

    #[test]
    fn test_index_at_row() {
        let app = results_app();
        let area = Rect::new(0, 10, 80, 2 + 3 * LINES_PER_RESULT);
        assert_eq!(index_at_row(&app, area, 10), None);
        assert_eq!(index_at_row(&app, area, 11), Some(0));
        assert_eq!(index_at_row(&app, area, 11 + LINES_PER_RESULT), Some(1));
        assert_eq!(index_at_row(&app, area, 11 + 2 * LINES_PER_RESULT), Some(2));
        assert_eq!(index_at_row(&app, area, 11 + 3 * LINES_PER_RESULT), None);
    }

    #[test]
    fn test_index_at_row_ignores_blank_rows_below_cards() {
        let app = results_app();
        // Room for three cards plus two spare rows
        let area = Rect::new(0, 0, 80, 2 + 3 * LINES_PER_RESULT + 2);
        assert_eq!(index_at_row(&app, area, 3 * LINES_PER_RESULT), Some(2));
        assert_eq!(index_at_row(&app, area, 3 * LINES_PER_RESULT + 1), None);
        assert_eq!(index_at_row(&app, area, 3 * LINES_PER_RESULT + 2), None);
    }

    #[test]
    fn test_render_list_shows_ranked_order() {
        let mut app = results_app();
        app.select_sort(SortKey::Citations);
        let area = Rect::new(0, 0, 120, 2 + 2 * LINES_PER_RESULT);
        let mut buf = Buffer::empty(area);
        render_list(&app, area, &mut buf);

        let text = buffer_text(&buf);
        let first = text.find("Gene Expression Profiles").unwrap();
        let second = text.find("Microgravity-Induced Changes").unwrap();
        assert!(first < second);
        assert!(text.contains("Publications (5/5)"));
        assert!(text.contains("67 citations"));
    }
}
