use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::item::Filter;
use crate::tui::app::App;

/// Render the tab bar: filter tabs with live counts, separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );

    // Leading icon
    let bg_style = Style::default().bg(app.theme.background);
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{2713}",
        Style::default()
            .fg(app.theme.green)
            .bg(app.theme.background),
    ));
    spans.push(Span::styled(" ", bg_style));

    let counts = app.counts();
    for filter in Filter::ALL {
        let is_current = app.filter == filter;
        let style = tab_style(app, is_current);
        spans.push(Span::styled(
            format!(" {} {} ", filter.label(), counts.for_filter(filter)),
            style,
        ));
        sep_cols.push(spans.iter().map(|s| s.content.chars().count()).sum());
        spans.push(sep.clone());
    }

    let line = Line::from(spans);
    let tabs = Paragraph::new(line).style(Style::default().bg(app.theme.background));
    frame.render_widget(tabs, area);
    sep_cols
}

/// Separator row, with the applied search query shown on the right edge.
fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let bg = app.theme.background;
    let dim = app.theme.dim;

    let query = app.search_query.trim();
    if !query.is_empty() {
        let indicator_spans = vec![
            Span::styled("/", Style::default().fg(app.theme.cyan).bg(bg)),
            Span::styled(
                query.to_string(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
        ];
        let indicator_width: usize = indicator_spans
            .iter()
            .map(|s| s.content.chars().count())
            .sum();
        // +2: one space before the indicator, one space at the right edge
        let separator_end = width.saturating_sub(indicator_width + 2);

        let mut spans: Vec<Span> = Vec::new();
        let mut sep_text = String::with_capacity(separator_end * 3);
        for col in 0..separator_end {
            if sep_cols.contains(&col) {
                sep_text.push('\u{2534}');
            } else {
                sep_text.push('\u{2500}');
            }
        }
        spans.push(Span::styled(sep_text, Style::default().fg(dim).bg(bg)));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.extend(indicator_spans);
        let current_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        if current_width < width {
            spans.push(Span::styled(
                " ".repeat(width - current_width),
                Style::default().bg(bg),
            ));
        }

        let line = Line::from(spans);
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
    } else {
        let mut line = String::with_capacity(width * 3);
        for col in 0..width {
            if sep_cols.contains(&col) {
                line.push('\u{2534}');
            } else {
                line.push('\u{2500}');
            }
        }
        let sep_widget = Paragraph::new(line).style(Style::default().fg(dim).bg(bg));
        frame.render_widget(sep_widget, area);
    }
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(app.theme.text)
            .bg(app.theme.background)
    }
}
