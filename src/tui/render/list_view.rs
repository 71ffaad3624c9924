use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::model::item::Item;
use crate::ops::projection;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::text::{display_width, truncate_to_width};

/// Render the item list content area
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible_height = area.height as usize;

    // Clamp cursor and adjust the scroll window before rendering
    let len = app.visible().len();
    app.cursor = app.cursor.min(len.saturating_sub(1));
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let cursor = app.cursor;
    let scroll = app.scroll_offset;
    let search_re = app.active_search_re();
    let items = app.visible();

    if items.is_empty() {
        render_empty_state(frame, app, area);
        return;
    }

    let end = items.len().min(scroll + visible_height);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    for (row, item) in (scroll..end).zip(items[scroll..end].iter()) {
        lines.push(render_item_line(
            &app.theme,
            item,
            row == cursor,
            area.width as usize,
            search_re.as_ref(),
        ));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// One item row: checkbox, text with match highlighting, creation date.
fn render_item_line<'a>(
    theme: &Theme,
    item: &Item,
    is_cursor: bool,
    width: usize,
    search_re: Option<&Regex>,
) -> Line<'a> {
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    let checkbox = if item.completed { "[x]" } else { "[ ]" };
    let checkbox_color = if item.completed {
        theme.green
    } else if is_cursor {
        theme.text_bright
    } else {
        theme.text
    };
    spans.push(Span::styled(
        checkbox,
        Style::default().fg(checkbox_color).bg(bg),
    ));
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    // Multiline text is flattened to a single row
    let date = item.created_at.format("%b %e").to_string();
    let date_width = date.chars().count() + 2;
    let text_budget = width.saturating_sub(5 + date_width);
    let flat = item.text.replace('\n', " ");
    let shown = truncate_to_width(&flat, text_budget);

    let base_style = if item.completed {
        Style::default()
            .fg(theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_cursor {
        Style::default().fg(theme.text_bright).bg(bg)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    let match_style = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);
    super::push_highlighted_spans(&mut spans, &shown, base_style, match_style, search_re);

    // Right-align the date, then fill the row so the background extends
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let pad = width.saturating_sub(used + date.chars().count() + 1);
    if pad > 0 {
        spans.push(Span::styled(" ".repeat(pad), Style::default().bg(bg)));
    }
    spans.push(Span::styled(date, Style::default().fg(theme.dim).bg(bg)));
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    Line::from(spans)
}

/// Context-sensitive message for an empty projection
fn render_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let state = projection::empty_state(app.filter, &app.search_query);

    let mut lines: Vec<Line> = Vec::new();
    let top_pad = (area.height as usize / 2).saturating_sub(1);
    for _ in 0..top_pad {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        state.title(),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background),
    )));
    lines.push(Line::from(Span::styled(
        state.subtitle(),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
