use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::item::MAX_TEXT_LEN;
use crate::tui::app::{App, Mode};

/// Rows the form needs: prompt row plus the draft's lines, capped so the
/// list stays visible underneath.
pub fn form_height(app: &App, available: u16) -> u16 {
    let body = (app.input.matches('\n').count() as u16 + 1).min(6);
    (body + 2).clamp(3, available.saturating_sub(1).max(3))
}

/// Render the add/edit form: prompt with character counter, then the draft
/// with a visible cursor mark.
pub fn render_add_form(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let title = match app.mode {
        Mode::Edit => " edit todo",
        _ => " new todo",
    };
    let chars = app.input.chars().count();
    let counter = format!("{}/{}", chars, MAX_TEXT_LEN);

    // Prompt row: title left, counter right
    let mut prompt_spans = vec![Span::styled(
        title,
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used = title.chars().count();
    let counter_width = counter.chars().count() + 1;
    if used + counter_width < width {
        prompt_spans.push(Span::styled(
            " ".repeat(width - used - counter_width),
            Style::default().bg(bg),
        ));
    }
    prompt_spans.push(Span::styled(
        counter,
        Style::default().fg(app.theme.counter_color(chars)).bg(bg),
    ));

    let mut lines = vec![Line::from(prompt_spans)];

    // Draft with the cursor mark inserted (cursor is always on a char boundary)
    let mut display = app.input.clone();
    display.insert(app.input_cursor, '\u{258C}');
    for text_line in display.split('\n') {
        lines.push(Line::from(Span::styled(
            format!(" {}", text_line),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
