use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::text::truncate_to_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(toast) = &app.toast {
                // Undo toast takes the row while it is live
                let now = Instant::now();
                let text = truncate_to_width(
                    &toast.item.text.replace('\n', " "),
                    width.saturating_sub(24),
                );
                let spans = vec![
                    Span::styled("deleted ", Style::default().fg(app.theme.dim).bg(bg)),
                    Span::styled(
                        format!("\u{201C}{}\u{201D}", text),
                        Style::default().fg(app.theme.text).bg(bg),
                    ),
                    Span::styled(
                        format!("  u undo ({}s)", toast.remaining_secs(now)),
                        Style::default().fg(app.theme.yellow).bg(bg),
                    ),
                ];
                padded_line(spans, "", width, app, bg)
            } else if !app.search_query.trim().is_empty() {
                let matches = app.visible().len();
                let spans = vec![
                    Span::styled(
                        format!("/{}", app.search_query),
                        Style::default().fg(app.theme.dim).bg(bg),
                    ),
                    Span::styled(
                        format!("  {} match{}", matches, if matches == 1 { "" } else { "es" }),
                        Style::default().fg(app.theme.dim).bg(bg),
                    ),
                ];
                padded_line(spans, "Esc clear", width, app, bg)
            } else if app.show_key_hints {
                let hint = "a add  e edit  space toggle  d delete  / search  tab filter  q quit";
                padded_line(Vec::new(), hint, width, app, bg)
            } else {
                Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
            }
        }
        Mode::Search => {
            // Search prompt: /pattern▌
            let spans = vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ];
            padded_line(spans, "Enter apply  Esc clear", width, app, bg)
        }
        Mode::Insert => padded_line(
            Vec::new(),
            "Enter add  Shift+Enter newline  Esc clear",
            width,
            app,
            bg,
        ),
        Mode::Edit => padded_line(Vec::new(), "Enter save  Esc cancel", width, app, bg),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Left spans plus a dim, right-aligned hint, padded to the full width.
fn padded_line<'a>(
    mut spans: Vec<Span<'a>>,
    hint: &'a str,
    width: usize,
    app: &App,
    bg: ratatui::style::Color,
) -> Line<'a> {
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
    }
    if !hint.is_empty() {
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
