use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::item::Filter;
use crate::tui::app::{App, Mode};
use crate::tui::toast::UndoToast;

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,

        // Cursor movement
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => move_down(app),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => move_up(app),
        (_, KeyCode::Home) | (_, KeyCode::Char('g')) => app.cursor = 0,
        (_, KeyCode::End) | (_, KeyCode::Char('G')) => move_to_end(app),

        // Item actions
        (_, KeyCode::Char(' ')) | (_, KeyCode::Char('x')) => toggle_at_cursor(app),
        (_, KeyCode::Char('d')) | (_, KeyCode::Delete) => delete_at_cursor(app),
        (_, KeyCode::Char('u')) => undo_delete(app),
        (_, KeyCode::Char('a')) | (_, KeyCode::Char('i')) => enter_insert(app),
        (_, KeyCode::Char('e')) => enter_edit(app),

        // Search
        (_, KeyCode::Char('/')) => enter_search(app),
        (_, KeyCode::Esc) => app.clear_search(),

        // Filter tabs
        (_, KeyCode::Char('1')) => set_filter(app, Filter::All),
        (_, KeyCode::Char('2')) => set_filter(app, Filter::Active),
        (_, KeyCode::Char('3')) => set_filter(app, Filter::Completed),
        (_, KeyCode::Tab) => set_filter(app, app.filter.next()),
        (_, KeyCode::BackTab) => set_filter(app, app.filter.prev()),

        _ => {}
    }
}

fn move_down(app: &mut App) {
    let len = app.visible().len();
    if app.cursor + 1 < len {
        app.cursor += 1;
    }
}

fn move_up(app: &mut App) {
    app.cursor = app.cursor.saturating_sub(1);
}

fn move_to_end(app: &mut App) {
    app.cursor = app.visible().len().saturating_sub(1);
}

pub(super) fn set_filter(app: &mut App, filter: Filter) {
    if app.filter != filter {
        app.filter = filter;
        app.cursor = 0;
        app.scroll_offset = 0;
    }
}

pub(super) fn toggle_at_cursor(app: &mut App) {
    if let Some(id) = app.cursor_item_id() {
        app.store.toggle(&id);
        app.clamp_cursor();
    }
}

/// Delete the item under the cursor and offer undo for the next 5 seconds.
/// A second delete replaces the toast; the undo is single-shot.
pub(super) fn delete_at_cursor(app: &mut App) {
    if let Some(id) = app.cursor_item_id()
        && let Some(item) = app.store.delete(&id)
    {
        app.toast = Some(UndoToast::new(item));
        app.clamp_cursor();
    }
}

pub(super) fn undo_delete(app: &mut App) {
    if let Some(toast) = app.toast.take()
        && !toast.expired(Instant::now())
    {
        app.store.restore(toast.item);
        app.clamp_cursor();
    }
}

fn enter_insert(app: &mut App) {
    app.input.clear();
    app.input_cursor = 0;
    app.mode = Mode::Insert;
}

fn enter_search(app: &mut App) {
    // Seed the box with the applied query so editing refines it
    app.search_input = app.search_query.clone();
    app.mode = Mode::Search;
}
