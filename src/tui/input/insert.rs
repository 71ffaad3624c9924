use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

use super::*;

/// Keys for the add form: Enter submits, Shift+Enter inserts a newline,
/// Esc clears the draft (and closes the form when it is already empty).
pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::SHIFT, KeyCode::Enter) => insert_newline(app),
        (_, KeyCode::Enter) => submit(app),
        (_, KeyCode::Esc) => {
            if app.input.is_empty() {
                app.mode = Mode::Navigate;
            } else {
                app.input.clear();
                app.input_cursor = 0;
            }
        }
        _ => {
            handle_editor_key(app, key);
        }
    }
}

/// Submit the draft. The store trims and no-ops on blank input, so a
/// whitespace-only draft just stays in the form.
fn submit(app: &mut App) {
    if app.store.add(&app.input).is_some() {
        app.input.clear();
        app.input_cursor = 0;
        app.clamp_cursor();
    }
}
