use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::item::MAX_TEXT_LEN;
use crate::tui::app::App;
use crate::util::text::{
    next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left, word_boundary_right,
};

/// Keys shared by the add and edit forms: typing, deletion, cursor motion.
/// Returns true when the key was consumed.
pub(super) fn handle_editor_key(app: &mut App, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            insert_char(app, c);
            true
        }
        (_, KeyCode::Backspace) => {
            backspace(app);
            true
        }
        (_, KeyCode::Delete) => {
            delete_forward(app);
            true
        }
        (KeyModifiers::CONTROL, KeyCode::Left) => {
            app.input_cursor = word_boundary_left(&app.input, app.input_cursor);
            true
        }
        (KeyModifiers::CONTROL, KeyCode::Right) => {
            app.input_cursor = word_boundary_right(&app.input, app.input_cursor);
            true
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = prev;
            }
            true
        }
        (_, KeyCode::Right) => {
            if let Some(next) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = next;
            }
            true
        }
        (_, KeyCode::Home) => {
            app.input_cursor = 0;
            true
        }
        (_, KeyCode::End) => {
            app.input_cursor = app.input.len();
            true
        }
        _ => false,
    }
}

/// Insert a character at the cursor, honoring the entry cap.
pub(super) fn insert_char(app: &mut App, c: char) {
    if app.input.chars().count() >= MAX_TEXT_LEN {
        return;
    }
    app.input.insert(app.input_cursor, c);
    app.input_cursor += c.len_utf8();
}

pub(super) fn insert_newline(app: &mut App) {
    insert_char(app, '\n');
}

fn backspace(app: &mut App) {
    if let Some(prev) = prev_grapheme_boundary(&app.input, app.input_cursor) {
        app.input.replace_range(prev..app.input_cursor, "");
        app.input_cursor = prev;
    }
}

fn delete_forward(app: &mut App) {
    if let Some(next) = next_grapheme_boundary(&app.input, app.input_cursor) {
        app.input.replace_range(app.input_cursor..next, "");
    }
}
