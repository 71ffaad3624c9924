use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Keys for the search box. Typing re-arms the debounce; Enter applies the
/// query immediately and returns to the list; Esc clears everything.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Clear and leave
        (_, KeyCode::Esc) => {
            app.clear_search();
            app.mode = Mode::Navigate;
        }

        // Apply without waiting for the debounce
        (_, KeyCode::Enter) => {
            app.apply_search_now();
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Backspace) => {
            app.search_input.pop();
            app.queue_search();
        }

        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.search_input.clear();
            app.queue_search();
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input.push(c);
            app.queue_search();
        }

        _ => {}
    }
}
