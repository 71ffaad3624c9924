use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

use super::*;

/// Open the editor seeded with the text of the item under the cursor.
pub(super) fn enter_edit(app: &mut App) {
    let target = app
        .visible()
        .get(app.cursor)
        .map(|item| (item.id.clone(), item.text.clone()));
    if let Some((id, text)) = target {
        app.edit_id = Some(id);
        app.input = text;
        app.input_cursor = app.input.len();
        app.mode = Mode::Edit;
    }
}

/// Keys for the edit form: Enter commits, Shift+Enter inserts a newline,
/// Esc abandons the edit.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::SHIFT, KeyCode::Enter) => insert_newline(app),
        (_, KeyCode::Enter) => commit(app),
        (_, KeyCode::Esc) => cancel(app),
        _ => {
            handle_editor_key(app, key);
        }
    }
}

/// Commit the edit. The store no-ops on blank text, leaving the item as it
/// was; blanking an item is not a delete.
fn commit(app: &mut App) {
    if let Some(id) = app.edit_id.take() {
        app.store.update(&id, &app.input);
    }
    close(app);
}

fn cancel(app: &mut App) {
    app.edit_id = None;
    close(app);
}

fn close(app: &mut App) {
    app.input.clear();
    app.input_cursor = 0;
    app.mode = Mode::Navigate;
    app.clamp_cursor();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::Config;
    use crate::ops::store::Store;
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> App {
        let store = Store::open(dir.path().to_path_buf()).unwrap();
        App::new(store, &Config::default())
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_edit(app, KeyEvent::new(code, modifiers));
    }

    #[test]
    fn enter_edit_seeds_buffer_from_cursor_item() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.store.add("original");

        enter_edit(&mut app);
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.input, "original");
        assert_eq!(app.input_cursor, app.input.len());
        assert!(app.edit_id.is_some());
    }

    #[test]
    fn enter_edit_on_empty_list_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        enter_edit(&mut app);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn commit_updates_the_item() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.store.add("original");

        enter_edit(&mut app);
        app.input = "  revised  ".into();
        app.input_cursor = app.input.len();
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.store.items()[0].text, "revised");
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.edit_id.is_none());
    }

    #[test]
    fn blank_commit_keeps_original_text() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.store.add("original");

        enter_edit(&mut app);
        app.input = "   ".into();
        app.input_cursor = app.input.len();
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.store.items()[0].text, "original");
    }

    #[test]
    fn esc_abandons_the_edit() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.store.add("original");

        enter_edit(&mut app);
        app.input = "changed".into();
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);

        assert_eq!(app.store.items()[0].text, "original");
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.edit_id.is_none());
    }
}
