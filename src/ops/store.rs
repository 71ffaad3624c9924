use std::path::PathBuf;

use crate::io::storage::{self, StorageError};
use crate::model::item::{Item, normalize_text};

/// The canonical item collection and its mutation interface.
///
/// The store is the only owner of the collection; everything else sees
/// read-only slices. Mutations are total: invalid input (empty text,
/// unknown id) is a no-op, never an error. Every successful mutation is
/// persisted to the storage file and bumps the generation counter, which is
/// the change-notification contract: consumers re-derive their views when
/// the counter moves.
pub struct Store {
    data_dir: PathBuf,
    items: Vec<Item>,
    generation: u64,
}

impl Store {
    /// Open the store backed by the given data directory.
    pub fn open(data_dir: PathBuf) -> Result<Self, StorageError> {
        let items = storage::load_items(&data_dir)?;
        Ok(Store {
            data_dir,
            items,
            generation: 0,
        })
    }

    /// Read access to the canonical collection (insertion order).
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Monotonic counter bumped on every successful mutation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Add a new item. Trims and caps the text; no-op when nothing remains
    /// after the trim. Returns the new item's id.
    pub fn add(&mut self, raw: &str) -> Option<String> {
        let text = normalize_text(raw)?;
        let item = Item::new(text);
        let id = item.id.clone();
        self.items.push(item);
        self.persist();
        Some(id)
    }

    /// Flip `completed` for the matching item. No-op when the id is absent.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Remove the matching item and hand it back so the caller can offer
    /// undo. No-op when the id is absent.
    pub fn delete(&mut self, id: &str) -> Option<Item> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        let item = self.items.remove(idx);
        self.persist();
        Some(item)
    }

    /// Re-insert a previously deleted item verbatim (same id and timestamp).
    /// Appended, not re-sorted; ordering is the projection's job.
    pub fn restore(&mut self, item: Item) {
        self.items.push(item);
        self.persist();
    }

    /// Replace the matching item's text. Trims and caps the replacement;
    /// no-op when the id is absent or nothing remains after the trim.
    pub fn update(&mut self, id: &str, raw: &str) -> bool {
        let Some(text) = normalize_text(raw) else {
            return false;
        };
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = text;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Persist after a successful mutation. A failed write never fails the
    /// mutation; storage has already captured the payload in the recovery
    /// log, and the in-memory collection stays authoritative.
    fn persist(&mut self) {
        self.generation += 1;
        let _ = storage::save_items(&self.data_dir, &self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::MAX_TEXT_LEN;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> Store {
        Store::open(dir.path().to_path_buf()).unwrap()
    }

    // --- add ---

    #[test]
    fn add_appends_trimmed_item() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("  buy milk  ").unwrap();
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].text, "buy milk");
        assert_eq!(store.items()[0].id, id);
        assert!(!store.items()[0].completed);
    }

    #[test]
    fn add_empty_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        assert!(store.add("").is_none());
        assert!(store.add("   \n\t ").is_none());
        assert!(store.items().is_empty());
        assert_eq!(store.generation(), 0);
    }

    #[test]
    fn add_truncates_to_exactly_300_chars() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add(&"y".repeat(301)).unwrap();
        assert_eq!(store.items()[0].text.chars().count(), MAX_TEXT_LEN);
    }

    #[test]
    fn add_assigns_unique_ids() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        for i in 0..20 {
            store.add(&format!("item {}", i));
        }
        let ids: HashSet<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
    }

    // --- toggle ---

    #[test]
    fn toggle_twice_is_identity() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("task").unwrap();

        assert!(store.toggle(&id));
        assert!(store.items()[0].completed);
        assert!(store.toggle(&id));
        assert!(!store.items()[0].completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("task");
        let generation = store.generation();
        assert!(!store.toggle("no-such-id"));
        assert_eq!(store.generation(), generation);
    }

    // --- delete / restore ---

    #[test]
    fn delete_then_restore_reproduces_collection() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("one");
        let id = store.add("two").unwrap();
        store.add("three");

        let before: HashSet<Item> = store.items().iter().cloned().collect();
        let deleted = store.delete(&id).unwrap();
        assert_eq!(store.items().len(), 2);

        store.restore(deleted);
        let after: HashSet<Item> = store.items().iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn restore_keeps_id_and_timestamp() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("task").unwrap();
        let original = store.items()[0].clone();

        let deleted = store.delete(&id).unwrap();
        store.restore(deleted);

        assert_eq!(store.items()[0], original);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("task");
        assert!(store.delete("no-such-id").is_none());
        assert_eq!(store.items().len(), 1);
    }

    // --- update ---

    #[test]
    fn update_replaces_trimmed_text() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("task").unwrap();
        assert!(store.update(&id, "  new text  "));
        assert_eq!(store.items()[0].text, "new text");
    }

    #[test]
    fn update_empty_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("task").unwrap();
        assert!(!store.update(&id, "   "));
        assert_eq!(store.items()[0].text, "task");
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        assert!(!store.update("no-such-id", "text"));
    }

    #[test]
    fn update_caps_long_text() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("task").unwrap();
        store.update(&id, &"z".repeat(500));
        assert_eq!(store.items()[0].text.chars().count(), MAX_TEXT_LEN);
    }

    // --- persistence / notification ---

    #[test]
    fn every_mutation_persists() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("task").unwrap();
        store.toggle(&id);

        // A second store opened on the same directory sees the state
        let reopened = open_store(&dir);
        assert_eq!(reopened.items().len(), 1);
        assert!(reopened.items()[0].completed);
    }

    #[test]
    fn generation_moves_only_on_successful_mutation() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        assert_eq!(store.generation(), 0);

        let id = store.add("task").unwrap();
        assert_eq!(store.generation(), 1);
        store.toggle(&id);
        assert_eq!(store.generation(), 2);
        store.toggle("missing");
        assert_eq!(store.generation(), 2);
        store.update(&id, "   ");
        assert_eq!(store.generation(), 2);
        store.delete(&id);
        assert_eq!(store.generation(), 3);
    }
}
