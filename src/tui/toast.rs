use std::time::{Duration, Instant};

use crate::model::item::Item;

/// How long a deleted item stays restorable.
pub const UNDO_WINDOW: Duration = Duration::from_secs(5);

/// The transient "deleted" notification holding the last-deleted item.
/// Only one exists at a time; a newer delete replaces it, so undo is
/// strictly single-shot.
#[derive(Debug, Clone)]
pub struct UndoToast {
    pub item: Item,
    pub deadline: Instant,
}

impl UndoToast {
    pub fn new(item: Item) -> Self {
        UndoToast {
            item,
            deadline: Instant::now() + UNDO_WINDOW,
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Seconds left in the undo window, rounded up for display.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let remaining = self.deadline.saturating_duration_since(now);
        remaining.as_millis().div_ceil(1000) as u64
    }
}
