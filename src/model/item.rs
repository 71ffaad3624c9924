use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum stored length of an item's text, in characters.
pub const MAX_TEXT_LEN: usize = 300;

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// UUID assigned at creation
    pub id: String,
    /// Trimmed, non-empty text (at most `MAX_TEXT_LEN` chars)
    pub text: String,
    pub completed: bool,
    /// Creation timestamp, the sort key within a completion group
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new incomplete item with a fresh id and the current time.
    /// `text` must already be normalized (see [`normalize_text`]).
    pub fn new(text: String) -> Self {
        Item {
            id: Uuid::new_v4().to_string(),
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// Completion-state filter for the displayed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// The next tab to the right, wrapping
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// The next tab to the left, wrapping
    pub fn prev(self) -> Filter {
        match self {
            Filter::All => Filter::Completed,
            Filter::Active => Filter::All,
            Filter::Completed => Filter::Active,
        }
    }
}

/// Normalize raw input into storable item text: trim whitespace and cap at
/// `MAX_TEXT_LEN` characters. Returns `None` when nothing remains after the
/// trim; the caller treats that as a no-op.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().count() <= MAX_TEXT_LEN {
        return Some(trimmed.to_string());
    }
    let capped: String = trimmed.chars().take(MAX_TEXT_LEN).collect();
    Some(capped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize_text("  buy milk  "), Some("buy milk".into()));
        assert_eq!(normalize_text("\n\tbuy milk\n"), Some("buy milk".into()));
    }

    #[test]
    fn normalize_rejects_empty() {
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("   "), None);
        assert_eq!(normalize_text("\n\t \n"), None);
    }

    #[test]
    fn normalize_caps_at_300_chars() {
        let long = "x".repeat(350);
        let text = normalize_text(&long).unwrap();
        assert_eq!(text.chars().count(), 300);
    }

    #[test]
    fn normalize_counts_chars_not_bytes() {
        // 350 two-byte chars; the cap is on characters
        let long = "é".repeat(350);
        let text = normalize_text(&long).unwrap();
        assert_eq!(text.chars().count(), 300);
        assert_eq!(text.len(), 600);
    }

    #[test]
    fn normalize_exact_300_untouched() {
        let exact = "x".repeat(300);
        assert_eq!(normalize_text(&exact), Some(exact.clone()));
    }

    #[test]
    fn new_item_is_incomplete_with_fresh_id() {
        let a = Item::new("one".into());
        let b = Item::new("two".into());
        assert!(!a.completed);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn filter_cycle_wraps() {
        assert_eq!(Filter::All.next(), Filter::Active);
        assert_eq!(Filter::Completed.next(), Filter::All);
        assert_eq!(Filter::All.prev(), Filter::Completed);
        assert_eq!(Filter::Active.prev(), Filter::All);
    }

    #[test]
    fn filter_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Filter::Active).unwrap(),
            "\"active\""
        );
        let f: Filter = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(f, Filter::Completed);
    }
}
