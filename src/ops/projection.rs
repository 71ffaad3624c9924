use crate::model::item::{Filter, Item};

/// Per-filter item counts for the tab badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

/// Count items per filter bucket. `active + completed == all` always holds.
pub fn counts(items: &[Item]) -> Counts {
    let completed = items.iter().filter(|item| item.completed).count();
    Counts {
        all: items.len(),
        active: items.len() - completed,
        completed,
    }
}

impl Counts {
    pub fn for_filter(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.all,
            Filter::Active => self.active,
            Filter::Completed => self.completed,
        }
    }
}

/// Derive the display list: filter by completion state, search by
/// case-insensitive substring, then sort incomplete-first / newest-first.
/// Pure; the canonical collection is never touched.
pub fn project<'a>(items: &'a [Item], filter: Filter, query: &str) -> Vec<&'a Item> {
    let needle = query.trim().to_lowercase();
    let mut visible: Vec<&Item> = items
        .iter()
        .filter(|item| matches_filter(item, filter))
        .filter(|item| needle.is_empty() || item.text.to_lowercase().contains(&needle))
        .collect();
    visible.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then(b.created_at.cmp(&a.created_at))
    });
    visible
}

fn matches_filter(item: &Item, filter: Filter) -> bool {
    match filter {
        Filter::All => true,
        Filter::Active => !item.completed,
        Filter::Completed => item.completed,
    }
}

/// Why the displayed list is empty; picks the message to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoItems,
    NoActive,
    NoCompleted,
    /// A non-empty search query matched nothing (any filter)
    NoMatches,
}

/// Classify an empty projection. A non-empty search query always wins over
/// the filter-specific messages.
pub fn empty_state(filter: Filter, query: &str) -> EmptyState {
    if !query.trim().is_empty() {
        return EmptyState::NoMatches;
    }
    match filter {
        Filter::All => EmptyState::NoItems,
        Filter::Active => EmptyState::NoActive,
        Filter::Completed => EmptyState::NoCompleted,
    }
}

impl EmptyState {
    pub fn title(self) -> &'static str {
        match self {
            EmptyState::NoItems => "No todos yet",
            EmptyState::NoActive => "No active todos",
            EmptyState::NoCompleted => "No completed todos",
            EmptyState::NoMatches => "No todos found",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            EmptyState::NoItems => "Press a to add one.",
            EmptyState::NoActive => "All your tasks are complete!",
            EmptyState::NoCompleted => "Complete a task to see it here.",
            EmptyState::NoMatches => "Try a different search term.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(text: &str, completed: bool, created: i64) -> Item {
        Item {
            id: format!("id-{}", created),
            text: text.to_string(),
            completed,
            created_at: Utc.timestamp_opt(created, 0).unwrap(),
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            item("Buy Milk", false, 1),
            item("Water plants", true, 2),
            item("Call the bank", false, 3),
        ]
    }

    // --- counts ---

    #[test]
    fn counts_sum_to_all() {
        let items = sample();
        let c = counts(&items);
        assert_eq!(c.all, 3);
        assert_eq!(c.active, 2);
        assert_eq!(c.completed, 1);
        assert_eq!(c.active + c.completed, c.all);
    }

    #[test]
    fn counts_empty_collection() {
        let c = counts(&[]);
        assert_eq!(c.all, 0);
        assert_eq!(c.active + c.completed, 0);
    }

    // --- filter ---

    #[test]
    fn filter_all_passes_everything() {
        let items = sample();
        assert_eq!(project(&items, Filter::All, "").len(), 3);
    }

    #[test]
    fn filter_active_and_completed_partition() {
        let items = sample();
        let active = project(&items, Filter::Active, "");
        let completed = project(&items, Filter::Completed, "");
        assert_eq!(active.len(), 2);
        assert_eq!(completed.len(), 1);
        assert!(active.iter().all(|i| !i.completed));
        assert!(completed.iter().all(|i| i.completed));
    }

    // --- search ---

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = sample();
        let hits = project(&items, Filter::All, "milk");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Buy Milk");

        let hits = project(&items, Filter::All, "BUY");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn search_query_is_trimmed() {
        let items = sample();
        assert_eq!(project(&items, Filter::All, "  milk  ").len(), 1);
    }

    #[test]
    fn empty_query_passes_everything() {
        let items = sample();
        assert_eq!(project(&items, Filter::All, "").len(), 3);
        assert_eq!(project(&items, Filter::All, "   ").len(), 3);
    }

    #[test]
    fn search_composes_with_filter() {
        let items = sample();
        // "a" appears in "Water plants" (completed) and "Call the bank"
        let hits = project(&items, Filter::Active, "a");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Call the bank");
    }

    #[test]
    fn search_no_matches_yields_empty() {
        let items = sample();
        assert!(project(&items, Filter::All, "zzz").is_empty());
    }

    // --- sort ---

    #[test]
    fn sort_incomplete_first_then_newest() {
        // A(created=1, incomplete), B(created=2, completed), C(created=3, incomplete)
        let items = vec![
            item("A", false, 1),
            item("B", true, 2),
            item("C", false, 3),
        ];
        let sorted = project(&items, Filter::All, "");
        let order: Vec<&str> = sorted.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn sort_newest_first_within_completed() {
        let items = vec![
            item("old done", true, 1),
            item("new done", true, 5),
            item("open", false, 2),
        ];
        let sorted = project(&items, Filter::All, "");
        let order: Vec<&str> = sorted.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(order, vec!["open", "new done", "old done"]);
    }

    // --- empty states ---

    #[test]
    fn empty_state_per_filter() {
        assert_eq!(empty_state(Filter::All, ""), EmptyState::NoItems);
        assert_eq!(empty_state(Filter::Active, ""), EmptyState::NoActive);
        assert_eq!(empty_state(Filter::Completed, ""), EmptyState::NoCompleted);
    }

    #[test]
    fn empty_state_search_wins_over_filter() {
        assert_eq!(empty_state(Filter::All, "milk"), EmptyState::NoMatches);
        assert_eq!(empty_state(Filter::Active, "milk"), EmptyState::NoMatches);
        // Whitespace-only query is not a search
        assert_eq!(empty_state(Filter::All, "   "), EmptyState::NoItems);
    }
}
