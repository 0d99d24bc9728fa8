//! Case-insensitive substring filtering over task titles.
//!
//! # Invariants
//! - An empty term matches every task.
//! - Matching is Unicode case-insensitive substring containment; no
//!   tokenization, no ranking.

use crate::model::task::Task;

/// Returns whether `title` matches the free-text `term`.
pub fn title_matches(term: &str, title: &str) -> bool {
    title.to_lowercase().contains(&term.to_lowercase())
}

/// Returns the subset of `tasks` whose titles match `term`, preserving
/// snapshot order.
pub fn filter_tasks<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    let needle = term.to_lowercase();
    tasks
        .iter()
        .filter(|task| task.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_tasks, title_matches};
    use crate::model::task::Task;

    fn sample() -> Vec<Task> {
        vec![Task::new(1, "Buy milk"), Task::new(2, "Walk dog")]
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(title_matches("BUY", "Buy milk"));
        assert!(title_matches("milk", "Buy MILK"));
        assert!(!title_matches("xyz", "Buy milk"));
    }

    #[test]
    fn uppercase_term_narrows_to_matching_titles() {
        let tasks = sample();
        let hits = filter_tasks(&tasks, "BUY");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Buy milk");
    }

    #[test]
    fn empty_term_matches_everything() {
        let tasks = sample();
        assert_eq!(filter_tasks(&tasks, "").len(), tasks.len());
    }

    #[test]
    fn unmatched_term_yields_nothing() {
        let tasks = sample();
        assert!(filter_tasks(&tasks, "xyz").is_empty());
    }

    #[test]
    fn filtering_preserves_snapshot_order() {
        let tasks = vec![
            Task::new(3, "pay rent"),
            Task::new(1, "pay back Sam"),
            Task::new(2, "walk dog"),
        ];
        let hits = filter_tasks(&tasks, "pay");
        let ids: Vec<_> = hits.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
