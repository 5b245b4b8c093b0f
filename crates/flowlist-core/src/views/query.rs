//! List-view query engine: filtering and the tag universe.
//!
//! Pure functions over a borrowed task slice. Results preserve source
//! order; nothing here mutates or caches.

use crate::domain::{PriorityFilter, Task};

/// Caller-owned filter state for the list view.
///
/// A task is visible iff all three predicates hold.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring, matched against title or description.
    /// Empty matches everything.
    pub search: String,
    pub priority: PriorityFilter,
    /// Required tags; every one must be present (AND). Empty matches
    /// everything.
    pub tags: Vec<String>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.priority.matches(task.priority)
            && self.tags.iter().all(|tag| task.tags.contains(tag))
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

/// The visible subset of `tasks` under `filter`, in source order.
pub fn filter<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Every tag in use, first-encountered order, no duplicates. Deliberately
/// not sorted; the list view shows tags in the order they entered the
/// collection.
pub fn all_tags(tasks: &[Task]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for task in tasks {
        for tag in &task.tags {
            if !out.contains(tag) {
                out.push(tag.clone());
            }
        }
    }
    out
}
