//! Task entity: the unit of everything the store owns.
//!
//! Design:
//! - The store is the single source of truth; views borrow tasks, never
//!   mutate them.
//! - Completion transitions go through methods (`complete` / `reopen` /
//!   `toggle`) so the `completed` / `completed_at` pairing cannot drift.
//! - `id` and `created_at` are assigned once by the store and are not
//!   patchable; the 7-day trend reconstruction depends on that.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::TaskId;
use super::priority::Priority;

/// A single tracked task.
///
/// Invariant: `completed_at.is_some() == completed`, at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Day granularity; time-of-day carries no meaning for matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Build a new task from caller-supplied data. The store assigns `id`
    /// and `created_at`; everything else comes from the draft.
    pub fn new(id: TaskId, created_at: DateTime<Utc>, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            tags: dedup_tags(draft.tags),
            due_date: draft.due_date,
            created_at,
            completed: false,
            completed_at: None,
        }
    }

    /// Mark as completed at `now`. No-op if already completed.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        if !self.completed {
            self.completed = true;
            self.completed_at = Some(now);
        }
    }

    /// Mark as not completed, clearing the completion timestamp.
    pub fn reopen(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }

    /// Flip completion state: incomplete tasks complete at `now`,
    /// completed tasks reopen.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        if self.completed {
            self.reopen();
        } else {
            self.complete(now);
        }
    }

    /// Apply a partial update. Completion state and the immutable fields
    /// (`id`, `created_at`) are not patchable.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(tags) = patch.tags {
            self.tags = dedup_tags(tags);
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
    }

    /// Whether this task is due on exactly the given calendar day.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date == Some(date)
    }

    /// Repair the completion invariant on data read from storage.
    ///
    /// A hand-edited or foreign payload may pair `completed: true` with a
    /// missing timestamp (or the reverse); normalize instead of rejecting
    /// the whole collection.
    pub fn normalize(&mut self) {
        match (self.completed, self.completed_at) {
            (true, None) => self.completed = false,
            (false, Some(_)) => self.completed_at = None,
            _ => {}
        }
        self.tags = dedup_tags(std::mem::take(&mut self.tags));
    }
}

/// Caller-supplied creation data. The store fills in `id` and `created_at`.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update for `TaskStore::update`.
///
/// `description` and `due_date` are doubly optional: the outer `Option` is
/// "touch this field at all", the inner one allows clearing the value.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub tags: Option<Vec<String>>,
    pub due_date: Option<Option<NaiveDate>>,
}

/// Collapse duplicate tags, keeping first-occurrence order.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
