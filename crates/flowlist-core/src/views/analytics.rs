//! Analytics view: completion stats, priority histogram, 7-day trend.
//!
//! Total functions over a borrowed task slice plus an explicit `now`.
//! Nothing here can fail on well-formed tasks; tasks without a due date
//! are simply absent from the due-date buckets.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::domain::{Priority, Task};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percentage in `[0, 100]`; `0.0` for an empty collection.
    pub completion_rate: f64,
    /// Incomplete, due strictly before the day containing `now`.
    pub overdue: usize,
    /// Incomplete, due within the next 7 days (today inclusive).
    pub upcoming: usize,
}

/// Task counts per priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityHistogram {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl PriorityHistogram {
    pub fn count(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }
}

/// One day of the 7-day trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Tasks completed during this calendar day.
    pub completed: usize,
    /// Tasks that existed and were not yet completed at this day's instant.
    pub active: usize,
}

pub fn completion_stats(tasks: &[Task], now: DateTime<Utc>) -> CompletionStats {
    let today = now.date_naive();
    let horizon = today + Duration::days(7);

    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let completion_rate = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    };

    let overdue = tasks
        .iter()
        .filter(|t| !t.completed && t.due_date.is_some_and(|due| due < today))
        .count();
    let upcoming = tasks
        .iter()
        .filter(|t| {
            !t.completed
                && t.due_date
                    .is_some_and(|due| due >= today && due <= horizon)
        })
        .count();

    CompletionStats {
        total,
        completed,
        pending: total - completed,
        completion_rate,
        overdue,
        upcoming,
    }
}

pub fn priority_histogram(tasks: &[Task]) -> PriorityHistogram {
    let mut histogram = PriorityHistogram {
        low: 0,
        medium: 0,
        high: 0,
    };
    for task in tasks {
        match task.priority {
            Priority::Low => histogram.low += 1,
            Priority::Medium => histogram.medium += 1,
            Priority::High => histogram.high += 1,
        }
    }
    histogram
}

/// The 7 days ending at the day containing `now`, oldest first.
///
/// `active` is a point-in-time reconstruction from `created_at` and
/// `completed_at`: a task counts as active on a day if it already existed
/// at that day's instant and was not completed before the day started.
/// Exact only because those two fields are never edited after the fact.
pub fn completion_trend(tasks: &[Task], now: DateTime<Utc>) -> Vec<TrendPoint> {
    (0..7)
        .map(|i| {
            let day_instant = now - Duration::days(6 - i);
            let date = day_instant.date_naive();
            let day_start = date.and_time(NaiveTime::MIN).and_utc();
            let day_end = day_start + Duration::days(1);

            let completed = tasks
                .iter()
                .filter(|t| {
                    t.completed_at
                        .is_some_and(|at| at >= day_start && at < day_end)
                })
                .count();
            let active = tasks
                .iter()
                .filter(|t| {
                    t.created_at <= day_instant
                        && t.completed_at.is_none_or(|at| at >= day_start)
                })
                .count();

            TrendPoint {
                date,
                completed,
                active,
            }
        })
        .collect()
}
