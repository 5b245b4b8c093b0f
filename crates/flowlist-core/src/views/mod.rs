//! Derived views: stateless readers over the store's task slice.
//!
//! Each view is recomputed per call from `TaskStore::list()` plus explicit
//! inputs (filter state, the current instant, a month). No view caches,
//! mutates, or holds tasks across calls.

pub mod analytics;
pub mod calendar;
pub mod query;

pub use self::analytics::{
    CompletionStats, PriorityHistogram, TrendPoint, completion_stats, completion_trend,
    priority_histogram,
};
pub use self::calendar::{CalendarDay, GRID_CELLS, MonthRef, build as build_month_grid};
pub use self::query::{TaskFilter, all_tags, filter as filter_tasks};
