//! Month view: a fixed 6x7 grid of days with tasks bucketed by due date.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::domain::Task;

/// Cells in the month grid: 6 weeks of 7 days, always.
pub const GRID_CELLS: usize = 42;

/// A year/month pair for grid navigation. No day component, no retained
/// state; `next`/`previous` are pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    /// `month` is 1-based; out-of-range values are rejected here so the
    /// grid builder never sees an unrepresentable month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        ((1..=12).contains(&month)).then_some(Self { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month is range-checked at construction")
    }
}

/// One grid cell: a date, whether it belongs to the viewed month, and the
/// tasks due on exactly that day.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub tasks: Vec<&'a Task>,
}

/// Build the 42-cell grid for `month`.
///
/// The grid starts at the most recent Sunday on or before the first of the
/// month and runs 42 consecutive days, so every row is a full week and the
/// cell count never varies with month shape. A task with a due date
/// appears under at most one cell.
pub fn build<'a>(month: MonthRef, tasks: &'a [Task]) -> Vec<CalendarDay<'a>> {
    let first = month.first_day();
    let back_to_sunday = first.weekday().num_days_from_sunday();
    let grid_start = first - Duration::days(i64::from(back_to_sunday));

    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            CalendarDay {
                date,
                is_current_month: date.year() == month.year && date.month() == month.month,
                tasks: tasks.iter().filter(|t| t.is_due_on(date)).collect(),
            }
        })
        .collect()
}

/// True when `date` falls on a Sunday. The grid invariant: cells 0, 7,
/// 14, ... are all Sundays.
pub fn starts_week(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskDraft, TaskId};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use ulid::Ulid;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn task_due(due: NaiveDate) -> Task {
        let mut draft = TaskDraft::new("t");
        draft.due_date = Some(due);
        Task::new(
            TaskId::from_ulid(Ulid::new()),
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            draft,
        )
    }

    #[test]
    fn month_ref_rejects_out_of_range_months() {
        assert!(MonthRef::new(2024, 0).is_none());
        assert!(MonthRef::new(2024, 13).is_none());
        assert!(MonthRef::new(2024, 12).is_some());
    }

    #[rstest]
    #[case::mid_year(2024, 6, 2024, 7)]
    #[case::december_wraps_forward(2024, 12, 2025, 1)]
    fn next_advances_and_wraps_at_december(
        #[case] year: i32,
        #[case] month: u32,
        #[case] expected_year: i32,
        #[case] expected_month: u32,
    ) {
        let next = MonthRef::new(year, month).unwrap().next();
        assert_eq!(next.year(), expected_year);
        assert_eq!(next.month(), expected_month);
    }

    #[test]
    fn previous_wraps_at_january() {
        let prev = MonthRef::new(2024, 1).unwrap().previous();
        assert_eq!(prev.year(), 2023);
        assert_eq!(prev.month(), 12);
    }

    #[test]
    fn next_then_previous_round_trips() {
        let month = MonthRef::new(2024, 3).unwrap();
        assert_eq!(month.next().previous(), month);
        assert_eq!(month.previous().next(), month);
    }

    #[test]
    fn grid_has_42_cells_starting_on_a_sunday() {
        // March 2024 begins on a Friday; the grid walks back to Feb 25.
        let month = MonthRef::new(2024, 3).unwrap();
        let grid = build(month, &[]);

        assert_eq!(grid.len(), GRID_CELLS);
        assert_eq!(grid[0].date, date(2024, 2, 25));
        assert_eq!(grid[41].date, date(2024, 4, 6));
        for week_start in grid.iter().step_by(7) {
            assert!(starts_week(week_start.date));
        }
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_cells() {
        // September 2024 begins on a Sunday.
        let month = MonthRef::new(2024, 9).unwrap();
        let grid = build(month, &[]);

        assert_eq!(grid[0].date, date(2024, 9, 1));
        assert!(grid[0].is_current_month);
    }

    #[test]
    fn cells_outside_the_viewed_month_are_flagged() {
        let month = MonthRef::new(2024, 3).unwrap();
        let grid = build(month, &[]);

        assert!(!grid[0].is_current_month); // Feb 25
        assert!(grid[5].is_current_month); // Mar 1
        assert!(!grid[41].is_current_month); // Apr 6
    }

    #[test]
    fn tasks_land_on_exactly_one_cell() {
        let month = MonthRef::new(2024, 3).unwrap();
        let tasks = vec![
            task_due(date(2024, 3, 15)),
            task_due(date(2024, 3, 15)),
            task_due(date(2024, 2, 26)), // leading cell, previous month
            task_due(date(2024, 7, 1)),  // outside the grid entirely
        ];

        let grid = build(month, &tasks);

        let total_placed: usize = grid.iter().map(|cell| cell.tasks.len()).sum();
        assert_eq!(total_placed, 3);

        let fifteenth = grid
            .iter()
            .find(|cell| cell.date == date(2024, 3, 15))
            .unwrap();
        assert_eq!(fifteenth.tasks.len(), 2);

        let leading = grid
            .iter()
            .find(|cell| cell.date == date(2024, 2, 26))
            .unwrap();
        assert_eq!(leading.tasks.len(), 1);
        assert!(!leading.is_current_month);
    }

    #[test]
    fn tasks_without_due_dates_never_appear() {
        let month = MonthRef::new(2024, 3).unwrap();
        let task = Task::new(
            TaskId::from_ulid(Ulid::new()),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            TaskDraft::new("no due date"),
        );

        let tasks = [task];
        let grid = build(month, &tasks);
        assert!(grid.iter().all(|cell| cell.tasks.is_empty()));
    }
}
