use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::model::NormalizedTask;

use super::date::{add_months, days_in_month, start_of_month};

/// One column of the timeline: a single calendar day. A day's position in
/// [`CalendarGrid::days`] is its global column index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    /// True iff this is the first day of its month (column boundary).
    pub month_start: bool,
    /// 1-based day within the month.
    pub day_of_month: u32,
    /// Index into the month sequence.
    pub month_index: usize,
    /// First day of the owning month.
    pub month: NaiveDate,
}

/// The displayed month window and its flat day sequence. Always whole months:
/// the window runs from the first day of the earliest month to the last day of
/// the latest, never a partial month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    /// First day of every displayed month, consecutive, in order.
    pub months: Vec<NaiveDate>,
    /// Every displayed day in column order.
    pub days: Vec<Day>,
}

impl CalendarGrid {
    /// Build the minimal whole-month window covering every task range.
    ///
    /// With no tasks the window defaults to three months anchored at the
    /// first day of the month containing `today`. `today` is injected rather
    /// than read from the clock so layout is deterministic.
    pub fn for_tasks(tasks: &[NormalizedTask], today: NaiveDate) -> CalendarGrid {
        let (min, max) = match date_extent(tasks) {
            Some(extent) => extent,
            None => {
                let first = start_of_month(today);
                (first, add_months(first, 2))
            }
        };

        let months = months_between(min, max);
        let days = day_grid(&months);
        CalendarGrid { months, days }
    }

    /// Total number of displayed day columns.
    pub fn total_days(&self) -> usize {
        self.days.len()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }
}

/// Earliest start and latest end across the collection, or `None` if empty.
fn date_extent(tasks: &[NormalizedTask]) -> Option<(NaiveDate, NaiveDate)> {
    let min = tasks.iter().map(|t| t.start).min()?;
    let max = tasks.iter().map(|t| t.end).max()?;
    Some((min, max))
}

/// Every first-of-month from `start`'s month through `end`'s month inclusive.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    let mut current = start_of_month(start);
    let last = start_of_month(end);
    while current <= last {
        months.push(current);
        current = add_months(current, 1);
    }
    months
}

/// Expand a month sequence into the flat day sequence: for each month in
/// order, every day 1..=days_in_month in ascending date order.
pub fn day_grid(months: &[NaiveDate]) -> Vec<Day> {
    let mut days = Vec::new();
    for (month_index, &month) in months.iter().enumerate() {
        for day_of_month in 1..=days_in_month(month) {
            if let Some(date) = month.with_day(day_of_month) {
                days.push(Day {
                    date,
                    month_start: day_of_month == 1,
                    day_of_month,
                    month_index,
                    month,
                });
            }
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Task, TaskId};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ntask(start: NaiveDate, end: NaiveDate) -> NormalizedTask {
        NormalizedTask {
            task: Task {
                id: TaskId::Number(0),
                name: "t".to_string(),
                planned_start_date: String::new(),
                planned_end_date: String::new(),
                actual_start_date: String::new(),
                actual_end_date: String::new(),
            },
            start,
            end,
        }
    }

    #[test]
    fn empty_collection_defaults_to_three_months_from_today() {
        let grid = CalendarGrid::for_tasks(&[], date(2025, 7, 19));
        assert_eq!(
            grid.months,
            vec![date(2025, 7, 1), date(2025, 8, 1), date(2025, 9, 1)]
        );
        // Jul 31 + Aug 31 + Sep 30
        assert_eq!(grid.total_days(), 92);
        assert_eq!(grid.first_date(), Some(date(2025, 7, 1)));
        assert_eq!(grid.last_date(), Some(date(2025, 9, 30)));
    }

    #[test]
    fn window_covers_whole_months_only() {
        let tasks = [ntask(date(2025, 1, 15), date(2025, 3, 2))];
        let grid = CalendarGrid::for_tasks(&tasks, date(2099, 1, 1));
        assert_eq!(
            grid.months,
            vec![date(2025, 1, 1), date(2025, 2, 1), date(2025, 3, 1)]
        );
        assert_eq!(grid.first_date(), Some(date(2025, 1, 1)));
        assert_eq!(grid.last_date(), Some(date(2025, 3, 31)));
    }

    #[test]
    fn single_month_task_yields_single_month() {
        let tasks = [ntask(date(2025, 2, 3), date(2025, 2, 20))];
        let grid = CalendarGrid::for_tasks(&tasks, date(2099, 1, 1));
        assert_eq!(grid.months, vec![date(2025, 2, 1)]);
        assert_eq!(grid.total_days(), 28);
    }

    #[test]
    fn extent_spans_all_tasks() {
        let tasks = [
            ntask(date(2025, 3, 10), date(2025, 3, 12)),
            ntask(date(2024, 12, 20), date(2025, 1, 4)),
            ntask(date(2025, 2, 1), date(2025, 4, 2)),
        ];
        let grid = CalendarGrid::for_tasks(&tasks, date(2099, 1, 1));
        assert_eq!(grid.months.first(), Some(&date(2024, 12, 1)));
        assert_eq!(grid.months.last(), Some(&date(2025, 4, 1)));
        assert_eq!(grid.months.len(), 5);
    }

    #[test]
    fn day_grid_concatenates_months_in_order() {
        let months = vec![date(2024, 12, 1), date(2025, 1, 1)];
        let days = day_grid(&months);
        assert_eq!(days.len(), 62);
        assert_eq!(days[0].date, date(2024, 12, 1));
        assert!(days[0].month_start);
        assert_eq!(days[30].date, date(2024, 12, 31));
        assert!(!days[30].month_start);
        assert_eq!(days[31].date, date(2025, 1, 1));
        assert!(days[31].month_start);
        assert_eq!(days[31].month_index, 1);
        assert_eq!(days[31].month, date(2025, 1, 1));
        assert_eq!(days[61].date, date(2025, 1, 31));
    }

    #[test]
    fn day_grid_dates_are_strictly_ascending() {
        let months = months_between(date(2024, 11, 5), date(2025, 2, 5));
        let days = day_grid(&months);
        for pair in days.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn months_between_is_inclusive_of_both_ends() {
        assert_eq!(
            months_between(date(2025, 1, 31), date(2025, 1, 1)),
            vec![date(2025, 1, 1)]
        );
        assert_eq!(
            months_between(date(2024, 11, 15), date(2025, 2, 3)),
            vec![
                date(2024, 11, 1),
                date(2024, 12, 1),
                date(2025, 1, 1),
                date(2025, 2, 1)
            ]
        );
    }
}
