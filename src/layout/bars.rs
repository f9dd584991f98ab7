use serde::Serialize;

use crate::model::NormalizedTask;

use super::calendar::Day;
use super::date::fmt_date;

/// Bars never render narrower than this fraction of the timeline, no matter
/// how short the task.
pub const MIN_BAR_WIDTH_PERCENT: f64 = 8.0;

/// A task's horizontal geometry against the flat day sequence, as percentages
/// of total timeline width, plus its display labels. Purely descriptive; the
/// renderer decides what a percent maps to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub left_percent: f64,
    pub width_percent: f64,
    /// Number of day columns the bar covers, never zero.
    pub day_span: usize,
    pub start_label: String,
    pub end_label: String,
    pub tooltip: String,
}

/// Map a normalized task onto the flat day sequence.
///
/// The start column is the first day on or after the task's start; the end
/// column is the first day on or after its end. A task reaching outside the
/// displayed window is clamped to the window edges rather than rejected — the
/// calendar is built to cover every task, so this only matters if the two
/// ever disagree.
pub fn bar_for_task(task: &NormalizedTask, days: &[Day]) -> Bar {
    let total = days.len().max(1);

    let start_index = days
        .iter()
        .position(|d| d.date >= task.start)
        .unwrap_or(0);
    let end_index = days
        .iter()
        .position(|d| d.date >= task.end)
        .unwrap_or(days.len().saturating_sub(1));

    let day_span = (end_index + 1).saturating_sub(start_index).max(1);

    let left = (start_index as f64 / total as f64) * 100.0;
    let width = (day_span as f64 / total as f64) * 100.0;

    let start_label = fmt_date(task.start);
    let end_label = fmt_date(task.end);
    let tooltip = format!(
        "{}\nStart: {}\nEnd: {}\nDuration: {} day{}",
        task.name(),
        start_label,
        end_label,
        day_span,
        if day_span == 1 { "" } else { "s" },
    );

    Bar {
        left_percent: left.max(0.0),
        width_percent: width.max(MIN_BAR_WIDTH_PERCENT),
        day_span,
        start_label,
        end_label,
        tooltip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::calendar::{day_grid, months_between};
    use crate::model::{Task, TaskId};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ntask(name: &str, start: NaiveDate, end: NaiveDate) -> NormalizedTask {
        NormalizedTask {
            task: Task {
                id: TaskId::Number(0),
                name: name.to_string(),
                planned_start_date: String::new(),
                planned_end_date: String::new(),
                actual_start_date: String::new(),
                actual_end_date: String::new(),
            },
            start,
            end,
        }
    }

    fn january() -> Vec<Day> {
        day_grid(&months_between(date(2025, 1, 1), date(2025, 1, 1)))
    }

    #[test]
    fn bar_covers_inclusive_day_range() {
        let days = january();
        let bar = bar_for_task(&ntask("t", date(2025, 1, 5), date(2025, 1, 9)), &days);
        assert_eq!(bar.day_span, 5);
        // Columns 4..=8 of 31
        assert_eq!(bar.left_percent, 4.0 / 31.0 * 100.0);
        assert_eq!(bar.width_percent, 5.0 / 31.0 * 100.0);
    }

    #[test]
    fn single_day_task_still_spans_one_column() {
        let days = january();
        let bar = bar_for_task(&ntask("t", date(2025, 1, 10), date(2025, 1, 10)), &days);
        assert_eq!(bar.day_span, 1);
        assert!(bar.width_percent >= MIN_BAR_WIDTH_PERCENT);
    }

    #[test]
    fn narrow_bars_are_floored_at_minimum_width() {
        // Two days out of 31 is ~6.5%, below the 8% floor
        let days = january();
        let bar = bar_for_task(&ntask("t", date(2025, 1, 1), date(2025, 1, 2)), &days);
        assert_eq!(bar.day_span, 2);
        assert_eq!(bar.width_percent, MIN_BAR_WIDTH_PERCENT);
    }

    #[test]
    fn task_before_window_clamps_to_first_column() {
        let days = january();
        let bar = bar_for_task(&ntask("t", date(2024, 12, 1), date(2024, 12, 10)), &days);
        // Both searches hit the first displayed day
        assert_eq!(bar.left_percent, 0.0);
        assert_eq!(bar.day_span, 1);
    }

    #[test]
    fn task_past_window_clamps_to_last_column() {
        let days = january();
        let bar = bar_for_task(&ntask("t", date(2025, 1, 20), date(2025, 3, 10)), &days);
        assert_eq!(bar.day_span, 31 - 19);
        let right = bar.left_percent + bar.width_percent;
        assert!((right - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_day_sequence_degrades_to_a_unit_bar() {
        let bar = bar_for_task(&ntask("t", date(2025, 1, 1), date(2025, 1, 5)), &[]);
        assert_eq!(bar.left_percent, 0.0);
        assert_eq!(bar.day_span, 1);
        assert_eq!(bar.width_percent, 100.0);
    }

    #[test]
    fn tooltip_carries_name_labels_and_duration() {
        let days = january();
        let bar = bar_for_task(
            &ntask("Kickoff", date(2025, 1, 1), date(2025, 1, 7)),
            &days,
        );
        assert_eq!(bar.start_label, "Jan 1, 2025");
        assert_eq!(bar.end_label, "Jan 7, 2025");
        assert_eq!(
            bar.tooltip,
            "Kickoff\nStart: Jan 1, 2025\nEnd: Jan 7, 2025\nDuration: 7 days"
        );
    }

    #[test]
    fn one_day_duration_is_singular() {
        let days = january();
        let bar = bar_for_task(&ntask("t", date(2025, 1, 3), date(2025, 1, 3)), &days);
        assert!(bar.tooltip.ends_with("Duration: 1 day"));
    }
}
