pub mod bars;
pub mod calendar;
pub mod date;
pub mod normalize;
pub mod spans;

pub use bars::*;
pub use calendar::*;
pub use date::*;
pub use normalize::*;
pub use spans::*;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{NormalizedTask, Task};

/// Everything the renderer needs, derived from the input task collection in
/// one pass: normalized tasks, the month window, the flat day sequence, the
/// per-month header spans, and one bar per task (same order as `tasks`).
///
/// `build` is a pure function of its inputs: rebuilding from the same tasks
/// and `today` yields identical output, so callers may rebuild whenever the
/// input changes and cache the result in between. Nothing here is mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartModel {
    pub tasks: Vec<NormalizedTask>,
    pub grid: CalendarGrid,
    pub month_spans: Vec<MonthSpan>,
    pub bars: Vec<Bar>,
}

impl ChartModel {
    pub fn build(input: &[Task], today: NaiveDate) -> ChartModel {
        let tasks = normalize_tasks(input);
        let grid = CalendarGrid::for_tasks(&tasks, today);
        let month_spans = month_spans(&grid.months, &grid.days);
        let bars = tasks.iter().map(|t| bar_for_task(t, &grid.days)).collect();
        ChartModel {
            tasks,
            grid,
            month_spans,
            bars,
        }
    }

    /// True when every input task was dropped (or there were none). The
    /// renderer shows an explicit empty state instead of a bare grid.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
