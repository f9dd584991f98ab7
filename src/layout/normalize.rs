use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{NormalizedTask, Task};

use super::date::parse_date_local;

/// Normalize a task collection: parse every date field, fall back from empty
/// actual dates to the planned ones, and order each range so `start <= end`.
///
/// A task where any required field fails to parse is dropped; there is no
/// error reporting here beyond omission (see [`unparseable_fields`] for the
/// diagnostic view used by `gantry check`).
pub fn normalize_tasks(tasks: &[Task]) -> Vec<NormalizedTask> {
    tasks.iter().filter_map(normalize_task).collect()
}

/// Normalize a single task, or `None` if any of the four resolved date fields
/// fails to parse. Planned dates must parse even when an actual date
/// overrides them.
pub fn normalize_task(task: &Task) -> Option<NormalizedTask> {
    let planned_start = parse_date_local(&task.planned_start_date).ok()?;
    let planned_end = parse_date_local(&task.planned_end_date).ok()?;
    let actual_start = resolve_actual(&task.actual_start_date, planned_start)?;
    let actual_end = resolve_actual(&task.actual_end_date, planned_end)?;

    // Reversed input ranges are swapped rather than rejected
    let (start, end) = if actual_start <= actual_end {
        (actual_start, actual_end)
    } else {
        (actual_end, actual_start)
    };

    Some(NormalizedTask {
        task: task.clone(),
        start,
        end,
    })
}

/// Empty actual date → planned date. An actual date genuinely equal to the
/// planned one is indistinguishable from this fallback; callers cannot tell
/// the two apart.
fn resolve_actual(value: &str, planned: NaiveDate) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        Some(planned)
    } else {
        parse_date_local(value).ok()
    }
}

/// A date field that failed to parse, with the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub value: String,
}

/// Which date fields of `task` would cause it to be dropped during
/// normalization. Empty actual dates are not issues (they fall back).
pub fn unparseable_fields(task: &Task) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    let mut check = |field: &'static str, value: &str| {
        if parse_date_local(value).is_err() {
            issues.push(FieldIssue {
                field,
                value: value.to_string(),
            });
        }
    };

    check("plannedStartDate", &task.planned_start_date);
    check("plannedEndDate", &task.planned_end_date);
    if !task.actual_start_date.trim().is_empty() {
        check("actualStartDate", &task.actual_start_date);
    }
    if !task.actual_end_date.trim().is_empty() {
        check("actualEndDate", &task.actual_end_date);
    }
    issues
}
