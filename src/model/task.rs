use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque task identifier. The upstream schema allows both numbers and
/// strings; uniqueness is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A scheduled task as it appears in the tasks file.
///
/// Dates are strings in one of the accepted textual formats (see
/// `layout::date::parse_date_local`). Actual dates are optional: an empty or
/// missing value falls back to the corresponding planned date during
/// normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub planned_start_date: String,
    pub planned_end_date: String,
    #[serde(default)]
    pub actual_start_date: String,
    #[serde(default)]
    pub actual_end_date: String,
}

/// A task whose date fields have been parsed and reconciled into an ordered
/// local-date range. `start <= end` always holds; reversed inputs are swapped
/// during normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedTask {
    #[serde(flatten)]
    pub task: Task,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl NormalizedTask {
    pub fn id(&self) -> &TaskId {
        &self.task.id
    }

    pub fn name(&self) -> &str {
        &self.task.name
    }
}
