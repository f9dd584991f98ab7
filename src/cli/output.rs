use chrono::NaiveDate;
use serde::Serialize;

use crate::layout::FieldIssue;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct LayoutJson {
    pub total_days: usize,
    pub months: Vec<MonthSpanJson>,
    pub tasks: Vec<TaskLayoutJson>,
}

#[derive(Serialize)]
pub struct MonthSpanJson {
    pub label: String,
    pub month: NaiveDate,
    pub start_index: usize,
    pub days: usize,
}

#[derive(Serialize)]
pub struct TaskLayoutJson {
    pub id: String,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub start_label: String,
    pub end_label: String,
    pub day_span: usize,
    pub left_percent: f64,
    pub width_percent: f64,
}

#[derive(Serialize)]
pub struct TasksJson {
    pub total: usize,
    pub dropped: usize,
    pub tasks: Vec<NormalizedTaskJson>,
}

#[derive(Serialize)]
pub struct NormalizedTaskJson {
    pub id: String,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Serialize)]
pub struct CheckJson {
    pub checked: usize,
    pub dropped: Vec<DroppedTaskJson>,
}

#[derive(Serialize)]
pub struct DroppedTaskJson {
    pub id: String,
    pub name: String,
    pub fields: Vec<FieldIssue>,
}
