use super::task::{Task, TaskId};

/// A seven-phase sample project plan, used by `gantry demo` and tests.
pub fn sample_tasks() -> Vec<Task> {
    fn task(id: i64, name: &str, ps: &str, pe: &str, as_: &str, ae: &str) -> Task {
        Task {
            id: TaskId::Number(id),
            name: name.to_string(),
            planned_start_date: ps.to_string(),
            planned_end_date: pe.to_string(),
            actual_start_date: as_.to_string(),
            actual_end_date: ae.to_string(),
        }
    }

    vec![
        task(
            1,
            "Project Kickoff",
            "2025-01-01T00:00:00",
            "2025-01-05T23:59:59",
            "2025-01-01T00:00:00",
            "2025-01-07T23:59:59",
        ),
        task(
            2,
            "Requirements Gathering",
            "2025-01-06T00:00:00",
            "2025-01-20T23:59:59",
            "2025-01-08T00:00:00",
            "2025-01-22T23:59:59",
        ),
        task(
            3,
            "Design Phase",
            "2025-01-21T00:00:00",
            "2025-02-10T23:59:59",
            "2025-01-23T00:00:00",
            "2025-02-08T23:59:59",
        ),
        task(
            4,
            "Development",
            "2025-02-11T00:00:00",
            "2025-03-15T23:59:59",
            "2025-02-09T00:00:00",
            "2025-03-20T23:59:59",
        ),
        task(
            5,
            "Testing",
            "2025-03-16T00:00:00",
            "2025-04-05T23:59:59",
            "2025-03-21T00:00:00",
            "2025-04-10T23:59:59",
        ),
        task(
            6,
            "Deployment",
            "2025-04-06T00:00:00",
            "2025-04-15T23:59:59",
            "2025-04-11T00:00:00",
            "2025-04-18T23:59:59",
        ),
        task(
            7,
            "Post-Launch Support",
            "2025-04-16T00:00:00",
            "2025-05-15T23:59:59",
            "2025-04-19T00:00:00",
            "",
        ),
    ]
}
