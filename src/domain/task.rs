//! Task record.

use serde::{Deserialize, Serialize};

/// Caller-assigned task identifier.
pub type TaskId = i64;

/// A single bar on the Gantt chart.
///
/// The JSON field names match the front end (`durationDays` is camel-cased),
/// and the SQL column names match the JSON ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Identifier, expected unique within a collection.
    pub id: TaskId,

    /// Display label.
    pub name: String,

    /// Start date in `YYYY-MM-DD` form.
    pub start: String,

    /// Length of the task in days.
    #[serde(rename = "durationDays")]
    #[sqlx(rename = "durationDays")]
    pub duration_days: i64,

    /// Bar colour, usually a hex code such as `#3B82F6`.
    pub color: String,

    /// Display ordering, lowest first.
    pub priority: i64,
}

impl Task {
    /// Create a new task.
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        start: impl Into<String>,
        duration_days: i64,
        color: impl Into<String>,
        priority: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start: start.into(),
            duration_days,
            color: color.into(),
            priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_json_field_names() {
        let task = Task::new(7, "Design", "2026-02-01", 3, "#AAAAAA", 2);
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Design",
                "start": "2026-02-01",
                "durationDays": 3,
                "color": "#AAAAAA",
                "priority": 2
            })
        );
    }

    #[test]
    fn test_task_rejects_snake_case_duration() {
        let result = serde_json::from_value::<Task>(json!({
            "id": 1,
            "name": "x",
            "start": "2026-01-01",
            "duration_days": 3,
            "color": "#000000",
            "priority": 1
        }));
        assert!(result.is_err());
    }
}
