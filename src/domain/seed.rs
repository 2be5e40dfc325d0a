//! Default collection written on first run.

use chrono::{Datelike, Days, NaiveDate, Utc};

use super::Task;

/// Date format used by `Task::start`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the five default tasks, anchored at January 1st of next year.
#[must_use]
pub fn default_tasks() -> Vec<Task> {
    let today = Utc::now().date_naive();
    let anchor = NaiveDate::from_ymd_opt(today.year() + 1, 1, 1).unwrap_or(today);
    default_tasks_from(anchor)
}

/// Build the five default tasks starting at `anchor`.
///
/// Colours follow the priority legend: P1 red, P2 orange, P3 amber, P4 blue,
/// P5 green.
#[must_use]
pub fn default_tasks_from(anchor: NaiveDate) -> Vec<Task> {
    let day = |offset: u64| (anchor + Days::new(offset)).format(DATE_FORMAT).to_string();

    vec![
        Task::new(1, "Requirements Gathering", day(0), 7, "#3B82F6", 4),
        Task::new(2, "System Design", day(7), 5, "#F97316", 2),
        Task::new(3, "Backend Development", day(12), 12, "#EF4444", 1),
        Task::new(4, "Frontend Development", day(12), 10, "#FBBF24", 3),
        Task::new(5, "Integration Testing", day(24), 8, "#10B981", 5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tasks_from_anchor() {
        let anchor = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let tasks = default_tasks_from(anchor);

        assert_eq!(tasks.len(), 5);
        let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let starts: Vec<&str> = tasks.iter().map(|t| t.start.as_str()).collect();
        assert_eq!(
            starts,
            vec![
                "2027-01-01",
                "2027-01-08",
                "2027-01-13",
                "2027-01-13",
                "2027-01-25"
            ]
        );

        assert_eq!(tasks[2].priority, 1);
        assert_eq!(tasks[2].color, "#EF4444");
        assert_eq!(tasks[4].duration_days, 8);
    }

    #[test]
    fn test_default_tasks_start_next_year() {
        let next_year = Utc::now().year() + 1;
        let tasks = default_tasks();
        assert_eq!(tasks[0].start, format!("{next_year}-01-01"));
    }
}
