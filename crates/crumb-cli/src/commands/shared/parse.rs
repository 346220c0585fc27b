//! Parsing for user-typed argument values.

use chrono::{DateTime, NaiveDate, Utc};

use crumb_core::enums::{TaskPriority, TaskStatus};

/// Parse a task status name as the backend spells it.
pub fn task_status(value: &str) -> anyhow::Result<TaskStatus> {
    match value {
        "pending" => Ok(TaskStatus::Pending),
        "in_progress" => Ok(TaskStatus::InProgress),
        "completed" => Ok(TaskStatus::Completed),
        "on_hold" => Ok(TaskStatus::OnHold),
        "overdue" => Ok(TaskStatus::Overdue),
        other => anyhow::bail!(
            "invalid status '{other}' (expected pending, in_progress, completed, on_hold)"
        ),
    }
}

pub fn task_priority(value: &str) -> anyhow::Result<TaskPriority> {
    match value {
        "low" => Ok(TaskPriority::Low),
        "medium" => Ok(TaskPriority::Medium),
        "high" => Ok(TaskPriority::High),
        other => anyhow::bail!("invalid priority '{other}' (expected low, medium, high)"),
    }
}

/// Accepts RFC 3339, or a bare `YYYY-MM-DD` taken as end of that day UTC so a
/// task finished any time on its due day still counts as on time.
pub fn due_date(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("invalid date '{value}' (expected RFC 3339 or YYYY-MM-DD)"))?;
    let end_of_day = date
        .and_hms_opt(23, 59, 59)
        .ok_or_else(|| anyhow::anyhow!("invalid date '{value}'"))?;
    Ok(end_of_day.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_names_match_backend_spelling() {
        assert_eq!(task_status("in_progress").unwrap(), TaskStatus::InProgress);
        assert_eq!(task_status("on_hold").unwrap(), TaskStatus::OnHold);
        assert!(task_status("in-progress").is_err());
        assert!(task_status("done").is_err());
    }

    #[test]
    fn priority_rejects_unknown_values() {
        assert_eq!(task_priority("high").unwrap(), TaskPriority::High);
        assert!(task_priority("urgent").is_err());
    }

    #[test]
    fn bare_date_becomes_end_of_day_utc() {
        let parsed = due_date("2024-03-10").expect("parses");
        assert_eq!(parsed.day(), 10);
        assert_eq!(parsed.hour(), 23);
        assert_eq!(parsed.minute(), 59);
    }

    #[test]
    fn rfc3339_is_kept_exact() {
        let parsed = due_date("2024-03-10T12:30:00+02:00").expect("parses");
        assert_eq!(parsed.hour(), 10, "normalized to UTC");
    }

    #[test]
    fn garbage_date_is_rejected() {
        assert!(due_date("next tuesday").is_err());
    }
}
