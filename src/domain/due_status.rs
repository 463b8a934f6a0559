//! Due-date badge derivation

use chrono::NaiveDate;

/// Number of days ahead that still counts as "soon"
pub const SOON_WINDOW_DAYS: i64 = 3;

/// Urgency of a due-date badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Completed work carries no badge
    None,
    Normal,
    Soon,
    Overdue,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Normal => "normal",
            Severity::Soon => "soon",
            Severity::Overdue => "overdue",
        }
    }
}

/// Badge text plus its severity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueStatus {
    pub label: String,
    pub severity: Severity,
}

impl DueStatus {
    fn new(label: impl Into<String>, severity: Severity) -> Self {
        DueStatus {
            label: label.into(),
            severity,
        }
    }

    pub fn is_badge(&self) -> bool {
        self.severity != Severity::None
    }
}

/// Whole calendar days from `today` until `due` (negative when past)
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    due.signed_duration_since(today).num_days()
}

/// Derive the badge for an assignment due on `due`
pub fn due_status(due: NaiveDate, completed: bool, today: NaiveDate) -> DueStatus {
    if completed {
        return DueStatus::new("", Severity::None);
    }

    let days = days_until(due, today);
    match days {
        d if d < 0 => {
            let overdue = d.abs();
            let unit = if overdue == 1 { "day" } else { "days" };
            DueStatus::new(format!("{} {} overdue", overdue, unit), Severity::Overdue)
        }
        0 => DueStatus::new("Due today", Severity::Soon),
        1 => DueStatus::new("Due tomorrow", Severity::Soon),
        d if d <= SOON_WINDOW_DAYS => DueStatus::new(format!("{} days left", d), Severity::Soon),
        d => DueStatus::new(format!("{} days left", d), Severity::Normal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_boundaries_around_today() {
        let today = date(2024, 3, 10);
        let cases = [
            (date(2024, 3, 8), "2 days overdue", Severity::Overdue),
            (date(2024, 3, 9), "1 day overdue", Severity::Overdue),
            (date(2024, 3, 10), "Due today", Severity::Soon),
            (date(2024, 3, 11), "Due tomorrow", Severity::Soon),
            (date(2024, 3, 12), "2 days left", Severity::Soon),
            (date(2024, 3, 13), "3 days left", Severity::Soon),
            (date(2024, 3, 14), "4 days left", Severity::Normal),
        ];

        for (due, label, severity) in cases {
            let status = due_status(due, false, today);
            assert_eq!(status.label, label, "due {}", due);
            assert_eq!(status.severity, severity, "due {}", due);
        }
    }

    #[test]
    fn test_completed_has_no_badge() {
        let today = date(2024, 3, 10);
        let status = due_status(date(2024, 1, 1), true, today);
        assert_eq!(status.severity, Severity::None);
        assert!(status.label.is_empty());
        assert!(!status.is_badge());
    }

    #[test]
    fn test_days_until_crosses_month_and_leap_day() {
        assert_eq!(days_until(date(2024, 3, 1), date(2024, 2, 28)), 2);
        assert_eq!(days_until(date(2024, 2, 28), date(2024, 3, 1)), -2);
        assert_eq!(days_until(date(2025, 1, 1), date(2024, 12, 31)), 1);
    }

    #[test]
    fn test_far_overdue_is_plural() {
        let status = due_status(date(2024, 1, 1), false, date(2024, 3, 10));
        assert_eq!(status.label, "69 days overdue");
    }

    #[test]
    fn test_severity_names() {
        assert_eq!(Severity::Overdue.as_str(), "overdue");
        assert_eq!(Severity::None.as_str(), "none");
    }
}
