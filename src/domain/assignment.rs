//! Homework assignments and the raw form data they are built from

use crate::domain::{EntryId, Priority};
use crate::error::{ClassboardError, Result};
use chrono::NaiveDate;

/// Date format accepted for due dates
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw assignment fields as supplied by a form, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentDraft {
    pub subject: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: String,
}

/// Validated, typed assignment fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentFields {
    pub subject: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
}

impl AssignmentDraft {
    /// Check required fields and parse the due date and priority.
    ///
    /// An empty priority means [`Priority::default`].
    pub fn validate(&self) -> Result<AssignmentFields> {
        let subject = self.subject.trim();
        let title = self.title.trim();
        let due = self.due_date.trim();

        let missing: Vec<&str> = [("subject", subject), ("title", title), ("due date", due)]
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(ClassboardError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let due_date = NaiveDate::parse_from_str(due, DUE_DATE_FORMAT).map_err(|_| {
            ClassboardError::Validation(format!("Invalid due date: '{}'. Expected YYYY-MM-DD", due))
        })?;

        let priority = match self.priority.trim() {
            "" => Priority::default(),
            value => value.parse().map_err(ClassboardError::Validation)?,
        };

        Ok(AssignmentFields {
            subject: subject.to_string(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            due_date,
            priority,
        })
    }
}

/// A homework assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentEntry {
    pub id: EntryId,
    pub subject: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub completed: bool,
}

impl AssignmentEntry {
    /// New assignments always start incomplete
    pub fn new(id: EntryId, fields: AssignmentFields) -> Self {
        AssignmentEntry {
            id,
            subject: fields.subject,
            title: fields.title,
            description: fields.description,
            due_date: fields.due_date,
            priority: fields.priority,
            completed: false,
        }
    }

    /// Case-insensitive substring match on subject or title.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.subject.to_lowercase().contains(needle) || self.title.to_lowercase().contains(needle)
    }
}
