//! Scheduled classes and the raw form data they are built from

use crate::domain::{ClassTime, EntryId, SchoolDay};
use crate::error::{ClassboardError, Result};

/// Color used when a class is saved without one
pub const DEFAULT_CLASS_COLOR: &str = "#3b82f6";

/// Raw class fields as supplied by a form, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDraft {
    pub subject: String,
    pub code: String,
    pub instructor: String,
    pub room: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
}

/// Validated, typed class fields (everything except the id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFields {
    pub subject: String,
    pub code: String,
    pub instructor: String,
    pub room: String,
    pub day: SchoolDay,
    pub start_time: ClassTime,
    pub end_time: ClassTime,
    pub color: String,
}

impl ClassDraft {
    /// Check required fields and time ordering, producing typed fields.
    pub fn validate(&self) -> Result<ClassFields> {
        let subject = self.subject.trim();
        let day = self.day.trim();
        let start = self.start_time.trim();
        let end = self.end_time.trim();

        let missing: Vec<&str> = [
            ("subject", subject),
            ("day", day),
            ("start time", start),
            ("end time", end),
        ]
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

        let day: SchoolDay = day.parse().map_err(ClassboardError::Validation)?;
        let start_time: ClassTime = start.parse().map_err(ClassboardError::Validation)?;
        let end_time: ClassTime = end.parse().map_err(ClassboardError::Validation)?;

        if start_time >= end_time {
            return Err(ClassboardError::Validation(
                "End time must be after start time".to_string(),
            ));
        }

        let color = match self.color.trim() {
            "" => DEFAULT_CLASS_COLOR.to_string(),
            color => color.to_string(),
        };

        Ok(ClassFields {
            subject: subject.to_string(),
            code: self.code.trim().to_string(),
            instructor: self.instructor.trim().to_string(),
            room: self.room.trim().to_string(),
            day,
            start_time,
            end_time,
            color,
        })
    }
}

/// A class on the weekly schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    pub id: EntryId,
    pub subject: String,
    pub code: String,
    pub instructor: String,
    pub room: String,
    pub day: SchoolDay,
    pub start_time: ClassTime,
    pub end_time: ClassTime,
    pub color: String,
}

impl ClassEntry {
    pub fn new(id: EntryId, fields: ClassFields) -> Self {
        ClassEntry {
            id,
            subject: fields.subject,
            code: fields.code,
            instructor: fields.instructor,
            room: fields.room,
            day: fields.day,
            start_time: fields.start_time,
            end_time: fields.end_time,
            color: fields.color,
        }
    }

    /// Replace every mutable field, keeping the id
    pub fn apply(&mut self, fields: ClassFields) {
        *self = ClassEntry::new(self.id, fields);
    }
}

impl From<&ClassEntry> for ClassDraft {
    fn from(entry: &ClassEntry) -> Self {
        ClassDraft {
            subject: entry.subject.clone(),
            code: entry.code.clone(),
            instructor: entry.instructor.clone(),
            room: entry.room.clone(),
            day: entry.day.to_string(),
            start_time: entry.start_time.to_string(),
            end_time: entry.end_time.to_string(),
            color: entry.color.clone(),
        }
    }
}
