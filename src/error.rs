//! Error types for classboard

use crate::domain::{EntryId, EntryKind};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the classboard application
#[derive(Debug, Error)]
pub enum ClassboardError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntryKind, id: EntryId },

    #[error("No {0} ids left to hand out")]
    IdsExhausted(EntryKind),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot read script {}: {source}", .path.display())]
    Script {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl ClassboardError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ClassboardError::Config(_) | ClassboardError::TomlDeserialize(_) => 2,
            ClassboardError::Validation(_) => 3,
            ClassboardError::NotFound { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ClassboardError::Validation(msg) if msg.contains("End time") => {
                format!(
                    "{}\n\n\
                    Times use the 24-hour HH:MM form, e.g. --start 09:00 --end 10:30",
                    msg
                )
            }
            ClassboardError::Validation(msg) if msg.contains("required") => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Classes need --subject, --day, --start and --end\n\
                    • Assignments need --subject, --title and --due",
                    msg
                )
            }
            ClassboardError::NotFound { kind, id } => {
                let listing = match kind {
                    EntryKind::Class => "schedule",
                    EntryKind::Assignment => "assignments",
                };
                format!(
                    "{} not found: {}\n\n\
                    Suggestions:\n\
                    • Run '{}' to see the current ids\n\
                    • Ids are never reused once an entry is deleted",
                    kind, id, listing
                )
            }
            ClassboardError::InvalidCommand(msg) => {
                format!("{}\n\nType 'help' to see the available commands", msg)
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ClassboardError
pub type Result<T> = std::result::Result<T, ClassboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ClassboardError::Config("x".to_string()).exit_code(), 2);
        assert_eq!(ClassboardError::Validation("x".to_string()).exit_code(), 3);
        let err = ClassboardError::NotFound {
            kind: EntryKind::Class,
            id: EntryId::new(7),
        };
        assert_eq!(err.exit_code(), 4);
        assert_eq!(
            ClassboardError::InvalidCommand("x".to_string()).exit_code(),
            1
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = ClassboardError::NotFound {
            kind: EntryKind::Assignment,
            id: EntryId::new(12),
        };
        assert_eq!(err.to_string(), "Assignment not found: 12");
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'assignments'"));
        assert!(msg.contains("never reused"));
    }

    #[test]
    fn test_ids_exhausted_display() {
        let err = ClassboardError::IdsExhausted(EntryKind::Class);
        assert_eq!(err.to_string(), "No Class ids left to hand out");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_time_order_suggestion() {
        let err = ClassboardError::Validation("End time must be after start time".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("HH:MM"));
    }

    #[test]
    fn test_missing_fields_suggestion() {
        let err = ClassboardError::Validation("Missing required fields: subject".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("--subject, --day, --start and --end"));
    }

    #[test]
    fn test_invalid_command_suggestion() {
        let err = ClassboardError::InvalidCommand("unknown command 'foo'".to_string());
        assert!(err.display_with_suggestions().contains("help"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = ClassboardError::Config("bad file".to_string());
        assert_eq!(
            err.display_with_suggestions(),
            "Configuration error: bad file"
        );
    }
}
