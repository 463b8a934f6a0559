//! Domain layer - Entries, validation and derived views

pub mod assignment;
pub mod class_entry;
pub mod class_time;
pub mod due_status;
pub mod ids;
pub mod priority;
pub mod school_day;

pub use assignment::{AssignmentDraft, AssignmentEntry, AssignmentFields};
pub use class_entry::{ClassDraft, ClassEntry, ClassFields, DEFAULT_CLASS_COLOR};
pub use class_time::ClassTime;
pub use due_status::{days_until, due_status, DueStatus, Severity};
pub use ids::{EntryId, EntryKind, IdGenerator, SequentialIds};
pub use priority::Priority;
pub use school_day::{DayFilter, SchoolDay};
