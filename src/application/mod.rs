//! Application layer - The two entry stores

pub mod assignment_store;
pub mod schedule_store;

pub use assignment_store::{AssignmentListing, AssignmentStore};
pub use schedule_store::{DayGroup, ScheduleStore};
