//! classboard - Class schedule and assignment tracker
//!
//! Keeps a weekly class schedule and a homework list in memory, with
//! day-grouped schedule views, assignment search and due-date badges.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ClassboardError;
