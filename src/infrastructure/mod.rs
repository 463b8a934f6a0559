//! Infrastructure layer - Configuration and the date source

pub mod clock;
pub mod config;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
