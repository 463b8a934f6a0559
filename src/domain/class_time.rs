//! Time of day for class start and end

use chrono::NaiveTime;
use std::fmt;
use std::str::FromStr;

/// A time of day in zero-padded 24-hour `HH:MM` form.
///
/// Ordering matches the lexical ordering of the `HH:MM` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassTime(NaiveTime);

impl FromStr for ClassTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || b.is_ascii_digit());

        if !well_formed {
            return Err(format!("Invalid time: '{}'. Expected HH:MM", s));
        }

        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map(ClassTime)
            .map_err(|_| format!("Invalid time: '{}'. Expected HH:MM", s))
    }
}

impl fmt::Display for ClassTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}
