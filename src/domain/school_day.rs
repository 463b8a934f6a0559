//! School days and the day filter used by the schedule view

use std::fmt;
use std::str::FromStr;

/// A day on which classes can be scheduled (Monday through Saturday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchoolDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl SchoolDay {
    /// All school days in display order
    pub const ALL: [SchoolDay; 6] = [
        SchoolDay::Monday,
        SchoolDay::Tuesday,
        SchoolDay::Wednesday,
        SchoolDay::Thursday,
        SchoolDay::Friday,
        SchoolDay::Saturday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SchoolDay::Monday => "Monday",
            SchoolDay::Tuesday => "Tuesday",
            SchoolDay::Wednesday => "Wednesday",
            SchoolDay::Thursday => "Thursday",
            SchoolDay::Friday => "Friday",
            SchoolDay::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for SchoolDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchoolDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(SchoolDay::Monday),
            "tuesday" | "tue" => Ok(SchoolDay::Tuesday),
            "wednesday" | "wed" => Ok(SchoolDay::Wednesday),
            "thursday" | "thu" => Ok(SchoolDay::Thursday),
            "friday" | "fri" => Ok(SchoolDay::Friday),
            "saturday" | "sat" => Ok(SchoolDay::Saturday),
            _ => Err(format!(
                "Invalid day: '{}'. Valid days are: Monday, Tuesday, Wednesday, Thursday, Friday, Saturday",
                s
            )),
        }
    }
}

/// Which days the schedule view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Day(SchoolDay),
}

impl DayFilter {
    pub fn days(&self) -> Vec<SchoolDay> {
        match self {
            DayFilter::All => SchoolDay::ALL.to_vec(),
            DayFilter::Day(day) => vec![*day],
        }
    }
}

impl FromStr for DayFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(DayFilter::All)
        } else {
            s.parse().map(DayFilter::Day)
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Day(day) => write!(f, "{}", day),
        }
    }
}
