//! Entry identifiers and their generation

use std::fmt;
use std::str::FromStr;

/// Identifier of a class or assignment entry.
///
/// Ids increase with creation order inside a store and are never handed out
/// twice by the same generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u64);

impl EntryId {
    pub fn new(value: u64) -> Self {
        EntryId(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(EntryId)
            .map_err(|_| format!("Invalid id: '{}'. Ids are positive integers", s))
    }
}

/// Which collection an entry lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Class,
    Assignment,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Class => write!(f, "Class"),
            EntryKind::Assignment => write!(f, "Assignment"),
        }
    }
}

/// Source of fresh entry ids
pub trait IdGenerator {
    /// `None` once the generator has no unused id left
    fn next_id(&mut self) -> Option<EntryId>;
}

/// Monotonic counter starting at 1.
///
/// After handing out `u64::MAX` the generator is exhausted and yields `None`
/// rather than wrapping around to an id it already gave out.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: Option<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        SequentialIds { next: Some(first) }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Option<EntryId> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(EntryId(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_increase() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(), Some(EntryId::new(1)));
        assert_eq!(ids.next_id(), Some(EntryId::new(2)));
        assert_eq!(ids.next_id(), Some(EntryId::new(3)));
    }

    #[test]
    fn test_starting_at() {
        let mut ids = SequentialIds::starting_at(100);
        assert_eq!(ids.next_id(), Some(EntryId::new(100)));
        assert_eq!(ids.next_id(), Some(EntryId::new(101)));
    }

    #[test]
    fn test_exhausted_generator_stops() {
        let mut ids = SequentialIds::starting_at(u64::MAX - 1);
        assert_eq!(ids.next_id(), Some(EntryId::new(u64::MAX - 1)));
        assert_eq!(ids.next_id(), Some(EntryId::new(u64::MAX)));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!("42".parse::<EntryId>().unwrap(), EntryId::new(42));
        assert_eq!(" 7 ".parse::<EntryId>().unwrap(), EntryId::new(7));
        assert!("abc".parse::<EntryId>().is_err());
        assert!("-1".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EntryKind::Class.to_string(), "Class");
        assert_eq!(EntryKind::Assignment.to_string(), "Assignment");
    }
}
