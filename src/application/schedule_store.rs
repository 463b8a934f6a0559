//! Schedule store - the collection of weekly classes

use crate::domain::{
    ClassDraft, ClassEntry, DayFilter, EntryId, EntryKind, IdGenerator, SchoolDay, SequentialIds,
};
use crate::error::{ClassboardError, Result};
use tracing::debug;

/// Classes scheduled on one day, sorted by start time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup<'a> {
    pub day: SchoolDay,
    pub classes: Vec<&'a ClassEntry>,
}

/// Owns every scheduled class
pub struct ScheduleStore {
    entries: Vec<ClassEntry>,
    ids: Box<dyn IdGenerator>,
}

impl ScheduleStore {
    /// Create an empty store with sequential ids
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(SequentialIds::new()))
    }

    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        ScheduleStore {
            entries: Vec::new(),
            ids,
        }
    }

    /// Validate the draft and add it as a new class
    pub fn add(&mut self, draft: &ClassDraft) -> Result<&ClassEntry> {
        let fields = draft.validate()?;
        let id = self
            .ids
            .next_id()
            .ok_or(ClassboardError::IdsExhausted(EntryKind::Class))?;
        debug!(%id, subject = %fields.subject, day = %fields.day, "class added");

        let index = self.entries.len();
        self.entries.push(ClassEntry::new(id, fields));
        Ok(&self.entries[index])
    }

    /// Replace every field of an existing class except its id
    pub fn update(&mut self, id: EntryId, draft: &ClassDraft) -> Result<&ClassEntry> {
        let index = self.position(id)?;
        let fields = draft.validate()?;
        debug!(%id, subject = %fields.subject, "class updated");

        self.entries[index].apply(fields);
        Ok(&self.entries[index])
    }

    /// Remove a class, returning it
    pub fn delete(&mut self, id: EntryId) -> Result<ClassEntry> {
        let index = self.position(id)?;
        debug!(%id, "class deleted");
        Ok(self.entries.remove(index))
    }

    pub fn by_id(&self, id: EntryId) -> Option<&ClassEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Group classes by day in week order.
    ///
    /// Every requested day gets a group, even when it has no classes.
    pub fn list_by_day(&self, filter: DayFilter) -> Vec<DayGroup<'_>> {
        filter
            .days()
            .into_iter()
            .map(|day| {
                let mut classes: Vec<&ClassEntry> =
                    self.entries.iter().filter(|entry| entry.day == day).collect();
                classes.sort_by_key(|entry| (entry.start_time, entry.id));
                DayGroup { day, classes }
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: EntryId) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(ClassboardError::NotFound {
                kind: EntryKind::Class,
                id,
            })
    }
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}
