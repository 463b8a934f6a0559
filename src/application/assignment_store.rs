//! Assignment store - homework entries, search and due badges

use crate::domain::{
    due_status, AssignmentDraft, AssignmentEntry, DueStatus, EntryId, EntryKind, IdGenerator,
    SequentialIds,
};
use crate::error::{ClassboardError, Result};
use crate::infrastructure::{Clock, SystemClock};
use chrono::NaiveDate;
use tracing::debug;

/// Result of [`AssignmentStore::list`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentListing<'a> {
    /// Matching entries, incomplete first, then by due date
    pub entries: Vec<&'a AssignmentEntry>,
    /// Incomplete entries in the whole store, ignoring the search
    pub pending_count: usize,
}

/// Owns every assignment
pub struct AssignmentStore {
    entries: Vec<AssignmentEntry>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl AssignmentStore {
    /// Create an empty store with sequential ids and the system clock
    pub fn new() -> Self {
        Self::with_parts(Box::new(SequentialIds::new()), Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self::with_parts(Box::new(SequentialIds::new()), clock)
    }

    pub fn with_parts(ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        AssignmentStore {
            entries: Vec::new(),
            ids,
            clock,
        }
    }

    /// Validate the draft and add it as a new, incomplete assignment
    pub fn add(&mut self, draft: &AssignmentDraft) -> Result<&AssignmentEntry> {
        let fields = draft.validate()?;
        let id = self
            .ids
            .next_id()
            .ok_or(ClassboardError::IdsExhausted(EntryKind::Assignment))?;
        debug!(%id, title = %fields.title, due = %fields.due_date, "assignment added");

        let index = self.entries.len();
        self.entries.push(AssignmentEntry::new(id, fields));
        Ok(&self.entries[index])
    }

    /// Flip the completed flag; nothing else changes
    pub fn toggle_complete(&mut self, id: EntryId) -> Result<&AssignmentEntry> {
        let index = self.position(id)?;
        let entry = &mut self.entries[index];
        entry.completed = !entry.completed;
        debug!(%id, completed = entry.completed, "assignment toggled");
        Ok(&self.entries[index])
    }

    /// Remove an assignment, returning it
    pub fn delete(&mut self, id: EntryId) -> Result<AssignmentEntry> {
        let index = self.position(id)?;
        debug!(%id, "assignment deleted");
        Ok(self.entries.remove(index))
    }

    pub fn by_id(&self, id: EntryId) -> Option<&AssignmentEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Search by subject or title and sort for display.
    ///
    /// An empty query matches everything; any other query, whitespace
    /// included, is matched as given. The pending count always covers the
    /// full collection.
    pub fn list(&self, query: &str) -> AssignmentListing<'_> {
        let needle = query.to_lowercase();

        let mut entries: Vec<&AssignmentEntry> = self
            .entries
            .iter()
            .filter(|entry| query.is_empty() || entry.matches(&needle))
            .collect();
        entries.sort_by_key(|entry| (entry.completed, entry.due_date, entry.id));

        AssignmentListing {
            entries,
            pending_count: self.pending_count(),
        }
    }

    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.completed).count()
    }

    /// Badge for a due date relative to the store's clock
    pub fn due_status(&self, due: NaiveDate, completed: bool) -> DueStatus {
        due_status(due, completed, self.today())
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssignmentEntry> {
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
                kind: EntryKind::Assignment,
                id,
            })
    }
}

impl Default for AssignmentStore {
    fn default() -> Self {
        Self::new()
    }
}
