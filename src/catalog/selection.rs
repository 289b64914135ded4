//! Selection state machine for the detail overlay.
//!
//! ```text
//!            select(id)                 select(other)
//!  Closed ───────────────▶ Open(id) ───────────────▶ Open(other)
//!    ▲                        │
//!    └──────── close() ───────┘
//! ```
//!
//! Only the identifier is stored. The record itself is looked up in the current
//! raw list every time the selection is resolved, so a refreshed list is always
//! reflected and a vanished record resolves to [`Resolution::NotFound`].

use crate::domain::{Record, RecordId};

/// Lookup-by-identifier over a record collection.
pub trait RecordLookup {
    /// Returns the record with the given id, if present.
    fn find_by_id(&self, id: &RecordId) -> Option<&Record>;
}

impl RecordLookup for [Record] {
    fn find_by_id(&self, id: &RecordId) -> Option<&Record> {
        self.iter().find(|record| &record.id == id)
    }
}

impl RecordLookup for Vec<Record> {
    fn find_by_id(&self, id: &RecordId) -> Option<&Record> {
        self.as_slice().find_by_id(id)
    }
}

/// Which record, if any, is shown in detail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(RecordId),
}

/// Result of resolving a selection against the current records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'r> {
    Closed,
    Found(&'r Record),
    /// The selected id is not in the current list; nothing is displayed.
    NotFound,
}

impl Selection {
    /// Opens (or retargets) the selection on `id`.
    pub fn select(&mut self, id: RecordId) {
        tracing::debug!(record_id = %id, previous = ?self, "selection opened");
        *self = Self::Open(id);
    }

    /// Closes the selection. A no-op when already closed.
    pub fn close(&mut self) {
        if let Self::Open(id) = self {
            tracing::debug!(record_id = %id, "selection closed");
        }
        *self = Self::Closed;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub const fn selected_id(&self) -> Option<&RecordId> {
        match self {
            Self::Open(id) => Some(id),
            Self::Closed => None,
        }
    }

    /// Resolves against the current records.
    ///
    /// # Examples
    ///
    /// ```
    /// use podshelf::catalog::{Resolution, Selection};
    /// use podshelf::domain::{Record, RecordId};
    ///
    /// let records = vec![Record::new("1", "One")];
    /// let mut selection = Selection::default();
    ///
    /// selection.select(RecordId::new("1"));
    /// assert!(matches!(selection.resolve(records.as_slice()), Resolution::Found(r) if r.id.as_str() == "1"));
    ///
    /// selection.select(RecordId::new("gone"));
    /// assert_eq!(selection.resolve(records.as_slice()), Resolution::NotFound);
    /// ```
    #[must_use]
    pub fn resolve<'r, L>(&self, records: &'r L) -> Resolution<'r>
    where
        L: RecordLookup + ?Sized,
    {
        match self {
            Self::Closed => Resolution::Closed,
            Self::Open(id) => records
                .find_by_id(id)
                .map_or(Resolution::NotFound, Resolution::Found),
        }
    }
}
