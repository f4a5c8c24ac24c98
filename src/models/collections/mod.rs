//! Collection types for dashboard models
//!
//! Screens hold their records as ordered lists and look rows up by id
//! when the user selects one. [`Roster`] keeps insertion order — the
//! search and pagination rules both promise to preserve it — and keeps
//! an id index on the side for selection lookups.

use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A trait for models that can be stored in a [`Roster`]
pub trait Record {
    /// Type of the record identifier
    type Id: Eq + Hash + Clone + Debug;

    /// Get the record identifier
    fn id(&self) -> Self::Id;
}

/// An ordered collection of records with id lookup
///
/// Unlike a map-backed store, iteration order is always the insertion
/// order of the underlying fixture data, so filtered and paginated
/// views stay stable between renders.
#[derive(Debug, Clone)]
pub struct Roster<T: Record> {
    records: Vec<T>,
    index: FxHashMap<T::Id, usize>,
}

impl<T: Record> Roster<T> {
    /// Create an empty roster
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Create a roster from an ordered list of records
    #[must_use]
    pub fn from_records(records: Vec<T>) -> Self {
        let mut roster = Self::new();
        for record in records {
            roster.push(record);
        }
        roster
    }

    /// Append a record, replacing any earlier record with the same id
    pub fn push(&mut self, record: T) {
        let id = record.id();
        if let Some(&position) = self.index.get(&id) {
            self.records[position] = record;
        } else {
            self.index.insert(id, self.records.len());
            self.records.push(record);
        }
    }

    /// Get a record by its identifier
    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// All records in insertion order
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Records matching a predicate, in insertion order
    pub fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Number of records in the roster
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the roster is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> Default for Roster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> FromIterator<T> for Roster<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl Record for crate::models::Medicine {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for crate::models::Doctor {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for crate::models::Patient {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for crate::models::ExamRoomPatient {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for crate::models::Prescription {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
