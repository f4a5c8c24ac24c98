//! Case-insensitive substring search over record lists
//!
//! The matching rule is shared across record kinds and parameterized by
//! a field-extraction rule, either as a closure ([`search_by`]) or as
//! the [`Searchable`] trait the models implement. Results preserve the
//! original order and are never deduplicated; an empty query matches
//! every record.

use crate::models::{Doctor, ExamRoomPatient, Medicine, Patient};

/// A record that exposes its searchable text fields
pub trait Searchable {
    /// Fields the search query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Check whether any searchable field contains the query,
    /// case-insensitively
    fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Filter records whose extracted fields contain the query
///
/// Generic over the extraction rule so the same filter serves doctors
/// (name or specialty), medicines (name) and patients (name).
pub fn search_by<'a, T, F>(records: &'a [T], query: &str, extract: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Vec<&str>,
{
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            extract(record)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Filter records using their [`Searchable`] implementation
pub fn search<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records.iter().filter(|record| record.matches(query)).collect()
}

impl Searchable for Doctor {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.specialty]
    }
}

impl Searchable for Medicine {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

impl Searchable for Patient {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

impl Searchable for ExamRoomPatient {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}
