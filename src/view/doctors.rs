//! Doctor roster screen: searchable, paginated table
//!
//! The roster owns the filter/pager contract: changing the search text
//! or the page size resets the page index to zero, and a page index
//! that outlives a shrinking filter result degrades to an empty page
//! rather than an error.

use crate::config::DashboardConfig;
use crate::filter::{page_count, paginate, search};
use crate::models::Doctor;
use itertools::Itertools;

/// View state for the doctor roster screen
#[derive(Debug, Clone)]
pub struct DoctorRosterView {
    search: String,
    page_index: usize,
    page_size: usize,
}

impl DoctorRosterView {
    /// Create the initial screen state with the given rows-per-page
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            page_index: 0,
            page_size,
        }
    }

    /// Create the initial screen state from the dashboard configuration
    #[must_use]
    pub fn with_config(config: &DashboardConfig) -> Self {
        Self::new(config.default_page_size)
    }

    /// Replace the search text; resets to the first page
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
        self.page_index = 0;
    }

    /// Change the rows-per-page; resets to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page_index = 0;
    }

    /// Move to a page
    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Current search text
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current page index
    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Current rows-per-page
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Doctors matching the search on name or specialty, in roster order
    #[must_use]
    pub fn filtered<'a>(&self, doctors: &'a [Doctor]) -> Vec<&'a Doctor> {
        search(doctors, &self.search)
    }

    /// The current page of the filtered roster
    #[must_use]
    pub fn visible_rows<'a>(&self, doctors: &'a [Doctor]) -> Vec<&'a Doctor> {
        let filtered = self.filtered(doctors);
        paginate(&filtered, self.page_index, self.page_size).to_vec()
    }

    /// Number of pages the filtered roster spans
    #[must_use]
    pub fn pages(&self, doctors: &[Doctor]) -> usize {
        page_count(self.filtered(doctors).len(), self.page_size)
    }
}

impl Default for DoctorRosterView {
    fn default() -> Self {
        Self::with_config(&DashboardConfig::default())
    }
}

/// Distinct specialties in roster order, for the add-doctor dialog
#[must_use]
pub fn specialties(doctors: &[Doctor]) -> Vec<&str> {
    doctors
        .iter()
        .map(|doctor| doctor.specialty.as_str())
        .unique()
        .collect()
}
