//! Generic filtering framework for the dashboard screens
//!
//! Search and pagination compose in a fixed order: pagination always
//! operates on an already-filtered list. The view-state types in
//! [`crate::view`] own that contract and reset the page index whenever
//! the filter changes.

pub mod page;
pub mod search;

pub use page::{page_count, paginate};
pub use search::{Searchable, search, search_by};
