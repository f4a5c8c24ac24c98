//! A Rust library of pure derivation rules and in-memory models for a
//! hospital-administration dashboard.
//!
//! The rendering surface (tables, charts, navigation, styling) is an
//! external collaborator: it holds the raw record lists and the user's
//! input, calls into this crate on every change, and displays the
//! returned values. Everything here is a total, side-effect-free
//! function over the snapshot it is handed — semantic categories and
//! filtered slices out, never colors or markup.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod models;
pub mod view;

// Re-export the most common types for easier use
// Core types
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
pub use models::{Doctor, ExamRoomPatient, Medicine, Patient, Prescription, Vitals};

// Derivation rules
pub use algorithm::{
    ExpiryStatus, ExpiryWindow, StockBands, StockStatus, bmi, bmi_display, expiry_status,
    stock_status,
};

// Filtering and pagination
pub use filter::{Searchable, paginate, search, search_by};

// Screen view state
pub use view::{ClinicView, DoctorRosterView, ExamRoomView, PharmacyView};
