//! Domain models for the hospital-administration dashboard
//!
//! This module contains the entity records the screens render and the
//! derivation rules consume. The rule set only reads snapshots of these
//! records; creation and mutation belong to the rendering surface.

// Entity models
pub mod doctor;
pub mod medicine;
pub mod patient;
pub mod prescription;
pub mod stats;
pub mod types;
pub mod vitals;

// Ordered, indexed record collections
pub mod collections;

// Re-export commonly used types
pub use doctor::Doctor;
pub use medicine::Medicine;
pub use patient::{ExamRoomPatient, Patient};
pub use prescription::{DispenseLine, DoseSchedule, Prescription, PrescriptionLine};
pub use stats::{DepartmentShare, VisitDay};
pub use types::{DoctorStatus, QueueStatus};
pub use vitals::Vitals;
