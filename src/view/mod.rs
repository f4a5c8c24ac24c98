//! Per-screen view state and derived rows
//!
//! Each screen's transient UI state (search text, page index, selected
//! row, form drafts) is an explicit value here, passed with the record
//! snapshots into pure derivation methods on every interaction. There
//! is no global state and no cached derivation anywhere in this module.

pub mod clinic;
pub mod dashboard;
pub mod doctors;
pub mod exam_room;
pub mod pharmacy;

pub use clinic::{ClinicView, DraftMedicine, VitalsDraft};
pub use doctors::DoctorRosterView;
pub use exam_room::ExamRoomView;
pub use pharmacy::PharmacyView;
