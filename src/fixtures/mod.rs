//! Static fixture data for the dashboard screens
//!
//! The mock records the screens render, embedded as JSON and parsed at
//! load time. These loaders are the crate's only fallible surface; the
//! derivation rules themselves never fail.

use crate::error::{DashboardError, Result};
use crate::models::{
    DepartmentShare, DispenseLine, Doctor, ExamRoomPatient, Medicine, Patient, Prescription,
    VisitDay,
};
use serde::de::DeserializeOwned;

fn load<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<Vec<T>> {
    let records: Vec<T> =
        serde_json::from_str(json).map_err(|source| DashboardError::Fixture { name, source })?;
    log::debug!("loaded {} {} fixture records", records.len(), name);
    Ok(records)
}

/// The pharmacy inventory (8 medicines)
///
/// # Errors
/// Returns an error if the embedded JSON does not match the model.
pub fn medicines() -> Result<Vec<Medicine>> {
    load("medicine", include_str!("data/medicines.json"))
}

/// The doctor roster (8 doctors)
///
/// # Errors
/// Returns an error if the embedded JSON does not match the model.
pub fn doctors() -> Result<Vec<Doctor>> {
    load("doctor", include_str!("data/doctors.json"))
}

/// Issued prescriptions for the pharmacy browser (4 prescriptions)
///
/// # Errors
/// Returns an error if the embedded JSON does not match the model.
pub fn prescriptions() -> Result<Vec<Prescription>> {
    load("prescription", include_str!("data/prescriptions.json"))
}

/// Today's clinic workspace queue (6 patients)
///
/// # Errors
/// Returns an error if the embedded JSON does not match the model.
pub fn clinic_queue() -> Result<Vec<Patient>> {
    load("clinic queue", include_str!("data/clinic_queue.json"))
}

/// Today's exam-room registration queue (11 patients)
///
/// # Errors
/// Returns an error if the embedded JSON does not match the model.
pub fn exam_room_queue() -> Result<Vec<ExamRoomPatient>> {
    load("exam-room queue", include_str!("data/exam_room_queue.json"))
}

/// The week of visit counts charted on the overview dashboard
///
/// # Errors
/// Returns an error if the embedded JSON does not match the model.
pub fn weekly_visits() -> Result<Vec<VisitDay>> {
    load("weekly visits", include_str!("data/weekly_visits.json"))
}

/// Department shares for the overview pie chart
///
/// # Errors
/// Returns an error if the embedded JSON does not match the model.
pub fn department_shares() -> Result<Vec<DepartmentShare>> {
    load(
        "department shares",
        include_str!("data/department_shares.json"),
    )
}

/// The exam room's current dispense table (6 lines)
///
/// # Errors
/// Returns an error if the embedded JSON does not match the model.
pub fn dispense_lines() -> Result<Vec<DispenseLine>> {
    load("dispense lines", include_str!("data/dispense_lines.json"))
}
