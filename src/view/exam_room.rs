//! Exam-room registration screen: patient lookup and dispense table
//!
//! Patient names are matched as typed; lowercasing is Unicode-aware but
//! diacritics are not folded, so "NGUYỄN" is found by "nguyễn", not by
//! "nguyen".

use crate::filter::search;
use crate::models::{DispenseLine, ExamRoomPatient};

/// View state for the exam-room registration screen
#[derive(Debug, Clone, Default)]
pub struct ExamRoomView {
    search: String,
    selected_patient: Option<u32>,
}

impl ExamRoomView {
    /// Create the initial screen state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the patient search text
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    /// Current patient search text
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Select a patient from the queue
    pub fn select_patient(&mut self, id: u32) {
        self.selected_patient = Some(id);
    }

    /// Patients matching the search on name, in queue order
    #[must_use]
    pub fn visible_patients<'a>(&self, queue: &'a [ExamRoomPatient]) -> Vec<&'a ExamRoomPatient> {
        search(queue, &self.search)
    }

    /// The currently selected patient, if still in the queue
    #[must_use]
    pub fn selected_patient<'a>(&self, queue: &'a [ExamRoomPatient]) -> Option<&'a ExamRoomPatient> {
        self.selected_patient
            .and_then(|id| queue.iter().find(|patient| patient.id == id))
    }
}

/// Total units to dispense across a prescription's lines
#[must_use]
pub fn units_to_dispense(lines: &[DispenseLine]) -> u32 {
    lines.iter().map(DispenseLine::units_to_dispense).sum()
}
