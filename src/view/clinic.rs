//! Clinic workspace: patient queue, vitals form and prescription draft
//!
//! The form drafts live here as plain strings, exactly as the user
//! typed them; parsing happens at derivation time so a half-filled form
//! is a normal state, not an error.

use crate::algorithm::bmi::{BMI_UNAVAILABLE, bmi_display};
use crate::models::Patient;

/// The vitals form as typed, before any parsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VitalsDraft {
    /// Heart rate field
    pub heart_rate: String,
    /// Blood pressure field
    pub blood_pressure: String,
    /// Temperature field
    pub temperature: String,
    /// Weight field, kilograms
    pub weight: String,
    /// Height field, centimetres
    pub height: String,
}

impl VitalsDraft {
    /// BMI derived from the weight and height fields
    ///
    /// Unparseable or non-positive entries give the not-available
    /// sentinel, never an error.
    #[must_use]
    pub fn bmi(&self) -> String {
        match (
            self.weight.trim().parse::<f64>(),
            self.height.trim().parse::<f64>(),
        ) {
            (Ok(weight), Ok(height)) => bmi_display(weight, height),
            _ => BMI_UNAVAILABLE.to_string(),
        }
    }
}

/// One medicine line on the in-progress prescription
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftMedicine {
    /// Line identifier within this draft
    pub id: u32,
    /// Medicine display name
    pub name: String,
    /// Dose per intake
    pub dosage: String,
    /// Intakes per day
    pub frequency: String,
    /// Course length
    pub duration: String,
}

/// View state for the clinic examination workspace
#[derive(Debug, Clone, Default)]
pub struct ClinicView {
    selected_patient: Option<u32>,
    /// Vitals form draft
    pub vitals: VitalsDraft,
    /// Selected ICD diagnosis, if any
    pub diagnosis: Option<String>,
    /// Free-text medical history
    pub medical_history: String,
    lines: Vec<DraftMedicine>,
    next_line_id: u32,
}

impl ClinicView {
    /// Create the initial screen state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a patient from the queue
    pub fn select_patient(&mut self, id: u32) {
        self.selected_patient = Some(id);
    }

    /// The currently selected patient, if still in the queue
    #[must_use]
    pub fn selected_patient<'a>(&self, queue: &'a [Patient]) -> Option<&'a Patient> {
        self.selected_patient
            .and_then(|id| queue.iter().find(|patient| patient.id == id))
    }

    /// Add a medicine line to the prescription draft
    ///
    /// The line is only accepted when all four fields are non-empty,
    /// matching the add button's enablement on the screen. Returns
    /// whether the line was added.
    pub fn add_line(&mut self, name: &str, dosage: &str, frequency: &str, duration: &str) -> bool {
        if name.is_empty() || dosage.is_empty() || frequency.is_empty() || duration.is_empty() {
            return false;
        }
        self.next_line_id += 1;
        self.lines.push(DraftMedicine {
            id: self.next_line_id,
            name: name.to_string(),
            dosage: dosage.to_string(),
            frequency: frequency.to_string(),
            duration: duration.to_string(),
        });
        true
    }

    /// Remove a medicine line from the draft by its id
    pub fn remove_line(&mut self, id: u32) {
        self.lines.retain(|line| line.id != id);
    }

    /// Current prescription draft lines, in the order they were added
    #[must_use]
    pub fn lines(&self) -> &[DraftMedicine] {
        &self.lines
    }

    /// BMI derived from the vitals draft
    #[must_use]
    pub fn bmi(&self) -> String {
        self.vitals.bmi()
    }
}
