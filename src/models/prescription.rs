//! Prescription entity models
//!
//! A finished prescription ties a patient and diagnosis to a list of
//! prescribed lines. Dispense quantities for scheduled doses are derived
//! with [`DoseSchedule`], the only arithmetic in this module.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One medicine line on a prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionLine {
    /// Medicine display name
    pub name: String,
    /// Dosage instruction, e.g. "1 tablet daily"
    pub dosage: String,
    /// Course length, e.g. "30 days"
    pub duration: String,
}

/// A prescription issued to a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    /// Row identifier
    pub id: u32,
    /// Patient full name
    pub patient_name: String,
    /// Hospital patient code, e.g. "PT-2847"
    pub patient_id: String,
    /// Diagnosis in plain words
    pub diagnosis: String,
    /// ICD-10 code for the diagnosis
    pub icd_code: String,
    /// Date the prescription was issued
    pub date: NaiveDate,
    /// Prescribed medicine lines
    pub lines: Vec<PrescriptionLine>,
}

/// Units to take at each slot of the day, over a course of days
///
/// The exam-room screen captures doses per slot rather than free-text
/// instructions; the dispense quantity is derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseSchedule {
    /// Units taken in the morning
    pub morning: u32,
    /// Units taken at noon
    pub noon: u32,
    /// Units taken in the afternoon
    pub afternoon: u32,
    /// Units taken in the evening
    pub evening: u32,
    /// Course length in days
    pub duration_days: u32,
}

impl DoseSchedule {
    /// Total units taken per day
    #[must_use]
    pub const fn daily_units(self) -> u32 {
        self.morning
            .saturating_add(self.noon)
            .saturating_add(self.afternoon)
            .saturating_add(self.evening)
    }

    /// Total units to dispense for the whole course
    #[must_use]
    pub const fn total_units(self) -> u32 {
        self.daily_units().saturating_mul(self.duration_days)
    }
}

/// One line of the exam-room dispense table
///
/// Unlike [`PrescriptionLine`], doses here are structured per slot so
/// the dispense quantity can be derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispenseLine {
    /// Row identifier
    pub id: u32,
    /// Medicine display name
    pub name: String,
    /// Dispensing unit
    pub unit: String,
    /// Intake instruction, e.g. before or after meals
    pub instruction: String,
    /// Structured dose schedule
    pub schedule: DoseSchedule,
}

impl DispenseLine {
    /// Units to dispense for this line's whole course
    #[must_use]
    pub const fn units_to_dispense(&self) -> u32 {
        self.schedule.total_units()
    }
}
