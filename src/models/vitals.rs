//! Vitals entity model
//!
//! Heart rate, blood pressure and temperature are display pass-throughs;
//! only weight and height feed a derivation (BMI, see
//! [`crate::algorithm::bmi`]).

use crate::algorithm;
use serde::{Deserialize, Serialize};

/// A set of vitals recorded during an examination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// Heart rate label, passed through unchanged (e.g. "72")
    pub heart_rate: String,
    /// Blood pressure label, passed through unchanged (e.g. "120/80")
    pub blood_pressure: String,
    /// Temperature label, passed through unchanged (e.g. "98.6")
    pub temperature: String,
    /// Body weight in kilograms; BMI is undefined unless positive
    pub weight_kg: f64,
    /// Height in centimetres; BMI is undefined unless positive
    pub height_cm: f64,
}

impl Vitals {
    /// BMI for this record, if weight and height are both usable
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        algorithm::bmi(self.weight_kg, self.height_cm)
    }
}
