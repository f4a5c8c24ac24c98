//! Body-mass-index computation
//!
//! BMI is weight in kilograms over height in metres squared, rounded to
//! one decimal place. Missing or non-positive measurements yield no
//! value rather than an error; the absence of a reading is a normal
//! state for a form that is still being filled in.

/// Sentinel shown in place of a BMI when it is undefined
pub const BMI_UNAVAILABLE: &str = "-";

/// Compute BMI from weight and height, rounded to one decimal place
///
/// Returns `None` when either measurement is non-positive, NaN or
/// infinite.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !(weight_kg.is_finite() && height_cm.is_finite()) {
        return None;
    }
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);
    Some((value * 10.0).round() / 10.0)
}

/// Format a BMI for display, using [`BMI_UNAVAILABLE`] when undefined
#[must_use]
pub fn bmi_display(weight_kg: f64, height_cm: f64) -> String {
    match bmi(weight_kg, height_cm) {
        Some(value) => format!("{value:.1}"),
        None => BMI_UNAVAILABLE.to_string(),
    }
}
