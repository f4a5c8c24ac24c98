//! Pure derivation rules for the dashboard screens
//!
//! Every function here is total, stateless and idempotent: identical
//! inputs always produce identical outputs, edge cases map to defined
//! sentinels rather than errors, and nothing is cached between calls.

pub mod bmi;
pub mod expiry;
pub mod stock;

pub use bmi::{BMI_UNAVAILABLE, bmi, bmi_display};
pub use expiry::{DEFAULT_EXPIRY_WARNING_DAYS, ExpiryStatus, ExpiryWindow, expiry_status};
pub use stock::{StockBands, StockStatus, stock_status};
