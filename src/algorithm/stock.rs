//! Stock sufficiency classification
//!
//! Classifies an inventory row by the ratio of quantity on hand to the
//! reorder threshold. Band lower bounds are inclusive: a ratio of
//! exactly 20% is `Low` and exactly 50% is `Good`.

use crate::config::DashboardConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sufficiency levels for an inventory row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// Stock below 20% of the reorder threshold
    Critical,
    /// Stock between 20% and 50% of the reorder threshold
    Low,
    /// Stock at or above 50% of the reorder threshold
    Good,
}

impl StockStatus {
    /// Get the display label for this status
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Low => "Low",
            Self::Good => "Good",
        }
    }

    /// Check whether this status should raise a restock alert
    #[must_use]
    pub const fn needs_restock(self) -> bool {
        !matches!(self, Self::Good)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Percentage cut-offs separating the stock bands
#[derive(Debug, Clone, Copy)]
pub struct StockBands {
    /// Ratio below which stock is Critical
    pub critical_below_pct: f64,
    /// Ratio below which stock is Low
    pub low_below_pct: f64,
}

impl Default for StockBands {
    fn default() -> Self {
        Self {
            critical_below_pct: 20.0,
            low_below_pct: 50.0,
        }
    }
}

impl From<&DashboardConfig> for StockBands {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            critical_below_pct: config.critical_below_pct,
            low_below_pct: config.low_below_pct,
        }
    }
}

impl StockBands {
    /// Classify a quantity against its reorder threshold
    ///
    /// A `min_quantity` of zero violates the inventory invariant; it is
    /// mapped to `Critical` (zero headroom) rather than dividing, so the
    /// classification stays total.
    #[must_use]
    pub fn classify(self, quantity: u32, min_quantity: u32) -> StockStatus {
        if min_quantity == 0 {
            return StockStatus::Critical;
        }
        let ratio = f64::from(quantity) / f64::from(min_quantity) * 100.0;
        if ratio < self.critical_below_pct {
            StockStatus::Critical
        } else if ratio < self.low_below_pct {
            StockStatus::Low
        } else {
            StockStatus::Good
        }
    }
}

/// Classify a quantity against its reorder threshold with the default bands
#[must_use]
pub fn stock_status(quantity: u32, min_quantity: u32) -> StockStatus {
    StockBands::default().classify(quantity, min_quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_lower_bounds_are_inclusive() {
        assert_eq!(stock_status(19, 100), StockStatus::Critical);
        assert_eq!(stock_status(20, 100), StockStatus::Low);
        assert_eq!(stock_status(49, 100), StockStatus::Low);
        assert_eq!(stock_status(50, 100), StockStatus::Good);
    }

    #[test]
    fn zero_min_quantity_maps_to_critical() {
        assert_eq!(stock_status(500, 0), StockStatus::Critical);
    }

    #[test]
    fn status_is_monotonic_in_quantity() {
        let mut previous = stock_status(0, 150);
        for quantity in 1..400 {
            let current = stock_status(quantity, 150);
            assert!(current >= previous, "status regressed at quantity {quantity}");
            previous = current;
        }
    }
}
