//! Configuration for the dashboard rule set.

use crate::error::{DashboardError, Result};

/// Tunable parameters for the derivation rules
///
/// The defaults reproduce the behaviour of the original screens. The
/// stock thresholds are percentage cut-offs on the quantity/min-quantity
/// ratio; deployments with clinically validated bands override them here
/// rather than in code.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Ratio (percent) below which stock is classified as Critical
    pub critical_below_pct: f64,
    /// Ratio (percent) below which stock is classified as Low
    pub low_below_pct: f64,
    /// Days ahead of the expiry date at which a medicine counts as expiring soon
    pub expiry_warning_days: i64,
    /// Rows per page for paginated tables
    pub default_page_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            critical_below_pct: 20.0,
            low_below_pct: 50.0,
            expiry_warning_days: 90,
            default_page_size: 5,
        }
    }
}

impl DashboardConfig {
    /// Check that the configuration is internally consistent
    ///
    /// # Errors
    /// Returns an error if the thresholds are not ordered
    /// (critical < low), non-finite, or negative, or if the page size
    /// is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.critical_below_pct.is_finite() || !self.low_below_pct.is_finite() {
            return Err(DashboardError::Config(
                "stock thresholds must be finite".to_string(),
            ));
        }
        if self.critical_below_pct < 0.0 || self.critical_below_pct >= self.low_below_pct {
            return Err(DashboardError::Config(format!(
                "stock thresholds must satisfy 0 <= critical < low, got {} and {}",
                self.critical_below_pct, self.low_below_pct
            )));
        }
        if self.expiry_warning_days < 0 {
            return Err(DashboardError::Config(format!(
                "expiry warning window must be non-negative, got {}",
                self.expiry_warning_days
            )));
        }
        if self.default_page_size == 0 {
            return Err(DashboardError::Config(
                "default page size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
