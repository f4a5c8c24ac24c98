//! Expiry classification for inventory batches
//!
//! Pure function of the batch expiry date and a caller-supplied
//! reference date; the crate never reads the wall clock itself.

use crate::config::DashboardConfig;
use chrono::NaiveDate;
use std::fmt;

/// Default number of days ahead at which a batch counts as expiring soon
pub const DEFAULT_EXPIRY_WARNING_DAYS: i64 = 90;

/// Shelf-life state of an inventory batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpiryStatus {
    /// Past its expiry date; must not be dispensed
    Expired,
    /// Expires within the warning window
    ExpiringSoon,
    /// Safely within its shelf life
    Ok,
}

impl ExpiryStatus {
    /// Get the display label for this status
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::ExpiringSoon => "Expiring soon",
            Self::Ok => "OK",
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Warning window ahead of the expiry date
#[derive(Debug, Clone, Copy)]
pub struct ExpiryWindow {
    /// Days ahead of expiry at which a batch counts as expiring soon
    pub warning_days: i64,
}

impl Default for ExpiryWindow {
    fn default() -> Self {
        Self {
            warning_days: DEFAULT_EXPIRY_WARNING_DAYS,
        }
    }
}

impl From<&DashboardConfig> for ExpiryWindow {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            warning_days: config.expiry_warning_days,
        }
    }
}

impl ExpiryWindow {
    /// Classify an expiry date against a reference date
    #[must_use]
    pub fn classify(self, expiry_date: NaiveDate, today: NaiveDate) -> ExpiryStatus {
        expiry_status(expiry_date, today, self.warning_days)
    }
}

/// Classify an expiry date against a reference date and warning window
///
/// The expiry date itself is still dispensable; the batch is `Expired`
/// from the following day. A negative window behaves like zero.
#[must_use]
pub fn expiry_status(expiry_date: NaiveDate, today: NaiveDate, warning_days: i64) -> ExpiryStatus {
    if today > expiry_date {
        return ExpiryStatus::Expired;
    }
    let days_left = (expiry_date - today).num_days();
    if days_left <= warning_days.max(0) {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Ok
    }
}
