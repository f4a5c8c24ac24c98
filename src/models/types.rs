//! Shared status enums for the dashboard models
//!
//! These are the semantic categories the rendering surface turns into
//! chips and colors; the rule set never deals in presentation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a patient in the day's examination queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueueStatus {
    /// Waiting to be called
    Waiting,
    /// Currently with the doctor
    Examining,
    /// Examination finished
    Done,
}

impl QueueStatus {
    /// Get the display label for this status
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Examining => "Examining",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Employment status of a doctor on the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoctorStatus {
    /// On active duty
    Active,
    /// Temporarily away
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl DoctorStatus {
    /// Get the display label for this status
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
        }
    }
}

impl fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
