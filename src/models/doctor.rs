//! Doctor roster entity model

use crate::models::types::DoctorStatus;
use serde::{Deserialize, Serialize};

/// One doctor on the hospital roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Row identifier
    pub id: u32,
    /// Full name including title, e.g. "Dr. Sarah Johnson"
    pub name: String,
    /// Initials shown in the avatar badge
    pub initials: String,
    /// Medical specialty
    pub specialty: String,
    /// Contact phone number
    pub phone: String,
    /// Contact email address
    pub email: String,
    /// Current employment status
    pub status: DoctorStatus,
}

impl Doctor {
    /// Check whether the doctor is available for scheduling
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == DoctorStatus::Active
    }
}
