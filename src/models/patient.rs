//! Patient queue entity model
//!
//! Two queue shapes appear on the screens: the clinic workspace lists
//! patients by appointment time, while the exam room lists them by
//! patient and visit codes. Both share the name/status pair the search
//! and status rules operate on.

use crate::models::types::QueueStatus;
use serde::{Deserialize, Serialize};

/// One patient in the clinic workspace queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Row identifier
    pub id: u32,
    /// Patient full name
    pub name: String,
    /// Appointment time label, passed through unchanged (e.g. "09:00 AM")
    pub time: String,
    /// Position in today's queue
    pub status: QueueStatus,
}

/// One patient in the exam-room registration queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRoomPatient {
    /// Row identifier
    pub id: u32,
    /// Patient full name as registered
    pub name: String,
    /// Age label, passed through unchanged (e.g. "47 tuổi")
    pub age: String,
    /// Hospital record code
    pub patient_code: String,
    /// Code of today's visit
    pub visit_code: String,
    /// Position in today's queue
    pub status: QueueStatus,
}
