//! Medicine inventory entity model
//!
//! This module contains the Medicine model, representing one row of the
//! pharmacy inventory. Stock sufficiency and expiry classification for
//! these records live in [`crate::algorithm`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One batch of a medicine held in the pharmacy inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    /// Row identifier
    pub id: u32,
    /// Display name including strength, e.g. "Amoxicillin 500mg"
    pub name: String,
    /// Batch number printed on the packaging
    pub batch_no: String,
    /// Dispensing unit (pill, capsule, bottle)
    pub unit: String,
    /// Units currently on hand
    pub quantity: u32,
    /// Reorder threshold; must be greater than zero
    pub min_quantity: u32,
    /// Date after which the batch must not be dispensed
    pub expiry_date: NaiveDate,
}

impl Medicine {
    /// Check whether the batch is past its expiry date
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expiry_date
    }
}
