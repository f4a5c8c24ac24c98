//! Pharmacy screen: inventory table and prescription browser
//!
//! Holds the screen's transient state (search text, selected
//! prescription) and derives the rows the table renders. Every accessor
//! recomputes from the snapshot it is handed; nothing is cached.

use crate::algorithm::stock::{StockBands, StockStatus};
use crate::filter::search;
use crate::models::collections::Roster;
use crate::models::{Medicine, Prescription};
use itertools::Itertools;
use rustc_hash::FxHashMap;

/// View state for the pharmacy and prescription screen
#[derive(Debug, Clone, Default)]
pub struct PharmacyView {
    search: String,
    selected_prescription: Option<u32>,
}

impl PharmacyView {
    /// Create the initial screen state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the inventory search text
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    /// Current inventory search text
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Select a prescription in the browser panel
    pub fn select_prescription(&mut self, id: u32) {
        self.selected_prescription = Some(id);
    }

    /// The currently selected prescription, if it still exists
    #[must_use]
    pub fn selected_prescription<'a>(
        &self,
        prescriptions: &'a Roster<Prescription>,
    ) -> Option<&'a Prescription> {
        self.selected_prescription
            .and_then(|id| prescriptions.get(&id))
    }

    /// Medicines matching the current search, in inventory order
    #[must_use]
    pub fn visible_medicines<'a>(&self, medicines: &'a [Medicine]) -> Vec<&'a Medicine> {
        search(medicines, &self.search)
    }

    /// Visible medicines paired with their stock classification
    #[must_use]
    pub fn stock_rows<'a>(
        &self,
        medicines: &'a [Medicine],
        bands: StockBands,
    ) -> Vec<(&'a Medicine, StockStatus)> {
        self.visible_medicines(medicines)
            .into_iter()
            .map(|medicine| (medicine, bands.classify(medicine.quantity, medicine.min_quantity)))
            .collect()
    }
}

/// Count the whole inventory by stock status, search aside
#[must_use]
pub fn stock_summary(medicines: &[Medicine], bands: StockBands) -> FxHashMap<StockStatus, usize> {
    medicines
        .iter()
        .map(|medicine| bands.classify(medicine.quantity, medicine.min_quantity))
        .counts()
        .into_iter()
        .collect()
}
