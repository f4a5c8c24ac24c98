//! Chart series models for the overview dashboards

use serde::{Deserialize, Serialize};

/// Visits (and takings) recorded for one day of the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitDay {
    /// Day label as rendered on the axis, e.g. "Mon"
    pub day: String,
    /// Number of patient visits
    pub visits: u32,
    /// Revenue for the day, where the screen charts it
    #[serde(default)]
    pub revenue: Option<u32>,
}

/// One department's slice of the visit-share pie chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentShare {
    /// Department name
    pub name: String,
    /// Raw share value; percentages are derived, not stored
    pub value: u32,
}
