//! Overview dashboard derivations
//!
//! The dashboard has no interactive state; its cards and charts are
//! straight derivations over the current snapshots.

use crate::algorithm::stock::{StockBands, StockStatus};
use crate::models::{DepartmentShare, Medicine, VisitDay};

/// Medicines classified below `Good`, paired with their status
///
/// Inventory order is preserved so the alert list matches the table.
#[must_use]
pub fn low_stock_alerts(
    medicines: &[Medicine],
    bands: StockBands,
) -> Vec<(&Medicine, StockStatus)> {
    medicines
        .iter()
        .map(|medicine| (medicine, bands.classify(medicine.quantity, medicine.min_quantity)))
        .filter(|(_, status)| status.needs_restock())
        .collect()
}

/// Total visits across the charted week
#[must_use]
pub fn total_visits(series: &[VisitDay]) -> u32 {
    series.iter().map(|day| day.visits).sum()
}

/// The day with the most visits; earliest wins a tie
#[must_use]
pub fn busiest_day(series: &[VisitDay]) -> Option<&VisitDay> {
    series
        .iter()
        .fold(None, |best: Option<&VisitDay>, day| match best {
            Some(current) if current.visits >= day.visits => Some(current),
            _ => Some(day),
        })
}

/// Each department's percentage of the total share value
///
/// An all-zero series yields zero percentages rather than a division
/// error.
#[must_use]
pub fn department_percentages(shares: &[DepartmentShare]) -> Vec<(&str, f64)> {
    let total: u32 = shares.iter().map(|share| share.value).sum();
    shares
        .iter()
        .map(|share| {
            let pct = if total == 0 {
                0.0
            } else {
                f64::from(share.value) / f64::from(total) * 100.0
            };
            (share.name.as_str(), pct)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<VisitDay> {
        [("Mon", 45), ("Tue", 52), ("Wed", 48), ("Thu", 61), ("Fri", 55), ("Sat", 38), ("Sun", 25)]
            .into_iter()
            .map(|(day, visits)| VisitDay {
                day: day.to_string(),
                visits,
                revenue: None,
            })
            .collect()
    }

    #[test]
    fn busiest_day_picks_the_peak() {
        let week = series();
        assert_eq!(busiest_day(&week).map(|d| d.day.as_str()), Some("Thu"));
        assert_eq!(total_visits(&week), 324);
    }

    #[test]
    fn busiest_day_tie_goes_to_the_earliest() {
        let mut week = series();
        week[5].visits = 61; // match Thursday
        assert_eq!(busiest_day(&week).map(|d| d.day.as_str()), Some("Thu"));
    }

    #[test]
    fn zero_total_share_yields_zero_percentages() {
        let shares = vec![DepartmentShare {
            name: "Cardiology".to_string(),
            value: 0,
        }];
        assert_eq!(department_percentages(&shares), vec![("Cardiology", 0.0)]);
    }
}
