//! Ranking items by aggregated pick frequency.
//!
//! Raw sales records are summed per item name, sorted by total descending,
//! and truncated to the top `n`. Equal totals are ordered by name so the
//! ranking is reproducible.

use std::collections::HashMap;

/// An item with its aggregated frequency.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedItem {
    pub name: String,
    pub frequency: f64,
}

/// Default number of items slotted per run.
pub const DEFAULT_TOP_N: usize = 50;

/// Aggregates `(name, quantity)` records and keeps the `n` most frequent.
///
/// Non-finite quantities are skipped, like missing cells in a sales export.
/// Negative quantities (returns) are summed as-is.
///
/// ```
/// use u_slotting::slotting::rank_top_n;
///
/// let records = vec![("beer", 5.0), ("wine", 2.0), ("beer", 4.0), ("soda", 7.0)];
/// let ranked = rank_top_n(records, 2);
///
/// assert_eq!(ranked[0].name, "beer");
/// assert_eq!(ranked[0].frequency, 9.0);
/// assert_eq!(ranked[1].name, "soda");
/// ```
pub fn rank_top_n<I, S>(records: I, n: usize) -> Vec<RankedItem>
where
    I: IntoIterator<Item = (S, f64)>,
    S: Into<String>,
{
    let mut totals: HashMap<String, f64> = HashMap::new();
    for (name, quantity) in records {
        let entry = totals.entry(name.into()).or_insert(0.0);
        if quantity.is_finite() {
            *entry += quantity;
        }
    }

    let mut ranked: Vec<RankedItem> = totals
        .into_iter()
        .map(|(name, frequency)| RankedItem { name, frequency })
        .collect();

    ranked.sort_by(|a, b| {
        b.frequency
            .partial_cmp(&a.frequency)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(n);
    ranked
}
