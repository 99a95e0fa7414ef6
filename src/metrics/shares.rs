//! Group shares: each group's percentage of the period total.
//!
//! Categories are rolled up into coarser groups (province -> region)
//! and each group's summed value is divided by the period's grand
//! total. Shares for a fixed period sum to 100 across all groups.

use crate::metrics::table::ObservationTable;
use crate::utils::error::MetricsError;
use log::debug;
use std::collections::BTreeMap;

/// Total mapping from category to group
///
/// Completeness is checked eagerly by `compute_group_shares`: every
/// category in the table must have an entry.
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    map: BTreeMap<String, String>,
}

impl Grouping {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(category, group)| (category.to_string(), group.to_string()))
                .collect(),
        }
    }

    pub fn group_of(&self, category: &str) -> Option<&str> {
        self.map.get(category).map(String::as_str)
    }

    /// All distinct groups, alphabetical
    pub fn groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = self.map.values().cloned().collect();
        groups.sort();
        groups.dedup();
        groups
    }
}

/// One (group, period, share) row
#[derive(Debug, Clone, PartialEq)]
pub struct ShareRow {
    pub group: String,
    pub period: String,

    /// Percentage of the period total, 0-100
    pub share: f64,
}

/// Derived share table, one row per (group, period)
#[derive(Debug, Clone)]
pub struct ShareTable {
    rows: Vec<ShareRow>,
}

impl ShareTable {
    pub fn rows(&self) -> &[ShareRow] {
        &self.rows
    }

    pub fn get(&self, group: &str, period: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.group == group && r.period == period)
            .map(|r| r.share)
    }

    /// Shares for one group, in period order
    pub fn series(&self, group: &str) -> Vec<(String, f64)> {
        self.rows
            .iter()
            .filter(|r| r.group == group)
            .map(|r| (r.period.clone(), r.share))
            .collect()
    }

    /// All distinct groups, alphabetical
    pub fn groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = self.rows.iter().map(|r| r.group.clone()).collect();
        groups.sort();
        groups.dedup();
        groups
    }
}

/// Compute each group's share of the period total
///
/// **Public** - main entry point for share computation
///
/// # Arguments
/// * `table` - Observation table (category granularity)
/// * `grouping` - Total category -> group mapping
///
/// # Returns
/// One row per (group, period), shares as percentages (0-100).
/// Rows are ordered period-major, groups alphabetical within a period.
///
/// # Errors
/// `MetricsError::UnmappedCategory` if any category in the table has
/// no group mapping. The check runs before any arithmetic, so a
/// partial result is never produced.
pub fn compute_group_shares(
    table: &ObservationTable,
    grouping: &Grouping,
) -> Result<ShareTable, MetricsError> {
    // Eager completeness check, before any arithmetic
    let mut group_of: BTreeMap<String, String> = BTreeMap::new();
    for category in table.categories() {
        match grouping.group_of(&category) {
            Some(group) => {
                group_of.insert(category, group.to_string());
            }
            None => return Err(MetricsError::UnmappedCategory { category }),
        }
    }

    // Sum values by (period, group)
    let mut sums: BTreeMap<(String, String), f64> = BTreeMap::new();
    for obs in table.rows() {
        let group = group_of[&obs.category].clone();
        *sums.entry((obs.period.clone(), group)).or_insert(0.0) += obs.value;
    }

    // Grand total per period
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for ((period, _), sum) in &sums {
        *totals.entry(period.clone()).or_insert(0.0) += sum;
    }

    let mut rows = Vec::with_capacity(sums.len());
    for ((period, group), sum) in sums {
        let total = totals[&period];
        if total <= 0.0 {
            // A period with no companies at all has no meaningful shares
            debug!("Skipping period {} with zero total", period);
            continue;
        }
        rows.push(ShareRow {
            group,
            period,
            share: sum / total * 100.0,
        });
    }

    debug!("Computed {} share rows", rows.len());

    Ok(ShareTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::table::ObservationTable;

    fn two_region_table() -> (ObservationTable, Grouping) {
        let table = ObservationTable::from_rows(vec![
            ("Antwerp", "1960", 1577.0),
            ("Brussels", "1960", 2215.0),
        ])
        .unwrap();
        let grouping = Grouping::from_pairs(vec![
            ("Antwerp", "Flanders"),
            ("Brussels", "Brussels"),
        ]);
        (table, grouping)
    }

    #[test]
    fn test_share_of_period_total() {
        let (table, grouping) = two_region_table();
        let shares = compute_group_shares(&table, &grouping).unwrap();

        let flanders = shares.get("Flanders", "1960").unwrap();
        assert!((flanders - 1577.0 / 3792.0 * 100.0).abs() < 1e-12);
        assert!((flanders - 41.59).abs() < 0.01);
    }

    #[test]
    fn test_shares_sum_to_100() {
        let table = ObservationTable::from_rows(vec![
            ("Antwerp", "1960", 1577.0),
            ("Liege", "1960", 721.0),
            ("Brussels", "1960", 2215.0),
            ("Antwerp", "1970", 2252.0),
            ("Liege", "1970", 1398.0),
            ("Brussels", "1970", 2089.0),
        ])
        .unwrap();
        let grouping = Grouping::from_pairs(vec![
            ("Antwerp", "Flanders"),
            ("Liege", "Wallonia"),
            ("Brussels", "Brussels"),
        ]);

        let shares = compute_group_shares(&table, &grouping).unwrap();
        for period in ["1960", "1970"] {
            let sum: f64 = shares
                .rows()
                .iter()
                .filter(|r| r.period == period)
                .map(|r| r.share)
                .sum();
            assert!((sum - 100.0).abs() < 1e-9, "period {}: sum {}", period, sum);
        }
    }

    #[test]
    fn test_unmapped_category_is_an_error() {
        let (table, _) = two_region_table();
        let incomplete = Grouping::from_pairs(vec![("Antwerp", "Flanders")]);

        let err = compute_group_shares(&table, &incomplete).unwrap_err();
        assert_eq!(
            err,
            MetricsError::UnmappedCategory {
                category: "Brussels".to_string(),
            }
        );
    }

    #[test]
    fn test_zero_total_period_dropped() {
        let table = ObservationTable::from_rows(vec![
            ("Antwerp", "1960", 0.0),
            ("Brussels", "1960", 0.0),
            ("Antwerp", "1970", 10.0),
            ("Brussels", "1970", 30.0),
        ])
        .unwrap();
        let grouping = Grouping::from_pairs(vec![
            ("Antwerp", "Flanders"),
            ("Brussels", "Brussels"),
        ]);

        let shares = compute_group_shares(&table, &grouping).unwrap();
        assert!(shares.get("Flanders", "1960").is_none());
        assert_eq!(shares.get("Flanders", "1970"), Some(25.0));
    }

    #[test]
    fn test_series_in_period_order() {
        let table = ObservationTable::from_rows(vec![
            ("Antwerp", "1970", 2252.0),
            ("Antwerp", "1960", 1577.0),
            ("Brussels", "1960", 2215.0),
            ("Brussels", "1970", 2089.0),
        ])
        .unwrap();
        let grouping = Grouping::from_pairs(vec![
            ("Antwerp", "Flanders"),
            ("Brussels", "Brussels"),
        ]);

        let shares = compute_group_shares(&table, &grouping).unwrap();
        let series = shares.series("Flanders");
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, "1960");
        assert_eq!(series[1].0, "1970");
    }
}
