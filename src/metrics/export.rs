//! JSON export schema for derived tables.
//!
//! This module defines the structure of the JSON file we write to
//! disk. Schema is versioned to allow future evolution.

use crate::metrics::shares::ShareRow;
use serde::{Deserialize, Serialize};

/// Top-level derived-metrics structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsTable {
    /// Schema version for compatibility checking
    pub version: String,

    /// Regional share of the total, one row per (region, decade)
    pub shares: Vec<ExportedShareRow>,

    /// Compound annual growth rate per province
    pub growth_rates: Vec<GrowthRow>,

    /// Projected company counts for selected provinces
    pub projections: Vec<ProjectionRow>,

    /// Timestamp when the export was generated
    pub generated_at: String,
}

/// Serialized form of a share row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedShareRow {
    pub group: String,
    pub period: String,

    /// Percentage of the period total, 0-100
    pub share_pct: f64,
}

impl From<&ShareRow> for ExportedShareRow {
    fn from(row: &ShareRow) -> Self {
        Self {
            group: row.group.clone(),
            period: row.period.clone(),
            share_pct: row.share,
        }
    }
}

/// A category's growth rate over the observed range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthRow {
    pub category: String,

    /// Annualized rate as a percentage (6.21 means 6.21%/year)
    pub rate_pct: f64,
}

/// One projected value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub category: String,

    /// Projected calendar year
    pub year: i32,

    pub value: f64,
}

impl MetricsTable {
    /// Build an export with the current schema version and timestamp
    pub fn new(
        shares: Vec<ExportedShareRow>,
        growth_rates: Vec<GrowthRow>,
        projections: Vec<ProjectionRow>,
    ) -> Self {
        Self {
            version: crate::utils::config::SCHEMA_VERSION.to_string(),
            shares,
            growth_rates,
            projections,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stamps_version() {
        let table = MetricsTable::new(vec![], vec![], vec![]);
        assert_eq!(table.version, crate::utils::config::SCHEMA_VERSION);
        assert!(!table.generated_at.is_empty());
    }

    #[test]
    fn test_share_row_conversion() {
        let row = ShareRow {
            group: "Flanders".to_string(),
            period: "1960".to_string(),
            share: 41.59,
        };
        let exported = ExportedShareRow::from(&row);
        assert_eq!(exported.group, "Flanders");
        assert_eq!(exported.share_pct, 41.59);
    }
}
