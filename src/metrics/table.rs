//! Observation tables: the input format for the metrics pipeline.
//!
//! An observation is one (category, period, value) triple, e.g.
//! ("Antwerp", "1960", 1577). Periods are 4-digit year labels, so
//! lexicographic order is chronological order.

use crate::utils::error::MetricsError;
use std::collections::BTreeMap;

/// A single (category, period, value) observation
///
/// **Public** - row type shared by the pipeline and the rendering sink
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Finest-grained entity being measured (province or sector name)
    pub category: String,

    /// Decade label, e.g. "1960"
    pub period: String,

    /// Observed company count
    pub value: f64,
}

/// Collection of observations with at most one value per
/// (category, period) pair
///
/// Keys are kept in a `BTreeMap` so iteration order is deterministic:
/// categories alphabetical, periods chronological.
#[derive(Debug, Clone, Default)]
pub struct ObservationTable {
    values: BTreeMap<(String, String), f64>,
}

impl ObservationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (category, period, value) triples
    ///
    /// # Errors
    /// `MetricsError::DuplicateObservation` if a (category, period)
    /// pair occurs twice.
    pub fn from_rows<'a, I>(rows: I) -> Result<Self, MetricsError>
    where
        I: IntoIterator<Item = (&'a str, &'a str, f64)>,
    {
        let mut table = Self::new();
        for (category, period, value) in rows {
            table.insert(category, period, value)?;
        }
        Ok(table)
    }

    /// Insert one observation, rejecting duplicates
    pub fn insert(&mut self, category: &str, period: &str, value: f64) -> Result<(), MetricsError> {
        let key = (category.to_string(), period.to_string());
        if self.values.contains_key(&key) {
            return Err(MetricsError::DuplicateObservation {
                category: category.to_string(),
                period: period.to_string(),
            });
        }
        self.values.insert(key, value);
        Ok(())
    }

    /// Look up the value for a (category, period) pair
    pub fn get(&self, category: &str, period: &str) -> Option<f64> {
        self.values
            .get(&(category.to_string(), period.to_string()))
            .copied()
    }

    /// All distinct periods, chronological
    pub fn periods(&self) -> Vec<String> {
        let mut periods: Vec<String> = self.values.keys().map(|(_, p)| p.clone()).collect();
        periods.sort();
        periods.dedup();
        periods
    }

    /// All distinct categories, alphabetical
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.values.keys().map(|(c, _)| c.clone()).collect();
        categories.dedup();
        categories
    }

    /// Iterate all observations
    pub fn rows(&self) -> impl Iterator<Item = Observation> + '_ {
        self.values.iter().map(|((category, period), value)| Observation {
            category: category.clone(),
            period: period.clone(),
            value: *value,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Materialize a rectangular (category x period) grid
    ///
    /// Sparse tables (the sector dataset only records each decade's top
    /// entries) become dense here: every requested cell is present,
    /// absent observations default to zero. Row order follows
    /// `categories`, column order follows `periods`.
    pub fn to_dense_grid(&self, categories: &[String], periods: &[String]) -> DenseGrid {
        let values = categories
            .iter()
            .map(|category| {
                periods
                    .iter()
                    .map(|period| self.get(category, period).unwrap_or(0.0))
                    .collect()
            })
            .collect();

        DenseGrid {
            categories: categories.to_vec(),
            periods: periods.to_vec(),
            values,
        }
    }
}

/// Rectangular materialization of an observation table
///
/// **Public** - consumed by the grouped-bar charts
#[derive(Debug, Clone)]
pub struct DenseGrid {
    /// Row labels
    pub categories: Vec<String>,

    /// Column labels, chronological
    pub periods: Vec<String>,

    /// `values[row][col]` is the value for (categories[row], periods[col])
    pub values: Vec<Vec<f64>>,
}

impl DenseGrid {
    /// Values for one category, in period order
    pub fn row(&self, category: &str) -> Option<&[f64]> {
        let idx = self.categories.iter().position(|c| c == category)?;
        Some(&self.values[idx])
    }
}

/// Parse a period label into its integer year
///
/// Labels are 4-digit year strings ("1960"); anything else is an error.
pub fn parse_year(label: &str) -> Result<i32, MetricsError> {
    if label.len() != 4 || !label.chars().all(|c| c.is_ascii_digit()) {
        return Err(MetricsError::BadPeriodLabel {
            label: label.to_string(),
        });
    }
    label.parse().map_err(|_| MetricsError::BadPeriodLabel {
        label: label.to_string(),
    })
}
