//! Compound annual growth rates and forward projections.
//!
//! The growth rate is the constant per-year multiplicative rate that
//! transforms a category's first-period value into its last-period
//! value. Elapsed time is derived from the period labels themselves,
//! never hardcoded, so the same code works for any year range.

use crate::metrics::table::{parse_year, ObservationTable};
use crate::utils::error::MetricsError;
use log::debug;

/// Compute the compound annual growth rate for one category
///
/// **Public** - main entry point for growth computation
///
/// `rate = (last_value / first_value)^(1 / elapsed_years) - 1`
/// where `elapsed_years` is the difference of the integer years named
/// by the two period labels.
///
/// # Arguments
/// * `table` - Observation table
/// * `category` - Category to compute the rate for
/// * `first_period` - First period label (must exist for the category)
/// * `last_period` - Last period label (must exist for the category)
///
/// # Returns
/// A dimensionless per-year rate (0.0621 means 6.21%/year); multiply
/// by 100 for a percentage display.
///
/// # Errors
/// * `MetricsError::BadPeriodLabel` - a label is not a 4-digit year
/// * `MetricsError::EmptySpan` - last period is not after the first
/// * `MetricsError::MissingPeriod` - an endpoint is absent for the category
/// * `MetricsError::ZeroBaseline` - first value is zero; signaled, never
///   coerced to infinity or NaN
pub fn compute_growth_rate(
    table: &ObservationTable,
    category: &str,
    first_period: &str,
    last_period: &str,
) -> Result<f64, MetricsError> {
    let first_year = parse_year(first_period)?;
    let last_year = parse_year(last_period)?;

    let elapsed_years = last_year - first_year;
    if elapsed_years <= 0 {
        return Err(MetricsError::EmptySpan {
            first: first_period.to_string(),
            last: last_period.to_string(),
        });
    }

    let first_value = lookup(table, category, first_period)?;
    let last_value = lookup(table, category, last_period)?;

    if first_value == 0.0 {
        return Err(MetricsError::ZeroBaseline {
            category: category.to_string(),
            period: first_period.to_string(),
        });
    }

    let rate = (last_value / first_value).powf(1.0 / elapsed_years as f64) - 1.0;

    debug!(
        "CAGR for {} over {}..{} ({} years): {:.4}",
        category, first_period, last_period, elapsed_years, rate
    );

    Ok(rate)
}

fn lookup(table: &ObservationTable, category: &str, period: &str) -> Result<f64, MetricsError> {
    table
        .get(category, period)
        .ok_or_else(|| MetricsError::MissingPeriod {
            category: category.to_string(),
            period: period.to_string(),
        })
}

/// Project future values by compounding a growth rate
///
/// **Public** - main entry point for projection
///
/// For each year offset `d`: `last_value * (1 + rate)^d`. Offsets may
/// be irregular; order is preserved. The returned sequence is lazy and
/// restartable (clone it to iterate again). Non-finite results (e.g.
/// from rate <= -1 with fractional offsets) propagate to the caller,
/// where the chart builder rejects them.
pub fn project(last_value: f64, rate: f64, offsets: &[f64]) -> Projection<'_> {
    Projection {
        last_value,
        rate,
        offsets: offsets.iter(),
    }
}

/// Lazy, finite sequence of projected values
///
/// **Public** - returned by `project`
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    last_value: f64,
    rate: f64,
    offsets: std::slice::Iter<'a, f64>,
}

impl Iterator for Projection<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let offset = self.offsets.next()?;
        Some(self.last_value * (1.0 + self.rate).powf(*offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.offsets.size_hint()
    }
}

impl ExactSizeIterator for Projection<'_> {}
