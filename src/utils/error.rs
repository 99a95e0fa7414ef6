//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur in the derived-metrics pipeline
#[derive(Error, Debug, PartialEq)]
pub enum MetricsError {
    #[error("Category has no group mapping: {category}")]
    UnmappedCategory { category: String },

    #[error("Zero baseline value for {category} in {period}: growth rate is undefined")]
    ZeroBaseline { category: String, period: String },

    #[error("No observation for {category} in {period}")]
    MissingPeriod { category: String, period: String },

    #[error("Period label is not a 4-digit year: {label}")]
    BadPeriodLabel { label: String },

    #[error("Period range spans no time: {first}..{last}")]
    EmptySpan { first: String, last: String },

    #[error("Duplicate observation for {category} in {period}")]
    DuplicateObservation { category: String, period: String },
}

/// Errors that can occur when building or rendering a chart
#[derive(Error, Debug, PartialEq)]
pub enum ChartError {
    #[error("Chart has no plottable series: {title}")]
    EmptySeries { title: String },

    #[error("Non-finite value in series {series} at {period}")]
    NonFiniteValue { series: String, period: String },

    #[error("Duplicate key ({series}, {period})")]
    DuplicateKey { series: String, period: String },

    #[error("Log scale requires positive values, got {value} in series {series}")]
    NonPositiveLogValue { series: String, value: f64 },

    #[error("Dual-axis chart {title} needs exactly two series, got {count}")]
    DualAxisArity { title: String, count: usize },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
