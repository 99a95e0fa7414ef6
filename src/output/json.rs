//! JSON metrics-table writer.
//!
//! Writes `MetricsTable` structs to JSON files with pretty
//! formatting, and reads them back for the `validate` command.

use crate::metrics::export::MetricsTable;
use crate::output::{ensure_parent_dirs, validate_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a metrics table to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - path cannot be created or is invalid
pub fn write_table(table: &MetricsTable, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing metrics table to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, table).map_err(OutputError::SerializationFailed)?;

    info!(
        "Metrics table written ({} share rows, {} growth rows, {} projection rows)",
        table.shares.len(),
        table.growth_rates.len(),
        table.projections.len()
    );

    Ok(())
}

/// Read a metrics table back from a JSON file
///
/// **Public** - used by the `validate` command and tests
pub fn read_table(input_path: impl AsRef<Path>) -> Result<MetricsTable, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading metrics table from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let table: MetricsTable =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Metrics table loaded: version {}, generated {}",
        table.version, table.generated_at
    );

    Ok(table)
}
