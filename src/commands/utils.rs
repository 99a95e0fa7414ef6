use crate::output::read_table;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a metrics JSON export
pub fn validate_table_file(file_path: PathBuf) -> Result<()> {
    println!("Validating metrics export: {}", file_path.display());

    let table = read_table(&file_path)?;

    println!("✓ Valid metrics JSON");
    println!("  Version: {}", table.version);
    println!("  Share rows: {}", table.shares.len());
    println!("  Growth rates: {}", table.growth_rates.len());
    println!("  Projections: {}", table.projections.len());
    println!("  Generated: {}", table.generated_at);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Bedrijvenkaart Metrics Export Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  shares: array            - Regional share of the total");
        println!("    group: string          - Region name");
        println!("    period: string         - Decade label");
        println!("    share_pct: number      - Percentage of the period total");
        println!("  growth_rates: array      - Compound annual growth per province");
        println!("    category: string       - Province name");
        println!("    rate_pct: number       - Annualized rate as a percentage");
        println!("  projections: array       - Projected company counts");
        println!("    category: string       - Province name");
        println!("    year: number           - Projected calendar year");
        println!("    value: number          - Projected count");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Bedrijvenkaart v{}", env!("CARGO_PKG_VERSION"));
    println!("Metrics Export Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Chart generation for Belgian company registration statistics.");
}
