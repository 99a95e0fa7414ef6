//! Configuration and constants for the CLI.

/// Current JSON export schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default directory for rendered chart files
pub const DEFAULT_EXPORT_DIR: &str = "exports";

/// First and last observed decades
pub const FIRST_DECADE: &str = "1960";
pub const LAST_DECADE: &str = "2020";

/// Year offsets (from the last observed decade) used by the projection chart
pub const PROJECTION_OFFSETS: &[f64] = &[0.0, 10.0, 20.0];

/// Provinces carried forward in the projection chart
pub const PROJECTED_PROVINCES: &[&str] = &["Antwerp", "East Flanders", "Flemish Brabant"];

/// Ranking depth bounds for the per-decade bar charts
pub const MIN_TOP_CATEGORIES: usize = 1;
pub const MAX_TOP_CATEGORIES: usize = 11;
