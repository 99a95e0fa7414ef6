//! The derived-metrics pipeline.
//!
//! A pure, stateless transformation: observation table in, derived
//! tables out. Nothing in here touches the filesystem; the rendering
//! sink consumes the results, never the reverse.

pub mod export;
pub mod growth;
pub mod rank;
pub mod shares;
pub mod table;

// Re-export main types and entry points
pub use export::{ExportedShareRow, GrowthRow, MetricsTable, ProjectionRow};
pub use growth::{compute_growth_rate, project, Projection};
pub use rank::top_categories;
pub use shares::{compute_group_shares, Grouping, ShareRow, ShareTable};
pub use table::{DenseGrid, Observation, ObservationTable};
