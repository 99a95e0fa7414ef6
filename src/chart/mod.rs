//! The rendering sink: chart specifications and renderers.
//!
//! Charts are described declaratively (`ChartSpec`) and rendered to
//! SVG strings or self-contained HTML documents. The sink validates
//! its input loudly (finite values, unique keys) and has no feedback
//! into the metrics pipeline.

pub mod catalog;
pub mod html;
pub mod palette;
pub mod spec;
pub mod svg;

// Re-export main types
pub use spec::{ChartKind, ChartSpec, Series};
pub use svg::{render_chart, render_facets};
