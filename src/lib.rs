//! Bedrijvenkaart
//!
//! Chart generation for Belgian company registration statistics
//! (1960-2020).
//!
//! This crate provides the core implementation for the
//! `bedrijvenkaart` CLI tool: embedded province and industry-sector
//! datasets, a derived-metrics pipeline (regional shares, compound
//! annual growth rates, projections), and SVG/HTML chart rendering.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install bedrijvenkaart
//! bedrijvenkaart render
//! ```

pub mod chart;
pub mod commands;
pub mod dataset;
pub mod metrics;
pub mod output;
pub mod utils;
