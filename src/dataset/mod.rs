//! Embedded datasets.
//!
//! All inputs are literal constants: company counts per Belgian
//! province and per industry sector, by decade (1960-2020), plus the
//! static mappings the charts need (province -> region, surface
//! areas, Dutch display names, sector colors).

pub mod provinces;
pub mod sectors;

pub use provinces::{
    dutch_name, province_areas, province_table, region_grouping, PROVINCES,
};
pub use sectors::{nace_code, sector_color, sector_names, sector_table};
