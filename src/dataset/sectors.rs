//! Top-5 industry sectors per decade, by company count.
//!
//! Sparse by construction: only each decade's top five NACE activities
//! are recorded, so the table must be densified (zero-filled) before
//! charting. Sector names are the NACE activity descriptions; the
//! numeric codes ride along for the hover labels.

use crate::metrics::table::ObservationTable;
use crate::utils::error::MetricsError;

/// (decade, NACE code, sector, company count)
const OBSERVATIONS: &[(&str, &str, &str, f64)] = &[
    ("1960", "94910", "Religious organisations", 1922.0),
    ("1960", "84115", "Public Social Welfare Centers", 1066.0),
    ("1960", "84114", "Municipal government", 1058.0),
    ("1960", "68321", "Real estate syndicate activities", 1021.0),
    ("1960", "49410", "Road freight transport", 869.0),
    ("1970", "1500", "Mining of metal ores", 8036.0),
    ("1970", "1300", "Extraction of metal ores", 3850.0),
    ("1970", "56301", "Cafés and bars", 1636.0),
    ("1970", "86220", "Medical specialists", 1519.0),
    ("1970", "49410", "Road freight transport", 1379.0),
    ("1980", "1500", "Mining of metal ores", 7577.0),
    ("1980", "68201", "Residential property rental", 4443.0),
    ("1980", "68203", "Non-residential property rental", 3803.0),
    ("1980", "86220", "Medical specialists", 3788.0),
    ("1980", "1300", "Extraction of metal ores", 3465.0),
    ("1990", "1500", "Mining of metal ores", 10259.0),
    ("1990", "70200", "Management consultancy", 7955.0),
    ("1990", "70220", "Other business consultancy", 7874.0),
    ("1990", "68201", "Residential property rental", 7270.0),
    ("1990", "43320", "Joinery", 6974.0),
    ("2000", "70200", "Management consultancy", 21687.0),
    ("2000", "70220", "Other business consultancy", 21521.0),
    ("2000", "82990", "Other business services", 16535.0),
    ("2000", "43320", "Joinery", 14223.0),
    ("2000", "81300", "Landscaping services", 13137.0),
    ("2010", "82990", "Other business services", 64370.0),
    ("2010", "70200", "Management consultancy", 49335.0),
    ("2010", "70220", "Other business consultancy", 49001.0),
    ("2010", "85599", "Other forms of education", 35846.0),
    ("2010", "81300", "Landscaping services", 28876.0),
    ("2020", "82990", "Other business services", 133082.0),
    ("2020", "70200", "Management consultancy", 61463.0),
    ("2020", "85599", "Other forms of education", 56418.0),
    ("2020", "70220", "Other business consultancy", 54206.0),
    ("2020", "43211", "Electrical installation", 38272.0),
];

/// Every sector that appears in at least one decade's top five, in
/// first-appearance order (keeps colors stable across charts)
const SECTOR_NAMES: &[&str] = &[
    "Religious organisations",
    "Public Social Welfare Centers",
    "Municipal government",
    "Real estate syndicate activities",
    "Road freight transport",
    "Mining of metal ores",
    "Extraction of metal ores",
    "Cafés and bars",
    "Medical specialists",
    "Residential property rental",
    "Non-residential property rental",
    "Management consultancy",
    "Other business consultancy",
    "Joinery",
    "Other business services",
    "Landscaping services",
    "Other forms of education",
    "Electrical installation",
];

/// One color per sector, same order as `SECTOR_NAMES`
const SECTOR_COLORS: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf", "#aec7e8", "#ffbb78", "#98df8a", "#ff9896", "#c5b0d5", "#c49c94",
    "#f7b6d2", "#dbdb8d",
];

/// Build the sector observation table (sparse, top-5 per decade)
///
/// # Errors
/// `MetricsError::DuplicateObservation` if the embedded literals ever
/// regress to carrying a (sector, decade) pair twice.
pub fn sector_table() -> Result<ObservationTable, MetricsError> {
    ObservationTable::from_rows(
        OBSERVATIONS
            .iter()
            .map(|(decade, _, sector, count)| (*sector, *decade, *count)),
    )
}

/// All sector names, first-appearance order
pub fn sector_names() -> Vec<String> {
    SECTOR_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Stable color for a sector
pub fn sector_color(sector: &str) -> Option<&'static str> {
    SECTOR_NAMES
        .iter()
        .position(|s| *s == sector)
        .map(|idx| SECTOR_COLORS[idx])
}

/// NACE code for a sector
pub fn nace_code(sector: &str) -> Option<&'static str> {
    OBSERVATIONS
        .iter()
        .find(|(_, _, name, _)| *name == sector)
        .map(|(_, code, _, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_sectors_per_decade() {
        let table = sector_table().unwrap();
        for decade in table.periods() {
            let count = table.rows().filter(|o| o.period == decade).count();
            assert_eq!(count, 5, "decade {}", decade);
        }
    }

    #[test]
    fn test_every_sector_has_a_color() {
        let table = sector_table().unwrap();
        for sector in table.categories() {
            assert!(sector_color(&sector).is_some(), "{}", sector);
            assert!(nace_code(&sector).is_some(), "{}", sector);
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        assert_eq!(SECTOR_NAMES.len(), SECTOR_COLORS.len());
        let mut colors: Vec<&str> = SECTOR_COLORS.to_vec();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), SECTOR_COLORS.len());
    }

    #[test]
    fn test_sparse_table_shape() {
        let table = sector_table().unwrap();
        assert_eq!(table.periods().len(), 7);
        assert_eq!(table.categories().len(), 18);
        assert_eq!(table.len(), 35);
    }
}
