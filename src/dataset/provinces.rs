//! Company counts per Belgian province, by decade.
//!
//! Source: Statbel company register snapshots, aggregated per decade.

use crate::metrics::shares::Grouping;
use crate::metrics::table::ObservationTable;
use crate::utils::error::MetricsError;
use std::collections::BTreeMap;

/// The eleven provinces (Brussels counted as its own entry)
pub const PROVINCES: &[&str] = &[
    "Antwerp",
    "West Flanders",
    "East Flanders",
    "Flemish Brabant",
    "Limburg",
    "Hainaut",
    "Liège",
    "Namur",
    "Luxembourg",
    "Walloon Brabant",
    "Brussels",
];

/// (decade, province, company count)
const OBSERVATIONS: &[(&str, &str, f64)] = &[
    ("1960", "Antwerp", 1577.0),
    ("1960", "West Flanders", 1290.0),
    ("1960", "East Flanders", 1052.0),
    ("1960", "Flemish Brabant", 1043.0),
    ("1960", "Hainaut", 773.0),
    ("1960", "Liège", 721.0),
    ("1960", "Limburg", 547.0),
    ("1960", "Namur", 315.0),
    ("1960", "Luxembourg", 202.0),
    ("1960", "Walloon Brabant", 188.0),
    ("1960", "Brussels", 2215.0),
    ("1970", "Antwerp", 2252.0),
    ("1970", "West Flanders", 1802.0),
    ("1970", "East Flanders", 1778.0),
    ("1970", "Liège", 1398.0),
    ("1970", "Flemish Brabant", 1289.0),
    ("1970", "Hainaut", 1096.0),
    ("1970", "Limburg", 841.0),
    ("1970", "Walloon Brabant", 533.0),
    ("1970", "Namur", 470.0),
    ("1970", "Luxembourg", 313.0),
    ("1970", "Brussels", 2089.0),
    ("1980", "Antwerp", 6600.0),
    ("1980", "West Flanders", 5252.0),
    ("1980", "East Flanders", 5128.0),
    ("1980", "Liège", 3780.0),
    ("1980", "Flemish Brabant", 3652.0),
    ("1980", "Hainaut", 3251.0),
    ("1980", "Limburg", 2666.0),
    ("1980", "Walloon Brabant", 1932.0),
    ("1980", "Namur", 1507.0),
    ("1980", "Luxembourg", 834.0),
    ("1980", "Brussels", 4151.0),
    ("1990", "Antwerp", 14610.0),
    ("1990", "East Flanders", 10827.0),
    ("1990", "West Flanders", 9867.0),
    ("1990", "Flemish Brabant", 7864.0),
    ("1990", "Limburg", 6134.0),
    ("1990", "Liège", 5700.0),
    ("1990", "Hainaut", 5600.0),
    ("1990", "Walloon Brabant", 3912.0),
    ("1990", "Namur", 2869.0),
    ("1990", "Luxembourg", 1521.0),
    ("1990", "Brussels", 5774.0),
    ("2000", "Antwerp", 29322.0),
    ("2000", "East Flanders", 21462.0),
    ("2000", "West Flanders", 19316.0),
    ("2000", "Flemish Brabant", 16242.0),
    ("2000", "Limburg", 12959.0),
    ("2000", "Hainaut", 12757.0),
    ("2000", "Liège", 11187.0),
    ("2000", "Walloon Brabant", 7733.0),
    ("2000", "Namur", 6129.0),
    ("2000", "Luxembourg", 3007.0),
    ("2000", "Brussels", 7809.0),
    ("2010", "Antwerp", 52987.0),
    ("2010", "East Flanders", 37407.0),
    ("2010", "West Flanders", 32470.0),
    ("2010", "Flemish Brabant", 29352.0),
    ("2010", "Limburg", 22528.0),
    ("2010", "Liège", 18987.0),
    ("2010", "Hainaut", 18451.0),
    ("2010", "Walloon Brabant", 13206.0),
    ("2010", "Namur", 9086.0),
    ("2010", "Luxembourg", 3647.0),
    ("2010", "Brussels", 12469.0),
    ("2020", "Antwerp", 58441.0),
    ("2020", "East Flanders", 44208.0),
    ("2020", "Flemish Brabant", 41214.0),
    ("2020", "West Flanders", 36589.0),
    ("2020", "Limburg", 24810.0),
    ("2020", "Liège", 21288.0),
    ("2020", "Hainaut", 18952.0),
    ("2020", "Walloon Brabant", 12075.0),
    ("2020", "Namur", 9512.0),
    ("2020", "Luxembourg", 3906.0),
    ("2020", "Brussels", 11545.0),
];

/// (province, region)
const REGIONS: &[(&str, &str)] = &[
    ("Antwerp", "Flanders"),
    ("East Flanders", "Flanders"),
    ("West Flanders", "Flanders"),
    ("Flemish Brabant", "Flanders"),
    ("Limburg", "Flanders"),
    ("Liège", "Wallonia"),
    ("Hainaut", "Wallonia"),
    ("Namur", "Wallonia"),
    ("Luxembourg", "Wallonia"),
    ("Walloon Brabant", "Wallonia"),
    ("Brussels", "Brussels"),
];

/// (province, surface area in km²)
const AREAS: &[(&str, f64)] = &[
    ("Antwerp", 2867.0),
    ("East Flanders", 3007.0),
    ("West Flanders", 3144.0),
    ("Flemish Brabant", 2106.0),
    ("Limburg", 2422.0),
    ("Liège", 3862.0),
    ("Hainaut", 3786.0),
    ("Namur", 3666.0),
    ("Luxembourg", 4440.0),
    ("Walloon Brabant", 1091.0),
    ("Brussels", 162.0),
];

/// (province, Dutch name) - used as hover labels in the interactive map
const DUTCH_NAMES: &[(&str, &str)] = &[
    ("Antwerp", "Antwerpen"),
    ("East Flanders", "Oost-Vlaanderen"),
    ("West Flanders", "West-Vlaanderen"),
    ("Flemish Brabant", "Vlaams-Brabant"),
    ("Hainaut", "Henegouwen"),
    ("Walloon Brabant", "Brabant wallon"),
    ("Liège", "Liège"),
    ("Namur", "Namur"),
    ("Luxembourg", "Luxembourg"),
    ("Limburg", "Limburg"),
    ("Brussels", "Brussel"),
];

/// Build the province observation table
///
/// # Errors
/// `MetricsError::DuplicateObservation` if the embedded literals ever
/// regress to carrying a (province, decade) pair twice.
pub fn province_table() -> Result<ObservationTable, MetricsError> {
    ObservationTable::from_rows(
        OBSERVATIONS
            .iter()
            .map(|(decade, province, count)| (*province, *decade, *count)),
    )
}

/// Province -> region grouping, total over all eleven provinces
pub fn region_grouping() -> Grouping {
    Grouping::from_pairs(REGIONS.iter().copied())
}

/// Surface area per province, km²
pub fn province_areas() -> BTreeMap<String, f64> {
    AREAS
        .iter()
        .map(|(province, area)| (province.to_string(), *area))
        .collect()
}

/// Dutch display name for a province
pub fn dutch_name(province: &str) -> Option<&'static str> {
    DUTCH_NAMES
        .iter()
        .find(|(english, _)| *english == province)
        .map(|(_, dutch)| *dutch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_rectangular() {
        let table = province_table().unwrap();
        assert_eq!(table.periods().len(), 7);
        assert_eq!(table.categories().len(), 11);
        assert_eq!(table.len(), 77);
    }

    #[test]
    fn test_every_province_has_region_area_and_dutch_name() {
        let grouping = region_grouping();
        let areas = province_areas();
        for province in PROVINCES {
            assert!(grouping.group_of(province).is_some(), "{}", province);
            assert!(areas.contains_key(*province), "{}", province);
            assert!(dutch_name(province).is_some(), "{}", province);
        }
    }

    #[test]
    fn test_known_values() {
        let table = province_table().unwrap();
        assert_eq!(table.get("Antwerp", "1960"), Some(1577.0));
        assert_eq!(table.get("Antwerp", "2020"), Some(58441.0));
        assert_eq!(table.get("Brussels", "1960"), Some(2215.0));
    }
}
