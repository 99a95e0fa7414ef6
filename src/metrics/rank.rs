//! Per-period rankings.

use crate::metrics::table::{Observation, ObservationTable};

/// Rank a period's categories by value, descending, truncated to `n`
///
/// **Public** - feeds the per-decade bar charts
///
/// Ties keep alphabetical order (the table iterates categories
/// alphabetically and the sort is stable).
pub fn top_categories(table: &ObservationTable, period: &str, n: usize) -> Vec<Observation> {
    let mut rows: Vec<Observation> = table.rows().filter(|o| o.period == period).collect();
    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    rows.truncate(n);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_categories() {
        let table = ObservationTable::from_rows(vec![
            ("Antwerp", "1960", 1577.0),
            ("Brussels", "1960", 2215.0),
            ("Liege", "1960", 721.0),
            ("Antwerp", "1970", 2252.0),
        ])
        .unwrap();

        let top = top_categories(&table, "1960", 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, "Brussels");
        assert_eq!(top[0].value, 2215.0);
        assert_eq!(top[1].category, "Antwerp");
    }

    #[test]
    fn test_top_categories_short_period() {
        let table = ObservationTable::from_rows(vec![("Antwerp", "1970", 2252.0)]).unwrap();
        assert_eq!(top_categories(&table, "1970", 5).len(), 1);
        assert!(top_categories(&table, "1980", 5).is_empty());
    }
}
