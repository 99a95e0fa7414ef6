//! The chart catalog: one builder per rendered figure.
//!
//! Builders turn pipeline output into `ChartSpec`s; they do no file
//! I/O and no arithmetic beyond picking rows apart.

use crate::chart::palette;
use crate::chart::spec::{ChartKind, ChartSpec, Series};
use crate::metrics::export::GrowthRow;
use crate::metrics::rank::top_categories;
use crate::metrics::shares::{Grouping, ShareTable};
use crate::metrics::table::ObservationTable;
use crate::utils::error::MetricsError;

/// Per-province growth over the decades, log scale
pub fn growth_chart(table: &ObservationTable) -> ChartSpec {
    let periods = table.periods();
    let series = table
        .categories()
        .into_iter()
        .enumerate()
        .map(|(idx, category)| {
            let points = periods
                .iter()
                .filter_map(|p| table.get(&category, p).map(|v| (p.clone(), v)))
                .collect();
            Series::new(category, palette::category_color(idx)).with_points(points)
        })
        .collect();

    ChartSpec::new("Growth of Companies by Province (Log Scale)", ChartKind::Line)
        .with_series(series)
        .with_axis_labels("Decade", "Company Count (Log Scale)")
        .with_log_y(true)
        .with_size(980, 520)
}

/// One ranking panel per decade, provinces colored by region
///
/// # Errors
/// `MetricsError::UnmappedCategory` if a ranked province has no
/// region mapping.
pub fn top_province_panels(
    table: &ObservationTable,
    grouping: &Grouping,
    top: usize,
) -> Result<Vec<ChartSpec>, MetricsError> {
    let legend: Vec<(String, String)> = grouping
        .groups()
        .into_iter()
        .map(|g| {
            let color = palette::region_color(&g).to_string();
            (g, color)
        })
        .collect();

    let mut panels = Vec::new();
    for period in table.periods() {
        let ranked = top_categories(table, &period, top);

        let mut points = Vec::with_capacity(ranked.len());
        let mut colors = Vec::with_capacity(ranked.len());
        for obs in &ranked {
            let region =
                grouping
                    .group_of(&obs.category)
                    .ok_or_else(|| MetricsError::UnmappedCategory {
                        category: obs.category.clone(),
                    })?;
            points.push((obs.category.clone(), obs.value));
            colors.push(palette::region_color(region).to_string());
        }

        let series = Series::new("Companies", palette::BAR_COLOR)
            .with_points(points)
            .with_point_colors(colors);

        panels.push(
            ChartSpec::new(period, ChartKind::BarH)
                .with_series(vec![series])
                .with_legend(legend.clone())
                .with_size(560, 320),
        );
    }

    Ok(panels)
}

/// Stacked regional share of the total, per decade
pub fn regional_share_chart(shares: &ShareTable) -> ChartSpec {
    let series = shares
        .groups()
        .into_iter()
        .map(|group| {
            let points = shares.series(&group);
            let color = palette::region_color(&group);
            Series::new(group, color).with_points(points)
        })
        .collect();

    ChartSpec::new("Regional Share of Total Companies Over Time", ChartKind::StackedArea)
        .with_series(series)
        .with_axis_labels("Decade", "Share (%)")
        .with_value_suffix("%")
        .with_size(900, 500)
}

/// Count versus density, one row per province: (name, count, per-km²)
pub fn density_chart(rows: &[(String, f64, f64)]) -> ChartSpec {
    let counts = Series::new("Company Count", palette::BAR_COLOR)
        .with_points(rows.iter().map(|(p, c, _)| (p.clone(), *c)).collect());
    let densities = Series::new("Density (per km²)", "#ef553b")
        .with_points(rows.iter().map(|(p, _, d)| (p.clone(), *d)).collect());

    ChartSpec::new("Brussels Paradox: Count vs Density", ChartKind::DualAxis)
        .with_series(vec![counts, densities])
        .with_axis_labels("", "Company Count")
        .with_y2_label("Density (companies/km²)")
        .with_size(980, 520)
}

/// Growth rate per province, sorted ascending
pub fn cagr_chart(rates: &[GrowthRow]) -> ChartSpec {
    let mut sorted: Vec<&GrowthRow> = rates.iter().collect();
    sorted.sort_by(|a, b| a.rate_pct.total_cmp(&b.rate_pct));

    let series = Series::new("CAGR", palette::BAR_COLOR).with_points(
        sorted
            .iter()
            .map(|r| (r.category.clone(), r.rate_pct))
            .collect(),
    );

    ChartSpec::new("CAGR by Province (1960-2020)", ChartKind::BarH)
        .with_series(vec![series])
        .with_axis_labels("CAGR (%/year)", "")
        .with_value_suffix("%")
        .with_size(900, 520)
}

/// Projected counts for selected provinces: (name, [(year, value)])
pub fn projection_chart(projections: &[(String, Vec<(String, f64)>)]) -> ChartSpec {
    let series = projections
        .iter()
        .enumerate()
        .map(|(idx, (name, points))| {
            Series::new(name.clone(), palette::category_color(idx)).with_points(points.clone())
        })
        .collect();

    ChartSpec::new("Future Outlook (Projection to 2040)", ChartKind::Line)
        .with_series(series)
        .with_axis_labels("Year", "Company Count")
        .with_size(900, 500)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::metrics::shares::compute_group_shares;

    #[test]
    fn test_growth_chart_covers_all_provinces() {
        let table = dataset::province_table().unwrap();
        let spec = growth_chart(&table);

        assert_eq!(spec.series.len(), 11);
        assert!(spec.log_y);
        assert!(spec.series.iter().all(|s| s.points.len() == 7));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_top_province_panels() {
        let table = dataset::province_table().unwrap();
        let grouping = dataset::region_grouping();
        let panels = top_province_panels(&table, &grouping, 5).unwrap();

        assert_eq!(panels.len(), 7);
        for panel in &panels {
            assert_eq!(panel.series[0].points.len(), 5);
            assert_eq!(panel.series[0].point_colors.len(), 5);
            assert_eq!(panel.legend.len(), 3);
        }
        // 1960: Brussels first
        assert_eq!(panels[0].series[0].points[0].0, "Brussels");
    }

    #[test]
    fn test_top_province_panels_unmapped() {
        let table = dataset::province_table().unwrap();
        let incomplete = Grouping::from_pairs(vec![("Antwerp", "Flanders")]);
        assert!(top_province_panels(&table, &incomplete, 5).is_err());
    }

    #[test]
    fn test_regional_share_chart() {
        let table = dataset::province_table().unwrap();
        let grouping = dataset::region_grouping();
        let shares = compute_group_shares(&table, &grouping).unwrap();
        let spec = regional_share_chart(&shares);

        assert_eq!(spec.kind, ChartKind::StackedArea);
        assert_eq!(spec.series.len(), 3);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_cagr_chart_sorted_ascending() {
        let rates = vec![
            GrowthRow {
                category: "Antwerp".to_string(),
                rate_pct: 6.21,
            },
            GrowthRow {
                category: "Luxembourg".to_string(),
                rate_pct: 5.07,
            },
        ];
        let spec = cagr_chart(&rates);

        assert_eq!(spec.series[0].points[0].0, "Luxembourg");
        assert_eq!(spec.series[0].points[1].0, "Antwerp");
    }
}
