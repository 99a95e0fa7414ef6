//! Render command implementation.
//!
//! The render command:
//! 1. Builds the embedded datasets
//! 2. Computes the derived tables (shares, growth rates, projections)
//! 3. Renders the SVG chart catalog
//! 4. Builds the interactive HTML documents
//! 5. Assembles the dashboard
//! 6. Writes the JSON metrics export

use crate::chart::html::{
    dashboard_document, industry_trends_document, province_map_document, MapEntry, TrendEntry,
};
use crate::chart::palette::region_ansi;
use crate::chart::svg::{render_chart, render_facets};
use crate::chart::{catalog, ChartSpec};
use crate::dataset;
use crate::metrics::export::{ExportedShareRow, GrowthRow, MetricsTable, ProjectionRow};
use crate::metrics::shares::{compute_group_shares, Grouping, ShareTable};
use crate::metrics::table::{parse_year, ObservationTable};
use crate::metrics::{compute_growth_rate, project};
use crate::output::{write_html, write_svg, write_table};
use crate::utils::config::{
    FIRST_DECADE, LAST_DECADE, MAX_TOP_CATEGORIES, MIN_TOP_CATEGORIES, PROJECTED_PROVINCES,
    PROJECTION_OFFSETS,
};
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Directory receiving all output files
    pub out_dir: PathBuf,

    /// Ranking depth for the per-decade province panels
    pub top: usize,

    /// Print a text summary table to stdout
    pub print_summary: bool,

    /// Render the SVG charts only, skip the HTML documents
    pub skip_html: bool,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(crate::utils::config::DEFAULT_EXPORT_DIR),
            top: 5,
            print_summary: false,
            skip_html: false,
        }
    }
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.out_dir.as_os_str().is_empty() {
        bail!("Output directory cannot be empty");
    }

    if args.top < MIN_TOP_CATEGORIES || args.top > MAX_TOP_CATEGORIES {
        bail!(
            "top must be between {} and {}",
            MIN_TOP_CATEGORIES,
            MAX_TOP_CATEGORIES
        );
    }

    Ok(())
}

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// Dataset construction errors, pipeline errors (unmapped categories,
/// zero baselines), chart validation errors, and file write errors,
/// each wrapped with context.
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Rendering chart catalog to: {}", args.out_dir.display());

    // Step 1: Datasets
    info!("Step 1/6: Building embedded datasets...");
    let provinces = dataset::province_table().context("Failed to build province dataset")?;
    let sectors = dataset::sector_table().context("Failed to build sector dataset")?;
    let grouping = dataset::region_grouping();

    debug!(
        "Datasets: {} province rows, {} sector rows",
        provinces.len(),
        sectors.len()
    );

    // Step 2: Derived tables
    info!("Step 2/6: Computing derived tables...");
    let shares =
        compute_group_shares(&provinces, &grouping).context("Failed to compute regional shares")?;
    let growth_rows = compute_growth_rows(&provinces);
    let (projection_series, projection_rows) = compute_projections(&provinces, &growth_rows)?;

    // Step 3: SVG chart catalog
    info!("Step 3/6: Rendering SVG charts...");
    let mut sections: Vec<(String, String)> = Vec::new();

    let growth = catalog::growth_chart(&provinces);
    write_chart(&growth, &args, "01_growth_log.svg", &mut sections)?;

    let panels = catalog::top_province_panels(&provinces, &grouping, args.top)
        .context("Failed to build province ranking panels")?;
    let facet_svg = render_facets("Top Provinces per Decade", &panels, 3)
        .context("Failed to render province ranking panels")?;
    write_svg(&facet_svg, args.out_dir.join("02_top_provinces.svg"))
        .context("Failed to write 02_top_provinces.svg")?;
    sections.push(("Top Provinces per Decade".to_string(), facet_svg));

    let share_chart = catalog::regional_share_chart(&shares);
    write_chart(&share_chart, &args, "03_regional_share.svg", &mut sections)?;

    let density_rows = compute_density_rows(&provinces)?;
    let density = catalog::density_chart(&density_rows);
    write_chart(&density, &args, "04_brussels_paradox.svg", &mut sections)?;

    let cagr = catalog::cagr_chart(&growth_rows);
    write_chart(&cagr, &args, "05_cagr.svg", &mut sections)?;

    let projection = catalog::projection_chart(&projection_series);
    write_chart(&projection, &args, "06_projection.svg", &mut sections)?;

    // Steps 4-5: Interactive HTML documents and dashboard
    if args.skip_html {
        info!("Steps 4-5/6: Skipping HTML documents (not requested)");
    } else {
        info!("Step 4/6: Building interactive HTML documents...");
        let map_html = build_province_map(&provinces).context("Failed to build province map")?;
        write_html(&map_html, args.out_dir.join("province_map.html"))
            .context("Failed to write province_map.html")?;

        let trends_html =
            build_industry_trends(&sectors).context("Failed to build industry trends")?;
        write_html(&trends_html, args.out_dir.join("industry_trends.html"))
            .context("Failed to write industry_trends.html")?;

        info!("Step 5/6: Assembling dashboard...");
        let dashboard = dashboard_document(&sections);
        write_html(&dashboard, args.out_dir.join("dashboard.html"))
            .context("Failed to write dashboard.html")?;
    }

    // Step 6: JSON export
    info!("Step 6/6: Writing metrics export...");
    let table = MetricsTable::new(
        shares.rows().iter().map(ExportedShareRow::from).collect(),
        growth_rows.clone(),
        projection_rows,
    );
    write_table(&table, args.out_dir.join("metrics.json"))
        .context("Failed to write metrics.json")?;

    if args.print_summary {
        println!("\n{}", format_summary_table(&growth_rows, &shares, &grouping));
    }

    let elapsed = start_time.elapsed();
    info!("Render completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Render one chart spec and write it under the output directory
fn write_chart(
    spec: &ChartSpec,
    args: &RenderArgs,
    file_name: &str,
    sections: &mut Vec<(String, String)>,
) -> Result<()> {
    let svg =
        render_chart(spec).with_context(|| format!("Failed to render '{}'", spec.title))?;
    write_svg(&svg, args.out_dir.join(file_name))
        .with_context(|| format!("Failed to write {}", file_name))?;
    sections.push((spec.title.clone(), svg));
    Ok(())
}

/// Growth rate per province over the full observed range
///
/// A province whose rate cannot be computed is skipped with a
/// warning, never given a substitute rate.
fn compute_growth_rows(provinces: &ObservationTable) -> Vec<GrowthRow> {
    let mut rows = Vec::new();
    for category in provinces.categories() {
        match compute_growth_rate(provinces, &category, FIRST_DECADE, LAST_DECADE) {
            Ok(rate) => rows.push(GrowthRow {
                category,
                rate_pct: rate * 100.0,
            }),
            Err(e) => warn!("Skipping growth rate for {}: {}", category, e),
        }
    }
    rows
}

type ProjectionSeries = Vec<(String, Vec<(String, f64)>)>;

/// Compound the selected provinces' rates forward from the last decade
fn compute_projections(
    provinces: &ObservationTable,
    growth_rows: &[GrowthRow],
) -> Result<(ProjectionSeries, Vec<ProjectionRow>)> {
    let base_year = parse_year(LAST_DECADE).context("Bad last decade label")?;

    let mut series = Vec::new();
    let mut rows = Vec::new();
    for name in PROJECTED_PROVINCES {
        let last_value = provinces
            .get(name, LAST_DECADE)
            .with_context(|| format!("No {} observation for {}", LAST_DECADE, name))?;
        let rate_pct = growth_rows
            .iter()
            .find(|r| r.category == *name)
            .map(|r| r.rate_pct)
            .with_context(|| format!("No growth rate for {}", name))?;

        let mut points = Vec::with_capacity(PROJECTION_OFFSETS.len());
        for (offset, value) in PROJECTION_OFFSETS
            .iter()
            .zip(project(last_value, rate_pct / 100.0, PROJECTION_OFFSETS))
        {
            let year = base_year + *offset as i32;
            points.push((year.to_string(), value));
            rows.push(ProjectionRow {
                category: name.to_string(),
                year,
                value,
            });
        }
        series.push((name.to_string(), points));
    }

    Ok((series, rows))
}

/// (province, last-decade count, companies per km²) rows
fn compute_density_rows(provinces: &ObservationTable) -> Result<Vec<(String, f64, f64)>> {
    let areas = dataset::province_areas();

    let mut rows = Vec::new();
    for province in provinces.categories() {
        let count = provinces
            .get(&province, LAST_DECADE)
            .with_context(|| format!("No {} observation for {}", LAST_DECADE, province))?;
        let area = areas
            .get(&province)
            .with_context(|| format!("No surface area for {}", province))?;
        rows.push((province, count, count / area));
    }
    Ok(rows)
}

fn build_province_map(provinces: &ObservationTable) -> Result<String> {
    let periods = provinces.periods();
    let categories = provinces.categories();
    let grid = provinces.to_dense_grid(&categories, &periods);

    let entries: Vec<MapEntry> = grid
        .categories
        .iter()
        .enumerate()
        .map(|(idx, name)| MapEntry {
            name: name.clone(),
            dutch: dataset::dutch_name(name).unwrap_or(name.as_str()).to_string(),
            values: grid.values[idx].clone(),
        })
        .collect();

    Ok(province_map_document(&periods, &entries)?)
}

fn build_industry_trends(sectors: &ObservationTable) -> Result<String> {
    let periods = sectors.periods();
    // First-appearance order keeps colors stable; table order is alphabetical
    let names = dataset::sector_names();
    let grid = sectors.to_dense_grid(&names, &periods);

    let entries: Vec<TrendEntry> = grid
        .categories
        .iter()
        .enumerate()
        .map(|(idx, name)| TrendEntry {
            name: name.clone(),
            code: dataset::nace_code(name).unwrap_or("").to_string(),
            color: dataset::sector_color(name).unwrap_or("#7f7f7f").to_string(),
            values: grid.values[idx].clone(),
        })
        .collect();

    Ok(industry_trends_document(&periods, &entries)?)
}

/// Box-drawing CAGR summary for the terminal, regions colored
fn format_summary_table(
    growth_rows: &[GrowthRow],
    shares: &ShareTable,
    grouping: &Grouping,
) -> String {
    let reset = "\x1b[0m";
    let mut sorted: Vec<&GrowthRow> = growth_rows.iter().collect();
    sorted.sort_by(|a, b| b.rate_pct.total_cmp(&a.rate_pct));

    let mut lines = Vec::new();
    lines.push("  COMPOUND ANNUAL GROWTH 1960-2020".to_string());
    lines.push(
        "  ┏━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━┳━━━━━━━━━━┓".to_string(),
    );
    lines.push(format!(
        "  ┃ {:<20} ┃ {:^10} ┃ {:>8} ┃",
        "Province", "Region", "CAGR"
    ));
    lines.push(
        "  ┣━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━╋━━━━━━━━━━┫".to_string(),
    );

    for row in &sorted {
        let region = grouping.group_of(&row.category).unwrap_or("-");
        let color = region_ansi(region);
        lines.push(format!(
            "  ┃ {}{:<20}{} ┃ {}{:^10}{} ┃ {:>7.2}% ┃",
            color, row.category, reset, color, region, reset, row.rate_pct
        ));
    }
    lines.push(
        "  ┗━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━┻━━━━━━━━━━┛".to_string(),
    );

    lines.push(String::new());
    lines.push(format!("  REGIONAL SHARE IN {}", LAST_DECADE));
    for group in shares.groups() {
        if let Some(share) = shares.get(&group, LAST_DECADE) {
            let bar_width = (share / 2.0).round() as usize;
            lines.push(format!(
                "  {}{:<10}{} {} {:>5.1}%",
                region_ansi(&group),
                group,
                reset,
                "█".repeat(bar_width),
                share
            ));
        }
    }

    lines.join("\n")
}
