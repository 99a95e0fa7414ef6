use bedrijvenkaart::chart::html::{province_map_document, MapEntry};
use bedrijvenkaart::chart::{catalog, render_chart, render_facets};
use bedrijvenkaart::dataset;
use bedrijvenkaart::metrics::shares::compute_group_shares;

#[test]
fn test_full_catalog_renders() {
    let provinces = dataset::province_table().unwrap();
    let grouping = dataset::region_grouping();
    let shares = compute_group_shares(&provinces, &grouping).unwrap();

    let specs = vec![
        catalog::growth_chart(&provinces),
        catalog::regional_share_chart(&shares),
    ];
    for spec in specs {
        let svg = render_chart(&spec).unwrap();
        assert!(svg.starts_with("<svg"), "{}", spec.title);
        assert!(svg.ends_with("</svg>"), "{}", spec.title);
    }
}

#[test]
fn test_growth_chart_is_log_scaled() {
    let provinces = dataset::province_table().unwrap();
    let svg = render_chart(&catalog::growth_chart(&provinces)).unwrap();

    // Data spans 188..58441, so the log axis shows 100 through 100k
    assert!(svg.contains(">100<"));
    assert!(svg.contains(">100k<"));
}

#[test]
fn test_facet_grid_has_one_panel_per_decade() {
    let provinces = dataset::province_table().unwrap();
    let grouping = dataset::region_grouping();
    let panels = catalog::top_province_panels(&provinces, &grouping, 5).unwrap();
    let svg = render_facets("Top Provinces per Decade", &panels, 3).unwrap();

    assert_eq!(svg.matches("<g transform").count(), 7);
    assert!(svg.contains("Top Provinces per Decade"));
}

#[test]
fn test_interactive_map_embeds_every_decade() {
    let provinces = dataset::province_table().unwrap();
    let periods = provinces.periods();
    let categories = provinces.categories();
    let grid = provinces.to_dense_grid(&categories, &periods);

    let entries: Vec<MapEntry> = grid
        .categories
        .iter()
        .enumerate()
        .map(|(idx, name)| MapEntry {
            name: name.clone(),
            dutch: dataset::dutch_name(name).unwrap_or("").to_string(),
            values: grid.values[idx].clone(),
        })
        .collect();

    let html = province_map_document(&periods, &entries).unwrap();
    assert_eq!(html.matches("<option").count(), 7);
    assert!(html.contains("Antwerpen"));
    assert!(html.contains("West-Vlaanderen"));
    // Self-contained: no external scripts or stylesheets
    assert!(!html.contains("http://"));
    assert!(!html.contains("https://"));
}

#[test]
fn test_cagr_chart_value_labels() {
    let provinces = dataset::province_table().unwrap();
    let mut rows = Vec::new();
    for province in provinces.categories() {
        let rate =
            bedrijvenkaart::metrics::compute_growth_rate(&provinces, &province, "1960", "2020")
                .unwrap();
        rows.push(bedrijvenkaart::metrics::GrowthRow {
            category: province,
            rate_pct: rate * 100.0,
        });
    }

    let svg = render_chart(&catalog::cagr_chart(&rows)).unwrap();
    // Every province appears with a percentage label
    for province in dataset::PROVINCES {
        assert!(svg.contains(province), "{}", province);
    }
    assert!(svg.contains('%'));
}
