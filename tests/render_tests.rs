use bedrijvenkaart::commands::{execute_render, validate_args, RenderArgs};
use bedrijvenkaart::output::read_table;
use std::path::Path;

const SVG_FILES: &[&str] = &[
    "01_growth_log.svg",
    "02_top_provinces.svg",
    "03_regional_share.svg",
    "04_brussels_paradox.svg",
    "05_cagr.svg",
    "06_projection.svg",
];

const HTML_FILES: &[&str] = &["province_map.html", "industry_trends.html", "dashboard.html"];

fn assert_all_exist(dir: &Path, names: &[&str]) {
    for name in names {
        assert!(dir.join(name).exists(), "missing {}", name);
    }
}

#[test]
fn test_render_writes_full_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = RenderArgs {
        out_dir: temp_dir.path().to_path_buf(),
        ..Default::default()
    };

    validate_args(&args).unwrap();
    execute_render(args).unwrap();

    assert_all_exist(temp_dir.path(), SVG_FILES);
    assert_all_exist(temp_dir.path(), HTML_FILES);
    assert!(temp_dir.path().join("metrics.json").exists());
}

#[test]
fn test_render_skip_html() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = RenderArgs {
        out_dir: temp_dir.path().to_path_buf(),
        skip_html: true,
        ..Default::default()
    };

    execute_render(args).unwrap();

    assert_all_exist(temp_dir.path(), SVG_FILES);
    for name in HTML_FILES {
        assert!(!temp_dir.path().join(name).exists(), "unexpected {}", name);
    }
}

#[test]
fn test_metrics_export_round_trips() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = RenderArgs {
        out_dir: temp_dir.path().to_path_buf(),
        skip_html: true,
        ..Default::default()
    };
    execute_render(args).unwrap();

    let table = read_table(temp_dir.path().join("metrics.json")).unwrap();

    // 3 regions x 7 decades, 11 provinces, 3 provinces x 3 years
    assert_eq!(table.shares.len(), 21);
    assert_eq!(table.growth_rates.len(), 11);
    assert_eq!(table.projections.len(), 9);

    // Every projected value is finite and positive
    assert!(table.projections.iter().all(|p| p.value.is_finite() && p.value > 0.0));

    // Per-decade shares still sum to 100 after serialization
    for decade in ["1960", "1990", "2020"] {
        let sum: f64 = table
            .shares
            .iter()
            .filter(|r| r.period == decade)
            .map(|r| r.share_pct)
            .sum();
        assert!((sum - 100.0).abs() < 1e-9, "decade {}: {}", decade, sum);
    }
}

#[test]
fn test_render_rejects_bad_args() {
    let args = RenderArgs {
        top: 0,
        ..Default::default()
    };
    assert!(validate_args(&args).is_err());
}
