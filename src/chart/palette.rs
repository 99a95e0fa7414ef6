//! Colors shared by the SVG and HTML renderers.

/// Default qualitative cycle for per-category series (line charts)
pub const CATEGORY_COLORS: &[&str] = &[
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52", "#8c564b", "#7f7f7f",
];

/// Axis and frame stroke
pub const AXIS_COLOR: &str = "#444444";

/// Gridline stroke
pub const GRID_COLOR: &str = "#e3e3e3";

/// Default single-series bar fill
pub const BAR_COLOR: &str = "#636efa";

/// Fill for the region a province belongs to
pub fn region_color(region: &str) -> &'static str {
    match region {
        "Flanders" => "#636efa",
        "Wallonia" => "#ef553b",
        "Brussels" => "#00cc96",
        _ => "#7f7f7f",
    }
}

/// ANSI escape for the stdout summary table, keyed by region
pub fn region_ansi(region: &str) -> &'static str {
    match region {
        "Flanders" => "\x1b[34m",  // Blue
        "Wallonia" => "\x1b[31m",  // Red
        "Brussels" => "\x1b[32m",  // Green
        _ => "\x1b[90m",           // Gray
    }
}

/// Series color for the i-th category, cycling
pub fn category_color(index: usize) -> &'static str {
    CATEGORY_COLORS[index % CATEGORY_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_colors_distinct() {
        let colors = [
            region_color("Flanders"),
            region_color("Wallonia"),
            region_color("Brussels"),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }

    #[test]
    fn test_category_color_cycles() {
        assert_eq!(category_color(0), category_color(CATEGORY_COLORS.len()));
    }
}
