//! Hand-rolled SVG chart renderer.
//!
//! Draws line, bar, stacked-area and dual-axis charts by pushing SVG
//! fragments into a `String`. Value axes can be linear or log10;
//! category axes are the decade (or province) labels.

use crate::chart::palette::{AXIS_COLOR, GRID_COLOR};
use crate::chart::spec::{ChartKind, ChartSpec, Series};
use crate::utils::error::ChartError;
use log::info;

const MARGIN_TOP: f64 = 58.0;
const MARGIN_BOTTOM: f64 = 64.0;
const MARGIN_LEFT: f64 = 78.0;
const MARGIN_RIGHT: f64 = 30.0;
const SIDE_LEGEND_WIDTH: f64 = 150.0;
const TICK_COUNT: f64 = 5.0;

/// Render one chart to a standalone SVG document
///
/// **Public** - main entry point for SVG rendering
///
/// # Errors
/// Any `ChartError` from `ChartSpec::validate`, plus
/// `ChartError::DualAxisArity` for a dual-axis spec without exactly
/// two series.
pub fn render_chart(spec: &ChartSpec) -> Result<String, ChartError> {
    spec.validate()?;

    let mut out = String::new();
    svg_open(&mut out, spec.width as f64, spec.height as f64);
    render_into(spec, &mut out, 0.0, 0.0, spec.width as f64, spec.height as f64, 16.0)?;
    out.push_str("</svg>");

    info!(
        "Rendered chart '{}' ({} bytes)",
        spec.title,
        out.len()
    );
    Ok(out)
}

/// Render several panels into one SVG grid (small multiples)
///
/// **Public** - used by the per-decade province ranking chart
pub fn render_facets(
    title: &str,
    panels: &[ChartSpec],
    columns: usize,
) -> Result<String, ChartError> {
    if panels.is_empty() {
        return Err(ChartError::EmptySeries {
            title: title.to_string(),
        });
    }

    let columns = columns.max(1);
    let rows = (panels.len() + columns - 1) / columns;
    let panel_w = panels[0].width as f64;
    let panel_h = panels[0].height as f64;
    let header = 44.0;
    let total_w = panel_w * columns as f64;
    let total_h = panel_h * rows as f64 + header;

    let mut out = String::new();
    svg_open(&mut out, total_w, total_h);
    text(
        &mut out,
        total_w / 2.0,
        28.0,
        18.0,
        "middle",
        AXIS_COLOR,
        "bold",
        title,
    );

    for (idx, panel) in panels.iter().enumerate() {
        let col = idx % columns;
        let row = idx / columns;
        let x0 = col as f64 * panel_w;
        let y0 = header + row as f64 * panel_h;
        out.push_str(&format!(r#"<g transform="translate({:.1} {:.1})">"#, x0, y0));
        render_into(panel, &mut out, 0.0, 0.0, panel_w, panel_h, 13.0)?;
        out.push_str("</g>");
    }

    out.push_str("</svg>");
    info!("Rendered facet grid '{}' with {} panels", title, panels.len());
    Ok(out)
}

fn render_into(
    spec: &ChartSpec,
    out: &mut String,
    x0: f64,
    y0: f64,
    w: f64,
    h: f64,
    title_size: f64,
) -> Result<(), ChartError> {
    spec.validate()?;

    let legend = spec.legend_entries();
    let side_legend = legend.len() > 4;

    let mut right = MARGIN_RIGHT;
    if side_legend {
        right += SIDE_LEGEND_WIDTH;
    }
    if spec.kind == ChartKind::DualAxis {
        right += 48.0;
    }

    let plot_x = x0 + MARGIN_LEFT;
    let plot_y = y0 + MARGIN_TOP;
    let plot_w = w - MARGIN_LEFT - right;
    let plot_h = h - MARGIN_TOP - MARGIN_BOTTOM;

    text(
        out,
        x0 + w / 2.0,
        y0 + 24.0,
        title_size,
        "middle",
        AXIS_COLOR,
        "bold",
        &spec.title,
    );

    match spec.kind {
        ChartKind::Line => render_line(spec, out, plot_x, plot_y, plot_w, plot_h),
        ChartKind::Bar => render_bar(spec, out, plot_x, plot_y, plot_w, plot_h),
        ChartKind::BarH => render_barh(spec, out, plot_x, plot_y, plot_w, plot_h),
        ChartKind::StackedArea => render_area(spec, out, plot_x, plot_y, plot_w, plot_h),
        ChartKind::DualAxis => render_dual(spec, out, plot_x, plot_y, plot_w, plot_h)?,
    }

    // Axis titles
    if !spec.x_label.is_empty() {
        text(
            out,
            plot_x + plot_w / 2.0,
            y0 + h - 10.0,
            12.0,
            "middle",
            AXIS_COLOR,
            "normal",
            &spec.x_label,
        );
    }
    if !spec.y_label.is_empty() {
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle" fill="{}" transform="rotate(-90 {:.1} {:.1})">{}</text>"#,
            x0 + 18.0,
            plot_y + plot_h / 2.0,
            AXIS_COLOR,
            x0 + 18.0,
            plot_y + plot_h / 2.0,
            esc(&spec.y_label)
        ));
    }

    if side_legend {
        draw_side_legend(out, &legend, x0 + w - SIDE_LEGEND_WIDTH + 8.0, plot_y);
    } else {
        draw_top_legend(out, &legend, plot_x, y0 + 42.0);
    }

    Ok(())
}

// Value scale (linear or log10) mapping values to a 0..1 fraction

struct ValueScale {
    min: f64,
    max: f64,
    log: bool,
}

impl ValueScale {
    fn fit<I: Iterator<Item = f64>>(values: I, log: bool) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !lo.is_finite() || !hi.is_finite() {
            lo = 0.0;
            hi = 1.0;
        }

        if log {
            // Decade bounds around the positive data
            let min = lo.max(f64::MIN_POSITIVE).log10().floor();
            let mut max = hi.max(f64::MIN_POSITIVE).log10().ceil();
            if max <= min {
                max = min + 1.0;
            }
            return Self { min, max, log: true };
        }

        // Include the zero baseline, round the top to a tick boundary
        let mut min = lo.min(0.0);
        let mut max = hi.max(0.0);
        if max <= min {
            max = min + 1.0;
        }
        let step = nice_step(max - min);
        min = step * (min / step).floor();
        max = step * (max / step).ceil();
        Self { min, max, log: false }
    }

    /// Fraction of the axis from the bottom, 0..1
    fn t(&self, value: f64) -> f64 {
        let v = if self.log {
            value.max(f64::MIN_POSITIVE).log10()
        } else {
            value
        };
        ((v - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    fn ticks(&self) -> Vec<f64> {
        if self.log {
            let mut ticks = Vec::new();
            let mut exp = self.min;
            while exp <= self.max + 1e-9 {
                ticks.push(10f64.powf(exp));
                exp += 1.0;
            }
            return ticks;
        }
        let step = nice_step(self.max - self.min);
        let mut ticks = Vec::new();
        let mut v = self.min;
        while v <= self.max + step * 1e-6 {
            ticks.push(v);
            v += step;
        }
        ticks
    }
}

/// Round a range down to a 1/2/5 x 10^k tick step
fn nice_step(range: f64) -> f64 {
    let raw = (range / TICK_COUNT).max(f64::MIN_POSITIVE);
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Union of all period labels, preserving first-seen order
fn x_domain(series: &[Series]) -> Vec<String> {
    let mut domain: Vec<String> = Vec::new();
    for s in series {
        for (period, _) in &s.points {
            if !domain.contains(period) {
                domain.push(period.clone());
            }
        }
    }
    domain
}

fn draw_value_axis(
    out: &mut String,
    scale: &ValueScale,
    plot_x: f64,
    plot_y: f64,
    plot_w: f64,
    plot_h: f64,
) {
    for tick in scale.ticks() {
        let y = plot_y + plot_h * (1.0 - scale.t(tick));
        line(out, plot_x, y, plot_x + plot_w, y, GRID_COLOR, 1.0);
        text(
            out,
            plot_x - 8.0,
            y + 4.0,
            11.0,
            "end",
            AXIS_COLOR,
            "normal",
            &format_value(tick),
        );
    }
    line(out, plot_x, plot_y, plot_x, plot_y + plot_h, AXIS_COLOR, 1.0);
    line(
        out,
        plot_x,
        plot_y + plot_h,
        plot_x + plot_w,
        plot_y + plot_h,
        AXIS_COLOR,
        1.0,
    );
}

fn draw_category_axis(out: &mut String, domain: &[String], plot_x: f64, plot_y: f64, plot_w: f64, plot_h: f64) {
    let n = domain.len().max(1) as f64;
    let rotate = domain.iter().any(|label| label.len() > 6);
    for (i, label) in domain.iter().enumerate() {
        let x = plot_x + (i as f64 + 0.5) * plot_w / n;
        let y = plot_y + plot_h + 16.0;
        if rotate {
            out.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" font-size="11" text-anchor="end" fill="{}" transform="rotate(-35 {:.1} {:.1})">{}</text>"#,
                x, y, AXIS_COLOR, x, y, esc(label)
            ));
        } else {
            text(out, x, y, 11.0, "middle", AXIS_COLOR, "normal", label);
        }
    }
}

fn render_line(spec: &ChartSpec, out: &mut String, plot_x: f64, plot_y: f64, plot_w: f64, plot_h: f64) {
    let domain = x_domain(&spec.series);
    let scale = ValueScale::fit(
        spec.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)),
        spec.log_y,
    );
    draw_value_axis(out, &scale, plot_x, plot_y, plot_w, plot_h);
    draw_category_axis(out, &domain, plot_x, plot_y, plot_w, plot_h);

    let n = domain.len().max(1) as f64;
    for series in &spec.series {
        let mut path_points: Vec<(f64, f64)> = Vec::with_capacity(series.points.len());
        for (period, value) in &series.points {
            let Some(idx) = domain.iter().position(|d| d == period) else {
                continue;
            };
            let x = plot_x + (idx as f64 + 0.5) * plot_w / n;
            let y = plot_y + plot_h * (1.0 - scale.t(*value));
            path_points.push((x, y));
        }

        let polyline: Vec<String> = path_points
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect();
        out.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            polyline.join(" "),
            series.color
        ));

        // Markers with hover tooltips
        for ((x, y), (period, value)) in path_points.iter().zip(series.points.iter()) {
            out.push_str(&format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="3.5" fill="{}"><title>{} {}: {}</title></circle>"#,
                x,
                y,
                series.color,
                esc(&series.name),
                esc(period),
                format_value(*value)
            ));
        }
    }
}

fn render_bar(spec: &ChartSpec, out: &mut String, plot_x: f64, plot_y: f64, plot_w: f64, plot_h: f64) {
    let domain = x_domain(&spec.series);
    let scale = ValueScale::fit(
        spec.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)),
        spec.log_y,
    );
    draw_value_axis(out, &scale, plot_x, plot_y, plot_w, plot_h);
    draw_category_axis(out, &domain, plot_x, plot_y, plot_w, plot_h);

    let n = domain.len().max(1) as f64;
    let group_w = plot_w / n;
    let bar_w = group_w * 0.8 / spec.series.len().max(1) as f64;

    for (series_idx, series) in spec.series.iter().enumerate() {
        for (point_idx, (period, value)) in series.points.iter().enumerate() {
            let Some(idx) = domain.iter().position(|d| d == period) else {
                continue;
            };
            let x = plot_x + idx as f64 * group_w + group_w * 0.1 + series_idx as f64 * bar_w;
            let top = plot_y + plot_h * (1.0 - scale.t(*value));
            let base = plot_y + plot_h * (1.0 - scale.t(0.0f64.max(scale_floor(&scale))));
            let color = series
                .point_colors
                .get(point_idx)
                .map(String::as_str)
                .unwrap_or(&series.color);
            rect_with_title(
                out,
                x,
                top.min(base),
                bar_w,
                (base - top).abs(),
                color,
                &format!("{} {}: {}", series.name, period, format_value(*value)),
            );
        }
    }
}

/// Baseline value for bars: the axis floor on log scales, zero otherwise
fn scale_floor(scale: &ValueScale) -> f64 {
    if scale.log {
        10f64.powf(scale.min)
    } else {
        0.0
    }
}

fn render_barh(spec: &ChartSpec, out: &mut String, plot_x: f64, plot_y: f64, plot_w: f64, plot_h: f64) {
    // Flatten series into (label, value, color) rows, series order kept
    let mut bars: Vec<(String, f64, String)> = Vec::new();
    for series in &spec.series {
        for (idx, (label, value)) in series.points.iter().enumerate() {
            let color = series
                .point_colors
                .get(idx)
                .cloned()
                .unwrap_or_else(|| series.color.clone());
            bars.push((label.clone(), *value, color));
        }
    }

    let scale = ValueScale::fit(bars.iter().map(|b| b.1), false);
    let n = bars.len().max(1) as f64;
    let row_h = plot_h / n;
    let bar_h = row_h * 0.7;
    let zero_x = plot_x + plot_w * scale.t(0.0);

    // Vertical gridlines
    for tick in scale.ticks() {
        let x = plot_x + plot_w * scale.t(tick);
        line(out, x, plot_y, x, plot_y + plot_h, GRID_COLOR, 1.0);
        text(
            out,
            x,
            plot_y + plot_h + 16.0,
            11.0,
            "middle",
            AXIS_COLOR,
            "normal",
            &format_value(tick),
        );
    }
    line(out, zero_x, plot_y, zero_x, plot_y + plot_h, AXIS_COLOR, 1.0);

    for (idx, (label, value, color)) in bars.iter().enumerate() {
        let y = plot_y + idx as f64 * row_h + (row_h - bar_h) / 2.0;
        let val_x = plot_x + plot_w * scale.t(*value);
        let (bar_x, bar_w) = if *value >= 0.0 {
            (zero_x, val_x - zero_x)
        } else {
            (val_x, zero_x - val_x)
        };
        rect_with_title(
            out,
            bar_x,
            y,
            bar_w.max(0.5),
            bar_h,
            color,
            &format!("{}: {}{}", label, format_value(*value), spec.value_suffix),
        );

        // Category label left of the axis, value label outside the bar
        text(
            out,
            plot_x - 8.0,
            y + bar_h / 2.0 + 4.0,
            11.0,
            "end",
            AXIS_COLOR,
            "normal",
            label,
        );
        let label_x = if *value >= 0.0 { val_x + 6.0 } else { val_x - 6.0 };
        let anchor = if *value >= 0.0 { "start" } else { "end" };
        text(
            out,
            label_x,
            y + bar_h / 2.0 + 4.0,
            11.0,
            anchor,
            AXIS_COLOR,
            "normal",
            &format!("{}{}", format_value(*value), spec.value_suffix),
        );
    }
}

fn render_area(spec: &ChartSpec, out: &mut String, plot_x: f64, plot_y: f64, plot_w: f64, plot_h: f64) {
    let domain = x_domain(&spec.series);
    let n = domain.len().max(1) as f64;

    // Stack totals set the axis
    let mut totals = vec![0.0f64; domain.len()];
    for series in &spec.series {
        for (period, value) in &series.points {
            if let Some(idx) = domain.iter().position(|d| d == period) {
                totals[idx] += value;
            }
        }
    }
    let scale = ValueScale::fit(totals.iter().copied(), false);
    draw_value_axis(out, &scale, plot_x, plot_y, plot_w, plot_h);
    draw_category_axis(out, &domain, plot_x, plot_y, plot_w, plot_h);

    // Bands, bottom-up
    let mut cumulative = vec![0.0f64; domain.len()];
    for series in &spec.series {
        let mut upper: Vec<(f64, f64)> = Vec::with_capacity(domain.len());
        let base: Vec<(f64, f64)> = cumulative
            .iter()
            .enumerate()
            .map(|(idx, c)| {
                (
                    plot_x + (idx as f64 + 0.5) * plot_w / n,
                    plot_y + plot_h * (1.0 - scale.t(*c)),
                )
            })
            .collect();

        for (idx, _) in domain.iter().enumerate() {
            let value = series
                .points
                .iter()
                .find(|(p, _)| p == &domain[idx])
                .map(|(_, v)| *v)
                .unwrap_or(0.0);
            cumulative[idx] += value;
            upper.push((
                plot_x + (idx as f64 + 0.5) * plot_w / n,
                plot_y + plot_h * (1.0 - scale.t(cumulative[idx])),
            ));
        }

        let mut points: Vec<String> = upper
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect();
        points.extend(
            base.iter()
                .rev()
                .map(|(x, y)| format!("{:.1},{:.1}", x, y)),
        );
        out.push_str(&format!(
            r#"<polygon points="{}" fill="{}" fill-opacity="0.85" stroke="{}" stroke-width="1"><title>{}</title></polygon>"#,
            points.join(" "),
            series.color,
            series.color,
            esc(&series.name)
        ));
    }
}

fn render_dual(
    spec: &ChartSpec,
    out: &mut String,
    plot_x: f64,
    plot_y: f64,
    plot_w: f64,
    plot_h: f64,
) -> Result<(), ChartError> {
    if spec.series.len() != 2 {
        return Err(ChartError::DualAxisArity {
            title: spec.title.clone(),
            count: spec.series.len(),
        });
    }
    let bars = &spec.series[0];
    let overlay = &spec.series[1];
    let domain = x_domain(&spec.series);
    let n = domain.len().max(1) as f64;

    let left = ValueScale::fit(bars.points.iter().map(|p| p.1), false);
    let right = ValueScale::fit(overlay.points.iter().map(|p| p.1), false);

    draw_value_axis(out, &left, plot_x, plot_y, plot_w, plot_h);
    draw_category_axis(out, &domain, plot_x, plot_y, plot_w, plot_h);

    // Bars on the left axis
    let group_w = plot_w / n;
    let bar_w = group_w * 0.6;
    for (period, value) in &bars.points {
        let Some(idx) = domain.iter().position(|d| d == period) else {
            continue;
        };
        let x = plot_x + idx as f64 * group_w + (group_w - bar_w) / 2.0;
        let top = plot_y + plot_h * (1.0 - left.t(*value));
        rect_with_title(
            out,
            x,
            top,
            bar_w,
            plot_y + plot_h - top,
            &bars.color,
            &format!("{} {}: {}", bars.name, period, format_value(*value)),
        );
    }

    // Overlay line on the right axis
    let mut points: Vec<String> = Vec::with_capacity(overlay.points.len());
    for (period, value) in &overlay.points {
        let Some(idx) = domain.iter().position(|d| d == period) else {
            continue;
        };
        let x = plot_x + (idx as f64 + 0.5) * plot_w / n;
        let y = plot_y + plot_h * (1.0 - right.t(*value));
        points.push(format!("{:.1},{:.1}", x, y));
        out.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="3.5" fill="{}"><title>{} {}: {}</title></circle>"#,
            x,
            y,
            overlay.color,
            esc(&overlay.name),
            esc(period),
            format_value(*value)
        ));
    }
    out.push_str(&format!(
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
        points.join(" "),
        overlay.color
    ));

    // Right axis ticks in the overlay color
    for tick in right.ticks() {
        let y = plot_y + plot_h * (1.0 - right.t(tick));
        text(
            out,
            plot_x + plot_w + 8.0,
            y + 4.0,
            11.0,
            "start",
            &overlay.color,
            "normal",
            &format_value(tick),
        );
    }
    if let Some(y2) = &spec.y2_label {
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle" fill="{}" transform="rotate(90 {:.1} {:.1})">{}</text>"#,
            plot_x + plot_w + 56.0,
            plot_y + plot_h / 2.0,
            overlay.color,
            plot_x + plot_w + 56.0,
            plot_y + plot_h / 2.0,
            esc(y2)
        ));
    }

    Ok(())
}

fn draw_top_legend(out: &mut String, entries: &[(String, String)], x: f64, y: f64) {
    let mut cursor = x;
    for (label, color) in entries {
        out.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="12" height="12" fill="{}" rx="2"/>"#,
            cursor,
            y - 10.0,
            color
        ));
        text(out, cursor + 17.0, y, 11.0, "start", AXIS_COLOR, "normal", label);
        cursor += 17.0 + 7.0 * label.len() as f64 + 18.0;
    }
}

fn draw_side_legend(out: &mut String, entries: &[(String, String)], x: f64, y: f64) {
    for (idx, (label, color)) in entries.iter().enumerate() {
        let row_y = y + idx as f64 * 20.0;
        out.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="12" height="12" fill="{}" rx="2"/>"#,
            x,
            row_y - 10.0,
            color
        ));
        text(out, x + 17.0, row_y, 11.0, "start", AXIS_COLOR, "normal", label);
    }
}

// Low-level fragment helpers

fn svg_open(out: &mut String, width: f64, height: f64) {
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}" font-family="sans-serif">"#,
        width, height, width, height
    ));
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{:.0}" height="{:.0}" fill="white"/>"#,
        width, height
    ));
}

#[allow(clippy::too_many_arguments)]
fn text(
    out: &mut String,
    x: f64,
    y: f64,
    size: f64,
    anchor: &str,
    fill: &str,
    weight: &str,
    content: &str,
) {
    out.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" text-anchor="{}" fill="{}" font-weight="{}">{}</text>"#,
        x,
        y,
        size,
        anchor,
        fill,
        weight,
        esc(content)
    ));
}

fn line(out: &mut String, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
    out.push_str(&format!(
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
        x1, y1, x2, y2, stroke, width
    ));
}

fn rect_with_title(out: &mut String, x: f64, y: f64, w: f64, h: f64, fill: &str, title: &str) {
    out.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{}</title></rect>"#,
        x,
        y,
        w.max(0.5),
        h.max(0.5),
        fill,
        esc(title)
    ));
}

/// Compact tick/tooltip number formatting
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1000.0 {
        let thousands = value / 1000.0;
        if thousands.fract().abs() < 1e-9 || magnitude >= 10_000.0 {
            format!("{:.0}k", thousands)
        } else {
            format!("{:.1}k", thousands)
        }
    } else if value.fract().abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Minimal XML escaping for labels and tooltips
fn esc(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::{ChartKind, ChartSpec, Series};

    fn decade_series(name: &str) -> Series {
        Series::new(name, "#636efa").with_points(vec![
            ("1960".to_string(), 1577.0),
            ("1970".to_string(), 2252.0),
            ("1980".to_string(), 6600.0),
        ])
    }

    #[test]
    fn test_render_line_chart() {
        let spec = ChartSpec::new("Growth", ChartKind::Line)
            .with_series(vec![decade_series("Antwerp")])
            .with_axis_labels("Decade", "Company Count");
        let svg = render_chart(&spec).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("polyline"));
        assert!(svg.contains("Antwerp"));
    }

    #[test]
    fn test_render_log_scale() {
        let spec = ChartSpec::new("Growth (log)", ChartKind::Line)
            .with_series(vec![decade_series("Antwerp")])
            .with_log_y(true);
        let svg = render_chart(&spec).unwrap();

        // Log decade ticks cover the data range
        assert!(svg.contains(">1k<"));
        assert!(svg.contains(">10k<"));
    }

    #[test]
    fn test_render_barh_with_suffix() {
        let spec = ChartSpec::new("CAGR", ChartKind::BarH)
            .with_series(vec![Series::new("CAGR", "#636efa").with_points(vec![
                ("Antwerp".to_string(), 6.21),
                ("Namur".to_string(), 5.84),
            ])])
            .with_value_suffix("%");
        let svg = render_chart(&spec).unwrap();

        assert!(svg.contains("6.21%"));
        assert!(svg.contains("Namur"));
    }

    #[test]
    fn test_render_stacked_area() {
        let a = Series::new("Flanders", "#636efa").with_points(vec![
            ("1960".to_string(), 55.0),
            ("1970".to_string(), 60.0),
        ]);
        let b = Series::new("Wallonia", "#ef553b").with_points(vec![
            ("1960".to_string(), 45.0),
            ("1970".to_string(), 40.0),
        ]);
        let spec = ChartSpec::new("Share", ChartKind::StackedArea).with_series(vec![a, b]);
        let svg = render_chart(&spec).unwrap();

        assert_eq!(svg.matches("<polygon").count(), 2);
    }

    #[test]
    fn test_dual_axis_needs_two_series() {
        let spec = ChartSpec::new("Paradox", ChartKind::DualAxis)
            .with_series(vec![decade_series("only one")]);
        assert!(matches!(
            render_chart(&spec),
            Err(ChartError::DualAxisArity { .. })
        ));
    }

    #[test]
    fn test_render_facets() {
        let panel = ChartSpec::new("1960", ChartKind::BarH)
            .with_series(vec![Series::new("count", "#636efa")
                .with_points(vec![("Antwerp".to_string(), 1577.0)])])
            .with_size(420, 300);
        let svg = render_facets("Top Provinces", &[panel.clone(), panel], 2).unwrap();

        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<g transform").count(), 2);
    }

    #[test]
    fn test_invalid_spec_refused() {
        let spec = ChartSpec::new("bad", ChartKind::Line).with_series(vec![Series::new(
            "a",
            "#000",
        )
        .with_points(vec![("1960".to_string(), f64::INFINITY)])]);
        assert!(render_chart(&spec).is_err());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(58441.0), "58k");
        assert_eq!(format_value(1500.0), "1.5k");
        assert_eq!(format_value(2500000.0), "2.5M");
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(6.21), "6.21");
    }
}
