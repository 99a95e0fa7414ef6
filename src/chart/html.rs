//! Self-contained interactive HTML documents.
//!
//! Data is embedded as a JSON literal and a small inline script does
//! the per-decade redrawing; the dropdown is plain `<select>`. No
//! external assets, so the files open anywhere.

use crate::utils::error::ChartError;
use serde::Serialize;

/// One province row of the interactive map document
#[derive(Debug, Clone, Serialize)]
pub struct MapEntry {
    pub name: String,

    /// Dutch display name, shown in the hover label
    pub dutch: String,

    /// One value per period, period order
    pub values: Vec<f64>,
}

/// One sector row of the industry trends document
#[derive(Debug, Clone, Serialize)]
pub struct TrendEntry {
    pub name: String,

    /// NACE activity code
    pub code: String,

    pub color: String,

    /// One value per period, zero where the sector left the top five
    pub values: Vec<f64>,
}

const GLOBAL_CSS: &str = r#"
:root {
  --bg: #ffffff;
  --panel: #f6f7fb;
  --border: rgba(0, 0, 0, 0.1);
  --text: #18202b;
  --text-muted: #5b6678;
  --accent: #636efa;
  --radius: 8px;
  --font-body: "Inter", system-ui, -apple-system, sans-serif;
}
* { box-sizing: border-box; }
html, body {
  margin: 0;
  padding: 24px;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  font-size: 14px;
  line-height: 1.4;
}
h1 { font-size: 20px; margin: 0 0 4px 0; }
h2 { font-size: 16px; margin: 32px 0 8px 0; }
.subtitle { color: var(--text-muted); margin-bottom: 16px; }
.controls { margin: 16px 0; }
select {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  color: var(--text);
  padding: 6px 10px;
  font-size: 14px;
}
.chart { max-width: 860px; }
.row { display: flex; align-items: center; margin: 3px 0; }
.row .label { width: 180px; text-align: right; padding-right: 10px; color: var(--text-muted); white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.row .track { flex: 1; background: var(--panel); border-radius: 3px; }
.row .bar { height: 18px; border-radius: 3px; min-width: 2px; }
.row .value { width: 90px; padding-left: 10px; font-variant-numeric: tabular-nums; }
section { margin-bottom: 40px; }
"#;

const INTERACTIVE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<style>__CSS__</style>
</head>
<body>
<h1>__TITLE__</h1>
<div class="subtitle">__SUBTITLE__</div>
<div class="controls">
  <label for="period">Decade: </label>
  <select id="period">__OPTIONS__</select>
</div>
<div id="chart" class="chart"></div>
<script>
const DATA = __DATA__;
__SCRIPT__
document.getElementById("period").addEventListener("change", draw);
draw();
</script>
</body>
</html>
"#;

const MAP_SCRIPT: &str = r#"
function draw() {
  const period = document.getElementById("period").value;
  const idx = DATA.periods.indexOf(period);
  const rows = DATA.provinces
    .map(p => ({ name: p.name, dutch: p.dutch, value: p.values[idx] }))
    .sort((a, b) => b.value - a.value);
  const max = Math.max(...rows.map(r => r.value), 1);
  const chart = document.getElementById("chart");
  chart.innerHTML = "";
  for (const row of rows) {
    const t = row.value / max;
    const shade = Math.round(235 - 180 * t);
    const el = document.createElement("div");
    el.className = "row";
    el.title = row.dutch + " (" + period + "): " + row.value.toLocaleString();
    el.innerHTML =
      '<div class="label">' + row.name + '</div>' +
      '<div class="track"><div class="bar" style="width:' + (t * 100).toFixed(1) +
      '%;background:rgb(215,' + shade + ',' + shade + ')"></div></div>' +
      '<div class="value">' + row.value.toLocaleString() + '</div>';
    chart.appendChild(el);
  }
}
"#;

const TRENDS_SCRIPT: &str = r#"
function logWidth(value, max) {
  if (value <= 0) return 0;
  return Math.max(Math.log10(value) / Math.log10(max) * 100, 2);
}
function sectorRow(sector, period, value, max) {
  const el = document.createElement("div");
  el.className = "row";
  el.title = sector.name + " (NACE " + sector.code + ", " + period + "): " + value.toLocaleString();
  el.innerHTML =
    '<div class="label">' + sector.name + '</div>' +
    '<div class="track"><div class="bar" style="width:' + logWidth(value, max).toFixed(1) +
    '%;background:' + sector.color + '"></div></div>' +
    '<div class="value">' + value.toLocaleString() + '</div>';
  return el;
}
function draw() {
  const period = document.getElementById("period").value;
  const max = Math.max(...DATA.sectors.flatMap(s => s.values), 10);
  const chart = document.getElementById("chart");
  chart.innerHTML = "";
  const periods = period === "all" ? DATA.periods : [period];
  for (const p of periods) {
    const idx = DATA.periods.indexOf(p);
    const heading = document.createElement("h2");
    heading.textContent = p;
    chart.appendChild(heading);
    for (const sector of DATA.sectors) {
      const value = sector.values[idx];
      if (value > 0) chart.appendChild(sectorRow(sector, p, value, max));
    }
  }
}
"#;

/// Interactive per-decade company distribution across provinces
///
/// Stands in for the original choropleth: same decade dropdown, same
/// hover labels (Dutch province names), bars shaded by count.
pub fn province_map_document(
    periods: &[String],
    entries: &[MapEntry],
) -> Result<String, ChartError> {
    validate_entries(
        "Company Distribution per Province in Belgium",
        entries.iter().map(|e| (e.name.as_str(), &e.values)),
        periods,
    )?;

    let options = period_options(periods, None);
    let data = serde_json::json!({
        "periods": periods,
        "provinces": entries,
    });

    Ok(fill_template(
        "Company Distribution per Province in Belgium",
        "Select a decade to see each province's registered company count.",
        &options,
        &data.to_string(),
        MAP_SCRIPT,
    ))
}

/// Interactive top-5 industry sectors per decade, log-scale bars
pub fn industry_trends_document(
    periods: &[String],
    entries: &[TrendEntry],
) -> Result<String, ChartError> {
    validate_entries(
        "Top 5 Industries per Decade",
        entries.iter().map(|e| (e.name.as_str(), &e.values)),
        periods,
    )?;

    let options = period_options(periods, Some("All Decades"));
    let data = serde_json::json!({
        "periods": periods,
        "sectors": entries,
    });

    Ok(fill_template(
        "Top 5 Industries per Decade",
        "Bar lengths are log-scaled; sectors keep their color across decades.",
        &options,
        &data.to_string(),
        TRENDS_SCRIPT,
    ))
}

/// All rendered SVG charts concatenated into one document
pub fn dashboard_document(sections: &[(String, String)]) -> String {
    let mut body = String::new();
    for (title, svg) in sections {
        body.push_str(&format!("<section>\n<h2>{}</h2>\n{}\n</section>\n", title, svg));
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Belgian Company Statistics</title>\n<style>{}</style>\n</head>\n<body>\n<h1>Belgian Company Statistics</h1>\n<div class=\"subtitle\">Registered companies per province and sector, 1960-2020.</div>\n{}</body>\n</html>\n",
        GLOBAL_CSS, body
    )
}

fn validate_entries<'a, I>(title: &str, entries: I, periods: &[String]) -> Result<(), ChartError>
where
    I: Iterator<Item = (&'a str, &'a Vec<f64>)>,
{
    let mut any = false;
    for (name, values) in entries {
        any = true;
        for (idx, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ChartError::NonFiniteValue {
                    series: name.to_string(),
                    period: periods.get(idx).cloned().unwrap_or_default(),
                });
            }
        }
    }
    if !any || periods.is_empty() {
        return Err(ChartError::EmptySeries {
            title: title.to_string(),
        });
    }
    Ok(())
}

fn period_options(periods: &[String], all_label: Option<&str>) -> String {
    let mut options = String::new();
    if let Some(label) = all_label {
        options.push_str(&format!(r#"<option value="all">{}</option>"#, label));
    }
    for period in periods {
        options.push_str(&format!(r#"<option value="{0}">{0}</option>"#, period));
    }
    options
}

fn fill_template(title: &str, subtitle: &str, options: &str, data: &str, script: &str) -> String {
    INTERACTIVE_TEMPLATE
        .replace("__TITLE__", title)
        .replace("__SUBTITLE__", subtitle)
        .replace("__CSS__", GLOBAL_CSS)
        .replace("__OPTIONS__", options)
        .replace("__DATA__", data)
        .replace("__SCRIPT__", script)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods() -> Vec<String> {
        vec!["1960".to_string(), "1970".to_string()]
    }

    #[test]
    fn test_map_document_embeds_data_and_options() {
        let entries = vec![MapEntry {
            name: "Antwerp".to_string(),
            dutch: "Antwerpen".to_string(),
            values: vec![1577.0, 2252.0],
        }];
        let html = province_map_document(&periods(), &entries).unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains(r#""provinces":"#));
        assert!(html.contains("Antwerpen"));
        assert_eq!(html.matches("<option").count(), 2);
    }

    #[test]
    fn test_trends_document_has_all_decades_option() {
        let entries = vec![TrendEntry {
            name: "Joinery".to_string(),
            code: "43320".to_string(),
            color: "#ff9896".to_string(),
            values: vec![0.0, 6974.0],
        }];
        let html = industry_trends_document(&periods(), &entries).unwrap();

        assert!(html.contains("All Decades"));
        // "all" plus one per decade
        assert_eq!(html.matches("<option").count(), 3);
    }

    #[test]
    fn test_non_finite_rejected() {
        let entries = vec![MapEntry {
            name: "Antwerp".to_string(),
            dutch: "Antwerpen".to_string(),
            values: vec![f64::NAN, 1.0],
        }];
        assert!(matches!(
            province_map_document(&periods(), &entries),
            Err(ChartError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn test_empty_entries_rejected() {
        assert!(matches!(
            province_map_document(&periods(), &[]),
            Err(ChartError::EmptySeries { .. })
        ));
    }

    #[test]
    fn test_dashboard_concatenates_sections() {
        let html = dashboard_document(&[
            ("Growth".to_string(), "<svg></svg>".to_string()),
            ("Share".to_string(), "<svg></svg>".to_string()),
        ]);
        assert_eq!(html.matches("<section>").count(), 2);
        assert!(html.contains("<h2>Growth</h2>"));
    }
}
