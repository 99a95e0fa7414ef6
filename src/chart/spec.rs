//! Declarative chart descriptions.

use crate::utils::error::ChartError;

/// How a chart's series are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Polylines with markers, one per series
    Line,

    /// Vertical grouped bars
    Bar,

    /// Horizontal bars with value labels
    BarH,

    /// Series stacked into filled bands
    StackedArea,

    /// Exactly two series: bars on the left axis, a line on the right
    DualAxis,
}

/// One plottable series
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,

    /// CSS color for the whole series
    pub color: String,

    /// (period label, value) rows, uniquely keyed per series
    pub points: Vec<(String, f64)>,

    /// Optional per-point colors (same length as `points`); bars only
    pub point_colors: Vec<String>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            points: Vec::new(),
            point_colors: Vec::new(),
        }
    }

    pub fn with_points(mut self, points: Vec<(String, f64)>) -> Self {
        self.points = points;
        self
    }

    pub fn with_point_colors(mut self, colors: Vec<String>) -> Self {
        self.point_colors = colors;
        self
    }
}

/// A complete chart description handed to the renderer
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub series: Vec<Series>,
    pub x_label: String,
    pub y_label: String,

    /// Label for the secondary axis (`DualAxis` only)
    pub y2_label: Option<String>,

    /// Log10 value axis
    pub log_y: bool,

    pub width: usize,
    pub height: usize,

    /// Legend entries; derived from series names when empty
    pub legend: Vec<(String, String)>,

    /// Appended to value labels and tooltips, e.g. "%"
    pub value_suffix: String,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            title: title.into(),
            kind,
            series: Vec::new(),
            x_label: String::new(),
            y_label: String::new(),
            y2_label: None,
            log_y: false,
            width: 900,
            height: 500,
            legend: Vec::new(),
            value_suffix: String::new(),
        }
    }

    pub fn with_series(mut self, series: Vec<Series>) -> Self {
        self.series = series;
        self
    }

    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    pub fn with_y2_label(mut self, label: impl Into<String>) -> Self {
        self.y2_label = Some(label.into());
        self
    }

    pub fn with_log_y(mut self, log_y: bool) -> Self {
        self.log_y = log_y;
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_legend(mut self, legend: Vec<(String, String)>) -> Self {
        self.legend = legend;
        self
    }

    pub fn with_value_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.value_suffix = suffix.into();
        self
    }

    /// Legend entries to draw: explicit override, else series names
    pub fn legend_entries(&self) -> Vec<(String, String)> {
        if !self.legend.is_empty() {
            return self.legend.clone();
        }
        self.series
            .iter()
            .map(|s| (s.name.clone(), s.color.clone()))
            .collect()
    }

    /// Check the sink contract before rendering
    ///
    /// # Errors
    /// * `ChartError::EmptySeries` - no series, or a series with no points
    /// * `ChartError::DuplicateKey` - a (series, period) key repeats
    /// * `ChartError::NonFiniteValue` - NaN or infinite value
    /// * `ChartError::NonPositiveLogValue` - log scale with value <= 0
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.series.is_empty() || self.series.iter().all(|s| s.points.is_empty()) {
            return Err(ChartError::EmptySeries {
                title: self.title.clone(),
            });
        }

        for series in &self.series {
            let mut seen: Vec<&str> = Vec::with_capacity(series.points.len());
            for (period, value) in &series.points {
                if seen.contains(&period.as_str()) {
                    return Err(ChartError::DuplicateKey {
                        series: series.name.clone(),
                        period: period.clone(),
                    });
                }
                seen.push(period);

                if !value.is_finite() {
                    return Err(ChartError::NonFiniteValue {
                        series: series.name.clone(),
                        period: period.clone(),
                    });
                }
                if self.log_y && *value <= 0.0 {
                    return Err(ChartError::NonPositiveLogValue {
                        series: series.name.clone(),
                        value: *value,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_spec(points: Vec<(String, f64)>) -> ChartSpec {
        ChartSpec::new("test", ChartKind::Line)
            .with_series(vec![Series::new("a", "#000").with_points(points)])
    }

    #[test]
    fn test_validate_ok() {
        let spec = line_spec(vec![("1960".to_string(), 1.0), ("1970".to_string(), 2.0)]);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_empty_series_rejected() {
        let spec = ChartSpec::new("empty", ChartKind::Line);
        assert!(matches!(
            spec.validate(),
            Err(ChartError::EmptySeries { .. })
        ));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let spec = line_spec(vec![("1960".to_string(), 1.0), ("1960".to_string(), 2.0)]);
        assert!(matches!(
            spec.validate(),
            Err(ChartError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let spec = line_spec(vec![("1960".to_string(), f64::NAN)]);
        assert!(matches!(
            spec.validate(),
            Err(ChartError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn test_log_scale_rejects_zero() {
        let spec = line_spec(vec![("1960".to_string(), 0.0)]).with_log_y(true);
        assert!(matches!(
            spec.validate(),
            Err(ChartError::NonPositiveLogValue { .. })
        ));
    }
}
