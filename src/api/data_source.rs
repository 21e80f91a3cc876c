//! Data-source contracts consumed by the chart controllers.
//!
//! Only the item count and the per-item value are required. Every other
//! method has a default, and an override that returns `Some` always wins over
//! the chart-level setting.

use crate::core::{payload_max, payload_min};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Font, LineStyle};

use super::SliceSettings;

/// Renders a value the way tooltips show it by default (`50.0`, `-12.5`).
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

/// Data feeding a bar or line chart.
pub trait SeriesDataSource {
    fn number_of_items(&self) -> usize;

    fn value(&self, index: usize) -> f64;

    /// Top of the value range. Defaults to the largest value, `0` when empty.
    fn max_value(&self) -> f64 {
        payload_max(&collect_values(self))
    }

    /// Bottom of the value range. Defaults to the smallest value, `0` when empty.
    fn min_value(&self) -> f64 {
        payload_min(&collect_values(self))
    }

    fn vertical_gridline_active(&self, _index: usize) -> Option<bool> {
        None
    }

    fn vertical_gridline_color(&self, _index: usize) -> Option<Color> {
        None
    }

    fn vertical_gridline_style(&self, _index: usize) -> Option<LineStyle> {
        None
    }

    fn vertical_gridline_width(&self, _index: usize) -> Option<f64> {
        None
    }

    /// Rotated label drawn along the item's leading edge.
    fn section_title(&self, _index: usize) -> Option<String> {
        None
    }

    /// Defaults to the vertical gridline color.
    fn section_title_color(&self, _index: usize) -> Option<Color> {
        None
    }

    fn section_title_font(&self, _index: usize) -> Font {
        Font::caption()
    }

    fn tooltip_title(&self, index: usize) -> String {
        format!("Index {index}")
    }

    fn tooltip_value(&self, index: usize) -> String {
        format_value(self.value(index))
    }
}

/// Data feeding a pie chart. The total is derived from the values.
pub trait PieDataSource {
    fn number_of_items(&self) -> usize;

    fn value(&self, index: usize) -> f64;

    /// Fill of one slice. The default brightens the configured color a little
    /// more for each successive slice.
    fn slice_color(
        &self,
        index: usize,
        count: usize,
        selected: bool,
        settings: &SliceSettings,
    ) -> Color {
        default_slice_color(index, count, selected, settings)
    }

    fn tooltip_title(&self, index: usize) -> String {
        format!("Index {index}")
    }

    fn tooltip_value(&self, index: usize) -> String {
        format_value(self.value(index))
    }
}

#[must_use]
pub fn default_slice_color(
    index: usize,
    count: usize,
    selected: bool,
    settings: &SliceSettings,
) -> Color {
    let base = if selected {
        settings.selected_color
    } else {
        settings.color
    };
    if count == 0 {
        return base;
    }
    base.lightened((index as f64 / count as f64) / 2.0)
}

fn collect_values<S: SeriesDataSource + ?Sized>(source: &S) -> Vec<f64> {
    (0..source.number_of_items())
        .map(|index| source.value(index))
        .collect()
}

/// Values and range read from a series source at the start of a draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSnapshot {
    pub values: Vec<f64>,
    pub max: f64,
    pub min: f64,
}

impl SeriesSnapshot {
    /// Reads and checks the source. Non-finite values or a range with
    /// `max < min` are rejected before anything is drawn.
    pub fn read<S: SeriesDataSource + ?Sized>(source: &S) -> ChartResult<Self> {
        let values = collect_values(source);
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::InvalidDataSource(format!(
                "value at index {index} must be finite"
            )));
        }
        let (max, min) = (source.max_value(), source.min_value());
        if !max.is_finite() || !min.is_finite() {
            return Err(ChartError::InvalidDataSource(
                "max and min values must be finite".to_owned(),
            ));
        }
        if max < min {
            return Err(ChartError::InvalidDataSource(format!(
                "max value {max} is below min value {min}"
            )));
        }
        Ok(Self { values, max, min })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Reads and checks a pie source.
pub fn read_pie_values<S: PieDataSource + ?Sized>(source: &S) -> ChartResult<Vec<f64>> {
    let values: Vec<f64> = (0..source.number_of_items())
        .map(|index| source.value(index))
        .collect();
    if let Some(index) = values.iter().position(|v| !v.is_finite() || *v < 0.0) {
        return Err(ChartError::InvalidDataSource(format!(
            "slice value at index {index} must be finite and >= 0"
        )));
    }
    Ok(values)
}

/// Ready-made source over an in-memory payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValuesDataSource {
    values: Vec<f64>,
    labels: Option<Vec<String>>,
    max: Option<f64>,
    min: Option<f64>,
    slice_colors: Option<Vec<Color>>,
}

impl ValuesDataSource {
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            ..Self::default()
        }
    }

    /// Tooltip titles per item; items without a label keep the default title.
    #[must_use]
    pub fn with_labels<I, T>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Fixes the value range instead of deriving it from the payload.
    #[must_use]
    pub fn with_range(mut self, max: f64, min: f64) -> Self {
        self.max = Some(max);
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_slice_colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.slice_colors = Some(colors.into());
        self
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn set_values(&mut self, values: impl Into<Vec<f64>>) {
        self.values = values.into();
    }

    fn label(&self, index: usize) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(index))
            .map(String::as_str)
    }
}

impl SeriesDataSource for ValuesDataSource {
    fn number_of_items(&self) -> usize {
        self.values.len()
    }

    fn value(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }

    fn max_value(&self) -> f64 {
        self.max.unwrap_or_else(|| payload_max(&self.values))
    }

    fn min_value(&self) -> f64 {
        self.min.unwrap_or_else(|| payload_min(&self.values))
    }

    fn tooltip_title(&self, index: usize) -> String {
        self.label(index)
            .map_or_else(|| format!("Index {index}"), str::to_owned)
    }
}

impl PieDataSource for ValuesDataSource {
    fn number_of_items(&self) -> usize {
        self.values.len()
    }

    fn value(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }

    fn slice_color(
        &self,
        index: usize,
        count: usize,
        selected: bool,
        settings: &SliceSettings,
    ) -> Color {
        match self.slice_colors.as_ref().and_then(|colors| colors.get(index)) {
            Some(color) if selected => color.darkened(),
            Some(color) => *color,
            None => default_slice_color(index, count, selected, settings),
        }
    }

    fn tooltip_title(&self, index: usize) -> String {
        self.label(index)
            .map_or_else(|| format!("Index {index}"), str::to_owned)
    }
}
