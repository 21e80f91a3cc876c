use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::PieType;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::validation::{
    validate_bar, validate_chart_style, validate_grid, validate_segment, validate_slice,
    validate_tooltip,
};
use super::{
    BarSettings, ChartStyle, GridLineSettings, GridSettings, ScrollLocation, SegmentSettings,
    SliceSettings, TooltipSettings,
};

/// Settings documents that can be loaded from partial JSON.
///
/// Fields missing from the input keep their defaults; the parsed document is
/// validated before it is returned.
pub trait SettingsDocument: Serialize + DeserializeOwned + Sized {
    fn validate(&self) -> ChartResult<()>;

    fn from_json_str(input: &str) -> ChartResult<Self> {
        let settings: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse settings json: {e}"))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize settings json: {e}"))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartSettings {
    pub chart: ChartStyle,
    pub grid: GridSettings,
    pub tooltip: TooltipSettings,
    pub bar: BarSettings,
    pub initial_scroll: ScrollLocation,
}

impl BarChartSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bar(mut self, bar: BarSettings) -> Self {
        self.bar = bar;
        self
    }

    #[must_use]
    pub fn with_chart_style(mut self, chart: ChartStyle) -> Self {
        self.chart = chart;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridSettings) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_initial_scroll(mut self, location: ScrollLocation) -> Self {
        self.initial_scroll = location;
        self
    }
}

impl SettingsDocument for BarChartSettings {
    fn validate(&self) -> ChartResult<()> {
        validate_chart_style(&self.chart)?;
        validate_grid(&self.grid)?;
        validate_tooltip(&self.tooltip)?;
        validate_bar(&self.bar)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartSettings {
    pub chart: ChartStyle,
    pub grid: GridSettings,
    pub tooltip: TooltipSettings,
    pub segment: SegmentSettings,
    pub initial_scroll: ScrollLocation,
}

impl Default for LineChartSettings {
    fn default() -> Self {
        Self {
            chart: ChartStyle::default(),
            grid: GridSettings {
                zero_line: GridLineSettings::zero_axis(Color::RED),
                ..GridSettings::default()
            },
            tooltip: TooltipSettings::default(),
            segment: SegmentSettings::default(),
            initial_scroll: ScrollLocation::default(),
        }
    }
}

impl LineChartSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_segment(mut self, segment: SegmentSettings) -> Self {
        self.segment = segment;
        self
    }

    #[must_use]
    pub fn with_chart_style(mut self, chart: ChartStyle) -> Self {
        self.chart = chart;
        self
    }

    #[must_use]
    pub fn with_initial_scroll(mut self, location: ScrollLocation) -> Self {
        self.initial_scroll = location;
        self
    }
}

impl SettingsDocument for LineChartSettings {
    fn validate(&self) -> ChartResult<()> {
        validate_chart_style(&self.chart)?;
        validate_grid(&self.grid)?;
        validate_tooltip(&self.tooltip)?;
        validate_segment(&self.segment)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChartSettings {
    pub chart: ChartStyle,
    pub tooltip: TooltipSettings,
    pub pie_type: PieType,
    pub slice: SliceSettings,
}

impl PieChartSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pie_type(mut self, pie_type: PieType) -> Self {
        self.pie_type = pie_type;
        self
    }

    #[must_use]
    pub fn with_slice(mut self, slice: SliceSettings) -> Self {
        self.slice = slice;
        self
    }

    #[must_use]
    pub fn with_chart_style(mut self, chart: ChartStyle) -> Self {
        self.chart = chart;
        self
    }
}

impl SettingsDocument for PieChartSettings {
    fn validate(&self) -> ChartResult<()> {
        validate_chart_style(&self.chart)?;
        validate_tooltip(&self.tooltip)?;
        validate_slice(&self.slice)
    }
}
