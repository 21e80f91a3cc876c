use crate::core::{Point, Polarity, bar_shape};
use crate::error::ChartResult;
use crate::render::{Color, LayerTag, RenderFrame, ShapePrimitive};

use super::series_chart::{ItemContext, SeriesChart, SeriesStyle};
use super::{BarChartSettings, BarSettings, ChartStyle, GridSettings, ScrollLocation, TooltipSettings};

/// Scrollable bar chart: one rounded bar per value, growing from the zero axis.
pub type BarChart<R, L> = SeriesChart<BarChartSettings, R, L>;

impl BarSettings {
    /// Fill for a bar of the given polarity.
    #[must_use]
    pub fn color_for(&self, polarity: Polarity, selected: bool) -> Color {
        match (polarity, selected) {
            (Polarity::Positive, false) => self.positive_color,
            (Polarity::Positive, true) => self.positive_selected_color,
            (Polarity::Negative, false) => self.negative_color,
            (Polarity::Negative, true) => self.negative_selected_color,
        }
    }
}

impl SeriesStyle for BarChartSettings {
    fn chart_style(&self) -> &ChartStyle {
        &self.chart
    }

    fn grid(&self) -> &GridSettings {
        &self.grid
    }

    fn tooltip(&self) -> &TooltipSettings {
        &self.tooltip
    }

    fn initial_scroll(&self) -> ScrollLocation {
        self.initial_scroll
    }

    fn item_width(&self) -> f64 {
        self.bar.item_width()
    }

    fn push_series(&self, frame: &mut RenderFrame, item: &ItemContext) -> ChartResult<()> {
        let location = item.location_y();
        let shape = bar_shape(
            Point::new(self.bar.spacing / 2.0, item.metrics.zero_axis),
            self.bar.width,
            location,
            self.bar.corner_radii,
        )?;
        let fill = self
            .bar
            .color_for(Polarity::of_location(location), item.selected);
        frame.push_shape(LayerTag::Series, ShapePrimitive::filled(shape.path, fill));
        Ok(())
    }

    /// Middle of the bar.
    fn tooltip_anchor(&self, item: &ItemContext) -> Point {
        Point::new(
            self.bar.spacing / 2.0 + self.bar.width / 2.0,
            item.metrics.zero_axis - item.location_y() / 2.0,
        )
    }
}
