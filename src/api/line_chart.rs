use crate::core::{
    CircleMarker, LineCellFrame, LineCellValues, Point, Polarity, line_cell_geometry,
};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LayerTag, LinePrimitive, PolygonPrimitive, RenderFrame, Stroke,
};

use super::series_chart::{ItemContext, SeriesChart, SeriesStyle};
use super::{
    ChartStyle, GridSettings, LineChartSettings, LineStrokeSettings, PointSettings,
    ScrollLocation, TooltipSettings,
};

/// Scrollable line chart. Each item draws the stretch of line from the
/// midpoint with its previous neighbour to the midpoint with its next one.
pub type LineChart<R, L> = SeriesChart<LineChartSettings, R, L>;

impl LineStrokeSettings {
    #[must_use]
    pub fn color_for(&self, polarity: Polarity) -> Color {
        match polarity {
            Polarity::Positive => self.positive_color,
            Polarity::Negative => self.negative_color,
        }
    }
}

impl PointSettings {
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

impl SeriesStyle for LineChartSettings {
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
        self.segment.spacing
    }

    fn push_series(&self, frame: &mut RenderFrame, item: &ItemContext) -> ChartResult<()> {
        let geometry = line_cell_geometry(
            LineCellValues {
                previous: item.previous,
                current: item.value,
                next: item.next,
            },
            &item.metrics,
            LineCellFrame {
                width: item.cell.width,
                height: item.cell.height,
                extend_left: item.extend_left,
                extend_right: item.extend_right,
                extend_bottom: item.extend_bottom,
            },
        );

        frame.push_polygon(
            LayerTag::SeriesFill,
            PolygonPrimitive::new(geometry.fill_polygon, self.segment.fill_color),
        );
        let line = self.segment.line;
        for run in &geometry.runs {
            frame.push_line(
                LayerTag::Series,
                LinePrimitive::new(
                    run.from,
                    run.to,
                    Stroke::solid(line.color_for(run.polarity), line.width),
                ),
            );
        }
        Ok(())
    }

    fn push_markers(&self, frame: &mut RenderFrame, item: &ItemContext) -> ChartResult<()> {
        let point = self.segment.point;
        let color = point.color_for(Polarity::of_location(item.location_y()), item.selected);
        let center = Point::new(
            item.cell.width / 2.0,
            item.metrics.pixel_y(item.value),
        );
        frame.push_circle(
            LayerTag::Marker,
            CirclePrimitive {
                marker: CircleMarker::new(center, point.diameter),
                fill: if point.fill { color } else { item.background },
                border: Stroke::solid(color, point.border_width),
            },
        );
        Ok(())
    }

    /// The data point.
    fn tooltip_anchor(&self, item: &ItemContext) -> Point {
        Point::new(
            item.cell.width / 2.0,
            item.metrics.zero_axis - item.location_y(),
        )
    }
}
