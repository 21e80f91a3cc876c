mod bar_chart;
mod chart_settings;
mod data_source;
mod line_chart;
mod list;
mod listener;
mod pie_chart;
mod series_chart;
mod style;
mod tooltip_frame;
mod validation;

pub use bar_chart::BarChart;
pub use chart_settings::{BarChartSettings, LineChartSettings, PieChartSettings, SettingsDocument};
pub use data_source::{
    PieDataSource, SeriesDataSource, SeriesSnapshot, ValuesDataSource, default_slice_color,
    format_value, read_pie_values,
};
pub use line_chart::LineChart;
pub use list::{HeadlessList, ListLayout, ScrollAnchor, VirtualizedList};
pub use listener::{IgnoreSelection, SelectionListener, SelectionLog};
pub use pie_chart::PieChart;
pub use series_chart::{ItemContext, SeriesChart, SeriesLayout, SeriesStyle};
pub use style::{
    BarSettings, BorderSettings, ChartStyle, GridLineSettings, GridSettings, LineStrokeSettings,
    PointSettings, ScrollLocation, SegmentSettings, SliceSettings, TooltipArrowSettings,
    TooltipSettings,
};
