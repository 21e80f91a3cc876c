pub mod axis_math;
pub mod bar_shape;
pub mod gridlines;
pub mod line_segment;
pub mod marker;
pub mod path;
pub mod payload;
pub mod pie_slice;
pub mod tooltip;
pub mod types;

pub use axis_math::{
    AxisMetrics, increment_pixels, interval, payload_max, payload_min, pixel_y_for_value,
    point_location_y, range, range_of, value_for_pixel_y, zero_axis_location,
};
pub use bar_shape::{BarShape, bar_shape};
pub use gridlines::{HorizontalGridlines, horizontal_gridlines, vertical_gridlines};
pub use line_segment::{
    LineCellFrame, LineCellGeometry, LineCellValues, LineRun, Polarity, line_cell_geometry,
    zero_crossing_offset,
};
pub use marker::CircleMarker;
pub use path::{Path, PathCommand, polygon_contains};
pub use payload::{ValueType, generate_test_payload, generate_test_payload_with};
pub use pie_slice::{PieLayout, PieSlice, PieType, pie_layout, slice_path};
pub use tooltip::{
    HorizontalDirection, TooltipDirection, TooltipGeometry, TooltipMetrics, TooltipOverflow,
    TooltipSpacing, VerticalDirection, layout_tooltip, place_tooltip,
};
pub use types::{CornerRadii, EdgeInsets, Point, Rect, Size};
