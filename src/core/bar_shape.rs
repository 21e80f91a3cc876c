use serde::{Deserialize, Serialize};

use crate::core::path::Path;
use crate::core::types::{CornerRadii, Point, Rect};
use crate::error::{ChartError, ChartResult};

/// Closed outline of one bar plus the values it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarShape {
    pub path: Path,
    pub bounds: Rect,
    /// Radii after clamping to half the bar's shorter side.
    pub radii: CornerRadii,
    /// `true` when the bar grows upward from the zero axis (or is flat).
    pub grows_up: bool,
}

/// Builds a bar resting on the zero axis at `base`.
///
/// `base` is the bar's left edge on the zero axis. A positive `height` grows
/// the bar upward, a negative one downward. The `bottom_*` radii round the
/// corners on the axis and the `top_*` radii round the free end, whichever
/// direction the bar grows. Every radius is limited to half of the
/// shorter of `width` and `|height|`.
pub fn bar_shape(base: Point, width: f64, height: f64, radii: CornerRadii) -> ChartResult<BarShape> {
    if !base.is_finite() || !height.is_finite() {
        return Err(ChartError::InvalidData(
            "bar origin and height must be finite".to_owned(),
        ));
    }
    if !width.is_finite() || width < 0.0 {
        return Err(ChartError::InvalidData(
            "bar width must be finite and >= 0".to_owned(),
        ));
    }

    let radii = radii.clamped_to(height.abs().min(width) / 2.0);
    let toward_tip = if height < 0.0 { 1.0 } else { -1.0 };
    let (left, right) = (base.x, base.x + width);
    let (axis_y, tip_y) = (base.y, base.y - height);

    let mut path = Path::new();
    path.move_to(Point::new(left, axis_y + toward_tip * radii.bottom_left))
        .arc_to(
            Point::new(left, axis_y),
            Point::new(right, axis_y),
            radii.bottom_left,
        )
        .arc_to(
            Point::new(right, axis_y),
            Point::new(right, tip_y),
            radii.bottom_right,
        )
        .arc_to(Point::new(right, tip_y), Point::new(left, tip_y), radii.top_right)
        .arc_to(Point::new(left, tip_y), Point::new(left, axis_y), radii.top_left)
        .close();

    Ok(BarShape {
        path,
        bounds: Rect::from_corners(Point::new(left, axis_y), Point::new(right, tip_y)),
        radii,
        grows_up: height >= 0.0,
    })
}
