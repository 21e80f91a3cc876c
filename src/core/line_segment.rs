use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::axis_math::AxisMetrics;
use crate::core::types::Point;

/// Which side of the zero axis a stroke or shape belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Sign of a displacement from the zero axis, zero counting as positive.
    #[must_use]
    pub fn of_location(location_y: f64) -> Self {
        if location_y >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Sign of a pixel `y`, on or above the zero axis counting as positive.
    #[must_use]
    pub fn of_pixel_y(pixel_y: f64, zero_axis: f64) -> Self {
        if pixel_y <= zero_axis {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Values feeding one line-chart cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCellValues {
    pub previous: Option<f64>,
    pub current: f64,
    pub next: Option<f64>,
}

/// Cell extent plus the padding a first or last cell stretches into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCellFrame {
    pub width: f64,
    pub height: f64,
    pub extend_left: f64,
    pub extend_right: f64,
    pub extend_bottom: f64,
}

/// Straight stroke colored by the side of the axis it lies on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineRun {
    pub from: Point,
    pub to: Point,
    pub polarity: Polarity,
}

/// Geometry of one line-chart cell in cell coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineCellGeometry {
    pub previous_mid: Point,
    pub current: Point,
    pub next_mid: Point,
    pub zero_axis: f64,
    /// One run per half when the half stays on one side of the axis, two
    /// when it crosses.
    pub runs: SmallVec<[LineRun; 4]>,
    /// `[previous_mid, current, next_mid, bottom_right, bottom_left]`.
    pub fill_polygon: [Point; 5],
}

/// Builds the strokes and fill for one cell.
///
/// Lines end at the midpoints toward the neighbouring values so adjacent
/// cells meet on a shared point. A missing neighbour falls back to the
/// current value, flattening that half.
#[must_use]
pub fn line_cell_geometry(
    values: LineCellValues,
    metrics: &AxisMetrics,
    frame: LineCellFrame,
) -> LineCellGeometry {
    let zero = metrics.zero_axis;
    let current_location = metrics.location_y(values.current);
    let midpoint_y = |neighbour: Option<f64>| match neighbour {
        Some(value) => {
            let location = metrics.location_y(value);
            zero - (location - (location - current_location) / 2.0)
        }
        None => zero - current_location,
    };

    let half = frame.width / 2.0;
    let current = Point::new(half, zero - current_location);
    let previous_mid = Point::new(-frame.extend_left, midpoint_y(values.previous));
    let next_mid = Point::new(frame.width + frame.extend_right, midpoint_y(values.next));
    let bottom = frame.height + frame.extend_bottom;

    let mut runs = SmallVec::new();
    push_half(&mut runs, previous_mid, current, zero, half, HalfSide::Leading);
    push_half(&mut runs, current, next_mid, zero, half, HalfSide::Trailing);

    LineCellGeometry {
        previous_mid,
        current,
        next_mid,
        zero_axis: zero,
        runs,
        fill_polygon: [
            previous_mid,
            current,
            next_mid,
            Point::new(frame.width + frame.extend_right, bottom),
            Point::new(-frame.extend_left, bottom),
        ],
    }
}

/// Distance from a midpoint to where its half-segment meets the zero axis,
/// measured horizontally over `half_width`.
#[must_use]
pub fn zero_crossing_offset(mid_y: f64, current_y: f64, zero_axis: f64, half_width: f64) -> f64 {
    let span = (mid_y - current_y).abs();
    if span <= f64::EPSILON {
        return 0.0;
    }
    half_width * ((mid_y - zero_axis).abs() / span)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HalfSide {
    Leading,
    Trailing,
}

fn push_half(
    runs: &mut SmallVec<[LineRun; 4]>,
    from: Point,
    to: Point,
    zero: f64,
    half_width: f64,
    side: HalfSide,
) {
    let (mid, current) = match side {
        HalfSide::Leading => (from, to),
        HalfSide::Trailing => (to, from),
    };
    let same_side =
        (mid.y >= zero && current.y >= zero) || (mid.y <= zero && current.y <= zero);
    if same_side {
        runs.push(LineRun {
            from,
            to,
            polarity: Polarity::of_pixel_y(current.y, zero),
        });
        return;
    }

    let offset = zero_crossing_offset(mid.y, current.y, zero, half_width);
    let cross_x = match side {
        HalfSide::Leading => offset,
        HalfSide::Trailing => 2.0 * half_width - offset,
    };
    let cross = Point::new(cross_x, zero);
    runs.push(LineRun {
        from,
        to: cross,
        polarity: Polarity::of_pixel_y(from.y, zero),
    });
    runs.push(LineRun {
        from: cross,
        to,
        polarity: Polarity::of_pixel_y(to.y, zero),
    });
}
