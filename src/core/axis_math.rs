//! Value to pixel arithmetic shared by every chart type.
//!
//! The vertical extent of a chart is `|max| + |min|` rather than `max - min`,
//! so value 0 always has a defined pixel position: the bottom edge for
//! non-negative data, the top edge for non-positive data, and a proportional
//! split otherwise. All functions are total over finite input; a zero range
//! maps every value onto the zero axis.

use serde::{Deserialize, Serialize};

/// Ranges at or below this use a fixed gridline interval of 1.
pub const SMALL_RANGE_LIMIT: f64 = 10.0;
/// Approximate number of gridline steps spanning the range.
pub const TARGET_GRIDLINE_STEPS: f64 = 5.0;
/// Multipliers cycled to produce the 1, 2.5, 5, 10, 25, ... sequence.
pub const INTERVAL_MULTIPLIERS: [f64; 3] = [2.5, 2.0, 2.0];

/// Largest value in the payload, `0` when empty.
#[must_use]
pub fn payload_max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// Smallest value in the payload, `0` when empty.
#[must_use]
pub fn payload_min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// `|max| + |min|` over the payload, `0` when empty.
#[must_use]
pub fn range_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    range(payload_max(values), payload_min(values))
}

#[must_use]
pub fn range(max: f64, min: f64) -> f64 {
    max.abs() + min.abs()
}

/// Picks the "nice" gridline step for a range.
#[must_use]
pub fn interval(max: f64, min: f64) -> f64 {
    let range = range(max, min);
    if !range.is_finite() || range <= SMALL_RANGE_LIMIT {
        return 1.0;
    }

    let target = range / TARGET_GRIDLINE_STEPS;
    let mut interval = 1.0;
    let mut step = 0usize;
    while interval < target {
        interval *= INTERVAL_MULTIPLIERS[step % INTERVAL_MULTIPLIERS.len()];
        step += 1;
    }
    interval
}

/// Signed pixel displacement of `value` from the zero axis. Positive values
/// move up, that is toward smaller `y`.
#[must_use]
pub fn point_location_y(value: f64, max: f64, min: f64, height: f64) -> f64 {
    let range = range(max, min);
    if range <= 0.0 || !range.is_finite() {
        return 0.0;
    }
    value * (height / range)
}

/// Pixel `y` of value 0 inside a container of `height`.
#[must_use]
pub fn zero_axis_location(max: f64, min: f64, height: f64) -> f64 {
    if min >= 0.0 {
        return height;
    }
    if max <= 0.0 {
        return 0.0;
    }
    max * (height / range(max, min))
}

/// Absolute pixel `y` of `value` measured from the container's top edge.
#[must_use]
pub fn pixel_y_for_value(value: f64, max: f64, min: f64, height: f64) -> f64 {
    zero_axis_location(max, min, height) - point_location_y(value, max, min, height)
}

/// Inverse of [`pixel_y_for_value`]. Returns `0` when the range is empty.
#[must_use]
pub fn value_for_pixel_y(pixel_y: f64, max: f64, min: f64, height: f64) -> f64 {
    let range = range(max, min);
    if range <= 0.0 || height <= 0.0 || !range.is_finite() {
        return 0.0;
    }
    (zero_axis_location(max, min, height) - pixel_y) * (range / height)
}

/// Pixel distance between horizontal gridlines.
///
/// Empty charts divide by [`TARGET_GRIDLINE_STEPS`] instead of the range so the
/// background still shows evenly spaced gridlines. A populated chart with a
/// zero range yields `0`, which gridline iteration treats as "no gridlines".
#[must_use]
pub fn increment_pixels(max: f64, min: f64, height: f64, has_data: bool) -> f64 {
    let step = interval(max, min);
    if !has_data {
        return (height / TARGET_GRIDLINE_STEPS) * step;
    }
    let range = range(max, min);
    if range <= 0.0 || !range.is_finite() {
        return 0.0;
    }
    (height / range) * step
}

/// Axis arithmetic resolved once per draw pass and threaded through
/// per-item geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMetrics {
    pub max: f64,
    pub min: f64,
    pub range: f64,
    pub interval: f64,
    /// Plot height the metrics were resolved for.
    pub height: f64,
    pub zero_axis: f64,
    pub increment: f64,
}

impl AxisMetrics {
    #[must_use]
    pub fn resolve(max: f64, min: f64, height: f64, has_data: bool) -> Self {
        Self {
            max,
            min,
            range: range(max, min),
            interval: interval(max, min),
            height,
            zero_axis: zero_axis_location(max, min, height),
            increment: increment_pixels(max, min, height, has_data),
        }
    }

    #[must_use]
    pub fn location_y(&self, value: f64) -> f64 {
        point_location_y(value, self.max, self.min, self.height)
    }

    #[must_use]
    pub fn pixel_y(&self, value: f64) -> f64 {
        self.zero_axis - self.location_y(value)
    }

    #[must_use]
    pub fn value_at(&self, pixel_y: f64) -> f64 {
        value_for_pixel_y(pixel_y, self.max, self.min, self.height)
    }
}
