use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Point in pixel space. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Chart bounds must be finite and strictly positive on both axes.
    pub fn validate_bounds(self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Builds the smallest rect covering both corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self::new(min_x, min_y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    #[must_use]
    pub fn min_x(self) -> f64 {
        self.origin.x
    }

    #[must_use]
    pub fn min_y(self) -> f64 {
        self.origin.y
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.origin.y + self.size.height
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.size.width
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.size.height
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Inclusive containment test on all four edges.
    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            origin: self.origin.offset(dx, dy),
            size: self.size,
        }
    }

    #[must_use]
    pub fn inset_by(self, insets: EdgeInsets) -> Self {
        Self::new(
            self.origin.x + insets.left,
            self.origin.y + insets.top,
            (self.size.width - insets.horizontal()).max(0.0),
            (self.size.height - insets.vertical()).max(0.0),
        )
    }

    /// Grows `self` to cover `point`.
    #[must_use]
    pub fn union_point(self, point: Point) -> Self {
        let min_x = self.min_x().min(point.x);
        let min_y = self.min_y().min(point.y);
        let max_x = self.max_x().max(point.x);
        let max_y = self.max_y().max(point.y);
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

/// Independent radius per corner.
///
/// For bars the `bottom_*` slots always belong to the corners resting on the
/// zero axis, whichever side of the axis the bar grows to.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_left: f64,
    pub bottom_right: f64,
}

impl CornerRadii {
    #[must_use]
    pub const fn new(top_left: f64, top_right: f64, bottom_left: f64, bottom_right: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    #[must_use]
    pub const fn uniform(radius: f64) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Limits every radius to `limit`, never going below zero.
    #[must_use]
    pub fn clamped_to(self, limit: f64) -> Self {
        let limit = limit.max(0.0);
        let clamp = |radius: f64| radius.max(0.0).min(limit);
        Self::new(
            clamp(self.top_left),
            clamp(self.top_right),
            clamp(self.bottom_left),
            clamp(self.bottom_right),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (corner, radius) in [
            ("top_left", self.top_left),
            ("top_right", self.top_right),
            ("bottom_left", self.bottom_left),
            ("bottom_right", self.bottom_right),
        ] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "corner radius `{corner}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}
