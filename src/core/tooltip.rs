//! Tooltip box sizing, direction selection and edge avoidance.
//!
//! A tooltip is a rounded box holding a title above a value, joined to its
//! anchor by a triangular arrow. Boxes open downward unless the anchor sits in
//! the lower half of the plot. Horizontally the box is centered on the anchor
//! until that would cross a container edge, in which case it opens toward the
//! free side.

use serde::{Deserialize, Serialize};

use crate::core::types::{CornerRadii, Point, Rect, Size};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalDirection {
    Up,
    #[default]
    Down,
}

impl VerticalDirection {
    /// Anchors below the middle of `height` open upward.
    #[must_use]
    pub fn for_anchor(anchor_y: f64, height: f64) -> Self {
        if anchor_y > height / 2.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalDirection {
    #[default]
    Centered,
    Left,
    Right,
}

/// Direction flags for one placement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TooltipDirection {
    pub vertical: VerticalDirection,
    pub horizontal: HorizontalDirection,
}

impl TooltipDirection {
    #[must_use]
    pub const fn new(vertical: VerticalDirection, horizontal: HorizontalDirection) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipSpacing {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    /// Gap between title and value.
    pub middle: f64,
}

impl Default for TooltipSpacing {
    fn default() -> Self {
        Self {
            top: 8.0,
            left: 8.0,
            bottom: 8.0,
            right: 8.0,
            middle: 0.0,
        }
    }
}

/// Dimensions needed to lay a tooltip out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipMetrics {
    pub arrow_height: f64,
    pub spacing: TooltipSpacing,
    pub corner_radii: CornerRadii,
}

impl TooltipMetrics {
    pub fn validate(&self) -> ChartResult<()> {
        let spacing = self.spacing;
        for (name, value) in [
            ("arrow_height", self.arrow_height),
            ("spacing.top", spacing.top),
            ("spacing.left", spacing.left),
            ("spacing.bottom", spacing.bottom),
            ("spacing.right", spacing.right),
            ("spacing.middle", spacing.middle),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "tooltip `{name}` must be finite and >= 0"
                )));
            }
        }
        self.corner_radii.validate()
    }
}

/// Set when a box could not be kept inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TooltipOverflow {
    pub horizontal: bool,
    pub vertical: bool,
}

/// Resolved tooltip geometry in the container's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipGeometry {
    pub anchor: Point,
    pub direction: TooltipDirection,
    pub box_rect: Rect,
    pub corner_radii: CornerRadii,
    /// `[anchor, right attachment, left attachment]`.
    pub arrow: [Point; 3],
    pub title_origin: Point,
    pub value_origin: Point,
    pub overflow: TooltipOverflow,
}

impl TooltipGeometry {
    /// Tap target used to tell tooltip taps apart from item taps.
    #[must_use]
    pub fn hit_rect(&self) -> Rect {
        self.box_rect
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.box_rect.contains(point)
    }
}

/// Lays out a tooltip for fixed direction flags.
#[must_use]
pub fn layout_tooltip(
    anchor: Point,
    title: Size,
    value: Size,
    metrics: &TooltipMetrics,
    direction: TooltipDirection,
) -> TooltipGeometry {
    let spacing = metrics.spacing;
    let content_width = title.width.max(value.width);
    let width = spacing.left + content_width + spacing.right;
    let height = spacing.top + title.height + spacing.middle + value.height + spacing.bottom;

    let arrow_height = match direction.vertical {
        VerticalDirection::Down => metrics.arrow_height,
        VerticalDirection::Up => -metrics.arrow_height,
    };
    let center_x = match direction.horizontal {
        HorizontalDirection::Centered => anchor.x,
        HorizontalDirection::Left => anchor.x - width / 2.0,
        HorizontalDirection::Right => anchor.x + width / 2.0,
    };
    let bottom = match direction.vertical {
        VerticalDirection::Down => anchor.y + height + arrow_height,
        VerticalDirection::Up => anchor.y + arrow_height,
    };
    let box_rect = Rect::new(center_x - width / 2.0, bottom - height, width, height);

    let radii = metrics.corner_radii;
    let (attach_left, attach_right) = match direction.vertical {
        VerticalDirection::Down => (radii.top_left, radii.top_right),
        VerticalDirection::Up => (-radii.bottom_left, -radii.bottom_right),
    };
    let arrow = [
        anchor,
        Point::new(box_rect.max_x(), anchor.y + arrow_height + attach_right),
        Point::new(box_rect.min_x(), anchor.y + arrow_height + attach_left),
    ];

    let value_y = bottom - spacing.bottom - value.height;
    TooltipGeometry {
        anchor,
        direction,
        box_rect,
        corner_radii: radii,
        arrow,
        title_origin: Point::new(
            box_rect.min_x() + spacing.left + (content_width - title.width) / 2.0,
            value_y - spacing.middle - title.height,
        ),
        value_origin: Point::new(
            box_rect.min_x() + spacing.left + (content_width - value.width) / 2.0,
            value_y,
        ),
        overflow: TooltipOverflow::default(),
    }
}

/// Two-pass placement keeping the box inside `container` where possible.
///
/// The first pass centers the box on the anchor. If it crosses the left edge
/// the box opens right, if it crosses the right edge it opens left. When the
/// box then overflows vertically and the opposite vertical direction fits,
/// the vertical direction flips. Remaining overflow is reported, not clamped.
#[must_use]
pub fn place_tooltip(
    anchor: Point,
    title: Size,
    value: Size,
    metrics: &TooltipMetrics,
    vertical: VerticalDirection,
    container: Rect,
) -> TooltipGeometry {
    let first = layout_tooltip(
        anchor,
        title,
        value,
        metrics,
        TooltipDirection::new(vertical, HorizontalDirection::Centered),
    );

    let horizontal = if first.box_rect.min_x() < container.min_x() {
        HorizontalDirection::Right
    } else if first.box_rect.max_x() > container.max_x() {
        HorizontalDirection::Left
    } else {
        HorizontalDirection::Centered
    };

    let mut placed = if horizontal == HorizontalDirection::Centered {
        first
    } else {
        layout_tooltip(
            anchor,
            title,
            value,
            metrics,
            TooltipDirection::new(vertical, horizontal),
        )
    };

    if overflows_vertically(placed.box_rect, container) {
        let flipped = layout_tooltip(
            anchor,
            title,
            value,
            metrics,
            TooltipDirection::new(vertical.flipped(), horizontal),
        );
        if overflows_vertically(flipped.box_rect, container) {
            placed.overflow.vertical = true;
        } else {
            placed = flipped;
        }
    }
    placed.overflow.horizontal = overflows_horizontally(placed.box_rect, container);
    placed
}

fn overflows_horizontally(rect: Rect, container: Rect) -> bool {
    rect.min_x() < container.min_x() || rect.max_x() > container.max_x()
}

fn overflows_vertically(rect: Rect, container: Rect) -> bool {
    rect.min_y() < container.min_y() || rect.max_y() > container.max_y()
}
