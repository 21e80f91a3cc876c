use serde::{Deserialize, Serialize};

use crate::core::{CircleMarker, Path, Point, Size};
use crate::error::{ChartError, ChartResult};
use crate::render::text::Font;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const CLEAR: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.231, 0.188);
    pub const LINK: Self = Self::rgb(0.0, 0.478, 1.0);
    pub const SEPARATOR: Self = Self::rgb(0.776, 0.776, 0.784);
    pub const BACKGROUND: Self = Self::WHITE;
    pub const SECONDARY_BACKGROUND: Self = Self::rgb(0.949, 0.949, 0.969);
    pub const LABEL: Self = Self::BLACK;
    pub const SECONDARY_LABEL: Self = Self::rgba(0.235, 0.235, 0.263, 0.6);
    pub const FILL: Self = Self::rgba(0.471, 0.471, 0.502, 0.2);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Channel-wise average. An empty slice yields [`Color::CLEAR`].
    #[must_use]
    pub fn blend(colors: &[Color]) -> Self {
        if colors.is_empty() {
            return Self::CLEAR;
        }
        let n = colors.len() as f64;
        let sum = colors.iter().fold([0.0; 4], |acc, c| {
            [
                acc[0] + c.red,
                acc[1] + c.green,
                acc[2] + c.blue,
                acc[3] + c.alpha,
            ]
        });
        Self::rgba(sum[0] / n, sum[1] / n, sum[2] / n, sum[3] / n)
    }

    /// Selected-state variant: the color blended half way to black.
    #[must_use]
    pub fn darkened(self) -> Self {
        Self::blend(&[self, Self::BLACK])
    }

    /// Adds `amount` to the RGB channels, saturating at 1.
    #[must_use]
    pub fn lightened(self, amount: f64) -> Self {
        Self::rgba(
            (self.red + amount).clamp(0.0, 1.0),
            (self.green + amount).clamp(0.0, 1.0),
            (self.blue + amount).clamp(0.0, 1.0),
            self.alpha,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Dash pattern of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    DashedShort,
    Dotted,
}

impl LineStyle {
    /// `[on, off]` lengths in pixels, `None` for solid strokes.
    #[must_use]
    pub fn dash_pattern(self) -> Option<[f64; 2]> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some([4.0, 4.0]),
            Self::DashedShort => Some([2.0, 2.0]),
            Self::Dotted => Some([1.0, 1.0]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub style: LineStyle,
    /// Shifts the dash phase by one dash so two halves of a line interlock.
    pub inverted: bool,
}

impl Stroke {
    #[must_use]
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Solid,
            inverted: false,
        }
    }

    #[must_use]
    pub const fn styled(color: Color, width: f64, style: LineStyle) -> Self {
        Self {
            color,
            width,
            style,
            inverted: false,
        }
    }

    #[must_use]
    pub const fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    #[must_use]
    pub fn dash_phase(self) -> f64 {
        match (self.inverted, self.style.dash_pattern()) {
            (true, Some([on, _])) => on,
            _ => 0.0,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(from: Point, to: Point, stroke: Stroke) -> Self {
        Self { from, to, stroke }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}

/// Filled and/or stroked vector outline: bars, slices, tooltip boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapePrimitive {
    pub path: Path,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl ShapePrimitive {
    #[must_use]
    pub fn filled(path: Path, fill: Color) -> Self {
        Self {
            path,
            fill: Some(fill),
            stroke: None,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Option<Stroke>) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.path.validate()?;
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub marker: CircleMarker,
    pub fill: Color,
    pub border: Stroke,
}

impl CirclePrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.marker.center.is_finite() || !self.marker.diameter.is_finite() {
            return Err(ChartError::InvalidData(
                "circle geometry must be finite".to_owned(),
            ));
        }
        self.fill.validate()?;
        self.border.validate()
    }
}

/// Filled closed polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub points: Vec<Point>,
    pub fill: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: impl Into<Vec<Point>>, fill: Color) -> Self {
        Self {
            points: points.into(),
            fill,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 3 {
            return Err(ChartError::InvalidData(
                "polygon needs at least three points".to_owned(),
            ));
        }
        if self.points.iter().any(|p| !p.is_finite()) {
            return Err(ChartError::InvalidData(
                "polygon coordinates must be finite".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Reading direction of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    #[default]
    LeftToRight,
    /// Rotated a quarter turn counter-clockwise; the run's measured width
    /// extends along -y from the bottom of its box.
    BottomToTop,
}

/// One label. `origin` is the top-left of the box the text occupies on
/// screen, `size` the measured, unrotated text size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub origin: Point,
    pub size: Size,
    pub font: Font,
    pub color: Color,
    pub direction: TextDirection,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, origin: Point, size: Size, font: Font, color: Color) -> Self {
        Self {
            text: text.into(),
            origin,
            size,
            font,
            color,
            direction: TextDirection::LeftToRight,
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.origin.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.font.validate()?;
        self.color.validate()
    }
}
