use serde::{Deserialize, Serialize};

use crate::core::{CornerRadii, EdgeInsets, Path, Rect, Size, TooltipMetrics, TooltipSpacing};
use crate::render::{Color, Font, LineStyle, ShapePrimitive, Stroke};

/// Outline drawn around a chart or a slice. No color means no outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSettings {
    pub color: Option<Color>,
    pub width: f64,
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            color: Some(Color::SEPARATOR),
            width: 0.33,
        }
    }
}

impl BorderSettings {
    #[must_use]
    pub fn none() -> Self {
        Self {
            color: None,
            width: 1.0,
        }
    }

    #[must_use]
    pub fn stroke(self) -> Option<Stroke> {
        match self.color {
            Some(color) if self.width > 0.0 => Some(Stroke::solid(color, self.width)),
            _ => None,
        }
    }
}

/// One family of gridlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLineSettings {
    pub active: bool,
    pub color: Color,
    pub style: LineStyle,
    pub width: f64,
}

impl Default for GridLineSettings {
    fn default() -> Self {
        Self {
            active: true,
            color: Color::SEPARATOR,
            style: LineStyle::Solid,
            width: 0.33,
        }
    }
}

impl GridLineSettings {
    #[must_use]
    pub fn dashed() -> Self {
        Self {
            style: LineStyle::Dashed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn zero_axis(color: Color) -> Self {
        Self {
            color,
            width: 1.0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn stroke(self) -> Stroke {
        Stroke::styled(self.color, self.width, self.style)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Value gridlines stepping away from the zero axis.
    pub horizontal: GridLineSettings,
    /// Item separators.
    pub vertical: GridLineSettings,
    pub zero_line: GridLineSettings,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            horizontal: GridLineSettings::default(),
            vertical: GridLineSettings::dashed(),
            zero_line: GridLineSettings::zero_axis(Color::SEPARATOR),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipArrowSettings {
    pub height: f64,
    pub color: Color,
}

impl Default for TooltipArrowSettings {
    fn default() -> Self {
        Self {
            height: 16.0,
            color: Color::FILL.with_alpha(0.35),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipSettings {
    pub arrow: TooltipArrowSettings,
    pub background_color: Color,
    /// Outline stroked around the box.
    pub border: BorderSettings,
    pub corner_radii: CornerRadii,
    pub spacing: TooltipSpacing,
    pub title_font: Font,
    pub title_color: Color,
    pub value_font: Font,
    pub value_color: Color,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            arrow: TooltipArrowSettings::default(),
            background_color: Color::BACKGROUND,
            border: BorderSettings::default(),
            corner_radii: CornerRadii::uniform(4.0),
            spacing: TooltipSpacing::default(),
            title_font: Font::body(),
            title_color: Color::LABEL,
            value_font: Font::subheadline(),
            value_color: Color::SECONDARY_LABEL,
        }
    }
}

impl TooltipSettings {
    #[must_use]
    pub fn metrics(&self) -> TooltipMetrics {
        TooltipMetrics {
            arrow_height: self.arrow.height,
            spacing: self.spacing,
            corner_radii: self.corner_radii,
        }
    }
}

/// Where a freshly drawn item list starts scrolled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollLocation {
    #[default]
    Left,
    Right,
}

/// Container appearance shared by every chart type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub background_color: Color,
    pub corner_radius: f64,
    pub padding: EdgeInsets,
    pub border: BorderSettings,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: Color::SECONDARY_BACKGROUND,
            corner_radius: 8.0,
            padding: EdgeInsets::uniform(8.0),
            border: BorderSettings::default(),
        }
    }
}

impl ChartStyle {
    /// Rounded container filling `bounds`, stroked with the border.
    #[must_use]
    pub fn background_shape(&self, bounds: Size) -> ShapePrimitive {
        ShapePrimitive::filled(
            Path::rounded_rect(
                Rect::new(0.0, 0.0, bounds.width, bounds.height),
                CornerRadii::uniform(self.corner_radius),
            ),
            self.background_color,
        )
        .with_stroke(self.border.stroke())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSettings {
    pub width: f64,
    /// Gap shared between neighbouring bars, half on each side.
    pub spacing: f64,
    pub corner_radii: CornerRadii,
    pub positive_color: Color,
    pub positive_selected_color: Color,
    pub negative_color: Color,
    pub negative_selected_color: Color,
}

impl Default for BarSettings {
    fn default() -> Self {
        Self {
            width: 32.0,
            spacing: 16.0,
            corner_radii: CornerRadii::new(4.0, 4.0, 0.0, 0.0),
            positive_color: Color::LINK,
            positive_selected_color: Color::LINK.darkened(),
            negative_color: Color::RED,
            negative_selected_color: Color::RED.darkened(),
        }
    }
}

impl BarSettings {
    #[must_use]
    pub fn item_width(&self) -> f64 {
        self.width + self.spacing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStrokeSettings {
    pub width: f64,
    pub positive_color: Color,
    pub negative_color: Color,
}

impl Default for LineStrokeSettings {
    fn default() -> Self {
        Self {
            width: 2.0,
            positive_color: Color::LINK,
            negative_color: Color::RED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointSettings {
    pub diameter: f64,
    /// Hollow points are filled with the chart background.
    pub fill: bool,
    pub border_width: f64,
    pub positive_color: Color,
    pub positive_selected_color: Color,
    pub negative_color: Color,
    pub negative_selected_color: Color,
}

impl Default for PointSettings {
    fn default() -> Self {
        Self {
            diameter: 8.0,
            fill: false,
            border_width: 2.0,
            positive_color: Color::LINK,
            positive_selected_color: Color::LINK.darkened(),
            negative_color: Color::RED,
            negative_selected_color: Color::RED.darkened(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentSettings {
    /// Width of one item.
    pub spacing: f64,
    pub fill_color: Color,
    pub line: LineStrokeSettings,
    pub point: PointSettings,
}

impl Default for SegmentSettings {
    fn default() -> Self {
        Self {
            spacing: 48.0,
            fill_color: Color::LINK.with_alpha(0.5),
            line: LineStrokeSettings::default(),
            point: PointSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceSettings {
    pub border: BorderSettings,
    pub color: Color,
    pub selected_color: Color,
}

impl Default for SliceSettings {
    fn default() -> Self {
        Self {
            border: BorderSettings::none(),
            color: Color::LINK,
            selected_color: Color::LINK.darkened(),
        }
    }
}
