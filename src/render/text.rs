use serde::{Deserialize, Serialize};

use crate::core::Size;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub family: String,
    pub size_px: f64,
    pub weight: FontWeight,
}

impl Default for Font {
    fn default() -> Self {
        Self::body()
    }
}

impl Font {
    pub const DEFAULT_FAMILY: &'static str = "Sans";

    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            size_px,
            weight,
        }
    }

    #[must_use]
    pub fn sized(size_px: f64) -> Self {
        Self::new(Self::DEFAULT_FAMILY, size_px, FontWeight::Regular)
    }

    /// Tooltip titles.
    #[must_use]
    pub fn body() -> Self {
        Self::sized(17.0)
    }

    /// Tooltip values.
    #[must_use]
    pub fn subheadline() -> Self {
        Self::sized(15.0)
    }

    /// Section titles.
    #[must_use]
    pub fn caption() -> Self {
        Self::sized(12.0)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Text measurement service used for tooltip and title layout.
pub trait TextMeasurer {
    /// Size of `text` laid out on a single line in `font`.
    fn measure(&self, text: &str, font: &Font) -> Size;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &Font) -> Size {
        (**self).measure(text, font)
    }
}

/// Font-agnostic estimate from character count, for headless use and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateTextMeasurer {
    /// Average glyph advance as a fraction of the font size.
    pub advance_ratio: f64,
    /// Line height as a fraction of the font size.
    pub line_height_ratio: f64,
}

impl Default for ApproximateTextMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.55,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for ApproximateTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        let glyphs = text.chars().count() as f64;
        Size::new(
            glyphs * font.size_px * self.advance_ratio,
            font.size_px * self.line_height_ratio,
        )
    }
}
