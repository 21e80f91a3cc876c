use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, ShapePrimitive, TextPrimitive,
};

/// Drawing target owned by the host view hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Surface {
    /// Chart background behind the item list, in chart coordinates.
    Background,
    /// Content of one list item, in item coordinates.
    Item(usize),
    /// Layer above all items, in list content coordinates.
    Overlay,
    /// Single canvas of charts without an item list, in chart coordinates.
    Plot,
}

/// Role of a drawn layer, used to remove groups of layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerTag {
    Background,
    Gridline,
    ZeroAxis,
    SectionTitle,
    SeriesFill,
    Series,
    Marker,
    TooltipArrow,
    TooltipBox,
    TooltipTitle,
    TooltipValue,
}

impl LayerTag {
    #[must_use]
    pub fn is_tooltip(self) -> bool {
        matches!(
            self,
            Self::TooltipArrow | Self::TooltipBox | Self::TooltipTitle | Self::TooltipValue
        )
    }
}

/// Selector for [`crate::render::Renderer::remove_layers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerMatch {
    All,
    Tag(LayerTag),
    Tooltip,
}

impl LayerMatch {
    #[must_use]
    pub fn matches(self, tag: LayerTag) -> bool {
        match self {
            Self::All => true,
            Self::Tag(expected) => expected == tag,
            Self::Tooltip => tag.is_tooltip(),
        }
    }
}

/// Opaque handle for a drawn layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerHandle(pub u64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line(LinePrimitive),
    Shape(ShapePrimitive),
    Circle(CirclePrimitive),
    Polygon(PolygonPrimitive),
    Text(TextPrimitive),
}

impl Primitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Shape(shape) => shape.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Polygon(polygon) => polygon.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameItem {
    pub tag: LayerTag,
    pub primitive: Primitive,
}

/// Ordered, backend-agnostic draw list for one surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub surface: Surface,
    pub items: Vec<FrameItem>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, tag: LayerTag, primitive: Primitive) -> &mut Self {
        self.items.push(FrameItem { tag, primitive });
        self
    }

    pub fn push_line(&mut self, tag: LayerTag, line: LinePrimitive) -> &mut Self {
        self.push(tag, Primitive::Line(line))
    }

    pub fn push_shape(&mut self, tag: LayerTag, shape: ShapePrimitive) -> &mut Self {
        self.push(tag, Primitive::Shape(shape))
    }

    pub fn push_circle(&mut self, tag: LayerTag, circle: CirclePrimitive) -> &mut Self {
        self.push(tag, Primitive::Circle(circle))
    }

    pub fn push_polygon(&mut self, tag: LayerTag, polygon: PolygonPrimitive) -> &mut Self {
        self.push(tag, Primitive::Polygon(polygon))
    }

    pub fn push_text(&mut self, tag: LayerTag, text: TextPrimitive) -> &mut Self {
        self.push(tag, Primitive::Text(text))
    }

    pub fn extend(&mut self, other: RenderFrame) -> &mut Self {
        self.items.extend(other.items);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for item in &self.items {
            item.primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn count_tagged(&self, tag: LayerTag) -> usize {
        self.items.iter().filter(|item| item.tag == tag).count()
    }
}
