use indexmap::IndexMap;

use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LayerHandle, LayerMatch, LayerTag, LinePrimitive, PolygonPrimitive,
    Primitive, Renderer, ShapePrimitive, Surface, TextPrimitive,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLayer {
    pub surface: Surface,
    pub tag: LayerTag,
    pub primitive: Primitive,
}

/// In-memory layer tree, kept in draw order.
///
/// Used for headless hosts and for asserting exactly what a controller drew.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    layers: IndexMap<LayerHandle, RecordedLayer>,
    next_handle: u64,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    #[must_use]
    pub fn layer(&self, handle: LayerHandle) -> Option<&RecordedLayer> {
        self.layers.get(&handle)
    }

    pub fn layers(&self) -> impl Iterator<Item = &RecordedLayer> {
        self.layers.values()
    }

    pub fn layers_on(&self, surface: Surface) -> impl Iterator<Item = &RecordedLayer> {
        self.layers
            .values()
            .filter(move |layer| layer.surface == surface)
    }

    #[must_use]
    pub fn count(&self, surface: Surface, tag: LayerTag) -> usize {
        self.layers_on(surface)
            .filter(|layer| layer.tag == tag)
            .count()
    }

    /// Tags of every layer on `surface`, in draw order.
    #[must_use]
    pub fn tags_on(&self, surface: Surface) -> Vec<LayerTag> {
        self.layers_on(surface).map(|layer| layer.tag).collect()
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    fn record(&mut self, surface: Surface, tag: LayerTag, primitive: Primitive) -> LayerHandle {
        self.next_handle += 1;
        let handle = LayerHandle(self.next_handle);
        self.layers.insert(
            handle,
            RecordedLayer {
                surface,
                tag,
                primitive,
            },
        );
        handle
    }
}

impl Renderer for RecordingRenderer {
    fn draw_line(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        line: &LinePrimitive,
    ) -> ChartResult<LayerHandle> {
        line.validate()?;
        Ok(self.record(surface, tag, Primitive::Line(*line)))
    }

    fn draw_shape(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        shape: &ShapePrimitive,
    ) -> ChartResult<LayerHandle> {
        shape.validate()?;
        Ok(self.record(surface, tag, Primitive::Shape(shape.clone())))
    }

    fn draw_circle(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        circle: &CirclePrimitive,
    ) -> ChartResult<LayerHandle> {
        circle.validate()?;
        Ok(self.record(surface, tag, Primitive::Circle(*circle)))
    }

    fn draw_polygon(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        polygon: &PolygonPrimitive,
    ) -> ChartResult<LayerHandle> {
        polygon.validate()?;
        Ok(self.record(surface, tag, Primitive::Polygon(polygon.clone())))
    }

    fn draw_text(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        text: &TextPrimitive,
    ) -> ChartResult<LayerHandle> {
        text.validate()?;
        Ok(self.record(surface, tag, Primitive::Text(text.clone())))
    }

    fn remove_layers(&mut self, surface: Surface, matching: LayerMatch) -> usize {
        let before = self.layers.len();
        self.layers
            .retain(|_, layer| !(layer.surface == surface && matching.matches(layer.tag)));
        before - self.layers.len()
    }
}
