use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LayerHandle, LayerMatch, LayerTag, LinePrimitive, PolygonPrimitive,
    Renderer, ShapePrimitive, Surface, TextPrimitive,
};

/// Renderer that keeps nothing but counters.
///
/// Every primitive is still validated so headless callers catch invalid
/// geometry before a real backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub lines_drawn: usize,
    pub shapes_drawn: usize,
    pub circles_drawn: usize,
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
    pub removal_requests: usize,
    next_handle: u64,
}

impl NullRenderer {
    #[must_use]
    pub fn total_drawn(&self) -> usize {
        self.lines_drawn
            + self.shapes_drawn
            + self.circles_drawn
            + self.polygons_drawn
            + self.texts_drawn
    }

    fn issue(&mut self) -> LayerHandle {
        self.next_handle += 1;
        LayerHandle(self.next_handle)
    }
}

impl Renderer for NullRenderer {
    fn draw_line(
        &mut self,
        _surface: Surface,
        _tag: LayerTag,
        line: &LinePrimitive,
    ) -> ChartResult<LayerHandle> {
        line.validate()?;
        self.lines_drawn += 1;
        Ok(self.issue())
    }

    fn draw_shape(
        &mut self,
        _surface: Surface,
        _tag: LayerTag,
        shape: &ShapePrimitive,
    ) -> ChartResult<LayerHandle> {
        shape.validate()?;
        self.shapes_drawn += 1;
        Ok(self.issue())
    }

    fn draw_circle(
        &mut self,
        _surface: Surface,
        _tag: LayerTag,
        circle: &CirclePrimitive,
    ) -> ChartResult<LayerHandle> {
        circle.validate()?;
        self.circles_drawn += 1;
        Ok(self.issue())
    }

    fn draw_polygon(
        &mut self,
        _surface: Surface,
        _tag: LayerTag,
        polygon: &PolygonPrimitive,
    ) -> ChartResult<LayerHandle> {
        polygon.validate()?;
        self.polygons_drawn += 1;
        Ok(self.issue())
    }

    fn draw_text(
        &mut self,
        _surface: Surface,
        _tag: LayerTag,
        text: &TextPrimitive,
    ) -> ChartResult<LayerHandle> {
        text.validate()?;
        self.texts_drawn += 1;
        Ok(self.issue())
    }

    fn remove_layers(&mut self, _surface: Surface, _matching: LayerMatch) -> usize {
        self.removal_requests += 1;
        0
    }
}
