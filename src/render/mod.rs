mod frame;
mod null_renderer;
mod primitives;
mod recording_renderer;
mod text;

pub use frame::{FrameItem, LayerHandle, LayerMatch, LayerTag, Primitive, RenderFrame, Surface};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStyle, PolygonPrimitive, ShapePrimitive, Stroke,
    TextDirection, TextPrimitive,
};
pub use recording_renderer::{RecordedLayer, RecordingRenderer};
pub use text::{ApproximateTextMeasurer, Font, FontWeight, TextMeasurer};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Each draw call creates one layer on `surface` and returns a handle to it.
/// Controllers never rasterize; they hand over fully resolved geometry and
/// later drop layers by role through `remove_layers`.
pub trait Renderer {
    fn draw_line(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        line: &LinePrimitive,
    ) -> ChartResult<LayerHandle>;

    fn draw_shape(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        shape: &ShapePrimitive,
    ) -> ChartResult<LayerHandle>;

    fn draw_circle(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        circle: &CirclePrimitive,
    ) -> ChartResult<LayerHandle>;

    fn draw_polygon(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        polygon: &PolygonPrimitive,
    ) -> ChartResult<LayerHandle>;

    fn draw_text(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        text: &TextPrimitive,
    ) -> ChartResult<LayerHandle>;

    /// Removes matching layers from `surface`, returning how many were dropped.
    fn remove_layers(&mut self, surface: Surface, matching: LayerMatch) -> usize;

    /// Validates `frame` as a whole, then draws its items in order.
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<Vec<LayerHandle>> {
        frame.validate()?;
        frame
            .items
            .iter()
            .map(|item| match &item.primitive {
                Primitive::Line(line) => self.draw_line(frame.surface, item.tag, line),
                Primitive::Shape(shape) => self.draw_shape(frame.surface, item.tag, shape),
                Primitive::Circle(circle) => self.draw_circle(frame.surface, item.tag, circle),
                Primitive::Polygon(polygon) => {
                    self.draw_polygon(frame.surface, item.tag, polygon)
                }
                Primitive::Text(text) => self.draw_text(frame.surface, item.tag, text),
            })
            .collect()
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer, PangoTextMeasurer};
