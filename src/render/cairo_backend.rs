use std::collections::HashMap;
use std::f64::consts::FRAC_PI_2;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::path::{point_on_circle, resolve_corner_arc};
use crate::core::{Path, PathCommand, Point, Size};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, Font, FontWeight, LayerHandle, LayerMatch, LayerTag, LinePrimitive,
    PolygonPrimitive, Primitive, RecordingRenderer, Renderer, ShapePrimitive, Stroke, Surface,
    TextDirection, TextMeasurer, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub shapes_drawn: usize,
    pub circles_drawn: usize,
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango renderer.
///
/// Layers are retained per surface so they can be removed by tag, then
/// composited onto an image surface (or an external context such as a GTK
/// draw callback) with [`CairoRenderer::composite`]. Hosts position item and
/// overlay surfaces through [`CairoRenderer::set_surface_origin`].
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    layers: RecordingRenderer,
    origins: HashMap<Surface, Point>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidViewport {
                width: f64::from(width),
                height: f64::from(height),
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            layers: RecordingRenderer::new(),
            origins: HashMap::new(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    /// Offset applied to every layer of `surface` when compositing.
    pub fn set_surface_origin(&mut self, surface: Surface, origin: Point) {
        self.origins.insert(surface, origin);
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Paints all retained layers onto the owned image surface.
    pub fn composite(&mut self) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.composite_on(&context)
    }

    /// Paints all retained layers onto an external context.
    pub fn composite_on(&mut self, context: &Context) -> ChartResult<()> {
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        let mut ordered: Vec<_> = self.layers.layers().collect();
        ordered.sort_by_key(|layer| surface_rank(layer.surface));

        for layer in ordered {
            let origin = self.origins.get(&layer.surface).copied().unwrap_or_default();
            context
                .save()
                .map_err(|err| map_backend_error("failed to save context", err))?;
            context.translate(origin.x, origin.y);
            match &layer.primitive {
                Primitive::Line(line) => {
                    draw_line(context, line)?;
                    stats.lines_drawn += 1;
                }
                Primitive::Shape(shape) => {
                    draw_shape(context, shape)?;
                    stats.shapes_drawn += 1;
                }
                Primitive::Circle(circle) => {
                    draw_circle(context, circle)?;
                    stats.circles_drawn += 1;
                }
                Primitive::Polygon(polygon) => {
                    draw_polygon(context, polygon)?;
                    stats.polygons_drawn += 1;
                }
                Primitive::Text(text) => {
                    draw_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context", err))?;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn draw_line(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        line: &LinePrimitive,
    ) -> ChartResult<LayerHandle> {
        self.layers.draw_line(surface, tag, line)
    }

    fn draw_shape(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        shape: &ShapePrimitive,
    ) -> ChartResult<LayerHandle> {
        self.layers.draw_shape(surface, tag, shape)
    }

    fn draw_circle(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        circle: &CirclePrimitive,
    ) -> ChartResult<LayerHandle> {
        self.layers.draw_circle(surface, tag, circle)
    }

    fn draw_polygon(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        polygon: &PolygonPrimitive,
    ) -> ChartResult<LayerHandle> {
        self.layers.draw_polygon(surface, tag, polygon)
    }

    fn draw_text(
        &mut self,
        surface: Surface,
        tag: LayerTag,
        text: &TextPrimitive,
    ) -> ChartResult<LayerHandle> {
        self.layers.draw_text(surface, tag, text)
    }

    fn remove_layers(&mut self, surface: Surface, matching: LayerMatch) -> usize {
        self.layers.remove_layers(surface, matching)
    }
}

/// Pango-backed text measurement on a scratch surface.
#[derive(Debug)]
pub struct PangoTextMeasurer {
    context: Context,
}

impl PangoTextMeasurer {
    pub fn new() -> ChartResult<Self> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(|err| map_backend_error("failed to create measuring surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create measuring context", err))?;
        Ok(Self { context })
    }
}

impl TextMeasurer for PangoTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&font_description(font)));
        layout.set_text(text);
        let (width, height) = layout.pixel_size();
        Size::new(f64::from(width), f64::from(height))
    }
}

fn surface_rank(surface: Surface) -> (u8, usize) {
    match surface {
        Surface::Background => (0, 0),
        Surface::Plot => (1, 0),
        Surface::Item(index) => (2, index),
        Surface::Overlay => (3, 0),
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_stroke(context: &Context, stroke: Stroke) {
    apply_color(context, stroke.color);
    context.set_line_width(stroke.width);
    match stroke.style.dash_pattern() {
        Some(pattern) => context.set_dash(&pattern, stroke.dash_phase()),
        None => context.set_dash(&[], 0.0),
    }
}

fn draw_line(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    apply_stroke(context, line.stroke);
    context.move_to(line.from.x, line.from.y);
    context.line_to(line.to.x, line.to.y);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn draw_shape(context: &Context, shape: &ShapePrimitive) -> ChartResult<()> {
    append_path(context, &shape.path);
    fill_and_stroke(context, shape.fill, shape.stroke, "shape")
}

fn draw_circle(context: &Context, circle: &CirclePrimitive) -> ChartResult<()> {
    append_path(context, &circle.marker.path());
    fill_and_stroke(context, Some(circle.fill), Some(circle.border), "circle")
}

fn draw_polygon(context: &Context, polygon: &PolygonPrimitive) -> ChartResult<()> {
    let mut points = polygon.points.iter();
    if let Some(first) = points.next() {
        context.move_to(first.x, first.y);
        for point in points {
            context.line_to(point.x, point.y);
        }
        context.close_path();
    }
    fill_and_stroke(context, Some(polygon.fill), None, "polygon")
}

fn fill_and_stroke(
    context: &Context,
    fill: Option<Color>,
    stroke: Option<Stroke>,
    what: &str,
) -> ChartResult<()> {
    if let Some(fill) = fill {
        apply_color(context, fill);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error(&format!("failed to fill {what}"), err))?;
    }
    match stroke {
        Some(stroke) => {
            apply_stroke(context, stroke);
            context
                .stroke()
                .map_err(|err| map_backend_error(&format!("failed to stroke {what}"), err))
        }
        None => {
            context.new_path();
            Ok(())
        }
    }
}

fn append_path(context: &Context, path: &Path) {
    context.new_path();
    let mut cursor = Point::default();
    let mut subpath_start = Point::default();
    for command in path.commands() {
        match *command {
            PathCommand::MoveTo(point) => {
                context.move_to(point.x, point.y);
                cursor = point;
                subpath_start = point;
            }
            PathCommand::LineTo(point) => {
                context.line_to(point.x, point.y);
                cursor = point;
            }
            PathCommand::ArcTo {
                corner,
                toward,
                radius,
            } => match resolve_corner_arc(cursor, corner, toward, radius) {
                Some(arc) => {
                    context.line_to(arc.start.x, arc.start.y);
                    if arc.clockwise {
                        context.arc(
                            arc.center.x,
                            arc.center.y,
                            arc.radius,
                            arc.start_angle,
                            arc.end_angle,
                        );
                    } else {
                        context.arc_negative(
                            arc.center.x,
                            arc.center.y,
                            arc.radius,
                            arc.start_angle,
                            arc.end_angle,
                        );
                    }
                    cursor = arc.end;
                }
                None => {
                    context.line_to(corner.x, corner.y);
                    cursor = corner;
                }
            },
            PathCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                clockwise,
            } => {
                if clockwise {
                    context.arc(center.x, center.y, radius, start_angle, end_angle);
                } else {
                    context.arc_negative(center.x, center.y, radius, start_angle, end_angle);
                }
                cursor = point_on_circle(center, radius, end_angle);
            }
            PathCommand::Close => {
                context.close_path();
                cursor = subpath_start;
            }
        }
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&font_description(&text.font)));
    layout.set_text(&text.text);

    apply_color(context, text.color);
    match text.direction {
        TextDirection::LeftToRight => context.move_to(text.origin.x, text.origin.y),
        TextDirection::BottomToTop => {
            context.translate(text.origin.x, text.origin.y + text.size.width);
            context.rotate(-FRAC_PI_2);
            context.move_to(0.0, 0.0);
        }
    }
    pangocairo::functions::show_layout(context, &layout);
}

fn font_description(font: &Font) -> FontDescription {
    let mut description = FontDescription::from_string(&font.family);
    description.set_absolute_size(font.size_px * f64::from(pango::SCALE));
    description.set_weight(match font.weight {
        FontWeight::Regular => pango::Weight::Normal,
        FontWeight::Medium => pango::Weight::Medium,
        FontWeight::Semibold => pango::Weight::Semibold,
        FontWeight::Bold => pango::Weight::Bold,
    });
    description
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
