use crate::core::{Path, Point, Rect, TooltipGeometry, VerticalDirection, place_tooltip};
use crate::render::{
    LayerTag, PolygonPrimitive, RenderFrame, ShapePrimitive, Surface, TextMeasurer, TextPrimitive,
};

use super::TooltipSettings;

/// Tooltip texts for one item, as returned by a data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TooltipText {
    pub title: String,
    pub value: String,
}

/// Places a tooltip in `container` and builds its layers on `surface`.
///
/// Layers are emitted arrow first so the box covers the arrow's base.
pub(crate) fn build_tooltip_frame(
    surface: Surface,
    measurer: &dyn TextMeasurer,
    text: &TooltipText,
    anchor: Point,
    vertical: VerticalDirection,
    container: Rect,
    settings: &TooltipSettings,
) -> (TooltipGeometry, RenderFrame) {
    let title_size = measurer.measure(&text.title, &settings.title_font);
    let value_size = measurer.measure(&text.value, &settings.value_font);
    let geometry = place_tooltip(
        anchor,
        title_size,
        value_size,
        &settings.metrics(),
        vertical,
        container,
    );

    let mut frame = RenderFrame::new(surface);
    frame
        .push_polygon(
            LayerTag::TooltipArrow,
            PolygonPrimitive::new(geometry.arrow, settings.arrow.color),
        )
        .push_shape(
            LayerTag::TooltipBox,
            ShapePrimitive::filled(
                Path::rounded_rect(geometry.box_rect, geometry.corner_radii),
                settings.background_color,
            )
            .with_stroke(settings.border.stroke()),
        );
    if !text.title.is_empty() {
        frame.push_text(
            LayerTag::TooltipTitle,
            TextPrimitive::new(
                text.title.clone(),
                geometry.title_origin,
                title_size,
                settings.title_font.clone(),
                settings.title_color,
            ),
        );
    }
    if !text.value.is_empty() {
        frame.push_text(
            LayerTag::TooltipValue,
            TextPrimitive::new(
                text.value.clone(),
                geometry.value_origin,
                value_size,
                settings.value_font.clone(),
                settings.value_color,
            ),
        );
    }
    (geometry, frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BorderSettings;
    use crate::render::{ApproximateTextMeasurer, Color, Primitive, Stroke};

    #[test]
    fn frame_orders_arrow_box_and_texts() {
        let text = TooltipText {
            title: "Index 1".to_owned(),
            value: "12.0".to_owned(),
        };
        let (geometry, frame) = build_tooltip_frame(
            Surface::Overlay,
            &ApproximateTextMeasurer::default(),
            &text,
            Point::new(200.0, 40.0),
            VerticalDirection::Down,
            Rect::new(0.0, 0.0, 400.0, 300.0),
            &TooltipSettings::default(),
        );
        let tags: Vec<LayerTag> = frame.items.iter().map(|item| item.tag).collect();
        assert_eq!(
            tags,
            vec![
                LayerTag::TooltipArrow,
                LayerTag::TooltipBox,
                LayerTag::TooltipTitle,
                LayerTag::TooltipValue,
            ]
        );
        assert!(geometry.box_rect.min_y() > 40.0);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn box_is_outlined_with_the_border_setting() {
        let text = TooltipText {
            title: "Index 0".to_owned(),
            value: "1.0".to_owned(),
        };
        let container = Rect::new(0.0, 0.0, 400.0, 300.0);
        let box_stroke = |settings: &TooltipSettings| {
            let (_, frame) = build_tooltip_frame(
                Surface::Overlay,
                &ApproximateTextMeasurer::default(),
                &text,
                Point::new(200.0, 200.0),
                VerticalDirection::Up,
                container,
                settings,
            );
            frame.items.into_iter().find_map(|item| match item.primitive {
                Primitive::Shape(shape) if item.tag == LayerTag::TooltipBox => Some(shape.stroke),
                _ => None,
            })
        };

        let defaults = TooltipSettings::default();
        assert_eq!(
            box_stroke(&defaults),
            Some(Some(Stroke::solid(Color::SEPARATOR, 0.33)))
        );

        let borderless = TooltipSettings {
            border: BorderSettings::none(),
            ..defaults
        };
        assert_eq!(box_stroke(&borderless), Some(None));
    }
}
