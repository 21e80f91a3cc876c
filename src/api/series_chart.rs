use std::collections::BTreeSet;
use std::mem;

use tracing::{debug, trace, warn};

use crate::core::gridlines::MIN_GRIDLINE_INCREMENT_PX;
use crate::core::{
    AxisMetrics, EdgeInsets, Point, Rect, Size, TooltipGeometry, VerticalDirection,
    horizontal_gridlines, vertical_gridlines,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{Selection, SelectionChange, TapTarget};
use crate::render::{
    ApproximateTextMeasurer, Color, Font, LayerMatch, LayerTag, LinePrimitive, RenderFrame,
    Renderer, Stroke, Surface, TextDirection, TextMeasurer, TextPrimitive,
};

use super::tooltip_frame::{TooltipText, build_tooltip_frame};
use super::{
    ChartStyle, GridSettings, ListLayout, ScrollAnchor, ScrollLocation, SelectionListener,
    SeriesDataSource, SeriesSnapshot, SettingsDocument, TooltipSettings, VirtualizedList,
};

/// Everything a series style needs to build the layers of one item.
///
/// Coordinates handed to styles are cell coordinates: the origin is the
/// item's top-left corner and `cell.height` is the plot height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemContext {
    pub index: usize,
    pub count: usize,
    pub value: f64,
    pub previous: Option<f64>,
    pub next: Option<f64>,
    pub selected: bool,
    pub metrics: AxisMetrics,
    pub cell: Size,
    /// Padding the first and last items reach into, zero elsewhere.
    pub extend_left: f64,
    pub extend_right: f64,
    pub extend_top: f64,
    pub extend_bottom: f64,
    pub background: Color,
}

impl ItemContext {
    #[must_use]
    pub fn location_y(&self) -> f64 {
        self.metrics.location_y(self.value)
    }
}

/// Per-chart-type part of a scrollable series chart.
///
/// The shared controller draws the background, gridlines, section titles,
/// zero axis and tooltip; a style only contributes the series layers and
/// where the tooltip points.
pub trait SeriesStyle: SettingsDocument {
    fn chart_style(&self) -> &ChartStyle;

    fn grid(&self) -> &GridSettings;

    fn tooltip(&self) -> &TooltipSettings;

    fn initial_scroll(&self) -> ScrollLocation;

    /// Horizontal extent of one item including its spacing.
    fn item_width(&self) -> f64;

    /// Series layers drawn between the section title and the zero axis.
    fn push_series(&self, frame: &mut RenderFrame, item: &ItemContext) -> ChartResult<()>;

    /// Layers drawn above the zero axis.
    fn push_markers(&self, _frame: &mut RenderFrame, _item: &ItemContext) -> ChartResult<()> {
        Ok(())
    }

    /// Tooltip anchor in cell coordinates.
    fn tooltip_anchor(&self, item: &ItemContext) -> Point;
}

/// Geometry resolved at the start of a draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesLayout {
    pub bounds: Size,
    pub padding: EdgeInsets,
    pub item_width: f64,
    pub item_count: usize,
    pub metrics: AxisMetrics,
}

impl SeriesLayout {
    pub fn resolve(
        bounds: Size,
        padding: EdgeInsets,
        item_width: f64,
        snapshot: &SeriesSnapshot,
    ) -> ChartResult<Self> {
        bounds.validate_bounds()?;
        let plot_height = bounds.height - padding.vertical();
        if !plot_height.is_finite() || plot_height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: bounds.width,
                height: bounds.height,
            });
        }
        Ok(Self {
            bounds,
            padding,
            item_width,
            item_count: snapshot.len(),
            metrics: AxisMetrics::resolve(
                snapshot.max,
                snapshot.min,
                plot_height,
                !snapshot.is_empty(),
            ),
        })
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.metrics.height
    }

    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.padding.horizontal() + self.item_count as f64 * self.item_width
    }

    #[must_use]
    pub fn list_layout(&self) -> ListLayout {
        ListLayout {
            item_count: self.item_count,
            item_size: Size::new(self.item_width, self.plot_height()),
            insets: self.padding,
            viewport: self.bounds,
        }
    }

    /// Top-left corner of an item in list content coordinates.
    #[must_use]
    pub fn item_origin(&self, index: usize) -> Point {
        Point::new(
            self.padding.left + index as f64 * self.item_width,
            self.padding.top,
        )
    }

    /// Zero axis in chart coordinates.
    #[must_use]
    pub fn zero_axis_y(&self) -> f64 {
        self.metrics.zero_axis + self.padding.top
    }

    /// Item whose column contains `point`, given in content coordinates.
    #[must_use]
    pub fn item_at(&self, point: Point) -> Option<usize> {
        let top = self.padding.top;
        if point.y < top || point.y > top + self.plot_height() {
            return None;
        }
        let x = point.x - self.padding.left;
        if x < 0.0 || self.item_width <= 0.0 {
            return None;
        }
        let index = (x / self.item_width).floor() as usize;
        (index < self.item_count).then_some(index)
    }

    /// Region a tooltip must stay inside, in content coordinates.
    #[must_use]
    pub fn tooltip_container(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.content_width().max(self.bounds.width),
            self.bounds.height,
        )
    }
}

/// Scrollable chart drawing one list item per value.
///
/// The chart owns its renderer and list. Items are drawn lazily: only the
/// ones the list reports as visible are materialized, and items scrolled out
/// of view are cleared again.
pub struct SeriesChart<S: SeriesStyle, R: Renderer, L: VirtualizedList> {
    renderer: R,
    list: L,
    settings: S,
    measurer: Box<dyn TextMeasurer>,
    bounds: Size,
    selection: Selection,
    layout: Option<SeriesLayout>,
    tooltip: Option<TooltipGeometry>,
    drawn_items: BTreeSet<usize>,
}

impl<S: SeriesStyle, R: Renderer, L: VirtualizedList> SeriesChart<S, R, L> {
    pub fn new(renderer: R, list: L, bounds: Size, settings: S) -> ChartResult<Self> {
        bounds.validate_bounds()?;
        settings.validate()?;
        Ok(Self {
            renderer,
            list,
            settings,
            measurer: Box::new(ApproximateTextMeasurer::default()),
            bounds,
            selection: Selection::default(),
            layout: None,
            tooltip: None,
            drawn_items: BTreeSet::new(),
        })
    }

    #[must_use]
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    #[must_use]
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Replaces the settings. They apply from the next draw pass.
    pub fn set_settings(&mut self, settings: S) -> ChartResult<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    #[must_use]
    pub fn into_parts(self) -> (R, L) {
        (self.renderer, self.list)
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected()
    }

    #[must_use]
    pub fn layout(&self) -> Option<&SeriesLayout> {
        self.layout.as_ref()
    }

    /// Tooltip currently shown, in list content coordinates.
    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipGeometry> {
        self.tooltip.as_ref()
    }

    /// Items with layers on their surface, ascending.
    pub fn drawn_items(&self) -> impl Iterator<Item = usize> + '_ {
        self.drawn_items.iter().copied()
    }

    /// Full redraw. `reset` drops the selection and applies the initial
    /// scroll location; otherwise a selection that still exists survives.
    pub fn draw<D>(&mut self, source: &D, reset: bool) -> ChartResult<()>
    where
        D: SeriesDataSource + ?Sized,
    {
        self.draw_pass(source, reset, None)
    }

    /// Adopts new bounds, keeping selection and scroll offset.
    pub fn relayout<D>(&mut self, source: &D, bounds: Size) -> ChartResult<()>
    where
        D: SeriesDataSource + ?Sized,
    {
        bounds.validate_bounds()?;
        let offset = self.list.content_offset();
        self.bounds = bounds;
        self.draw_pass(source, false, Some(offset))
    }

    /// Scrolls the list and materializes the items that came into view.
    pub fn scroll_to<D>(&mut self, source: &D, offset: Point) -> ChartResult<()>
    where
        D: SeriesDataSource + ?Sized,
    {
        self.list.set_content_offset(offset);
        self.sync_visible_items(source)
    }

    /// Rebuilds the layers of one item from live source values.
    pub fn draw_item<D>(&mut self, source: &D, index: usize) -> ChartResult<()>
    where
        D: SeriesDataSource + ?Sized,
    {
        let layout = self.layout.ok_or(ChartError::NotLaidOut)?;
        let count = source.number_of_items();
        if index >= layout.item_count || index >= count {
            return Err(ChartError::IndexOutOfRange {
                index,
                count: layout.item_count.min(count),
            });
        }

        let item = self.item_context(source, &layout, index, count);
        let mut frame = RenderFrame::new(Surface::Item(index));
        self.push_item_gridline(&mut frame, source, &item);
        self.push_section_title(&mut frame, source, &item);
        self.settings.push_series(&mut frame, &item)?;
        self.push_item_zero_axis(&mut frame, &item);
        self.settings.push_markers(&mut frame, &item)?;
        frame.validate()?;

        self.renderer
            .remove_layers(Surface::Item(index), LayerMatch::All);
        self.renderer.render(&frame)?;
        self.drawn_items.insert(index);
        trace!(
            index,
            selected = item.selected,
            layers = frame.len(),
            "draw series item"
        );

        if item.selected {
            self.draw_tooltip(source, &layout, &item)?;
        }
        Ok(())
    }

    /// User tap on an item. Toggles its selection and notifies `listener`
    /// with the new selection.
    pub fn tap_item<D>(
        &mut self,
        source: &D,
        index: usize,
        listener: &mut dyn SelectionListener,
    ) -> ChartResult<SelectionChange>
    where
        D: SeriesDataSource + ?Sized,
    {
        let layout = self.layout.ok_or(ChartError::NotLaidOut)?;
        if index >= layout.item_count {
            return Err(ChartError::IndexOutOfRange {
                index,
                count: layout.item_count,
            });
        }
        let previous = self.selection;
        let change = self.selection.toggle(index);
        if let Err(err) = self.apply_selection_change(source, &change) {
            self.selection = previous;
            return Err(err);
        }
        listener.on_item_selected(change.current.index());
        Ok(change)
    }

    /// Routes a tap given in list content coordinates.
    ///
    /// A tap on the tooltip re-announces the current selection without
    /// changing it. A tap inside an item's column toggles that item.
    pub fn tap_at<D>(
        &mut self,
        source: &D,
        point: Point,
        listener: &mut dyn SelectionListener,
    ) -> ChartResult<TapTarget>
    where
        D: SeriesDataSource + ?Sized,
    {
        let layout = self.layout.ok_or(ChartError::NotLaidOut)?;
        if self.tooltip.is_some_and(|tooltip| tooltip.contains(point)) {
            trace!(selected = ?self.selection.selected(), "tooltip tapped");
            listener.on_item_selected(self.selection.selected());
            return Ok(TapTarget::Tooltip);
        }
        match layout.item_at(point) {
            Some(index) => {
                self.tap_item(source, index, listener)?;
                Ok(TapTarget::Item(index))
            }
            None => Ok(TapTarget::Nothing),
        }
    }

    /// Programmatic selection. Listeners are not notified.
    pub fn select<D>(&mut self, source: &D, index: Option<usize>) -> ChartResult<SelectionChange>
    where
        D: SeriesDataSource + ?Sized,
    {
        let layout = self.layout.ok_or(ChartError::NotLaidOut)?;
        if let Some(index) = index.filter(|&index| index >= layout.item_count) {
            return Err(ChartError::IndexOutOfRange {
                index,
                count: layout.item_count,
            });
        }
        let previous = self.selection;
        let change = self.selection.set(index);
        if let Err(err) = self.apply_selection_change(source, &change) {
            self.selection = previous;
            return Err(err);
        }
        Ok(change)
    }

    pub fn clear_selection<D>(&mut self, source: &D) -> ChartResult<SelectionChange>
    where
        D: SeriesDataSource + ?Sized,
    {
        self.select(source, None)
    }

    fn draw_pass<D>(&mut self, source: &D, reset: bool, restore: Option<Point>) -> ChartResult<()>
    where
        D: SeriesDataSource + ?Sized,
    {
        let snapshot = SeriesSnapshot::read(source)?;
        let layout = SeriesLayout::resolve(
            self.bounds,
            self.settings.chart_style().padding,
            self.settings.item_width(),
            &snapshot,
        )?;

        if reset {
            self.selection.clear();
        }
        if self
            .selection
            .selected()
            .is_some_and(|index| index >= layout.item_count)
        {
            self.selection.clear();
        }

        self.clear_tooltip();
        self.clear_items();
        let background = self.background_frame(&layout);
        self.renderer
            .remove_layers(Surface::Background, LayerMatch::All);
        self.renderer.render(&background)?;

        self.list.set_layout(layout.list_layout());
        match restore {
            Some(offset) => self.list.set_content_offset(offset),
            None if reset => self.apply_initial_scroll(layout.item_count),
            None => {}
        }
        self.layout = Some(layout);

        debug!(
            items = layout.item_count,
            max = layout.metrics.max,
            min = layout.metrics.min,
            interval = layout.metrics.interval,
            increment = layout.metrics.increment,
            reset,
            "series chart draw pass"
        );
        self.sync_visible_items(source)
    }

    fn sync_visible_items<D>(&mut self, source: &D) -> ChartResult<()>
    where
        D: SeriesDataSource + ?Sized,
    {
        if self.layout.is_none() {
            return Err(ChartError::NotLaidOut);
        }
        let visible = self.list.visible_items();
        let stale: Vec<usize> = self
            .drawn_items
            .iter()
            .copied()
            .filter(|index| !visible.contains(index))
            .collect();
        for index in stale {
            self.renderer
                .remove_layers(Surface::Item(index), LayerMatch::All);
            self.drawn_items.remove(&index);
            if self.selection.is_selected(index) {
                self.clear_tooltip();
            }
        }
        for index in visible {
            if !self.drawn_items.contains(&index) {
                self.draw_item(source, index)?;
            }
        }
        Ok(())
    }

    fn apply_selection_change<D>(&mut self, source: &D, change: &SelectionChange) -> ChartResult<()>
    where
        D: SeriesDataSource + ?Sized,
    {
        if change.is_noop() {
            return Ok(());
        }
        trace!(
            previous = ?change.previous,
            current = ?change.current,
            "selection changed"
        );
        self.clear_tooltip();
        self.list.reload_items(&change.dirty);
        let visible = self.list.visible_items();
        for &index in &change.dirty {
            if visible.contains(&index) {
                self.draw_item(source, index)?;
            }
        }
        Ok(())
    }

    fn apply_initial_scroll(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        match self.settings.initial_scroll() {
            ScrollLocation::Left => self.list.scroll_to_item(0, ScrollAnchor::Leading),
            ScrollLocation::Right => self
                .list
                .scroll_to_item(count - 1, ScrollAnchor::Trailing),
        }
    }

    fn clear_tooltip(&mut self) {
        self.renderer
            .remove_layers(Surface::Overlay, LayerMatch::Tooltip);
        self.tooltip = None;
    }

    fn clear_items(&mut self) {
        for index in mem::take(&mut self.drawn_items) {
            self.renderer
                .remove_layers(Surface::Item(index), LayerMatch::All);
        }
    }

    fn item_context<D>(
        &self,
        source: &D,
        layout: &SeriesLayout,
        index: usize,
        count: usize,
    ) -> ItemContext
    where
        D: SeriesDataSource + ?Sized,
    {
        let padding = layout.padding;
        ItemContext {
            index,
            count,
            value: source.value(index),
            previous: index.checked_sub(1).map(|previous| source.value(previous)),
            next: (index + 1 < count).then(|| source.value(index + 1)),
            selected: self.selection.is_selected(index),
            metrics: layout.metrics,
            cell: Size::new(layout.item_width, layout.plot_height()),
            extend_left: if index == 0 { padding.left } else { 0.0 },
            extend_right: if index + 1 == count { padding.right } else { 0.0 },
            extend_top: padding.top,
            extend_bottom: padding.bottom,
            background: self.settings.chart_style().background_color,
        }
    }

    fn background_frame(&self, layout: &SeriesLayout) -> RenderFrame {
        let style = self.settings.chart_style();
        let grid = self.settings.grid();
        let bounds = layout.bounds;
        let zero = layout.zero_axis_y();

        let mut frame = RenderFrame::new(Surface::Background);
        frame.push_shape(LayerTag::Background, style.background_shape(bounds));

        if grid.horizontal.active {
            if layout.item_count > 0 && layout.metrics.increment < MIN_GRIDLINE_INCREMENT_PX {
                warn!(
                    increment = layout.metrics.increment,
                    range = layout.metrics.range,
                    "skipping horizontal gridlines for a degenerate value range"
                );
            }
            let stroke = grid.horizontal.stroke();
            for y in horizontal_gridlines(zero, layout.metrics.increment, bounds.height).iter() {
                frame.push_line(
                    LayerTag::Gridline,
                    LinePrimitive::new(Point::new(0.0, y), Point::new(bounds.width, y), stroke),
                );
            }
        }

        // Item separators past the last item, when the items do not fill the width.
        if grid.vertical.active && layout.content_width() < bounds.width {
            let stroke = grid.vertical.stroke();
            for x in vertical_gridlines(layout.padding.left, layout.item_width, bounds.width) {
                frame
                    .push_line(
                        LayerTag::Gridline,
                        LinePrimitive::new(Point::new(x, zero), Point::new(x, 0.0), stroke),
                    )
                    .push_line(
                        LayerTag::Gridline,
                        LinePrimitive::new(
                            Point::new(x, zero),
                            Point::new(x, bounds.height),
                            stroke.inverted(),
                        ),
                    );
            }
        }

        if grid.zero_line.active {
            frame.push_line(
                LayerTag::ZeroAxis,
                LinePrimitive::new(
                    Point::new(0.0, zero),
                    Point::new(bounds.width, zero),
                    grid.zero_line.stroke(),
                ),
            );
        }
        frame
    }

    fn push_item_gridline<D>(&self, frame: &mut RenderFrame, source: &D, item: &ItemContext)
    where
        D: SeriesDataSource + ?Sized,
    {
        let grid = self.settings.grid().vertical;
        let index = item.index;
        if !source.vertical_gridline_active(index).unwrap_or(grid.active) {
            return;
        }
        // Widths <= 0 hide the gridline; non-finite widths use the chart setting.
        let width = match source.vertical_gridline_width(index) {
            Some(width) if width.is_finite() => width,
            _ => grid.width,
        };
        if width <= 0.0 {
            return;
        }
        let stroke = Stroke::styled(
            valid_color(source.vertical_gridline_color(index)).unwrap_or(grid.color),
            width,
            source.vertical_gridline_style(index).unwrap_or(grid.style),
        );
        let zero = item.metrics.zero_axis;
        frame
            .push_line(
                LayerTag::Gridline,
                LinePrimitive::new(
                    Point::new(0.0, zero),
                    Point::new(0.0, -item.extend_top),
                    stroke,
                ),
            )
            .push_line(
                LayerTag::Gridline,
                LinePrimitive::new(
                    Point::new(0.0, zero),
                    Point::new(0.0, item.cell.height + item.extend_bottom),
                    stroke.inverted(),
                ),
            );
    }

    fn push_section_title<D>(&self, frame: &mut RenderFrame, source: &D, item: &ItemContext)
    where
        D: SeriesDataSource + ?Sized,
    {
        let Some(title) = source
            .section_title(item.index)
            .filter(|title| !title.is_empty())
        else {
            return;
        };
        let font = Some(source.section_title_font(item.index))
            .filter(|font| font.validate().is_ok())
            .unwrap_or_else(Font::caption);
        let color = valid_color(source.section_title_color(item.index))
            .unwrap_or(self.settings.grid().vertical.color);
        let size = self.measurer.measure(&title, &font);
        frame.push_text(
            LayerTag::SectionTitle,
            TextPrimitive::new(title, Point::new(0.0, 0.0), size, font, color)
                .with_direction(TextDirection::BottomToTop),
        );
    }

    fn push_item_zero_axis(&self, frame: &mut RenderFrame, item: &ItemContext) {
        let zero_line = self.settings.grid().zero_line;
        if !zero_line.active {
            return;
        }
        let zero = item.metrics.zero_axis;
        frame.push_line(
            LayerTag::ZeroAxis,
            LinePrimitive::new(
                Point::new(-item.extend_left, zero),
                Point::new(item.cell.width + item.extend_right, zero),
                zero_line.stroke(),
            ),
        );
    }

    fn draw_tooltip<D>(
        &mut self,
        source: &D,
        layout: &SeriesLayout,
        item: &ItemContext,
    ) -> ChartResult<()>
    where
        D: SeriesDataSource + ?Sized,
    {
        let anchor_in_cell = self.settings.tooltip_anchor(item);
        let origin = layout.item_origin(item.index);
        let text = TooltipText {
            title: source.tooltip_title(item.index),
            value: source.tooltip_value(item.index),
        };
        let (geometry, frame) = build_tooltip_frame(
            Surface::Overlay,
            self.measurer.as_ref(),
            &text,
            anchor_in_cell.offset(origin.x, origin.y),
            VerticalDirection::for_anchor(anchor_in_cell.y, layout.plot_height()),
            layout.tooltip_container(),
            self.settings.tooltip(),
        );
        if geometry.overflow.horizontal || geometry.overflow.vertical {
            warn!(
                index = item.index,
                overflow = ?geometry.overflow,
                "tooltip does not fit inside the chart"
            );
        }
        self.renderer
            .remove_layers(Surface::Overlay, LayerMatch::Tooltip);
        self.renderer.render(&frame)?;
        self.tooltip = Some(geometry);
        Ok(())
    }
}

/// Source color overrides with out-of-range channels fall back to the chart setting.
fn valid_color(color: Option<Color>) -> Option<Color> {
    color.filter(|color| color.validate().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(count: usize) -> SeriesLayout {
        let snapshot = SeriesSnapshot {
            values: vec![1.0; count],
            max: 1.0,
            min: 0.0,
        };
        SeriesLayout::resolve(
            Size::new(300.0, 200.0),
            EdgeInsets::uniform(8.0),
            48.0,
            &snapshot,
        )
        .expect("layout")
    }

    #[test]
    fn item_at_maps_columns_inside_plot_rows() {
        let layout = layout(3);
        assert_eq!(layout.item_at(Point::new(8.0, 100.0)), Some(0));
        assert_eq!(layout.item_at(Point::new(8.0 + 48.0 * 2.5, 100.0)), Some(2));
        assert_eq!(layout.item_at(Point::new(4.0, 100.0)), None);
        assert_eq!(layout.item_at(Point::new(8.0 + 48.0 * 3.0, 100.0)), None);
        assert_eq!(layout.item_at(Point::new(20.0, 2.0)), None);
    }

    #[test]
    fn padding_taller_than_bounds_is_rejected() {
        let snapshot = SeriesSnapshot {
            values: Vec::new(),
            max: 0.0,
            min: 0.0,
        };
        let err = SeriesLayout::resolve(
            Size::new(100.0, 10.0),
            EdgeInsets::uniform(8.0),
            48.0,
            &snapshot,
        )
        .expect_err("no room for the plot");
        assert!(matches!(err, ChartError::InvalidViewport { .. }));
    }
}
