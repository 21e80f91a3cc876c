use tracing::{debug, trace};

use crate::core::{PieLayout, Point, Rect, Size, TooltipGeometry, VerticalDirection, pie_layout};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{Selection, SelectionChange, SelectionState, TapTarget};
use crate::render::{
    ApproximateTextMeasurer, LayerMatch, LayerTag, RenderFrame, Renderer, ShapePrimitive, Surface,
    TextMeasurer,
};

use super::tooltip_frame::{TooltipText, build_tooltip_frame};
use super::{
    PieChartSettings, PieDataSource, SelectionListener, SettingsDocument, default_slice_color,
    read_pie_values,
};

/// Pie, half pie, donut or half donut drawn on a single plot surface.
///
/// Any selection change redraws the whole plot.
pub struct PieChart<R: Renderer> {
    renderer: R,
    settings: PieChartSettings,
    measurer: Box<dyn TextMeasurer>,
    bounds: Size,
    selection: Selection,
    layout: Option<PieLayout>,
    tooltip: Option<TooltipGeometry>,
}

impl<R: Renderer> PieChart<R> {
    pub fn new(renderer: R, bounds: Size, settings: PieChartSettings) -> ChartResult<Self> {
        bounds.validate_bounds()?;
        settings.validate()?;
        Ok(Self {
            renderer,
            settings,
            measurer: Box::new(ApproximateTextMeasurer::default()),
            bounds,
            selection: Selection::default(),
            layout: None,
            tooltip: None,
        })
    }

    #[must_use]
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    #[must_use]
    pub fn settings(&self) -> &PieChartSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: PieChartSettings) -> ChartResult<()> {
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
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected()
    }

    #[must_use]
    pub fn layout(&self) -> Option<&PieLayout> {
        self.layout.as_ref()
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipGeometry> {
        self.tooltip.as_ref()
    }

    /// Chart bounds minus padding, in chart coordinates.
    #[must_use]
    pub fn plot_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.bounds.width, self.bounds.height)
            .inset_by(self.settings.chart.padding)
    }

    /// Redraws background, slices and tooltip. `reset` drops the selection.
    pub fn draw<D>(&mut self, source: &D, reset: bool) -> ChartResult<()>
    where
        D: PieDataSource + ?Sized,
    {
        let values = read_pie_values(source)?;
        let plot = self.plot_rect();
        if plot.width() <= 0.0 || plot.height() <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        let layout = pie_layout(&values, plot, self.settings.pie_type)?;

        if reset {
            self.selection.clear();
        }
        if self
            .selection
            .selected()
            .is_some_and(|index| index >= layout.slices.len())
        {
            self.selection.clear();
        }

        let count = values.len();
        let slice = self.settings.slice;
        let mut frame = RenderFrame::new(Surface::Plot);
        frame.push_shape(
            LayerTag::Background,
            self.settings.chart.background_shape(self.bounds),
        );
        for pie_slice in &layout.slices {
            let selected = self.selection.is_selected(pie_slice.index);
            frame.push_shape(
                LayerTag::Series,
                ShapePrimitive::filled(
                    pie_slice.path.clone(),
                    Some(source.slice_color(pie_slice.index, count, selected, &slice))
                        .filter(|color| color.validate().is_ok())
                        .unwrap_or_else(|| {
                            default_slice_color(pie_slice.index, count, selected, &slice)
                        }),
                )
                .with_stroke(slice.border.stroke()),
            );
        }

        let tooltip = self
            .selection
            .selected()
            .and_then(|index| self.tooltip_frame(source, &layout, plot, index))
            .map(|(geometry, tooltip_frame)| {
                frame.extend(tooltip_frame);
                geometry
            });

        self.renderer.remove_layers(Surface::Plot, LayerMatch::All);
        self.renderer.render(&frame)?;
        self.tooltip = tooltip;

        debug!(
            slices = layout.slices.len(),
            total = layout.total,
            radius = layout.radius,
            pie_type = ?layout.pie_type,
            reset,
            "pie chart draw pass"
        );
        self.layout = Some(layout);
        Ok(())
    }

    /// Adopts new bounds, keeping the selection.
    pub fn relayout<D>(&mut self, source: &D, bounds: Size) -> ChartResult<()>
    where
        D: PieDataSource + ?Sized,
    {
        bounds.validate_bounds()?;
        self.bounds = bounds;
        self.draw(source, false)
    }

    /// User tap on a slice. Toggles its selection and notifies `listener`.
    pub fn tap_item<D>(
        &mut self,
        source: &D,
        index: usize,
        listener: &mut dyn SelectionListener,
    ) -> ChartResult<SelectionChange>
    where
        D: PieDataSource + ?Sized,
    {
        let count = self.slice_count()?;
        if index >= count {
            return Err(ChartError::IndexOutOfRange { index, count });
        }
        let previous = self.selection;
        let change = self.selection.toggle(index);
        if let Err(err) = self.draw(source, false) {
            self.selection = previous;
            return Err(err);
        }
        listener.on_item_selected(change.current.index());
        Ok(change)
    }

    /// Routes a tap given in chart coordinates.
    ///
    /// Tapping the tooltip re-announces the selection. Tapping a slice
    /// toggles it; tapping anywhere else clears the selection.
    pub fn tap_at<D>(
        &mut self,
        source: &D,
        point: Point,
        listener: &mut dyn SelectionListener,
    ) -> ChartResult<TapTarget>
    where
        D: PieDataSource + ?Sized,
    {
        let layout = self.layout.as_ref().ok_or(ChartError::NotLaidOut)?;
        if self.tooltip.is_some_and(|tooltip| tooltip.contains(point)) {
            trace!(selected = ?self.selection.selected(), "tooltip tapped");
            listener.on_item_selected(self.selection.selected());
            return Ok(TapTarget::Tooltip);
        }

        let hit = layout.slice_at(point);
        let next = match hit {
            Some(index) if self.selection.is_selected(index) => None,
            other => other,
        };
        let previous = self.selection;
        let change = self.selection.set(next);
        if !change.is_noop() {
            trace!(
                previous = ?change.previous,
                current = ?change.current,
                "pie selection changed"
            );
            if let Err(err) = self.draw(source, false) {
                self.selection = previous;
                return Err(err);
            }
            listener.on_item_selected(change.current.index());
        }
        Ok(hit.map_or(TapTarget::Nothing, TapTarget::Item))
    }

    /// Programmatic selection. Listeners are not notified.
    pub fn select<D>(&mut self, source: &D, index: Option<usize>) -> ChartResult<SelectionChange>
    where
        D: PieDataSource + ?Sized,
    {
        let count = self.slice_count()?;
        if let Some(index) = index.filter(|&index| index >= count) {
            return Err(ChartError::IndexOutOfRange { index, count });
        }
        let change = self.selection.set(index);
        if !change.is_noop() {
            self.draw(source, false)?;
        }
        Ok(change)
    }

    pub fn clear_selection<D>(&mut self, source: &D) -> ChartResult<SelectionChange>
    where
        D: PieDataSource + ?Sized,
    {
        self.select(source, None)
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    fn slice_count(&self) -> ChartResult<usize> {
        self.layout
            .as_ref()
            .map(|layout| layout.slices.len())
            .ok_or(ChartError::NotLaidOut)
    }

    fn tooltip_frame<D>(
        &self,
        source: &D,
        layout: &PieLayout,
        plot: Rect,
        index: usize,
    ) -> Option<(TooltipGeometry, RenderFrame)>
    where
        D: PieDataSource + ?Sized,
    {
        let anchor = layout.slices.get(index)?.anchor()?;
        let text = TooltipText {
            title: source.tooltip_title(index),
            value: source.tooltip_value(index),
        };
        Some(build_tooltip_frame(
            Surface::Plot,
            self.measurer.as_ref(),
            &text,
            anchor,
            VerticalDirection::for_anchor(anchor.y - plot.min_y(), plot.height()),
            plot,
            &self.settings.tooltip,
        ))
    }
}
