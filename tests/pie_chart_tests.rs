use approx::assert_relative_eq;
use cellchart::ChartError;
use cellchart::api::{
    PieChart, PieChartSettings, SelectionLog, SliceSettings, ValuesDataSource,
    default_slice_color,
};
use cellchart::core::{PieType, Point, Size};
use cellchart::interaction::{SelectionState, TapTarget};
use cellchart::render::{Color, LayerTag, Primitive, RecordedLayer, RecordingRenderer, Surface};

const SLICE_0: Point = Point::new(208.0, 58.0);
const SLICE_1: Point = Point::new(220.0, 170.0);
const SLICE_2: Point = Point::new(80.0, 108.0);
const OUTSIDE: Point = Point::new(10.0, 10.0);

fn chart_with(settings: PieChartSettings) -> PieChart<RecordingRenderer> {
    PieChart::new(RecordingRenderer::new(), Size::new(316.0, 216.0), settings)
        .expect("valid chart")
}

fn drawn_chart(source: &ValuesDataSource) -> PieChart<RecordingRenderer> {
    let mut chart = chart_with(PieChartSettings::default());
    chart.draw(source, true).expect("draw");
    chart
}

fn slice_fills(chart: &PieChart<RecordingRenderer>) -> Vec<Color> {
    chart
        .renderer()
        .layers_on(Surface::Plot)
        .filter(|layer| layer.tag == LayerTag::Series)
        .filter_map(|layer| match &layer.primitive {
            Primitive::Shape(shape) => shape.fill,
            _ => None,
        })
        .collect()
}

#[test]
fn draw_puts_background_and_slices_on_the_plot() {
    let source = ValuesDataSource::new(vec![1.0, 1.0, 2.0]);
    let chart = drawn_chart(&source);

    assert_eq!(
        chart.renderer().tags_on(Surface::Plot),
        vec![
            LayerTag::Background,
            LayerTag::Series,
            LayerTag::Series,
            LayerTag::Series,
        ]
    );
    let layout = chart.layout().expect("laid out");
    assert_eq!(layout.center, Point::new(158.0, 108.0));
    assert_eq!(layout.radius, 100.0);

    let settings = SliceSettings::default();
    let expected: Vec<Color> = (0..3)
        .map(|index| default_slice_color(index, 3, false, &settings))
        .collect();
    assert_eq!(slice_fills(&chart), expected);
    assert_eq!(expected[0], Color::LINK);
}

#[test]
fn tapping_a_slice_selects_it_and_shows_a_tooltip() {
    let source = ValuesDataSource::new(vec![1.0, 1.0, 2.0]);
    let mut chart = drawn_chart(&source);
    let mut log = SelectionLog::default();

    let target = chart.tap_at(&source, SLICE_0, &mut log).expect("tap");
    assert_eq!(target, TapTarget::Item(0));
    assert_eq!(chart.selection_state(), SelectionState::Selected(0));
    assert_eq!(log.events, vec![Some(0)]);

    let tags = chart.renderer().tags_on(Surface::Plot);
    assert_eq!(
        &tags[4..],
        &[
            LayerTag::TooltipArrow,
            LayerTag::TooltipBox,
            LayerTag::TooltipTitle,
            LayerTag::TooltipValue,
        ]
    );
    let selected_fill = default_slice_color(0, 3, true, &SliceSettings::default());
    assert_eq!(slice_fills(&chart)[0], selected_fill);

    let tooltip = chart.tooltip().expect("tooltip");
    assert_relative_eq!(tooltip.anchor.x, SLICE_0.x, epsilon = 1e-9);
    assert_relative_eq!(tooltip.anchor.y, SLICE_0.y, epsilon = 1e-9);
    assert!(chart.plot_rect().contains(tooltip.box_rect.origin));
}

#[test]
fn tapping_the_selected_slice_deselects_it() {
    let source = ValuesDataSource::new(vec![1.0, 1.0, 2.0]);
    let mut chart = drawn_chart(&source);
    let mut log = SelectionLog::default();

    chart.tap_at(&source, SLICE_2, &mut log).expect("select");
    let target = chart.tap_at(&source, SLICE_2, &mut log).expect("deselect");

    assert_eq!(target, TapTarget::Item(2));
    assert_eq!(chart.selected_index(), None);
    assert!(chart.tooltip().is_none());
    assert_eq!(log.events, vec![Some(2), None]);
    assert_eq!(chart.renderer().layers_on(Surface::Plot).count(), 4);
}

#[test]
fn switching_slices_moves_the_tooltip() {
    let source = ValuesDataSource::new(vec![1.0, 1.0, 2.0]);
    let mut chart = drawn_chart(&source);
    let mut log = SelectionLog::default();

    chart.tap_at(&source, SLICE_2, &mut log).expect("first");
    chart.tap_at(&source, SLICE_1, &mut log).expect("second");
    assert_eq!(chart.selected_index(), Some(1));
    assert_eq!(log.events, vec![Some(2), Some(1)]);
    assert_eq!(
        chart
            .renderer()
            .count(Surface::Plot, LayerTag::TooltipBox),
        1
    );
}

#[test]
fn tapping_outside_every_slice_clears_the_selection() {
    let source = ValuesDataSource::new(vec![1.0, 1.0, 2.0]);
    let mut chart = drawn_chart(&source);
    let mut log = SelectionLog::default();

    assert_eq!(
        chart.tap_at(&source, OUTSIDE, &mut log).expect("miss"),
        TapTarget::Nothing
    );
    assert!(log.events.is_empty());

    chart.tap_at(&source, SLICE_2, &mut log).expect("select");
    assert_eq!(
        chart.tap_at(&source, OUTSIDE, &mut log).expect("miss"),
        TapTarget::Nothing
    );
    assert_eq!(chart.selected_index(), None);
    assert_eq!(log.events, vec![Some(2), None]);
}

#[test]
fn tooltip_tap_reannounces_the_selection() {
    let source = ValuesDataSource::new(vec![1.0, 1.0, 2.0]);
    let mut chart = drawn_chart(&source);
    let mut log = SelectionLog::default();

    chart.tap_item(&source, 0, &mut log).expect("select");
    let center = chart.tooltip().expect("tooltip").box_rect.center();
    assert_eq!(
        chart.tap_at(&source, center, &mut log).expect("tooltip tap"),
        TapTarget::Tooltip
    );
    assert_eq!(chart.selected_index(), Some(0));
    assert_eq!(log.events, vec![Some(0), Some(0)]);
}

#[test]
fn custom_slice_colors_darken_when_selected() {
    let source = ValuesDataSource::new(vec![3.0, 1.0])
        .with_slice_colors(vec![Color::RED, Color::LINK])
        .with_labels(["Rent", "Food"]);
    let mut chart = drawn_chart(&source);
    assert_eq!(slice_fills(&chart), vec![Color::RED, Color::LINK]);

    chart.select(&source, Some(0)).expect("select");
    assert_eq!(slice_fills(&chart), vec![Color::RED.darkened(), Color::LINK]);

    let texts: Vec<String> = chart
        .renderer()
        .layers_on(Surface::Plot)
        .filter_map(|layer| match &layer.primitive {
            Primitive::Text(text) => Some(text.text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["Rent".to_owned(), "3.0".to_owned()]);
}

#[test]
fn half_donut_sits_on_the_plot_bottom() {
    let source = ValuesDataSource::new(vec![2.0, 2.0]);
    let mut chart = chart_with(PieChartSettings::new().with_pie_type(PieType::HalfDonut));
    chart.draw(&source, true).expect("draw");

    let layout = chart.layout().expect("laid out");
    assert_eq!(layout.center, Point::new(158.0, 208.0));
    assert_eq!(layout.radius, 150.0);
    assert_eq!(layout.inner_radius, 75.0);

    let mut log = SelectionLog::default();
    assert_eq!(
        chart
            .tap_at(&source, Point::new(158.0, 190.0), &mut log)
            .expect("hole tap"),
        TapTarget::Nothing
    );
}

#[test]
fn zero_total_draws_no_slices() {
    let source = ValuesDataSource::new(vec![0.0, 0.0]);
    let mut chart = drawn_chart(&source);

    assert_eq!(
        chart.renderer().tags_on(Surface::Plot),
        vec![LayerTag::Background]
    );
    let err = chart
        .tap_item(&source, 0, &mut SelectionLog::default())
        .expect_err("no slices");
    assert!(matches!(err, ChartError::IndexOutOfRange { index: 0, count: 0 }));
}

#[test]
fn negative_slices_are_rejected() {
    let mut chart = chart_with(PieChartSettings::default());
    let err = chart
        .draw(&ValuesDataSource::new(vec![1.0, -1.0]), true)
        .expect_err("negative slice");
    assert!(matches!(err, ChartError::InvalidDataSource(_)));
    assert!(chart.renderer().is_empty());
}

#[test]
fn interaction_before_draw_is_not_laid_out() {
    let source = ValuesDataSource::new(vec![1.0]);
    let mut chart = chart_with(PieChartSettings::default());
    let err = chart
        .tap_at(&source, SLICE_0, &mut SelectionLog::default())
        .expect_err("not drawn");
    assert!(matches!(err, ChartError::NotLaidOut));
    assert!(matches!(
        chart.select(&source, Some(0)),
        Err(ChartError::NotLaidOut)
    ));
}

#[test]
fn relayout_keeps_the_selection() {
    let source = ValuesDataSource::new(vec![1.0, 1.0, 2.0]);
    let mut chart = drawn_chart(&source);
    chart.select(&source, Some(1)).expect("select");

    chart
        .relayout(&source, Size::new(416.0, 416.0))
        .expect("relayout");
    let layout = chart.layout().expect("laid out");
    assert_eq!(layout.radius, 200.0);
    assert_eq!(chart.selected_index(), Some(1));
    assert!(chart.tooltip().is_some());

    chart.draw(&source, true).expect("reset");
    assert_eq!(chart.selected_index(), None);
}

#[test]
fn repeated_draws_are_identical() {
    let source = ValuesDataSource::new(vec![5.0, 3.0, 2.0]);
    let mut chart = drawn_chart(&source);
    chart.select(&source, Some(2)).expect("select");
    let first: Vec<RecordedLayer> = chart.renderer().layers().cloned().collect();

    chart.draw(&source, false).expect("redraw");
    let second: Vec<RecordedLayer> = chart.renderer().layers().cloned().collect();
    assert_eq!(first, second);
}
