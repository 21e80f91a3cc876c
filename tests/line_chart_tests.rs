use approx::assert_relative_eq;
use cellchart::api::{
    HeadlessList, LineChart, LineChartSettings, PointSettings, SegmentSettings, SelectionLog,
    ValuesDataSource,
};
use cellchart::core::{Point, Size, VerticalDirection};
use cellchart::render::{
    CirclePrimitive, Color, LayerTag, LinePrimitive, Primitive, RecordingRenderer, Surface,
};

const VALUES: [f64; 4] = [40.0, -20.0, 60.0, 10.0];

fn drawn_chart(
    settings: LineChartSettings,
    source: &ValuesDataSource,
) -> LineChart<RecordingRenderer, HeadlessList> {
    let mut chart = LineChart::new(
        RecordingRenderer::new(),
        HeadlessList::new(),
        Size::new(300.0, 200.0),
        settings,
    )
    .expect("valid chart");
    chart.draw(source, true).expect("draw");
    chart
}

fn series_lines(chart: &LineChart<RecordingRenderer, HeadlessList>, index: usize) -> Vec<LinePrimitive> {
    chart
        .renderer()
        .layers_on(Surface::Item(index))
        .filter(|layer| layer.tag == LayerTag::Series)
        .filter_map(|layer| match &layer.primitive {
            Primitive::Line(line) => Some(*line),
            _ => None,
        })
        .collect()
}

fn marker(chart: &LineChart<RecordingRenderer, HeadlessList>, index: usize) -> CirclePrimitive {
    chart
        .renderer()
        .layers_on(Surface::Item(index))
        .find_map(|layer| match &layer.primitive {
            Primitive::Circle(circle) if layer.tag == LayerTag::Marker => Some(*circle),
            _ => None,
        })
        .expect("marker layer")
}

#[test]
fn items_draw_fill_then_lines_then_marker() {
    let source = ValuesDataSource::new(VALUES);
    let chart = drawn_chart(LineChartSettings::default(), &source);

    assert_eq!(chart.drawn_items().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert_eq!(
        chart.renderer().tags_on(Surface::Item(0)),
        vec![
            LayerTag::Gridline,
            LayerTag::Gridline,
            LayerTag::SeriesFill,
            LayerTag::Series,
            LayerTag::Series,
            LayerTag::ZeroAxis,
            LayerTag::Marker,
        ]
    );
}

#[test]
fn segments_crossing_the_axis_split_into_colored_runs() {
    let source = ValuesDataSource::new(VALUES);
    let chart = drawn_chart(LineChartSettings::default(), &source);

    let lines = series_lines(&chart, 1);
    assert_eq!(lines.len(), 4);
    let colors: Vec<Color> = lines.iter().map(|line| line.stroke.color).collect();
    assert_eq!(colors, vec![Color::LINK, Color::RED, Color::RED, Color::LINK]);

    // Plot height 184 over a range of 80 puts the zero axis at 138.
    let crossing = lines[0].to;
    assert_relative_eq!(crossing.x, 8.0, epsilon = 1e-9);
    assert_relative_eq!(crossing.y, 138.0, epsilon = 1e-9);
    assert_relative_eq!(lines[1].to.y, 184.0, epsilon = 1e-9);
}

#[test]
fn first_and_last_items_reach_into_the_padding() {
    let source = ValuesDataSource::new(VALUES);
    let chart = drawn_chart(LineChartSettings::default(), &source);

    let first = series_lines(&chart, 0);
    assert_eq!(first[0].from.x, -8.0);
    assert_relative_eq!(first[0].from.y, first[0].to.y, epsilon = 1e-9);

    let last = series_lines(&chart, 3);
    assert_eq!(last.last().expect("line").to.x, 56.0);

    let fill = chart
        .renderer()
        .layers_on(Surface::Item(3))
        .find_map(|layer| match &layer.primitive {
            Primitive::Polygon(polygon) => Some(polygon.clone()),
            _ => None,
        })
        .expect("fill polygon");
    assert_eq!(fill.points[3], Point::new(56.0, 192.0));
    assert_eq!(fill.fill, Color::LINK.with_alpha(0.5));
}

#[test]
fn hollow_markers_use_background_and_selection_darkens_border() {
    let source = ValuesDataSource::new(VALUES);
    let mut chart = drawn_chart(LineChartSettings::default(), &source);

    let negative = marker(&chart, 1);
    assert_eq!(negative.fill, Color::SECONDARY_BACKGROUND);
    assert_eq!(negative.border.color, Color::RED);
    assert_relative_eq!(negative.marker.center.y, 184.0, epsilon = 1e-9);
    assert_eq!(negative.marker.center.x, 24.0);

    chart.select(&source, Some(1)).expect("select");
    assert_eq!(marker(&chart, 1).border.color, Color::RED.darkened());
}

#[test]
fn filled_markers_use_the_point_color() {
    let source = ValuesDataSource::new(VALUES);
    let settings = LineChartSettings::new().with_segment(SegmentSettings {
        point: PointSettings {
            fill: true,
            ..PointSettings::default()
        },
        ..SegmentSettings::default()
    });
    let chart = drawn_chart(settings, &source);
    assert_eq!(marker(&chart, 0).fill, Color::LINK);
}

#[test]
fn zero_axis_defaults_to_red() {
    let source = ValuesDataSource::new(VALUES);
    let chart = drawn_chart(LineChartSettings::default(), &source);

    let axis = chart
        .renderer()
        .layers_on(Surface::Background)
        .find_map(|layer| match &layer.primitive {
            Primitive::Line(line) if layer.tag == LayerTag::ZeroAxis => Some(*line),
            _ => None,
        })
        .expect("zero axis");
    assert_eq!(axis.stroke.color, Color::RED);
    assert_relative_eq!(axis.from.y, 146.0, epsilon = 1e-9);
}

#[test]
fn tooltip_points_at_the_data_point() {
    let source = ValuesDataSource::new(VALUES);
    let mut chart = drawn_chart(LineChartSettings::default(), &source);
    let mut log = SelectionLog::default();

    chart.tap_item(&source, 2, &mut log).expect("tap");
    let tooltip = chart.tooltip().expect("tooltip");
    assert_relative_eq!(tooltip.anchor.x, 128.0, epsilon = 1e-9);
    assert_relative_eq!(tooltip.anchor.y, 8.0, epsilon = 1e-9);
    assert_eq!(tooltip.direction.vertical, VerticalDirection::Down);
    assert_eq!(log.events, vec![Some(2)]);
    assert_eq!(chart.list().reloads(), &[vec![2]]);
}

#[test]
fn live_values_are_read_when_an_item_is_redrawn() {
    let mut source = ValuesDataSource::new(VALUES);
    let mut chart = drawn_chart(LineChartSettings::default(), &source);
    let before = marker(&chart, 0).marker.center.y;

    source.set_values(vec![20.0, -20.0, 60.0, 10.0]);
    chart.draw_item(&source, 0).expect("redraw item");
    let after = marker(&chart, 0).marker.center.y;

    assert!(after > before);
    assert_relative_eq!(after, 138.0 - 20.0 * 2.3, epsilon = 1e-9);
}

#[test]
fn all_zero_payload_draws_a_flat_line_on_the_axis() {
    let source = ValuesDataSource::new(vec![0.0, 0.0, 0.0]);
    let chart = drawn_chart(LineChartSettings::default(), &source);

    assert_eq!(chart.drawn_items().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(chart.layout().expect("laid out").metrics.increment, 0.0);
    for index in 0..3 {
        let lines = series_lines(&chart, index);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line.from.y, 184.0);
            assert_eq!(line.to.y, 184.0);
            assert_eq!(line.stroke.color, Color::LINK);
        }
        assert_eq!(marker(&chart, index).marker.center.y, 184.0);
    }
    // Only the separators after the last item remain in the background.
    assert_eq!(
        chart.renderer().count(Surface::Background, LayerTag::Gridline),
        14
    );
}

#[test]
fn single_item_flattens_both_halves() {
    let source = ValuesDataSource::new(vec![25.0]);
    let chart = drawn_chart(LineChartSettings::default(), &source);

    // Range |25| + |25| over a plot height of 184.
    let lines = series_lines(&chart, 0);
    assert_eq!(lines.len(), 2);
    let xs: Vec<(f64, f64)> = lines.iter().map(|line| (line.from.x, line.to.x)).collect();
    assert_eq!(xs, vec![(-8.0, 24.0), (24.0, 56.0)]);
    for line in &lines {
        assert_relative_eq!(line.from.y, 92.0, epsilon = 1e-9);
        assert_relative_eq!(line.to.y, 92.0, epsilon = 1e-9);
    }
    let center = marker(&chart, 0).marker.center;
    assert_eq!(center.x, 24.0);
    assert_relative_eq!(center.y, 92.0, epsilon = 1e-9);
}
