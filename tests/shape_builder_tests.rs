use approx::assert_relative_eq;
use cellchart::ChartError;
use cellchart::core::{
    AxisMetrics, CircleMarker, CornerRadii, LineCellFrame, LineCellValues, PieType, Point,
    Polarity, Rect, bar_shape, line_cell_geometry, pie_layout, zero_crossing_offset,
};

fn cell_frame() -> LineCellFrame {
    LineCellFrame {
        width: 48.0,
        height: 100.0,
        extend_left: 0.0,
        extend_right: 0.0,
        extend_bottom: 8.0,
    }
}

#[test]
fn short_bar_clamps_corner_radius_to_half_height() {
    let shape = bar_shape(Point::new(8.0, 100.0), 32.0, 2.0, CornerRadii::uniform(8.0))
        .expect("bar");
    assert_eq!(shape.radii, CornerRadii::uniform(1.0));
    assert!(shape.grows_up);
}

#[test]
fn narrow_bar_clamps_corner_radius_to_half_width() {
    let shape = bar_shape(Point::new(0.0, 100.0), 4.0, 60.0, CornerRadii::uniform(8.0))
        .expect("bar");
    assert_eq!(shape.radii, CornerRadii::uniform(2.0));
    let bbox = shape.path.bounding_box().expect("non-empty path");
    assert_relative_eq!(bbox.min_x(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(bbox.max_x(), 4.0, epsilon = 1e-9);
    assert_relative_eq!(bbox.min_y(), 40.0, epsilon = 1e-9);
}

#[test]
fn positive_bar_grows_up_from_the_axis() {
    let shape = bar_shape(
        Point::new(8.0, 100.0),
        32.0,
        60.0,
        CornerRadii::new(4.0, 4.0, 0.0, 0.0),
    )
    .expect("bar");
    assert_eq!(shape.bounds, Rect::new(8.0, 40.0, 32.0, 60.0));
    let bbox = shape.path.bounding_box().expect("non-empty path");
    assert_relative_eq!(bbox.min_y(), 40.0, epsilon = 1e-9);
    assert_relative_eq!(bbox.max_y(), 100.0, epsilon = 1e-9);
    assert!(shape.path.contains(Point::new(24.0, 70.0)));
    assert!(!shape.path.contains(Point::new(24.0, 110.0)));
}

#[test]
fn negative_bar_grows_down_from_the_axis() {
    let shape = bar_shape(
        Point::new(8.0, 50.0),
        32.0,
        -30.0,
        CornerRadii::new(4.0, 4.0, 0.0, 0.0),
    )
    .expect("bar");
    assert!(!shape.grows_up);
    assert_eq!(shape.bounds, Rect::new(8.0, 50.0, 32.0, 30.0));
    assert!(shape.path.contains(Point::new(24.0, 65.0)));
    assert!(!shape.path.contains(Point::new(24.0, 45.0)));
}

#[test]
fn bar_rejects_non_finite_height() {
    let err = bar_shape(Point::new(0.0, 0.0), 10.0, f64::NAN, CornerRadii::default())
        .expect_err("nan height");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn line_segment_on_one_side_is_a_single_run_per_half() {
    let metrics = AxisMetrics::resolve(100.0, 0.0, 100.0, true);
    let geometry = line_cell_geometry(
        LineCellValues {
            previous: Some(20.0),
            current: 60.0,
            next: Some(40.0),
        },
        &metrics,
        cell_frame(),
    );
    assert_eq!(geometry.current, Point::new(24.0, 40.0));
    assert_relative_eq!(geometry.previous_mid.y, 60.0);
    assert_relative_eq!(geometry.next_mid.y, 50.0);
    assert_eq!(geometry.runs.len(), 2);
    assert!(geometry.runs.iter().all(|run| run.polarity == Polarity::Positive));
}

#[test]
fn line_segment_splits_at_the_zero_crossing() {
    let metrics = AxisMetrics::resolve(100.0, -100.0, 100.0, true);
    let geometry = line_cell_geometry(
        LineCellValues {
            previous: Some(-100.0),
            current: 50.0,
            next: None,
        },
        &metrics,
        cell_frame(),
    );
    assert_relative_eq!(geometry.previous_mid.y, 62.5);
    assert_eq!(geometry.current, Point::new(24.0, 25.0));
    assert_eq!(geometry.runs.len(), 3);

    let crossing = geometry.runs[0].to;
    assert_relative_eq!(crossing.x, 8.0, epsilon = 1e-9);
    assert_relative_eq!(crossing.y, 50.0);
    assert_eq!(geometry.runs[0].polarity, Polarity::Negative);
    assert_eq!(geometry.runs[1].polarity, Polarity::Positive);
    assert_eq!(geometry.runs[2].polarity, Polarity::Positive);
    assert_eq!(geometry.next_mid.y, geometry.current.y);
}

#[test]
fn fill_polygon_reaches_the_cell_bottom() {
    let metrics = AxisMetrics::resolve(100.0, -100.0, 100.0, true);
    let mut frame = cell_frame();
    frame.extend_left = 8.0;
    let geometry = line_cell_geometry(
        LineCellValues {
            previous: None,
            current: -40.0,
            next: Some(80.0),
        },
        &metrics,
        frame,
    );
    let [previous_mid, current, next_mid, bottom_right, bottom_left] = geometry.fill_polygon;
    assert_eq!(previous_mid, geometry.previous_mid);
    assert_eq!(current, geometry.current);
    assert_eq!(next_mid, geometry.next_mid);
    assert_eq!(bottom_right, Point::new(48.0, 108.0));
    assert_eq!(bottom_left, Point::new(-8.0, 108.0));
}

#[test]
fn zero_crossing_offset_handles_flat_spans() {
    assert_eq!(zero_crossing_offset(50.0, 50.0, 50.0, 24.0), 0.0);
    assert_relative_eq!(zero_crossing_offset(62.5, 25.0, 50.0, 24.0), 8.0);
}

#[test]
fn full_pie_lays_slices_clockwise_from_the_top() {
    let layout = pie_layout(&[1.0, 1.0, 2.0], Rect::new(0.0, 0.0, 300.0, 200.0), PieType::Full)
        .expect("pie");
    assert_eq!(layout.radius, 100.0);
    assert_eq!(layout.center, Point::new(150.0, 100.0));
    assert_eq!(layout.inner_radius, 0.0);
    let angles: Vec<(f64, f64)> = layout
        .slices
        .iter()
        .map(|slice| (slice.start_angle_deg, slice.end_angle_deg))
        .collect();
    assert_eq!(angles, vec![(270.0, 360.0), (360.0, 450.0), (450.0, 630.0)]);
    assert_eq!(layout.slices[2].fraction, 0.5);
}

#[test]
fn pie_hit_testing_follows_slice_angles() {
    let layout = pie_layout(&[1.0, 1.0, 2.0], Rect::new(0.0, 0.0, 300.0, 200.0), PieType::Full)
        .expect("pie");
    assert_eq!(layout.slice_at(Point::new(200.0, 50.0)), Some(0));
    assert_eq!(layout.slice_at(Point::new(180.0, 130.0)), Some(1));
    assert_eq!(layout.slice_at(Point::new(100.0, 100.0)), Some(2));
    assert_eq!(layout.slice_at(Point::new(10.0, 10.0)), None);
}

#[test]
fn half_donut_sits_on_the_plot_bottom() {
    let layout = pie_layout(
        &[3.0, 1.0],
        Rect::new(10.0, 10.0, 300.0, 200.0),
        PieType::HalfDonut,
    )
    .expect("pie");
    assert_eq!(layout.radius, 150.0);
    assert_eq!(layout.center, Point::new(160.0, 210.0));
    assert_eq!(layout.inner_radius, 75.0);
    assert_eq!(layout.slices[0].start_angle_deg, 180.0);
    assert_eq!(layout.slices[1].end_angle_deg, 360.0);
    assert_eq!(layout.slice_at(Point::new(160.0, 190.0)), None);
}

#[test]
fn pie_with_zero_total_has_no_slices() {
    let layout = pie_layout(&[0.0, 0.0], Rect::new(0.0, 0.0, 100.0, 100.0), PieType::Donut)
        .expect("pie");
    assert!(layout.slices.is_empty());
    assert_eq!(layout.total, 0.0);
}

#[test]
fn pie_rejects_negative_values() {
    let err = pie_layout(&[1.0, -2.0], Rect::new(0.0, 0.0, 100.0, 100.0), PieType::Full)
        .expect_err("negative slice");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn circle_marker_is_centered_on_its_point() {
    let marker = CircleMarker::new(Point::new(24.0, 40.0), 8.0);
    assert_eq!(marker.radius(), 4.0);
    assert_eq!(marker.bounds(), Rect::new(20.0, 36.0, 8.0, 8.0));
    let bbox = marker.path().bounding_box().expect("circle outline");
    assert_relative_eq!(bbox.min_x(), 20.0, epsilon = 1e-9);
    assert_relative_eq!(bbox.max_y(), 44.0, epsilon = 1e-9);
}
