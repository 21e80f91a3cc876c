use cellchart::core::{
    AxisMetrics, CornerRadii, PieType, Point, Rect, Size, TooltipMetrics, TooltipSpacing,
    VerticalDirection, bar_shape, interval, pie_layout, pixel_y_for_value, place_tooltip, range,
    value_for_pixel_y, zero_axis_location,
};
use proptest::prelude::*;

fn tooltip_metrics() -> TooltipMetrics {
    TooltipMetrics {
        arrow_height: 16.0,
        spacing: TooltipSpacing::default(),
        corner_radii: CornerRadii::uniform(4.0),
    }
}

proptest! {
    #[test]
    fn zero_axis_maps_back_inside_value_range(
        max in 0.0f64..10_000.0,
        min in -10_000.0f64..0.0,
        height in 1.0f64..2_000.0
    ) {
        prop_assume!(range(max, min) > 1e-6);
        let zero = zero_axis_location(max, min, height);
        let value = value_for_pixel_y(zero, max, min, height);
        prop_assert!(value >= min - 1e-9 && value <= max + 1e-9);
        prop_assert!((0.0..=height).contains(&zero));
    }

    #[test]
    fn value_pixel_round_trip(
        max in 0.0f64..10_000.0,
        min in -10_000.0f64..0.0,
        factor in 0.0f64..1.0,
        height in 1.0f64..2_000.0
    ) {
        prop_assume!(range(max, min) > 1e-6);
        let value = min + (max - min) * factor;
        let y = pixel_y_for_value(value, max, min, height);
        let recovered = value_for_pixel_y(y, max, min, height);
        prop_assert!((recovered - value).abs() <= 1e-6 * range(max, min).max(1.0));
    }

    #[test]
    fn interval_is_at_least_a_fifth_of_large_ranges(max in 10.5f64..1_000_000.0) {
        let step = interval(max, 0.0);
        prop_assert!(step >= max / 5.0);
        prop_assert!(step < max);
    }

    #[test]
    fn bar_radii_never_exceed_half_height(
        height in -500.0f64..500.0,
        radius in 0.0f64..64.0
    ) {
        let shape = bar_shape(
            Point::new(8.0, 200.0),
            32.0,
            height,
            CornerRadii::uniform(radius),
        ).expect("finite bar");
        let limit = height.abs() / 2.0;
        prop_assert!(shape.radii.top_left <= limit + 1e-12);
        prop_assert!(shape.radii.bottom_right <= limit + 1e-12);
        prop_assert!(shape.path.is_closed());
    }

    #[test]
    fn pie_fractions_cover_the_sweep(values in prop::collection::vec(0.0f64..1_000.0, 1..12)) {
        let plot = Rect::new(0.0, 0.0, 300.0, 200.0);
        let layout = pie_layout(&values, plot, PieType::Full).expect("valid values");
        let total: f64 = values.iter().sum();
        if total > 0.0 {
            let sweep: f64 = layout
                .slices
                .iter()
                .map(|slice| slice.end_angle_deg - slice.start_angle_deg)
                .sum();
            prop_assert!((sweep - 360.0).abs() <= 1e-6);
            for pair in layout.slices.windows(2) {
                prop_assert!((pair[0].end_angle_deg - pair[1].start_angle_deg).abs() <= 1e-12);
            }
        } else {
            prop_assert!(layout.slices.is_empty());
        }
    }

    #[test]
    fn tooltip_stays_inside_wide_containers(
        anchor_x in 0.0f64..600.0,
        anchor_y in 0.0f64..300.0
    ) {
        let container = Rect::new(0.0, 0.0, 600.0, 300.0);
        let placed = place_tooltip(
            Point::new(anchor_x, anchor_y),
            Size::new(60.0, 20.0),
            Size::new(40.0, 18.0),
            &tooltip_metrics(),
            VerticalDirection::for_anchor(anchor_y, container.height()),
            container,
        );
        prop_assert!(!placed.overflow.horizontal);
        prop_assert!(placed.box_rect.min_x() >= 0.0);
        prop_assert!(placed.box_rect.max_x() <= container.max_x());
    }

    #[test]
    fn axis_metrics_zero_axis_stays_in_plot(
        max in -1_000.0f64..1_000.0,
        spread in 0.0f64..1_000.0,
        height in 1.0f64..800.0
    ) {
        let min = max - spread;
        let metrics = AxisMetrics::resolve(max, min, height, true);
        prop_assert!(metrics.zero_axis >= -1e-9 && metrics.zero_axis <= height + 1e-9);
        prop_assert!(metrics.increment >= 0.0);
    }
}
