use cellchart::core::{
    CornerRadii, HorizontalDirection, Point, Rect, Size, TooltipDirection, TooltipMetrics,
    TooltipSpacing, VerticalDirection, layout_tooltip, place_tooltip,
};

const TITLE: Size = Size::new(60.0, 20.0);
const VALUE: Size = Size::new(40.0, 18.0);

fn metrics() -> TooltipMetrics {
    TooltipMetrics {
        arrow_height: 16.0,
        spacing: TooltipSpacing::default(),
        corner_radii: CornerRadii::uniform(4.0),
    }
}

fn container() -> Rect {
    Rect::new(0.0, 0.0, 400.0, 300.0)
}

#[test]
fn downward_box_sizes_from_widest_text() {
    let geometry = layout_tooltip(
        Point::new(200.0, 40.0),
        TITLE,
        VALUE,
        &metrics(),
        TooltipDirection::default(),
    );
    assert_eq!(geometry.box_rect, Rect::new(162.0, 56.0, 76.0, 54.0));
    assert_eq!(
        geometry.arrow,
        [
            Point::new(200.0, 40.0),
            Point::new(238.0, 60.0),
            Point::new(162.0, 60.0),
        ]
    );
    assert_eq!(geometry.title_origin, Point::new(170.0, 64.0));
    assert_eq!(geometry.value_origin, Point::new(180.0, 84.0));
}

#[test]
fn upward_box_sits_above_the_anchor() {
    let geometry = layout_tooltip(
        Point::new(200.0, 250.0),
        TITLE,
        VALUE,
        &metrics(),
        TooltipDirection::new(VerticalDirection::Up, HorizontalDirection::Centered),
    );
    assert_eq!(geometry.box_rect.max_y(), 234.0);
    assert_eq!(geometry.box_rect.min_y(), 180.0);
    assert_eq!(geometry.arrow[1].y, 230.0);
}

#[test]
fn direction_follows_anchor_half() {
    assert_eq!(VerticalDirection::for_anchor(100.0, 300.0), VerticalDirection::Down);
    assert_eq!(VerticalDirection::for_anchor(150.0, 300.0), VerticalDirection::Down);
    assert_eq!(VerticalDirection::for_anchor(151.0, 300.0), VerticalDirection::Up);
}

#[test]
fn anchor_at_left_edge_opens_right() {
    let placed = place_tooltip(
        Point::new(0.0, 40.0),
        TITLE,
        VALUE,
        &metrics(),
        VerticalDirection::Down,
        container(),
    );
    assert_eq!(placed.direction.horizontal, HorizontalDirection::Right);
    assert!(placed.box_rect.min_x() >= 0.0);
    assert!(placed.box_rect.max_x() <= 400.0);
    assert!(!placed.overflow.horizontal);
}

#[test]
fn anchor_at_right_edge_opens_left() {
    let placed = place_tooltip(
        Point::new(400.0, 40.0),
        TITLE,
        VALUE,
        &metrics(),
        VerticalDirection::Down,
        container(),
    );
    assert_eq!(placed.direction.horizontal, HorizontalDirection::Left);
    assert_eq!(placed.box_rect.max_x(), 400.0);
    assert!(placed.box_rect.min_x() >= 0.0);
}

#[test]
fn centered_box_keeps_centered_flag() {
    let placed = place_tooltip(
        Point::new(200.0, 40.0),
        TITLE,
        VALUE,
        &metrics(),
        VerticalDirection::Down,
        container(),
    );
    assert_eq!(placed.direction, TooltipDirection::default());
    assert_eq!(placed.overflow, Default::default());
}

#[test]
fn vertical_overflow_flips_when_the_other_side_fits() {
    let placed = place_tooltip(
        Point::new(200.0, 20.0),
        TITLE,
        VALUE,
        &metrics(),
        VerticalDirection::Up,
        container(),
    );
    assert_eq!(placed.direction.vertical, VerticalDirection::Down);
    assert_eq!(placed.box_rect.min_y(), 36.0);
    assert!(!placed.overflow.vertical);
}

#[test]
fn overflow_on_both_sides_is_reported_not_clamped() {
    let cramped = Rect::new(0.0, 0.0, 400.0, 60.0);
    let placed = place_tooltip(
        Point::new(200.0, 30.0),
        TITLE,
        VALUE,
        &metrics(),
        VerticalDirection::Down,
        cramped,
    );
    assert!(placed.overflow.vertical);
    assert_eq!(placed.direction.vertical, VerticalDirection::Down);
    assert_eq!(placed.box_rect.max_y(), 100.0);
}

#[test]
fn container_narrower_than_the_box_reports_horizontal_overflow() {
    let narrow = Rect::new(0.0, 0.0, 50.0, 300.0);
    let placed = place_tooltip(
        Point::new(25.0, 40.0),
        TITLE,
        VALUE,
        &metrics(),
        VerticalDirection::Down,
        narrow,
    );
    assert!(placed.overflow.horizontal);
}

#[test]
fn tap_hit_rect_is_the_box() {
    let placed = place_tooltip(
        Point::new(200.0, 40.0),
        TITLE,
        VALUE,
        &metrics(),
        VerticalDirection::Down,
        container(),
    );
    assert!(placed.contains(Point::new(200.0, 80.0)));
    assert!(!placed.contains(Point::new(200.0, 45.0)));
    assert_eq!(placed.hit_rect(), placed.box_rect);
}
