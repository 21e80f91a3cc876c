use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use crate::core::types::{CornerRadii, Point, Rect};
use crate::error::{ChartError, ChartResult};

const GEOMETRY_EPSILON: f64 = 1e-9;
/// Angular step used when arcs are approximated by polylines.
const FLATTEN_STEP_RAD: f64 = PI / 72.0;

/// One drawing command of a backend-agnostic vector path.
///
/// Angles are radians measured from the positive x axis. Because `y` grows
/// downward, increasing angles sweep clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Rounds the corner at `corner` toward `toward`: a straight run to the
    /// first tangent point followed by an arc of `radius` ending on the
    /// segment `corner -> toward`.
    ArcTo {
        corner: Point,
        toward: Point,
        radius: f64,
    },
    /// Circular arc; a line joins the current point to the arc start.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    },
    Close,
}

/// Geometry of an `ArcTo` once the current point is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCornerArc {
    pub center: Point,
    pub radius: f64,
    pub start: Point,
    pub end: Point,
    pub start_angle: f64,
    pub end_angle: f64,
    pub clockwise: bool,
}

/// Resolves a rounded corner. Returns `None` when the corner degenerates to a
/// plain line (zero radius, coincident or collinear points).
#[must_use]
pub fn resolve_corner_arc(
    current: Point,
    corner: Point,
    toward: Point,
    radius: f64,
) -> Option<ResolvedCornerArc> {
    if radius.is_nan() || radius <= GEOMETRY_EPSILON {
        return None;
    }
    let (ux, uy) = (current.x - corner.x, current.y - corner.y);
    let (vx, vy) = (toward.x - corner.x, toward.y - corner.y);
    let (len_u, len_v) = (ux.hypot(uy), vx.hypot(vy));
    if len_u < GEOMETRY_EPSILON || len_v < GEOMETRY_EPSILON {
        return None;
    }
    let (ux, uy, vx, vy) = (ux / len_u, uy / len_u, vx / len_v, vy / len_v);
    let theta = (ux * vx + uy * vy).clamp(-1.0, 1.0).acos();
    if theta < GEOMETRY_EPSILON || PI - theta < GEOMETRY_EPSILON {
        return None;
    }

    let tangent = radius / (theta / 2.0).tan();
    let start = Point::new(corner.x + ux * tangent, corner.y + uy * tangent);
    let end = Point::new(corner.x + vx * tangent, corner.y + vy * tangent);

    let (bx, by) = (ux + vx, uy + vy);
    let len_b = bx.hypot(by);
    let reach = radius / (theta / 2.0).sin();
    let center = Point::new(corner.x + bx / len_b * reach, corner.y + by / len_b * reach);

    let start_angle = (start.y - center.y).atan2(start.x - center.x);
    let end_angle = (end.y - center.y).atan2(end.x - center.x);
    let mut delta = end_angle - start_angle;
    if delta > PI {
        delta -= TAU;
    } else if delta <= -PI {
        delta += TAU;
    }

    Some(ResolvedCornerArc {
        center,
        radius,
        start,
        end,
        start_angle,
        end_angle,
        clockwise: delta > 0.0,
    })
}

/// Signed sweep from `start` to `end` honoring the direction flag.
#[must_use]
pub fn arc_sweep(start_angle: f64, end_angle: f64, clockwise: bool) -> f64 {
    let mut sweep = end_angle - start_angle;
    if clockwise {
        while sweep < 0.0 {
            sweep += TAU;
        }
    } else {
        while sweep > 0.0 {
            sweep -= TAU;
        }
    }
    sweep
}

#[must_use]
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Closed or open vector path built from [`PathCommand`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    pub fn line_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    pub fn arc_to(&mut self, corner: Point, toward: Point, radius: f64) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            corner,
            toward,
            radius,
        });
        self
    }

    pub fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> &mut Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Rectangle with independently rounded corners, clockwise from the
    /// top-left corner.
    #[must_use]
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        let radii = radii.clamped_to(rect.width().min(rect.height()) / 2.0);
        let (left, top, right, bottom) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
        let mut path = Self::new();
        path.move_to(Point::new(left + radii.top_left, top))
            .arc_to(Point::new(right, top), Point::new(right, bottom), radii.top_right)
            .arc_to(Point::new(right, bottom), Point::new(left, bottom), radii.bottom_right)
            .arc_to(Point::new(left, bottom), Point::new(left, top), radii.bottom_left)
            .arc_to(Point::new(left, top), Point::new(right, top), radii.top_left)
            .close();
        path
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !matches!(self.commands.first(), Some(PathCommand::MoveTo(_))) {
            return Err(ChartError::InvalidData(
                "path must start with a move".to_owned(),
            ));
        }
        for command in &self.commands {
            let finite = match *command {
                PathCommand::MoveTo(point) | PathCommand::LineTo(point) => point.is_finite(),
                PathCommand::ArcTo {
                    corner,
                    toward,
                    radius,
                } => corner.is_finite() && toward.is_finite() && radius.is_finite(),
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    ..
                } => {
                    center.is_finite()
                        && radius.is_finite()
                        && start_angle.is_finite()
                        && end_angle.is_finite()
                }
                PathCommand::Close => true,
            };
            if !finite {
                return Err(ChartError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Approximates the path by polylines, one per subpath.
    #[must_use]
    pub fn flatten(&self) -> Vec<Vec<Point>> {
        let mut subpaths = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut cursor = Point::default();
        let mut subpath_start = Point::default();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => {
                    if current.len() > 1 {
                        subpaths.push(std::mem::take(&mut current));
                    }
                    current = vec![point];
                    cursor = point;
                    subpath_start = point;
                }
                PathCommand::LineTo(point) => {
                    current.push(point);
                    cursor = point;
                }
                PathCommand::ArcTo {
                    corner,
                    toward,
                    radius,
                } => match resolve_corner_arc(cursor, corner, toward, radius) {
                    Some(arc) => {
                        current.push(arc.start);
                        let sweep = arc_sweep(arc.start_angle, arc.end_angle, arc.clockwise);
                        push_arc_samples(&mut current, arc.center, arc.radius, arc.start_angle, sweep);
                        cursor = arc.end;
                    }
                    None => {
                        current.push(corner);
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
                    current.push(point_on_circle(center, radius, start_angle));
                    let sweep = arc_sweep(start_angle, end_angle, clockwise);
                    push_arc_samples(&mut current, center, radius, start_angle, sweep);
                    cursor = point_on_circle(center, radius, end_angle);
                }
                PathCommand::Close => {
                    if current.len() > 1 {
                        subpaths.push(std::mem::take(&mut current));
                    }
                    cursor = subpath_start;
                }
            }
        }
        if current.len() > 1 {
            subpaths.push(current);
        }
        subpaths
    }

    /// Exact bounding box, including arc extremes. `None` for an empty path.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        let mut include = |point: Point| {
            bounds = Some(match bounds {
                Some(rect) => rect.union_point(point),
                None => Rect::new(point.x, point.y, 0.0, 0.0),
            });
        };
        let mut cursor = Point::default();
        let mut subpath_start = Point::default();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => {
                    include(point);
                    cursor = point;
                    subpath_start = point;
                }
                PathCommand::LineTo(point) => {
                    include(point);
                    cursor = point;
                }
                PathCommand::ArcTo {
                    corner,
                    toward,
                    radius,
                } => match resolve_corner_arc(cursor, corner, toward, radius) {
                    Some(arc) => {
                        let sweep = arc_sweep(arc.start_angle, arc.end_angle, arc.clockwise);
                        for point in arc_extremes(arc.center, arc.radius, arc.start_angle, sweep) {
                            include(point);
                        }
                        cursor = arc.end;
                    }
                    None => {
                        include(corner);
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
                    let sweep = arc_sweep(start_angle, end_angle, clockwise);
                    for point in arc_extremes(center, radius, start_angle, sweep) {
                        include(point);
                    }
                    cursor = point_on_circle(center, radius, end_angle);
                }
                PathCommand::Close => cursor = subpath_start,
            }
        }
        bounds
    }

    /// Even-odd containment test against the flattened outline.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let mut inside = false;
        for polygon in self.flatten() {
            if polygon_contains(&polygon, point) {
                inside = !inside;
            }
        }
        inside
    }
}

fn push_arc_samples(out: &mut Vec<Point>, center: Point, radius: f64, start: f64, sweep: f64) {
    let steps = ((sweep.abs() / FLATTEN_STEP_RAD).ceil() as usize).max(1);
    for step in 1..=steps {
        let angle = start + sweep * (step as f64 / steps as f64);
        out.push(point_on_circle(center, radius, angle));
    }
}

fn arc_extremes(center: Point, radius: f64, start: f64, sweep: f64) -> Vec<Point> {
    let mut points = vec![
        point_on_circle(center, radius, start),
        point_on_circle(center, radius, start + sweep),
    ];
    let (low, high) = if sweep >= 0.0 {
        (start, start + sweep)
    } else {
        (start + sweep, start)
    };
    let mut quadrant = (low / FRAC_PI_2).ceil() * FRAC_PI_2;
    while quadrant <= high {
        points.push(point_on_circle(center, radius, quadrant));
        quadrant += FRAC_PI_2;
    }
    points
}

/// Ray-casting containment for an implicitly closed polygon.
#[must_use]
pub fn polygon_contains(polygon: &[Point], point: Point) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut previous = polygon[polygon.len() - 1];
    for &vertex in polygon {
        if (vertex.y > point.y) != (previous.y > point.y) {
            let cross_x =
                (previous.x - vertex.x) * (point.y - vertex.y) / (previous.y - vertex.y) + vertex.x;
            if point.x < cross_x {
                inside = !inside;
            }
        }
        previous = vertex;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_angle_corner_resolves_to_quarter_circle() {
        let arc = resolve_corner_arc(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            2.0,
        )
        .expect("corner arc");
        assert!((arc.start.x - 8.0).abs() <= 1e-9);
        assert!((arc.end.y - 2.0).abs() <= 1e-9);
        assert!((arc.center.x - 8.0).abs() <= 1e-9 && (arc.center.y - 2.0).abs() <= 1e-9);
        assert!(arc.clockwise);
    }

    #[test]
    fn rounded_rect_bounds_match_rect() {
        let rect = Rect::new(4.0, 6.0, 40.0, 20.0);
        let path = Path::rounded_rect(rect, CornerRadii::uniform(4.0));
        let bounds = path.bounding_box().expect("bounds");
        assert!((bounds.min_x() - 4.0).abs() <= 1e-9);
        assert!((bounds.max_y() - 26.0).abs() <= 1e-9);
        assert!(path.contains(Point::new(24.0, 16.0)));
        assert!(!path.contains(Point::new(4.2, 6.2)));
    }
}
