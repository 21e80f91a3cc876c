use serde::{Deserialize, Serialize};

use crate::core::path::{Path, point_on_circle};
use crate::core::types::{Point, Rect};
use crate::error::{ChartError, ChartResult};

/// Shape of a pie chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieType {
    #[default]
    Full,
    Half,
    Donut,
    HalfDonut,
}

impl PieType {
    #[must_use]
    pub fn is_half(self) -> bool {
        matches!(self, Self::Half | Self::HalfDonut)
    }

    #[must_use]
    pub fn has_hole(self) -> bool {
        matches!(self, Self::Donut | Self::HalfDonut)
    }

    /// Angle of the first slice's leading edge, in degrees.
    #[must_use]
    pub fn start_angle_deg(self) -> f64 {
        if self.is_half() { 180.0 } else { 270.0 }
    }

    /// Total angular sweep shared by all slices, in degrees.
    #[must_use]
    pub fn sweep_deg(self) -> f64 {
        if self.is_half() { 180.0 } else { 360.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub index: usize,
    pub value: f64,
    pub fraction: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub path: Path,
}

impl PieSlice {
    /// Center of the slice outline's bounding box.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.path.bounding_box().map(Rect::center)
    }
}

/// Resolved pie geometry for one draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub pie_type: PieType,
    pub center: Point,
    pub radius: f64,
    /// Zero for solid pies.
    pub inner_radius: f64,
    pub total: f64,
    pub slices: Vec<PieSlice>,
}

impl PieLayout {
    /// Index of the slice under `point`, if any.
    #[must_use]
    pub fn slice_at(&self, point: Point) -> Option<usize> {
        let distance = self.center.distance_to(point);
        if distance > self.radius || distance < self.inner_radius {
            return None;
        }
        let angle = (point.y - self.center.y)
            .atan2(point.x - self.center.x)
            .to_degrees();
        self.slices
            .iter()
            .filter(|slice| slice.end_angle_deg > slice.start_angle_deg)
            .find(|slice| {
                let offset = (angle - slice.start_angle_deg).rem_euclid(360.0);
                offset <= slice.end_angle_deg - slice.start_angle_deg
            })
            .map(|slice| slice.index)
    }
}

/// Lays out slices inside `plot`.
///
/// Full pies are centered in the plot; half pies sit on its bottom edge and
/// open upward. Slices follow each other clockwise, each spanning its share of
/// the total sweep. A zero total yields no slices.
pub fn pie_layout(values: &[f64], plot: Rect, pie_type: PieType) -> ChartResult<PieLayout> {
    if let Some(index) = values.iter().position(|v| !v.is_finite() || *v < 0.0) {
        return Err(ChartError::InvalidData(format!(
            "pie value at index {index} must be finite and >= 0"
        )));
    }

    let (width, height) = (plot.width(), plot.height());
    let (radius, center) = if pie_type.is_half() {
        (
            (width / 2.0).min(height),
            Point::new(plot.min_x() + width / 2.0, plot.max_y()),
        )
    } else {
        ((width / 2.0).min(height / 2.0), plot.center())
    };
    let inner_radius = if pie_type.has_hole() { radius / 2.0 } else { 0.0 };

    let total: f64 = values.iter().sum();
    let mut slices = Vec::with_capacity(values.len());
    if total > 0.0 {
        let mut start = pie_type.start_angle_deg();
        for (index, value) in values.iter().copied().enumerate() {
            let fraction = value / total;
            let end = start + pie_type.sweep_deg() * fraction;
            slices.push(PieSlice {
                index,
                value,
                fraction,
                start_angle_deg: start,
                end_angle_deg: end,
                path: slice_path(center, radius, inner_radius, start, end),
            });
            start = end;
        }
    }

    Ok(PieLayout {
        pie_type,
        center,
        radius,
        inner_radius,
        total,
        slices,
    })
}

/// Closed wedge between two angles; a positive `inner_radius` cuts a ring.
#[must_use]
pub fn slice_path(
    center: Point,
    radius: f64,
    inner_radius: f64,
    start_angle_deg: f64,
    end_angle_deg: f64,
) -> Path {
    let (start, end) = (start_angle_deg.to_radians(), end_angle_deg.to_radians());
    let mut path = Path::new();
    if inner_radius > 0.0 {
        path.move_to(point_on_circle(center, radius, start))
            .arc(center, radius, start, end, true)
            .arc(center, inner_radius, end, start, false)
            .close();
    } else {
        path.move_to(center)
            .arc(center, radius, start, end, true)
            .close();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_lays_out_no_slices() {
        let layout = pie_layout(&[0.0, 0.0], Rect::new(0.0, 0.0, 100.0, 100.0), PieType::Full)
            .expect("layout");
        assert!(layout.slices.is_empty());
        assert_eq!(layout.slice_at(Point::new(50.0, 40.0)), None);
    }
}
