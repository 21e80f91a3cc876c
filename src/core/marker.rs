use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::path::{Path, point_on_circle};
use crate::core::types::{Point, Rect};

/// Round point marker. `diameter` is the configured marker size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    pub center: Point,
    pub diameter: f64,
}

impl CircleMarker {
    #[must_use]
    pub fn new(center: Point, diameter: f64) -> Self {
        Self {
            center,
            diameter: diameter.max(0.0),
        }
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        self.diameter / 2.0
    }

    #[must_use]
    pub fn bounds(self) -> Rect {
        let r = self.radius();
        Rect::new(self.center.x - r, self.center.y - r, self.diameter, self.diameter)
    }

    #[must_use]
    pub fn path(self) -> Path {
        let r = self.radius();
        let mut path = Path::new();
        path.move_to(point_on_circle(self.center, r, 0.0))
            .arc(self.center, r, 0.0, TAU, true)
            .close();
        path
    }
}
