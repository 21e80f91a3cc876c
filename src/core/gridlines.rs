/// Increments below this many pixels produce no gridlines.
pub const MIN_GRIDLINE_INCREMENT_PX: f64 = 1e-3;
/// Upper bound on gridlines emitted in one direction.
pub const MAX_GRIDLINES_PER_DIRECTION: usize = 4_096;

/// Horizontal gridline positions stepping away from the zero axis.
///
/// Lines above the axis are emitted while `y >= 0`, lines below while
/// `y <= bound`. The zero axis itself is not included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalGridlines {
    pub above: Vec<f64>,
    pub below: Vec<f64>,
}

impl HorizontalGridlines {
    #[must_use]
    pub fn len(&self) -> usize {
        self.above.len() + self.below.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.above.is_empty() && self.below.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.above.iter().chain(self.below.iter()).copied()
    }
}

#[must_use]
pub fn horizontal_gridlines(zero_axis_y: f64, increment: f64, bound: f64) -> HorizontalGridlines {
    if !increment.is_finite() || increment < MIN_GRIDLINE_INCREMENT_PX || !zero_axis_y.is_finite()
    {
        return HorizontalGridlines::default();
    }

    let above = (1..=MAX_GRIDLINES_PER_DIRECTION)
        .map(|step| zero_axis_y - increment * step as f64)
        .take_while(|y| *y >= 0.0)
        .collect();
    let below = (1..=MAX_GRIDLINES_PER_DIRECTION)
        .map(|step| zero_axis_y + increment * step as f64)
        .take_while(|y| *y <= bound)
        .collect();

    HorizontalGridlines { above, below }
}

/// Vertical gridline positions starting at `start_x` and repeating every
/// `spacing` while strictly left of `bound`.
#[must_use]
pub fn vertical_gridlines(start_x: f64, spacing: f64, bound: f64) -> Vec<f64> {
    if !spacing.is_finite() || spacing < MIN_GRIDLINE_INCREMENT_PX || !start_x.is_finite() {
        return Vec::new();
    }

    (0..MAX_GRIDLINES_PER_DIRECTION)
        .map(|step| start_x + spacing * step as f64)
        .take_while(|x| *x < bound)
        .collect()
}
