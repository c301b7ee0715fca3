// File: crates/chart-core/src/view.rs
// Visible data ranges derived from series content (autoscale).

use crate::axis::Axis;
use crate::series::Series;

/// Fraction of the data span added on each side so edge markers stay inside the frame.
const MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 }
    }
}

impl ViewState {
    /// Union of all series bounds plus margins; unit ranges when there is nothing to show.
    pub fn from_series(series: &[Series]) -> Self {
        let bounds = series.iter().filter_map(Series::bounds).reduce(|a, b| {
            (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3))
        });
        let Some((mut x_min, mut x_max, mut y_min, mut y_max)) = bounds else {
            return Self::default();
        };
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        let xm = (x_max - x_min) * MARGIN;
        let ym = (y_max - y_min) * MARGIN;
        Self { x_min: x_min - xm, x_max: x_max + xm, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn x_axis(&self, label: impl Into<String>) -> Axis {
        Axis::new(label, self.x_min, self.x_max)
    }

    pub fn y_axis(&self, label: impl Into<String>) -> Axis {
        Axis::new(label, self.y_min, self.y_max)
    }
}
