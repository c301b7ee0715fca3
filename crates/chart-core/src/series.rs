// File: crates/chart-core/src/series.rs
// Summary: Series model for scatter markers, connected lines, and box-and-whisker summaries.

use skia_safe::Color;

use crate::stats::BoxStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Scatter, // unconnected markers
    Line,    // polyline through data_xy
    Box,     // one box-and-whisker glyph at `position`
}

/// Horizontal extent of a box glyph, in data units, centred on its position.
pub const BOX_WIDTH: f64 = 0.6;

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub label: Option<String>,
    pub color: Color,
    pub data_xy: Vec<(f64, f64)>, // used by Scatter/Line
    pub data_box: Option<BoxStats>, // used by Box
    pub position: f64,            // x of a Box glyph
    pub marker_size: f32,         // diameter in px, 0 disables markers
    pub line_width: f32,          // stroke in px, 0 disables connecting lines
}

impl Series {
    /// Raw points as 10 px markers without connecting lines.
    pub fn scatter(data: Vec<(f64, f64)>, color: Color) -> Self {
        Self {
            series_type: SeriesType::Scatter,
            label: None,
            color,
            data_xy: data,
            data_box: None,
            position: 0.0,
            marker_size: 10.0,
            line_width: 0.0,
        }
    }

    /// Thin 1 px polyline with small 3 px markers on every sample.
    pub fn line(data: Vec<(f64, f64)>, color: Color) -> Self {
        Self {
            series_type: SeriesType::Line,
            marker_size: 3.0,
            line_width: 1.0,
            ..Self::scatter(data, color)
        }
    }

    pub fn boxplot(position: f64, stats: BoxStats, color: Color) -> Self {
        Self {
            series_type: SeriesType::Box,
            label: None,
            color,
            data_xy: Vec::new(),
            data_box: Some(stats),
            position,
            marker_size: 4.0,
            line_width: 1.0,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_marker_size(mut self, px: f32) -> Self {
        self.marker_size = px.max(0.0);
        self
    }

    /// Data-space bounds `(x_min, x_max, y_min, y_max)`; `None` for an empty series.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        match self.series_type {
            SeriesType::Scatter | SeriesType::Line => {
                let mut it = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
                let &(x0, y0) = it.next()?;
                Some(it.fold((x0, x0, y0, y0), |(xl, xh, yl, yh), &(x, y)| {
                    (xl.min(x), xh.max(x), yl.min(y), yh.max(y))
                }))
            }
            SeriesType::Box => {
                let s = self.data_box.as_ref()?;
                let half = BOX_WIDTH * 0.5;
                Some((self.position - half, self.position + half, s.min, s.max))
            }
        }
    }
}
