// File: crates/chart-app/src/trend.rs
// Summary: Trend chart: raw points plus a natural-spline curve per group, one color per group.

use chart_core::{natural_spline, Chart, ChartStyle, Series};
use log::{debug, warn};
use rand::Rng;

use crate::grouping::{group_by_name, sorted_by_time};
use crate::observation::{to_oa_date, Observation};
use crate::palette::distinct_colors;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendOptions {
    /// Curve samples per input point.
    pub resolution: usize,
    pub time_label: String,
    pub value_label: String,
}

impl Default for TrendOptions {
    fn default() -> Self {
        Self {
            resolution: 20,
            time_label: "Time".to_string(),
            value_label: "Value".to_string(),
        }
    }
}

/// Build the trend chart for `observations`.
///
/// Per group (first-seen order after sorting by time) this emits an unlabelled
/// scatter series of the raw points followed by the interpolated curve labelled
/// with the group name. A group whose points cannot carry a spline (fewer than
/// three, or repeated timestamps) gets only its raw points, labelled instead.
/// Observations missing a value or a time are dropped first, so a group with
/// nothing plottable does not appear at all.
pub fn build_trend_chart<R: Rng + ?Sized>(
    observations: &[Observation],
    rng: &mut R,
    opts: &TrendOptions,
) -> Chart {
    let groups = group_by_name(sorted_by_time(observations));
    let colors = distinct_colors(rng, groups.len());

    let mut series = Vec::with_capacity(groups.len() * 2);
    for ((name, members), color) in groups.iter().zip(colors) {
        let points: Vec<(f64, f64)> = members
            .iter()
            .filter_map(|o| o.point())
            .map(|(t, v)| (to_oa_date(t), v))
            .collect();

        match natural_spline(&points, opts.resolution) {
            Ok(curve) => {
                debug!("group {}: {} points, {} curve samples", name, points.len(), curve.len());
                series.push(Series::scatter(points, color));
                series.push(Series::line(curve, color).with_label(*name));
            }
            Err(e) => {
                warn!("group {}: drawing raw points only ({})", name, e);
                series.push(Series::scatter(points, color).with_label(*name));
            }
        }
    }

    Chart::new(series, ChartStyle::with_labels(opts.time_label.as_str(), opts.value_label.as_str()))
}
