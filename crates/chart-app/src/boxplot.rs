// File: crates/chart-app/src/boxplot.rs
// Summary: Box-plot chart: one box-and-whisker glyph per group, reference group first.

use chart_core::{BoxStats, Chart, ChartStyle, Series};
use log::{debug, warn};

use crate::grouping::{group_by_name, reference_first};
use crate::observation::Observation;
use crate::palette::category_color;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxPlotOptions {
    pub group_label: String,
    pub value_label: String,
    pub show_legend: bool,
}

impl Default for BoxPlotOptions {
    fn default() -> Self {
        Self {
            group_label: "Group".to_string(),
            value_label: "Value".to_string(),
            show_legend: false,
        }
    }
}

/// Build a frameless, tickless box plot. Boxes sit at x = 1, 2, 3, ... with
/// `reference` first; groups with no present values are left out. Only the value
/// matters here, so observations without a time still count.
pub fn build_box_plot(observations: &[Observation], reference: &str, opts: &BoxPlotOptions) -> Chart {
    let groups = reference_first(group_by_name(observations), reference);

    let mut series = Vec::with_capacity(groups.len());
    for (name, members) in &groups {
        let values: Vec<f64> = members.iter().filter_map(|o| o.value).collect();
        let Some(stats) = BoxStats::from_values(&values) else {
            warn!("group {}: no values, box omitted", name);
            continue;
        };
        debug!(
            "group {}: median {:.4}, q1 {:.4}, q3 {:.4}, {} outliers",
            name, stats.median, stats.q1, stats.q3, stats.outliers.len()
        );
        let i = series.len();
        series.push(Series::boxplot((i + 1) as f64, stats, category_color(i)).with_label(*name));
    }

    let style = ChartStyle::with_labels(opts.group_label.as_str(), opts.value_label.as_str())
        .frameless()
        .with_legend(opts.show_legend);
    Chart::new(series, style)
}
