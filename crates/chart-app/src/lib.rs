// File: crates/chart-app/src/lib.rs
// Summary: Sample -> chart -> base64 PNG pipeline over chart-core, with trend and box-plot modes.

pub mod observation;
pub mod sample;
pub mod grouping;
pub mod palette;
pub mod trend;
pub mod boxplot;

use anyhow::{Context, Result};
use chart_core::{chart_to_base64, Chart, RenderOptions};
use chrono::{DateTime, Utc};
use log::info;
use rand::Rng;

pub use boxplot::{build_box_plot, BoxPlotOptions};
pub use observation::Observation;
pub use sample::{generate_group, generate_groups, SAMPLE_COUNT};
pub use trend::{build_trend_chart, TrendOptions};

/// Groups generated by the default pipeline, in output order.
pub const GROUPS: [&str; 2] = ["A", "B"];
/// Group drawn first in box-plot mode.
pub const REFERENCE_GROUP: &str = "A";

/// Which chart the pipeline renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ChartMode {
    #[default]
    Trend,
    BoxPlot { reference: String },
}

impl ChartMode {
    pub fn box_plot() -> Self {
        Self::BoxPlot { reference: REFERENCE_GROUP.to_string() }
    }

    pub fn render_options(&self) -> RenderOptions {
        match self {
            Self::Trend => RenderOptions::default(),
            Self::BoxPlot { .. } => RenderOptions::compact(),
        }
    }

    pub fn build<R: Rng + ?Sized>(&self, observations: &[Observation], rng: &mut R) -> Chart {
        match self {
            Self::Trend => build_trend_chart(observations, rng, &TrendOptions::default()),
            Self::BoxPlot { reference } => build_box_plot(observations, reference, &BoxPlotOptions::default()),
        }
    }
}

/// `SAMPLE_COUNT` observations for each of `GROUPS`, concatenated.
pub fn sample_observations<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<Observation> {
    generate_groups(rng, &GROUPS, SAMPLE_COUNT, now)
}

/// Generate, chart and encode; returns the base64 PNG text.
pub fn run<R: Rng + ?Sized>(mode: &ChartMode, rng: &mut R, now: DateTime<Utc>) -> Result<String> {
    let data = sample_observations(rng, now);
    let chart = mode.build(&data, rng);
    info!("{:?}: {} observations -> {} series", mode, data.len(), chart.series().len());
    chart_to_base64(&chart, &mode.render_options()).context("failed to render chart as base64 PNG")
}
