// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart model, numeric helpers and the PNG/base64 pipeline.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod view;
pub mod theme;
pub mod text;
pub mod stats;
pub mod spline;
pub mod encode;
pub mod error;

pub use skia_safe::Color;

pub use chart::{Chart, ChartStyle, RenderOptions};
pub use series::{Series, SeriesType};
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use stats::BoxStats;
pub use spline::{natural_spline, NaturalSpline};
pub use encode::{chart_to_base64, decode_base64, encode_base64};
pub use error::{ChartError, SplineError};
