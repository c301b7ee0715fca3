// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate axis autoscale over mixed series types.

use chart_core::{BoxStats, Chart, ChartStyle, Color, Series, SeriesType};

#[test]
fn autoscale_mixed_series() {
    let stats = BoxStats::from_values(&[-1.0, 2.0, 2.5, 3.0, 6.0]).unwrap();
    let chart = Chart::new(
        vec![
            Series::scatter(vec![(0.0, 1.0), (5.0, 3.0)], Color::BLACK),
            Series::boxplot(2.0, stats, Color::BLACK),
        ],
        ChartStyle::with_labels("Time", "Value"),
    );

    assert!(chart.x_axis().min <= 0.0);
    assert!(chart.x_axis().max >= 5.0);
    // Box whiskers/outliers widen the value range beyond the scatter points.
    assert!(chart.y_axis().min <= -1.0);
    assert!(chart.y_axis().max >= 6.0);

    assert_eq!(chart.x_axis().label, "Time");
    assert_eq!(chart.series_of(SeriesType::Box).count(), 1);
    assert_eq!(chart.series_of(SeriesType::Scatter).count(), 1);
}

#[test]
fn empty_chart_gets_unit_ranges() {
    let chart = Chart::empty(ChartStyle::default());
    assert_eq!((chart.x_axis().min, chart.x_axis().max), (0.0, 1.0));
    assert_eq!((chart.y_axis().min, chart.y_axis().max), (0.0, 1.0));
}

#[test]
fn single_point_gets_nonzero_span() {
    let chart = Chart::new(vec![Series::scatter(vec![(3.0, 3.0)], Color::BLACK)], ChartStyle::default());
    assert!(chart.x_axis().span() > 0.0);
    assert!(chart.y_axis().contains(3.0));
}
