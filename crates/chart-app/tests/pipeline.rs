// File: crates/chart-app/tests/pipeline.rs
// Purpose: End-to-end scenarios over generated data: series layout, edge cases, base64 output.

use chart_app::{build_trend_chart, ChartMode, Observation, TrendOptions};
use chart_core::{decode_base64, RenderOptions, SeriesType};
use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 5, 9, 0, 0).unwrap()
}

#[test]
fn two_groups_give_two_raw_and_two_trend_series() {
    let mut rng = StdRng::seed_from_u64(42);
    let data = chart_app::sample_observations(&mut rng, now());
    assert_eq!(data.len(), 60);

    let chart = build_trend_chart(&data, &mut rng, &TrendOptions::default());
    let raw: Vec<_> = chart.series_of(SeriesType::Scatter).collect();
    let lines: Vec<_> = chart.series_of(SeriesType::Line).collect();
    assert_eq!(raw.len(), 2);
    assert_eq!(lines.len(), 2);
    assert!(raw.iter().all(|s| s.data_xy.len() == 30 && s.label.is_none()));
    assert!(lines.iter().all(|s| s.data_xy.len() == 30 * 20));

    let mut labels: Vec<_> = lines.iter().map(|s| s.label.clone().unwrap()).collect();
    labels.sort();
    assert_eq!(labels, vec!["A", "B"]);
    assert_eq!(chart.x_axis().label, "Time");
}

#[test]
fn group_without_values_is_omitted() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut data = chart_app::generate_group(&mut rng, "A", 30, now());
    data.extend(chart_app::generate_group(&mut rng, "B", 30, now()).into_iter().map(|o| Observation { value: None, ..o }));

    let chart = build_trend_chart(&data, &mut rng, &TrendOptions::default());
    assert_eq!(chart.series().len(), 2);
    assert!(chart.series().iter().all(|s| s.label.as_deref() != Some("B")));
}

#[test]
fn empty_input_still_encodes_a_blank_png() {
    let mut rng = StdRng::seed_from_u64(1);
    let chart = build_trend_chart(&[], &mut rng, &TrendOptions::default());
    assert!(chart.is_empty());

    let text = chart_core::chart_to_base64(&chart, &RenderOptions::default()).expect("encode");
    let png = decode_base64(&text).expect("decode");
    let img = image::load_from_memory(&png).expect("valid png");
    assert_eq!((img.width(), img.height()), (800, 600));
}

#[test]
fn run_emits_single_line_base64_png() {
    let mut rng = StdRng::seed_from_u64(7);
    let text = chart_app::run(&ChartMode::Trend, &mut rng, now()).expect("run");
    assert!(!text.contains('\n'));
    assert!(text.len() % 4 == 0, "padded base64");
    let png = decode_base64(&text).expect("decode");
    assert!(png.starts_with(&[137, 80, 78, 71]));
    assert_eq!(chart_core::encode_base64(&png), text);
}

#[test]
fn box_plot_mode_renders_compact_image() {
    let mut rng = StdRng::seed_from_u64(7);
    let text = chart_app::run(&ChartMode::box_plot(), &mut rng, now()).expect("run box plot");
    let png = decode_base64(&text).expect("decode");
    let img = image::load_from_memory(&png).expect("valid png");
    assert_eq!((img.width(), img.height()), (200, 100));
}

#[test]
fn box_plot_mode_puts_reference_first() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut data = chart_app::generate_group(&mut rng, "B", 30, now());
    data.extend(chart_app::generate_group(&mut rng, "A", 30, now()));
    let chart = ChartMode::box_plot().build(&data, &mut rng);
    let labels: Vec<_> = chart.series().iter().map(|s| s.label.clone().unwrap()).collect();
    assert_eq!(labels, vec!["A", "B"]);
}
