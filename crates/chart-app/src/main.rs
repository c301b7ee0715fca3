// File: crates/chart-app/src/main.rs
// Summary: Renders the two-group trend chart and prints it as one line of base64 PNG.

use anyhow::Result;
use chart_app::ChartMode;
use chrono::Utc;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the image.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut rng = rand::thread_rng();
    let encoded = chart_app::run(&ChartMode::Trend, &mut rng, Utc::now())?;
    println!("{encoded}");
    Ok(())
}
