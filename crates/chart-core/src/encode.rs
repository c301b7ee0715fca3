// File: crates/chart-core/src/encode.rs
// Summary: PNG <-> base64 text (standard alphabet, padded, single line).

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::chart::{Chart, RenderOptions};
use crate::error::ChartError;

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode_base64(text: &str) -> Result<Vec<u8>, ChartError> {
    Ok(STANDARD.decode(text.trim())?)
}

/// Rasterize `chart` to PNG and return the bytes as base64 text.
pub fn chart_to_base64(chart: &Chart, opts: &RenderOptions) -> Result<String, ChartError> {
    let png = chart.render_to_png_bytes(opts)?;
    Ok(encode_base64(&png))
}
