// File: crates/chart-core/src/error.rs
// Summary: Error types for rendering/encoding and for spline fitting.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back pixels from raster surface")]
    ReadPixels,
    #[error("pixel buffer holds {got} bytes, image needs {expected}")]
    BufferSize { expected: usize, got: usize },
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplineError {
    #[error("natural spline needs at least {min} points, got {got}")]
    TooFewPoints { min: usize, got: usize },
    #[error("x values must be strictly increasing (violated at index {index})")]
    NonIncreasingX { index: usize },
    #[error("x and y lengths differ ({xs} vs {ys})")]
    LengthMismatch { xs: usize, ys: usize },
    #[error("interpolation resolution must be at least 1")]
    ZeroResolution,
}
