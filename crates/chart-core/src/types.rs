// File: crates/chart-core/src/types.rs
// Summary: Shared constants (raster sizes) and plot-area margins.

/// Default surface width in pixels for full-size charts.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels for full-size charts.
pub const HEIGHT: i32 = 600;

/// Surface width for compact charts (box plot thumbnails).
pub const COMPACT_WIDTH: i32 = 200;
/// Surface height for compact charts.
pub const COMPACT_HEIGHT: i32 = 100;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Thin uniform margins for charts drawn without ticks or labels.
    pub const fn compact() -> Self {
        Self::new(6, 6, 6, 6)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}
