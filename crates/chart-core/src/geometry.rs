// File: crates/chart-core/src/geometry.rs
// Summary: Pixel-space plot rectangle and the data-to-pixel mapping used by the rasterizer.

use crate::axis::Axis;
use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot area of a `width` x `height` surface after removing `insets`.
    /// Oversized insets collapse the area to zero width/height instead of inverting it.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = clamp(insets.left as i32, 0, width.max(0));
        let top = clamp(insets.top as i32, 0, height.max(0));
        let right = clamp(width - insets.right as i32, left, width.max(left));
        let bottom = clamp(height - insets.bottom as i32, top, height.max(top));
        Self { left, top, right, bottom }
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

/// Maps data coordinates into a pixel rectangle (Y grows downwards on screen).
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    rect: RectI32,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl Projection {
    pub fn new(rect: RectI32, x: &Axis, y: &Axis) -> Self {
        Self {
            rect,
            x_min: x.min,
            x_span: x.span().max(1e-12),
            y_min: y.min,
            y_span: y.span().max(1e-12),
        }
    }

    #[inline]
    pub fn x(&self, x: f64) -> f32 {
        self.rect.left as f32 + ((x - self.x_min) / self.x_span) as f32 * self.rect.width() as f32
    }

    #[inline]
    pub fn y(&self, y: f64) -> f32 {
        self.rect.bottom as f32 - ((y - self.y_min) / self.y_span) as f32 * self.rect.height() as f32
    }

    /// Pixel length of a horizontal data-space distance.
    #[inline]
    pub fn dx(&self, dx: f64) -> f32 {
        (dx / self.x_span) as f32 * self.rect.width() as f32
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
