// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub frame: skia::Color,
    pub grid: skia::Color,
    pub tick: skia::Color,
    pub axis_label: skia::Color,
    pub legend_background: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 60, 60, 70),
            grid: skia::Color::from_argb(255, 235, 235, 240),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
            legend_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            legend_background: skia::Color::from_argb(220, 30, 30, 34),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
