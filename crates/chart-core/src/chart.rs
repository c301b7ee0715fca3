// File: crates/chart-core/src/chart.rs
// Summary: Immutable Chart value and headless rendering pipeline (Skia CPU raster surface -> RGBA -> PNG).

use log::debug;
use skia_safe as skia;

use crate::axis::Axis;
use crate::error::ChartError;
use crate::geometry::{Projection, RectI32};
use crate::grid::linspace;
use crate::series::{Series, SeriesType, BOX_WIDTH};
use crate::text::font;
use crate::theme::Theme;
use crate::types::{Insets, COMPACT_HEIGHT, COMPACT_WIDTH, HEIGHT, WIDTH};
use crate::view::ViewState;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (tick values, axis titles, legend labels). Off gives font-independent pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Small thumbnail surface with thin margins.
    pub fn compact() -> Self {
        Self {
            width: COMPACT_WIDTH,
            height: COMPACT_HEIGHT,
            insets: Insets::compact(),
            ..Self::default()
        }
    }
}

/// Decorations drawn around the series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartStyle {
    pub x_label: String,
    pub y_label: String,
    pub show_frame: bool,
    pub show_ticks: bool,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            show_frame: true,
            show_ticks: true,
            show_grid: true,
            show_legend: true,
        }
    }
}

impl ChartStyle {
    pub fn with_labels(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self { x_label: x_label.into(), y_label: y_label.into(), ..Self::default() }
    }

    /// Hide frame, ticks and grid, leaving only the data.
    pub fn frameless(mut self) -> Self {
        self.show_frame = false;
        self.show_ticks = false;
        self.show_grid = false;
        self
    }

    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }
}

/// A finished chart: series, autoscaled axes and style. Built once, never mutated.
#[derive(Clone, Debug)]
pub struct Chart {
    series: Vec<Series>,
    x_axis: Axis,
    y_axis: Axis,
    style: ChartStyle,
}

impl Chart {
    pub fn new(series: Vec<Series>, style: ChartStyle) -> Self {
        let view = ViewState::from_series(&series);
        Self {
            x_axis: view.x_axis(style.x_label.clone()),
            y_axis: view.y_axis(style.y_label.clone()),
            series,
            style,
        }
    }

    /// A chart with no series, drawn as an empty frame.
    pub fn empty(style: ChartStyle) -> Self {
        Self::new(Vec::new(), style)
    }

    pub fn series(&self) -> &[Series] { &self.series }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn style(&self) -> &ChartStyle { &self.style }
    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    pub fn series_of(&self, kind: SeriesType) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |s| s.series_type == kind)
    }

    /// Render into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), ChartError> {
        let surface_err = || ChartError::Surface { width: opts.width, height: opts.height };
        if opts.width <= 0 || opts.height <= 0 {
            return Err(surface_err());
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(surface_err)?;

        self.draw(surface.canvas(), opts);

        let (w, h) = (opts.width as u32, opts.height as u32);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        debug!("rasterized {}x{} chart with {} series", w, h, self.series.len());
        Ok((pixels, w, h, stride))
    }

    /// Render and encode as PNG, fully in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let bytes = encode_png(pixels, w, h)?;
        debug!("encoded PNG ({} bytes)", bytes.len());
        Ok(bytes)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let rect = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let proj = Projection::new(rect, &self.x_axis, &self.y_axis);

        if self.style.show_grid {
            draw_grid(canvas, rect, theme);
        }

        canvas.save();
        canvas.clip_rect(to_rect(rect), skia::ClipOp::Intersect, true);
        for s in &self.series {
            match s.series_type {
                SeriesType::Scatter | SeriesType::Line => draw_xy_series(canvas, &proj, s),
                SeriesType::Box => draw_box_series(canvas, &proj, s),
            }
        }
        canvas.restore();

        if self.style.show_frame {
            draw_frame(canvas, rect, theme);
        }
        if self.style.show_ticks {
            draw_ticks(canvas, rect, &proj, &self.x_axis, &self.y_axis, opts);
        }
        if self.style.show_legend {
            draw_legend(canvas, rect, &self.series, opts);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// PNG-encode a tightly packed RGBA8 buffer of `w` x `h` pixels.
fn encode_png(pixels: Vec<u8>, w: u32, h: u32) -> Result<Vec<u8>, ChartError> {
    let expected = w as usize * h as usize * 4;
    let got = pixels.len();
    let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(ChartError::BufferSize { expected, got })?;
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

const TICKS: usize = 5;
const TICK_LEN: f32 = 5.0;

fn to_rect(r: RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, r: RectI32, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    for x in linspace(r.left as f64, r.right as f64, 10) {
        canvas.draw_line((x as f32, r.top as f32), (x as f32, r.bottom as f32), &paint);
    }
    for y in linspace(r.top as f64, r.bottom as f64, 6) {
        canvas.draw_line((r.left as f32, y as f32), (r.right as f32, y as f32), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, r: RectI32, theme: &Theme) {
    canvas.draw_rect(to_rect(r), &stroke_paint(theme.frame, 1.0));
}

/// Decimal places so that `TICKS` labels across `span` stay distinguishable.
fn tick_decimals(span: f64) -> usize {
    if !span.is_finite() || span <= 0.0 {
        return 2;
    }
    (2.0 - span.log10().floor()).clamp(0.0, 8.0) as usize
}

fn draw_ticks(
    canvas: &skia::Canvas,
    r: RectI32,
    proj: &Projection,
    x_axis: &Axis,
    y_axis: &Axis,
    opts: &RenderOptions,
) {
    let theme = &opts.theme;
    let tick = stroke_paint(theme.tick, 1.0);
    let text = fill_paint(theme.axis_label);
    let small = font(11.0);
    let (l, t, b) = (r.left as f32, r.top as f32, r.bottom as f32);

    let xd = tick_decimals(x_axis.span());
    for v in linspace(x_axis.min, x_axis.max, TICKS) {
        let px = proj.x(v);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &tick);
        if opts.draw_labels {
            let s = format!("{:.*}", xd, v);
            let w = small.measure_str(&s, Some(&text)).0;
            canvas.draw_str(&s, (px - w * 0.5, b + TICK_LEN + 13.0), &small, &text);
        }
    }

    let yd = tick_decimals(y_axis.span());
    for v in linspace(y_axis.min, y_axis.max, TICKS) {
        let py = proj.y(v);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &tick);
        if opts.draw_labels {
            let s = format!("{:.*}", yd, v);
            let w = small.measure_str(&s, Some(&text)).0;
            canvas.draw_str(&s, (l - TICK_LEN - 3.0 - w, py + 4.0), &small, &text);
        }
    }

    if opts.draw_labels {
        let title = font(14.0);
        let w = title.measure_str(&x_axis.label, Some(&text)).0;
        let mid = (r.left + r.right) as f32 * 0.5;
        canvas.draw_str(&x_axis.label, (mid - w * 0.5, opts.height as f32 - 10.0), &title, &text);
        canvas.draw_str(&y_axis.label, (4.0, (t - 8.0).max(14.0)), &title, &text);
    }
}

fn draw_xy_series(canvas: &skia::Canvas, proj: &Projection, series: &Series) {
    let pts: Vec<skia::Point> = series
        .data_xy
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| skia::Point::new(proj.x(x), proj.y(y)))
        .collect();
    if pts.is_empty() {
        return;
    }

    if series.line_width > 0.0 && pts.len() >= 2 {
        let stroke = stroke_paint(series.color, series.line_width);
        canvas.draw_points(skia::canvas::PointMode::Polygon, &pts, &stroke);
    }
    if series.marker_size > 0.0 {
        let fill = fill_paint(series.color);
        let radius = series.marker_size * 0.5;
        for p in &pts {
            canvas.draw_circle(*p, radius, &fill);
        }
    }
}

fn draw_box_series(canvas: &skia::Canvas, proj: &Projection, series: &Series) {
    let Some(stats) = series.data_box.as_ref() else { return };

    let cx = proj.x(series.position);
    let half = proj.dx(BOX_WIDTH) * 0.5;
    let cap = half * 0.5;
    let (y_q1, y_q3, y_med) = (proj.y(stats.q1), proj.y(stats.q3), proj.y(stats.median));

    let body = skia::Rect::from_ltrb(cx - half, y_q3, cx + half, y_q1.max(y_q3 + 1.0));
    let outline = stroke_paint(series.color, series.line_width.max(1.0));
    canvas.draw_rect(body, &fill_paint(series.color.with_a(96)));
    canvas.draw_rect(body, &outline);

    let median = stroke_paint(series.color, series.line_width.max(1.0) * 2.0);
    canvas.draw_line((cx - half, y_med), (cx + half, y_med), &median);

    let y_hi = proj.y(stats.whisker_high);
    let y_lo = proj.y(stats.whisker_low);
    canvas.draw_line((cx, y_q3), (cx, y_hi), &outline);
    canvas.draw_line((cx - cap, y_hi), (cx + cap, y_hi), &outline);
    canvas.draw_line((cx, y_q1), (cx, y_lo), &outline);
    canvas.draw_line((cx - cap, y_lo), (cx + cap, y_lo), &outline);

    let radius = (series.marker_size * 0.5).max(1.0);
    for &v in &stats.outliers {
        canvas.draw_circle((cx, proj.y(v)), radius, &outline);
    }
}

fn draw_legend(canvas: &skia::Canvas, r: RectI32, series: &[Series], opts: &RenderOptions) {
    let entries: Vec<(&str, skia::Color)> = series
        .iter()
        .filter_map(|s| s.label.as_deref().map(|l| (l, s.color)))
        .collect();
    if entries.is_empty() {
        return;
    }

    const ROW: f32 = 18.0;
    const SWATCH: f32 = 20.0;
    const PAD: f32 = 6.0;

    let theme = &opts.theme;
    let label_font = font(12.0);
    let text = fill_paint(theme.legend_text);
    let text_w = if opts.draw_labels {
        entries
            .iter()
            .map(|(l, _)| label_font.measure_str(l, Some(&text)).0)
            .fold(0.0f32, f32::max)
    } else {
        0.0
    };

    let w = PAD * 3.0 + SWATCH + text_w;
    let h = PAD * 2.0 + ROW * entries.len() as f32;
    let right = r.right as f32 - 8.0;
    let top = r.top as f32 + 8.0;
    let frame = skia::Rect::from_ltrb(right - w, top, right, top + h);
    canvas.draw_rect(frame, &fill_paint(theme.legend_background));
    canvas.draw_rect(frame, &stroke_paint(theme.frame, 1.0));

    let x0 = frame.left + PAD;
    for (i, (label, color)) in entries.iter().enumerate() {
        let y = top + PAD + ROW * (i as f32 + 0.5);
        canvas.draw_line((x0, y), (x0 + SWATCH, y), &stroke_paint(*color, 2.0));
        canvas.draw_circle((x0 + SWATCH * 0.5, y), 3.0, &fill_paint(*color));
        if opts.draw_labels {
            canvas.draw_str(label, (x0 + SWATCH + PAD, y + 4.0), &label_font, &text);
        }
    }
}
