// File: crates/chart-core/src/text.rs
// Summary: Font lookup through the platform font manager for tick, axis and legend text.

use skia_safe as skia;

/// System default typeface, or `None` on hosts without any installed fonts.
pub fn default_typeface() -> Option<skia::Typeface> {
    skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::default())
}

/// Font of `size` px backed by the default typeface.
/// Without a typeface Skia draws no glyphs, so text silently disappears.
pub fn font(size: f32) -> skia::Font {
    match default_typeface() {
        Some(typeface) => skia::Font::from_typeface(typeface, size),
        None => {
            log::warn!("no system typeface available; chart text will be blank");
            let mut font = skia::Font::default();
            font.set_size(size);
            font
        }
    }
}
