// File: crates/chart-app/src/palette.rs
// Summary: Series colors: random distinct colors for trend groups, a fixed palette for boxes.

use chart_core::Color;
use rand::Rng;

/// Channel ceiling for random colors so markers stay visible on a white background.
const CHANNEL_MAX: u8 = 200;

const CATEGORY: [(u8, u8, u8); 10] = [
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
    (188, 189, 34),
    (23, 190, 207),
];

pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_rgb(
        rng.gen_range(0..=CHANNEL_MAX),
        rng.gen_range(0..=CHANNEL_MAX),
        rng.gen_range(0..=CHANNEL_MAX),
    )
}

/// `n` random colors, redrawing any that repeat an earlier one.
pub fn distinct_colors<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Color> {
    let mut out: Vec<Color> = Vec::with_capacity(n);
    while out.len() < n {
        let c = random_color(rng);
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

/// Deterministic color for the `i`-th category, cycling after ten.
pub fn category_color(i: usize) -> Color {
    let (r, g, b) = CATEGORY[i % CATEGORY.len()];
    Color::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn colors_are_distinct() {
        let mut rng = StdRng::seed_from_u64(1);
        let colors = distinct_colors(&mut rng, 50);
        assert_eq!(colors.len(), 50);
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| b != a));
            assert!(a.r() <= CHANNEL_MAX && a.g() <= CHANNEL_MAX && a.b() <= CHANNEL_MAX);
        }
    }

    #[test]
    fn category_cycles() {
        assert_eq!(category_color(0), category_color(10));
        assert_ne!(category_color(0), category_color(1));
    }
}
