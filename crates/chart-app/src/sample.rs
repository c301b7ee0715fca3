// File: crates/chart-app/src/sample.rs
// Summary: Synthetic observation batches with uniform values and value-derived timestamps.

use std::ops::Range;

use chrono::{DateTime, Utc};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::observation::{days_before, Observation};

/// Observations per generated group.
pub const SAMPLE_COUNT: usize = 30;
/// Range sampled for each value.
pub const VALUE_RANGE: Range<f64> = 0.0..1.0;

/// `count` observations for `group`; each sits `value` days before `now`.
pub fn generate_group<R: Rng + ?Sized>(
    rng: &mut R,
    group: &str,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<Observation> {
    let dist = Uniform::from(VALUE_RANGE);
    (0..count)
        .map(|_| {
            let value = dist.sample(rng);
            Observation::new(group, value, days_before(now, value))
        })
        .collect()
}

/// One batch per name, concatenated in the order given.
pub fn generate_groups<R: Rng + ?Sized>(
    rng: &mut R,
    groups: &[&str],
    count: usize,
    now: DateTime<Utc>,
) -> Vec<Observation> {
    groups.iter().flat_map(|g| generate_group(rng, g, count, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::MICROS_PER_DAY;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()
    }

    #[test]
    fn exact_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_group(&mut rng, "A", SAMPLE_COUNT, now()).len(), 30);
        assert!(generate_group(&mut rng, "A", 0, now()).is_empty());
    }

    #[test]
    fn time_is_value_days_before_now() {
        let mut rng = StdRng::seed_from_u64(11);
        for o in generate_group(&mut rng, "B", 200, now()) {
            let value = o.value.unwrap();
            assert!(VALUE_RANGE.contains(&value));
            assert_eq!(o.group, "B");
            let delta = (now() - o.time.unwrap()).num_microseconds().unwrap();
            assert_eq!(delta, (value * MICROS_PER_DAY).round() as i64);
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = generate_group(&mut StdRng::seed_from_u64(3), "A", 5, now());
        let b = generate_group(&mut StdRng::seed_from_u64(3), "A", 5, now());
        assert_eq!(a, b);
    }

    #[test]
    fn groups_are_concatenated_in_order() {
        let mut rng = StdRng::seed_from_u64(5);
        let all = generate_groups(&mut rng, &["A", "B"], 30, now());
        assert_eq!(all.len(), 60);
        assert!(all[..30].iter().all(|o| o.group == "A"));
        assert!(all[30..].iter().all(|o| o.group == "B"));
    }
}
