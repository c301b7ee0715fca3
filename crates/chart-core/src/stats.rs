// File: crates/chart-core/src/stats.rs
// Summary: Five-number box summary with Tukey hinges and 1.5*IQR outlier fences.

/// Distribution summary drawn by a box series.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    /// Smallest value inside the lower fence.
    pub whisker_low: f64,
    /// Largest value inside the upper fence.
    pub whisker_high: f64,
    /// Values outside `[q1 - 1.5*iqr, q3 + 1.5*iqr]`, ascending.
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub const FENCE: f64 = 1.5;

    /// Summarise `values`, ignoring non-finite entries. `None` when nothing finite remains.
    ///
    /// Quartiles are the medians of the lower and upper halves; for odd counts the
    /// overall median belongs to neither half.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() { return None; }
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let median = median_sorted(&sorted);
        let (q1, q3) = if n == 1 {
            (sorted[0], sorted[0])
        } else {
            (median_sorted(&sorted[..n / 2]), median_sorted(&sorted[(n + 1) / 2..]))
        };

        let iqr = q3 - q1;
        let lo_fence = q1 - Self::FENCE * iqr;
        let hi_fence = q3 + Self::FENCE * iqr;

        let mut outliers = Vec::new();
        let mut whisker_low = f64::INFINITY;
        let mut whisker_high = f64::NEG_INFINITY;
        for &v in &sorted {
            if v < lo_fence || v > hi_fence {
                outliers.push(v);
            } else {
                whisker_low = whisker_low.min(v);
                whisker_high = whisker_high.max(v);
            }
        }

        Some(Self {
            count: n,
            min: sorted[0],
            max: sorted[n - 1],
            median,
            q1,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

fn median_sorted(s: &[f64]) -> f64 {
    let n = s.len();
    if n % 2 == 1 { s[n / 2] } else { (s[n / 2 - 1] + s[n / 2]) * 0.5 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_count_hinges() {
        let v: Vec<f64> = (1..=9).map(f64::from).collect();
        let s = BoxStats::from_values(&v).unwrap();
        assert_eq!(s.median, 5.0);
        assert_eq!(s.q1, 2.5);
        assert_eq!(s.q3, 7.5);
        assert_eq!(s.iqr(), 5.0);
        assert!(s.outliers.is_empty());
        assert_eq!((s.whisker_low, s.whisker_high), (1.0, 9.0));
    }

    #[test]
    fn even_count_hinges() {
        let s = BoxStats::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.median, 2.5);
        assert_eq!(s.q1, 1.5);
        assert_eq!(s.q3, 3.5);
    }

    #[test]
    fn detects_outliers_on_both_sides() {
        let s = BoxStats::from_values(&[-50.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0]).unwrap();
        assert_eq!(s.outliers, vec![-50.0, 100.0]);
        assert_eq!(s.whisker_low, 1.0);
        assert_eq!(s.whisker_high, 8.0);
        assert_eq!(s.min, -50.0);
        assert_eq!(s.max, 100.0);
    }

    #[test]
    fn single_value_collapses() {
        let s = BoxStats::from_values(&[0.42]).unwrap();
        assert_eq!((s.q1, s.median, s.q3), (0.42, 0.42, 0.42));
        assert!(s.outliers.is_empty());
    }

    #[test]
    fn empty_and_non_finite() {
        assert!(BoxStats::from_values(&[]).is_none());
        assert!(BoxStats::from_values(&[f64::NAN]).is_none());
        assert_eq!(BoxStats::from_values(&[f64::NAN, 2.0]).unwrap().count, 1);
    }
}
