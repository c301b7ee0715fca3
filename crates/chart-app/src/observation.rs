// File: crates/chart-app/src/observation.rs
// Summary: Observation record and the numeric time encoding used on chart X axes.

use chrono::{DateTime, Duration, Utc};

pub const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// OLE Automation date of 1970-01-01T00:00:00Z (days since 1899-12-30).
const OA_UNIX_EPOCH: f64 = 25_569.0;

/// One synthetic data point. Absent `value` or `time` keeps it off the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub group: String,
    pub value: Option<f64>,
    pub time: Option<DateTime<Utc>>,
}

impl Observation {
    pub fn new(group: impl Into<String>, value: f64, time: DateTime<Utc>) -> Self {
        Self { group: group.into(), value: Some(value), time: Some(time) }
    }

    /// `(time, value)` when both are present.
    pub fn point(&self) -> Option<(DateTime<Utc>, f64)> {
        Some((self.time?, self.value?))
    }

    pub fn is_plottable(&self) -> bool {
        self.point().is_some()
    }
}

/// `now` shifted back by a fractional number of days, at microsecond precision.
pub fn days_before(now: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    now - Duration::microseconds((days * MICROS_PER_DAY).round() as i64)
}

/// Fractional days since 1899-12-30, the X coordinate of a timestamp.
pub fn to_oa_date(t: DateTime<Utc>) -> f64 {
    OA_UNIX_EPOCH + t.timestamp_micros() as f64 / MICROS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn oa_date_known_values() {
        let unix = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(to_oa_date(unix), 25_569.0);
        let noon = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(to_oa_date(noon), 43_831.5);
    }

    #[test]
    fn half_day_before() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(days_before(now, 0.5), Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn missing_fields_are_not_plottable() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let mut o = Observation::new("A", 0.3, now);
        assert_eq!(o.point(), Some((now, 0.3)));
        o.value = None;
        assert!(!o.is_plottable());
        let o = Observation { group: "A".into(), value: Some(1.0), time: None };
        assert!(o.point().is_none());
    }
}
