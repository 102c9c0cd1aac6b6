// src/domain/time_range.rs
use chrono::{DateTime, Utc};

/// Inclusive time window. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl TimeRange {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| from <= instant) && self.to.is_none_or(|to| instant <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::TimeRange;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn bounds_are_inclusive() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let end = start + Duration::hours(1);
        let range = TimeRange::new(Some(start), Some(end));

        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(start - Duration::seconds(1)));
        assert!(!range.contains(end + Duration::seconds(1)));
    }

    #[test]
    fn open_sides_are_unconstrained() {
        let pivot = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let until = TimeRange::new(None, Some(pivot));
        assert!(until.contains(pivot - Duration::days(3650)));
        assert!(!until.contains(pivot + Duration::seconds(1)));

        let since = TimeRange::new(Some(pivot), None);
        assert!(since.contains(pivot + Duration::days(3650)));
        assert!(!since.contains(pivot - Duration::seconds(1)));

        assert!(TimeRange::default().is_unbounded());
        assert!(TimeRange::default().contains(pivot));
    }

    #[test]
    fn inverted_range_is_empty() {
        let start = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let range = TimeRange::new(Some(start), Some(end));
        assert!(!range.contains(start));
        assert!(!range.contains(end));
    }
}
