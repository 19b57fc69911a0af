//! Inclusive calendar-date ranges for per-day fare searches.

use chrono::NaiveDate;

use crate::CoreError;

/// An inclusive span of calendar days, `start..=end`.
///
/// Construction rejects ranges whose end precedes their start, so every
/// `DateRange` yields at least one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range covering `start` through `end`, both included.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRange`] if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if end < start {
            return Err(CoreError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, endpoints included.
    #[must_use]
    pub fn len(&self) -> usize {
        let days = (self.end - self.start).num_days();
        usize::try_from(days).map_or(0, |d| d + 1)
    }

    /// Always `false`: a valid range holds at least one day.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns a fresh ascending iterator over every day in the range.
    ///
    /// Each call starts over from `start`.
    #[must_use]
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator produced by [`DateRange::iter`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, |next| {
            usize::try_from((self.end - next).num_days()).map_or(0, |d| d + 1)
        });
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRangeIter {}

impl std::iter::FusedIterator for DateRangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
    }

    #[test]
    fn single_day_range_yields_one_date() {
        let range = DateRange::new(date("2025-03-01"), date("2025-03-01")).unwrap();
        let days: Vec<_> = range.iter().collect();
        assert_eq!(days, vec![date("2025-03-01")]);
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn range_includes_both_endpoints_in_ascending_order() {
        let range = DateRange::new(date("2025-03-01"), date("2025-03-05")).unwrap();
        let days: Vec<_> = range.iter().collect();
        assert_eq!(days.len(), 5);
        assert_eq!(days.first(), Some(&date("2025-03-01")));
        assert_eq!(days.last(), Some(&date("2025-03-05")));
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn range_crosses_month_and_leap_day() {
        let range = DateRange::new(date("2024-02-27"), date("2024-03-02")).unwrap();
        let days: Vec<String> = range.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            days,
            vec![
                "2024-02-27",
                "2024-02-28",
                "2024-02-29",
                "2024-03-01",
                "2024-03-02"
            ]
        );
    }

    #[test]
    fn end_before_start_is_rejected() {
        let result = DateRange::new(date("2025-03-05"), date("2025-03-01"));
        assert!(matches!(result, Err(CoreError::InvalidRange { .. })));
    }

    #[test]
    fn iteration_is_restartable() {
        let range = DateRange::new(date("2025-01-30"), date("2025-02-02")).unwrap();
        let first: Vec<_> = range.iter().collect();
        let second: Vec<_> = (&range).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn length_matches_day_difference_plus_one() {
        for span in [0_i64, 1, 6, 30, 365] {
            let start = date("2025-01-01");
            let end = start + chrono::Duration::days(span);
            let range = DateRange::new(start, end).unwrap();
            let iter = range.iter();
            assert_eq!(iter.len(), usize::try_from(span).unwrap() + 1);
            assert_eq!(iter.count(), range.len());
        }
    }

    #[test]
    fn iterator_is_fused_after_end() {
        let range = DateRange::new(date("2025-01-01"), date("2025-01-02")).unwrap();
        let mut iter = range.iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
        assert_eq!(iter.len(), 0);
    }
}
