//! Flight elapsed-time handling.
//!
//! The search API reports itinerary duration as an ISO-8601 token such as
//! `PT18H10M`; the table stores the display form `18h 10m`; analysis works in
//! whole minutes. [`FlightDuration`] converts between all three.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::CoreError;

static ISO_DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?)?$")
        .expect("valid iso duration regex")
});

static DISPLAY_DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:(\d+)\s*h)?\s*(?:(\d+)\s*m)?\s*$").expect("valid display duration regex")
});

/// Total elapsed time of a flight, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FlightDuration {
    minutes: u32,
}

impl FlightDuration {
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    #[must_use]
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Parses an ISO-8601 elapsed-time token (`PT18H10M`, `PT45M`, `P1DT2H`).
    ///
    /// Days fold into hours; seconds are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDuration`] if the token is malformed, has
    /// no components, or overflows.
    pub fn from_iso8601(token: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidDuration(token.to_string());
        let trimmed = token.trim();
        let caps = ISO_DURATION_RE.captures(trimmed).ok_or_else(invalid)?;

        if (1..=4).all(|i| caps.get(i).is_none()) {
            return Err(invalid());
        }
        // "P1DT" carries a dangling time designator.
        if trimmed.to_ascii_uppercase().ends_with('T') {
            return Err(invalid());
        }

        let days = capture_u32(&caps, 1).ok_or_else(invalid)?;
        let hours = capture_u32(&caps, 2).ok_or_else(invalid)?;
        let minutes = capture_u32(&caps, 3).ok_or_else(invalid)?;

        combine(days, hours, minutes).ok_or_else(invalid)
    }

    /// Parses the display form written to the table: `18h 10m`, `18h`, `45m`.
    ///
    /// Surrounding whitespace is ignored, so the legacy `18h ` form parses.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDuration`] if the string is not in display
    /// form.
    pub fn parse_display(s: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidDuration(s.to_string());
        let caps = DISPLAY_DURATION_RE.captures(s).ok_or_else(invalid)?;
        if caps.get(1).is_none() && caps.get(2).is_none() {
            return Err(invalid());
        }

        let hours = capture_u32(&caps, 1).ok_or_else(invalid)?;
        let minutes = capture_u32(&caps, 2).ok_or_else(invalid)?;

        combine(0, hours, minutes).ok_or_else(invalid)
    }
}

/// Reads capture group `idx` as `u32`, treating an absent group as `0`.
/// Returns `None` only when the digits overflow.
fn capture_u32(caps: &regex::Captures<'_>, idx: usize) -> Option<u32> {
    match caps.get(idx) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}

fn combine(days: u32, hours: u32, minutes: u32) -> Option<FlightDuration> {
    let total_hours = days.checked_mul(24)?.checked_add(hours)?;
    let total = total_hours.checked_mul(60)?.checked_add(minutes)?;
    Some(FlightDuration::from_minutes(total))
}

impl fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.minutes / 60;
        let minutes = self.minutes % 60;
        match (hours, minutes) {
            (0, m) => write!(f, "{m}m"),
            (h, 0) => write!(f, "{h}h"),
            (h, m) => write!(f, "{h}h {m}m"),
        }
    }
}

impl FromStr for FlightDuration {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_display(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_hours_and_minutes() {
        let d = FlightDuration::from_iso8601("PT18H10M").unwrap();
        assert_eq!(d.minutes(), 18 * 60 + 10);
        assert_eq!(d.to_string(), "18h 10m");
    }

    #[test]
    fn iso_minutes_only() {
        let d = FlightDuration::from_iso8601("PT45M").unwrap();
        assert_eq!(d.minutes(), 45);
        assert_eq!(d.to_string(), "45m");
    }

    #[test]
    fn iso_hours_only() {
        let d = FlightDuration::from_iso8601("PT2H").unwrap();
        assert_eq!(d.minutes(), 120);
        assert_eq!(d.to_string(), "2h");
    }

    #[test]
    fn iso_days_fold_into_hours() {
        let d = FlightDuration::from_iso8601("P1DT2H30M").unwrap();
        assert_eq!(d.minutes(), 26 * 60 + 30);
        assert_eq!(d.to_string(), "26h 30m");
    }

    #[test]
    fn iso_seconds_are_dropped() {
        let d = FlightDuration::from_iso8601("PT1H5M30S").unwrap();
        assert_eq!(d.minutes(), 65);
    }

    #[test]
    fn iso_rejects_malformed_tokens() {
        for bad in ["", "PT", "P", "18H10M", "PTXH", "P1DT", "PT-5M"] {
            assert!(
                FlightDuration::from_iso8601(bad).is_err(),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn display_parse_accepts_all_written_forms() {
        assert_eq!(FlightDuration::parse_display("18h 10m").unwrap().minutes(), 1090);
        assert_eq!(FlightDuration::parse_display("18h").unwrap().minutes(), 1080);
        assert_eq!(FlightDuration::parse_display("18h ").unwrap().minutes(), 1080);
        assert_eq!(FlightDuration::parse_display("45m").unwrap().minutes(), 45);
        assert_eq!(FlightDuration::parse_display(" 2h 5m ").unwrap().minutes(), 125);
    }

    #[test]
    fn display_parse_rejects_garbage() {
        for bad in ["", "  ", "abc", "10", "h m", "5m 2h"] {
            assert!(
                FlightDuration::parse_display(bad).is_err(),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn display_round_trips_iso_tokens() {
        for h in [0_u32, 1, 9, 23, 40] {
            for m in [0_u32, 1, 30, 59] {
                let token = match (h, m) {
                    (0, m) => format!("PT{m}M"),
                    (h, 0) => format!("PT{h}H"),
                    (h, m) => format!("PT{h}H{m}M"),
                };
                let parsed = FlightDuration::from_iso8601(&token).unwrap();
                let back: FlightDuration = parsed.to_string().parse().unwrap();
                assert_eq!(back.minutes(), h * 60 + m, "token {token}");
            }
        }
    }
}
