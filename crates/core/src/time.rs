use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateError {
    #[error("invalid calendar date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid clock time `{0}`, expected e.g. 10:00 AM")]
    InvalidTime(String),
}

/// A simple clock abstraction for deterministic time in services and tests.
///
/// All dashboard comparisons are local-date based, so the clock hands out
/// naive local timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given local timestamp.
    #[must_use]
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current local time according to the clock.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::Default => Local::now().naive_local(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Returns the current local calendar date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DateError::InvalidDate` when the input is not a real date.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DateError::InvalidDate(raw.to_owned()))
}

/// Parse a 12-hour clock time such as `2:30 PM`.
///
/// # Errors
///
/// Returns `DateError::InvalidTime` when the input cannot be parsed.
pub fn parse_clock_time(raw: &str) -> Result<NaiveTime, DateError> {
    NaiveTime::parse_from_str(&raw.trim().to_ascii_uppercase(), "%I:%M %p")
        .map_err(|_| DateError::InvalidTime(raw.to_owned()))
}

/// Deterministic local timestamp for tests and examples (2025-05-08 09:30).
pub const FIXED_TEST_DATE: (i32, u32, u32) = (2025, 5, 8);

/// Returns a deterministic `NaiveDateTime` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> NaiveDateTime {
    let (y, m, d) = FIXED_TEST_DATE;
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances() {
        let mut clock = fixed_clock();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 5, 8).unwrap());
        clock.advance(Duration::hours(15));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 5, 9).unwrap());
    }

    #[test]
    fn default_clock_ignores_advance() {
        let mut clock = Clock::default_clock();
        clock.advance(Duration::days(3));
        assert!(matches!(clock, Clock::Default));
    }

    #[test]
    fn parses_calendar_dates() {
        assert_eq!(
            parse_calendar_date("2025-05-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
        );
        assert_eq!(
            parse_calendar_date("2025-02-30"),
            Err(DateError::InvalidDate("2025-02-30".into()))
        );
        assert!(parse_calendar_date("next tuesday").is_err());
    }

    #[test]
    fn parses_clock_times() {
        assert_eq!(
            parse_clock_time("2:30 PM").unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
        assert_eq!(
            parse_clock_time("10:00 am").unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap()
        );
        assert!(parse_clock_time("25:00 PM").is_err());
    }
}
