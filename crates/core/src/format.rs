//! en-US date and time renderings used across the dashboard screens.

use chrono::{NaiveDate, NaiveTime};

/// Dashboard header form, e.g. `Thursday, May 8, 2025`.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Exam card form, e.g. `Sat, Mar 15`.
#[must_use]
pub fn format_exam_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Abbreviated month and day, e.g. `May 15`.
#[must_use]
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// 12-hour clock, e.g. `2:30 PM`.
#[must_use]
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn long_date_matches_header() {
        assert_eq!(format_long_date(date(2025, 5, 8)), "Thursday, May 8, 2025");
    }

    #[test]
    fn exam_date_has_weekday() {
        assert_eq!(format_exam_date(date(2025, 3, 15)), "Sat, Mar 15");
        assert_eq!(format_exam_date(date(2025, 2, 28)), "Fri, Feb 28");
    }

    #[test]
    fn short_date_drops_padding() {
        assert_eq!(format_short_date(date(2025, 5, 5)), "May 5");
        assert_eq!(format_short_date(date(2025, 12, 25)), "Dec 25");
    }

    #[test]
    fn clock_time_is_twelve_hour() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(format_clock_time(t(10, 0)), "10:00 AM");
        assert_eq!(format_clock_time(t(14, 30)), "2:30 PM");
        assert_eq!(format_clock_time(t(0, 5)), "12:05 AM");
    }
}
