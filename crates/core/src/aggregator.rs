//! Weekly dashboard statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classifier::days_between;
use crate::model::{normalize_hours, Course, Deadline, WeeklyActivity};

/// Summary shown in the dashboard's "this week" row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// Sum of logged hours, rounded to one decimal.
    pub total_study_hours: f64,
    pub completed_tasks: u32,
    pub upcoming_exams: u32,
    /// Mean course progress, one decimal; `None` without courses.
    pub average_progress: Option<f64>,
}

/// Build weekly stats from precomputed counts.
///
/// Negative or non-finite hour entries count as zero. The result does not
/// depend on the order of `study_hours`.
#[must_use]
pub fn aggregate(
    courses: &[Course],
    study_hours: &[f64],
    completed_tasks: u32,
    upcoming_exams: u32,
) -> WeeklyStats {
    WeeklyStats {
        total_study_hours: total_hours(study_hours),
        completed_tasks,
        upcoming_exams,
        average_progress: average_progress(courses),
    }
}

/// Build weekly stats from raw activity, deriving the upcoming exam count
/// from `deadlines`.
#[must_use]
pub fn aggregate_activity(
    today: NaiveDate,
    courses: &[Course],
    activity: &WeeklyActivity,
    deadlines: &[Deadline],
) -> WeeklyStats {
    aggregate(
        courses,
        &activity.hours(),
        activity.completed_tasks(),
        count_upcoming_exams(today, deadlines),
    )
}

/// Exams due today or later.
#[must_use]
pub fn count_upcoming_exams(today: NaiveDate, deadlines: &[Deadline]) -> u32 {
    let count = deadlines
        .iter()
        .filter(|d| d.is_exam() && days_between(today, d.due_date()) >= 0)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Mean progress across courses, rounded to one decimal.
#[must_use]
pub fn average_progress(courses: &[Course]) -> Option<f64> {
    if courses.is_empty() {
        return None;
    }
    let sum: f64 = courses
        .iter()
        .map(|c| f64::from(c.progress().value()))
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = sum / courses.len() as f64;
    Some(round_one_decimal(mean))
}

/// Sum hour entries and round to one decimal.
///
/// A sum that overflows saturates at `f64::MAX`.
#[must_use]
pub fn total_hours(study_hours: &[f64]) -> f64 {
    // sorted so the float sum is independent of input order
    let mut hours: Vec<f64> = study_hours.iter().copied().map(normalize_hours).collect();
    hours.sort_by(f64::total_cmp);
    let sum: f64 = hours.iter().sum();
    round_one_decimal(if sum.is_finite() { sum } else { f64::MAX })
}

/// Magnitude from which every `f64` is a whole number.
const INTEGRAL_FROM: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round half away from zero to one decimal place.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= INTEGRAL_FROM {
        return value;
    }
    (value * 10.0).round() / 10.0
}
