//! Screen-ready projections of domain records.

use serde::Serialize;
use study_core::WeeklyStats;
use study_core::classifier::{Proximity, ProximityKind};
use study_core::format::{format_clock_time, format_exam_date};
use study_core::model::{Course, Deadline, Exam};

/// Shown when a deadline points at a course that does not exist.
pub const UNKNOWN_COURSE: &str = "Unknown course";

/// Alpha applied to a deadline color for its category chip.
const CHIP_ALPHA: u8 = 0x30;

/// Screens a card can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    Courses,
    Exams,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Header date, e.g. `Thursday, May 8, 2025`.
    pub date_label: String,
    pub stats: WeeklyStats,
    pub deadlines: Vec<DeadlineCardVm>,
    pub courses: Vec<CourseProgressVm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineCardVm {
    pub id: String,
    pub title: String,
    pub course_name: String,
    pub category: &'static str,
    pub due_label: String,
    pub days_remaining: i64,
    pub kind: ProximityKind,
    pub color: String,
    pub chip_color: String,
    pub target: Route,
}

impl DeadlineCardVm {
    #[must_use]
    pub fn new(deadline: &Deadline, course_name: Option<&str>, proximity: Proximity) -> Self {
        Self {
            id: deadline.id().to_string(),
            title: deadline.title().to_owned(),
            course_name: course_name.unwrap_or(UNKNOWN_COURSE).to_owned(),
            category: deadline.category().label(),
            due_label: proximity.label,
            days_remaining: proximity.days_remaining,
            kind: proximity.kind,
            color: deadline.color().to_string(),
            chip_color: deadline.color().tint(CHIP_ALPHA),
            target: if deadline.is_exam() {
                Route::Exams
            } else {
                Route::Courses
            },
        }
    }
}

/// Compact course row on the home screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseProgressVm {
    pub id: String,
    pub name: String,
    pub percent: u8,
    pub fill: f64,
    pub color: String,
}

impl From<&Course> for CourseProgressVm {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            name: course.name().to_owned(),
            percent: course.progress().value(),
            fill: course.progress().width_fraction(),
            color: course.color().to_string(),
        }
    }
}

/// Full course card on the courses screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseCardVm {
    pub id: String,
    pub name: String,
    pub instructor: String,
    pub percent: u8,
    pub fill: f64,
    pub progress_label: String,
    pub color: String,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        let progress = course.progress();
        Self {
            id: course.id().to_string(),
            name: course.name().to_owned(),
            instructor: course.instructor().to_owned(),
            percent: progress.value(),
            fill: progress.width_fraction(),
            progress_label: format!("{progress} completed"),
            color: course.color().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamCardVm {
    pub id: String,
    pub title: String,
    pub course_name: String,
    pub date_label: String,
    pub time_label: String,
    pub location: String,
    pub fill: f64,
    pub progress_label: String,
    pub color: String,
}

impl ExamCardVm {
    #[must_use]
    pub fn new(exam: &Exam, course_name: Option<&str>) -> Self {
        let progress = exam.study_progress();
        Self {
            id: exam.id().to_string(),
            title: exam.title().to_owned(),
            course_name: course_name.unwrap_or(UNKNOWN_COURSE).to_owned(),
            date_label: format_exam_date(exam.date()),
            time_label: format_clock_time(exam.time()),
            location: exam.location().to_owned(),
            fill: progress.width_fraction(),
            progress_label: format!("Study Progress: {progress}"),
            color: exam.color().to_string(),
        }
    }
}
