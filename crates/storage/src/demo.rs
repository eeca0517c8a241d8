//! Demo dataset: one student's spring term.
//!
//! Records are built through the same validating constructors an import
//! would use.

use study_core::Error;
use study_core::model::{
    ColorTag, Course, CourseDraft, CourseId, Deadline, DeadlineCategory, DeadlineId, Exam,
    ExamDraft, ExamId, StudySession, WeeklyActivity,
};
use study_core::time::{parse_calendar_date, parse_clock_time};

use crate::repository::{InMemoryRepository, StorageError};

const TERM_START: &str = "2025-01-15";
const TERM_END: &str = "2025-05-30";

struct CourseRow {
    id: &'static str,
    name: &'static str,
    instructor: &'static str,
    progress: i64,
    color: &'static str,
}

const COURSES: &[CourseRow] = &[
    CourseRow {
        id: "1",
        name: "Introduction to Computer Science",
        instructor: "Dr. Alan Smith",
        progress: 75,
        color: "#4287f5",
    },
    CourseRow {
        id: "2",
        name: "Calculus II",
        instructor: "Prof. Maria Johnson",
        progress: 60,
        color: "#f54242",
    },
    CourseRow {
        id: "3",
        name: "Physics for Engineers",
        instructor: "Dr. Robert Chen",
        progress: 45,
        color: "#42f5a7",
    },
];

// (id, title, course, due, category, color)
const DEADLINES: &[(&str, &str, &str, &str, DeadlineCategory, &str)] = &[
    ("1", "Quiz 2", "2", "2025-05-15", DeadlineCategory::Exam, "#f54242"),
    ("2", "Assignment 3", "1", "2025-05-10", DeadlineCategory::Assignment, "#4287f5"),
    ("3", "Lab Report", "3", "2025-05-18", DeadlineCategory::Assignment, "#42f5a7"),
];

// (id, title, course, date, time, location, study progress, color)
#[allow(clippy::type_complexity)]
const EXAMS: &[(&str, &str, &str, &str, &str, &str, i64, &str)] = &[
    ("1", "Midterm Exam", "1", "2025-03-15", "10:00 AM", "Room 301", 65, "#4287f5"),
    ("2", "Quiz 2", "2", "2025-02-28", "2:30 PM", "Room 205", 40, "#f54242"),
    ("3", "Lab Test", "3", "2025-03-05", "3:00 PM", "Science Lab 2", 75, "#42f5a7"),
];

const STUDY_HOURS: &[f64] = &[2.5, 3.0, 1.5, 4.0, 3.5];
const COMPLETED_TASKS: u32 = 8;

/// Demo courses.
///
/// # Errors
///
/// Returns `study_core::Error` if a row fails validation.
pub fn courses() -> Result<Vec<Course>, Error> {
    let start = parse_calendar_date(TERM_START)?;
    let end = parse_calendar_date(TERM_END)?;
    COURSES
        .iter()
        .map(|row| -> Result<Course, Error> {
            let course = CourseDraft {
                name: row.name.to_owned(),
                instructor: row.instructor.to_owned(),
                progress: row.progress,
                start_date: start,
                end_date: end,
                color: ColorTag::parse(row.color)?,
            }
            .validate(CourseId::new(row.id)?)?;
            Ok(course)
        })
        .collect()
}

/// Demo dashboard deadlines.
///
/// # Errors
///
/// Returns `study_core::Error` if a row fails validation.
pub fn deadlines() -> Result<Vec<Deadline>, Error> {
    DEADLINES
        .iter()
        .map(|&(id, title, course, due, category, color)| -> Result<Deadline, Error> {
            let deadline = Deadline::new(
                DeadlineId::new(id)?,
                title,
                CourseId::new(course)?,
                parse_calendar_date(due)?,
                category,
                ColorTag::parse(color)?,
            )?;
            Ok(deadline)
        })
        .collect()
}

/// Demo exams.
///
/// # Errors
///
/// Returns `study_core::Error` if a row fails validation.
pub fn exams() -> Result<Vec<Exam>, Error> {
    EXAMS
        .iter()
        .map(
            |&(id, title, course, date, time, location, study_progress, color)| -> Result<Exam, Error> {
                let exam = ExamDraft {
                    title: title.to_owned(),
                    course_ref: CourseId::new(course)?,
                    date: parse_calendar_date(date)?,
                    time: parse_clock_time(time)?,
                    location: location.to_owned(),
                    study_progress,
                    color: ColorTag::parse(color)?,
                }
                .validate(ExamId::new(id)?)?;
                Ok(exam)
            },
        )
        .collect()
}

/// Demo study log for the current week.
#[must_use]
pub fn weekly_activity() -> WeeklyActivity {
    WeeklyActivity::new(
        STUDY_HOURS.iter().copied().map(StudySession::new).collect(),
        COMPLETED_TASKS,
    )
}

/// Insert the whole dataset into `repo`.
///
/// # Errors
///
/// Returns `StorageError::InvalidRecord` if a demo row fails validation, or
/// `StorageError::Connection` if the repository is unavailable.
pub fn load_into(repo: &InMemoryRepository) -> Result<(), StorageError> {
    let invalid = |e: Error| StorageError::InvalidRecord(e.to_string());
    for course in courses().map_err(invalid)? {
        repo.insert_course(course)?;
    }
    for deadline in deadlines().map_err(invalid)? {
        repo.insert_deadline(deadline)?;
    }
    for exam in exams().map_err(invalid)? {
        repo.insert_exam(exam)?;
    }
    repo.set_weekly_activity(weekly_activity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{
        ActivityRepository, CourseRepository, DeadlineRepository, ExamRepository, Storage,
    };

    #[test]
    fn demo_rows_validate() {
        assert_eq!(courses().unwrap().len(), 3);
        assert_eq!(deadlines().unwrap().len(), 3);
        assert_eq!(exams().unwrap().len(), 3);
    }

    #[test]
    fn demo_week_totals_fourteen_and_a_half_hours() {
        let activity = weekly_activity();
        let total: f64 = activity.hours().iter().sum();
        assert!((total - 14.5).abs() < f64::EPSILON);
        assert_eq!(activity.completed_tasks(), 8);
    }

    #[tokio::test]
    async fn demo_storage_serves_every_repository() {
        let storage = Storage::demo().unwrap();
        assert_eq!(storage.courses.list_courses().await.unwrap().len(), 3);
        assert_eq!(storage.deadlines.list_deadlines().await.unwrap().len(), 3);
        assert_eq!(storage.exams.list_exams().await.unwrap().len(), 3);
        assert_eq!(
            storage.activity.weekly_activity().await.unwrap().completed_tasks(),
            8
        );

        let calculus = storage
            .courses
            .get_course(&CourseId::new("2").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(calculus.instructor(), "Prof. Maria Johnson");
    }
}
