use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ColorTag, CourseId, ProgressPercent};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course name cannot be empty")]
    EmptyName,

    #[error("instructor cannot be empty")]
    EmptyInstructor,

    #[error("course ends ({end}) before it starts ({start})")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated course input, as entered in an "add course" form or an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    pub name: String,
    pub instructor: String,
    pub progress: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub color: ColorTag,
}

impl CourseDraft {
    /// Validate the draft into a `Course`.
    ///
    /// Progress outside `[0, 100]` is clamped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` for blank text fields or an inverted date range.
    pub fn validate(self, id: CourseId) -> Result<Course, CourseError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CourseError::EmptyName);
        }
        let instructor = self.instructor.trim();
        if instructor.is_empty() {
            return Err(CourseError::EmptyInstructor);
        }
        if self.end_date < self.start_date {
            return Err(CourseError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        Ok(Course {
            id,
            name: name.to_owned(),
            instructor: instructor.to_owned(),
            progress: ProgressPercent::clamped(self.progress),
            start_date: self.start_date,
            end_date: self.end_date,
            color: self.color,
        })
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A course the student is enrolled in.
///
/// Deserializing runs the same validation as `CourseDraft::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord", into = "CourseRecord")]
pub struct Course {
    id: CourseId,
    name: String,
    instructor: String,
    progress: ProgressPercent,
    start_date: NaiveDate,
    end_date: NaiveDate,
    color: ColorTag,
}

impl Course {
    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    #[must_use]
    pub fn progress(&self) -> ProgressPercent {
        self.progress
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    #[must_use]
    pub fn color(&self) -> &ColorTag {
        &self.color
    }
}

//
// ─── SERIALIZED FORM ───────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize)]
pub struct CourseRecord {
    id: CourseId,
    name: String,
    instructor: String,
    progress: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    color: ColorTag,
}

impl TryFrom<CourseRecord> for Course {
    type Error = CourseError;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        CourseDraft {
            name: record.name,
            instructor: record.instructor,
            progress: record.progress,
            start_date: record.start_date,
            end_date: record.end_date,
            color: record.color,
        }
        .validate(record.id)
    }
}

impl From<Course> for CourseRecord {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            instructor: course.instructor,
            progress: i64::from(course.progress.value()),
            start_date: course.start_date,
            end_date: course.end_date,
            color: course.color,
        }
    }
}
