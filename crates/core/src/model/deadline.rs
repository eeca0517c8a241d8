use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::{ColorTag, CourseId, DeadlineId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeadlineError {
    #[error("deadline title cannot be empty")]
    EmptyTitle,
}

/// Kind of dated obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeadlineCategory {
    Exam,
    Assignment,
}

impl DeadlineCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DeadlineCategory::Exam => "Exam",
            DeadlineCategory::Assignment => "Assignment",
        }
    }
}

impl fmt::Display for DeadlineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An exam or assignment due on a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeadlineRecord", into = "DeadlineRecord")]
pub struct Deadline {
    id: DeadlineId,
    title: String,
    course_ref: CourseId,
    due_date: NaiveDate,
    category: DeadlineCategory,
    color: ColorTag,
}

impl Deadline {
    /// Creates a deadline.
    ///
    /// `course_ref` is not checked against known courses; callers display
    /// orphaned references rather than rejecting them.
    ///
    /// # Errors
    ///
    /// Returns `DeadlineError::EmptyTitle` if the title is blank.
    pub fn new(
        id: DeadlineId,
        title: impl Into<String>,
        course_ref: CourseId,
        due_date: NaiveDate,
        category: DeadlineCategory,
        color: ColorTag,
    ) -> Result<Self, DeadlineError> {
        let title = title.into();
        let title = title.trim();
        if title.is_empty() {
            return Err(DeadlineError::EmptyTitle);
        }
        Ok(Self {
            id,
            title: title.to_owned(),
            course_ref,
            due_date,
            category,
            color,
        })
    }

    #[must_use]
    pub fn id(&self) -> &DeadlineId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn course_ref(&self) -> &CourseId {
        &self.course_ref
    }

    #[must_use]
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    #[must_use]
    pub fn category(&self) -> DeadlineCategory {
        self.category
    }

    #[must_use]
    pub fn color(&self) -> &ColorTag {
        &self.color
    }

    #[must_use]
    pub fn is_exam(&self) -> bool {
        self.category == DeadlineCategory::Exam
    }
}

#[derive(Serialize, Deserialize)]
pub struct DeadlineRecord {
    id: DeadlineId,
    title: String,
    course_ref: CourseId,
    due_date: NaiveDate,
    category: DeadlineCategory,
    color: ColorTag,
}

impl TryFrom<DeadlineRecord> for Deadline {
    type Error = DeadlineError;

    fn try_from(record: DeadlineRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.id,
            record.title,
            record.course_ref,
            record.due_date,
            record.category,
            record.color,
        )
    }
}

impl From<Deadline> for DeadlineRecord {
    fn from(deadline: Deadline) -> Self {
        Self {
            id: deadline.id,
            title: deadline.title,
            course_ref: deadline.course_ref,
            due_date: deadline.due_date,
            category: deadline.category,
            color: deadline.color,
        }
    }
}
