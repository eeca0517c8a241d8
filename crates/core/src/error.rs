use thiserror::Error;

use crate::model::{ColorTagError, CourseError, DeadlineError, ExamError, ParseIdError};
use crate::time::DateError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Deadline(#[from] DeadlineError),
    #[error(transparent)]
    Exam(#[from] ExamError),
    #[error(transparent)]
    Color(#[from] ColorTagError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
    #[error(transparent)]
    Date(#[from] DateError),
}
