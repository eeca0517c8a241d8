use std::sync::Arc;

use storage::repository::{CourseRepository, ExamRepository};
use tracing::{debug, instrument};

use crate::dashboard_service::course_names;
use crate::error::ExamServiceError;
use crate::views::ExamCardVm;

/// Read-side orchestration for the exams screen.
#[derive(Clone)]
pub struct ExamService {
    courses: Arc<dyn CourseRepository>,
    exams: Arc<dyn ExamRepository>,
}

impl ExamService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseRepository>, exams: Arc<dyn ExamRepository>) -> Self {
        Self { courses, exams }
    }

    /// Exam cards ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::Storage` if repository access fails.
    #[instrument(skip_all)]
    pub async fn upcoming(&self) -> Result<Vec<ExamCardVm>, ExamServiceError> {
        let courses = self.courses.list_courses().await?;
        let mut exams = self.exams.list_exams().await?;
        exams.sort_by_key(|exam| exam.starts_at());

        let names = course_names(&courses);
        debug!(count = exams.len(), "listed exams");
        Ok(exams
            .iter()
            .map(|exam| ExamCardVm::new(exam, names.get(exam.course_ref()).copied()))
            .collect())
    }
}
