use std::sync::Arc;

use storage::repository::{CourseRepository, StorageError};
use study_core::model::CourseId;
use tracing::{debug, instrument};

use crate::error::CourseServiceError;
use crate::views::CourseCardVm;

/// Read-side orchestration for the courses screen.
#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
}

impl CourseService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    /// Course cards in repository order.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Storage` if repository access fails.
    #[instrument(skip_all)]
    pub async fn list(&self) -> Result<Vec<CourseCardVm>, CourseServiceError> {
        let courses = self.courses.list_courses().await?;
        debug!(count = courses.len(), "listed courses");
        Ok(courses.iter().map(CourseCardVm::from).collect())
    }

    /// A single course card.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` (wrapped) when the course is missing.
    pub async fn get(&self, id: &CourseId) -> Result<CourseCardVm, CourseServiceError> {
        let course = self
            .courses
            .get_course(id)
            .await?
            .ok_or(StorageError::NotFound)?;
        Ok(CourseCardVm::from(&course))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::Storage;

    #[tokio::test]
    async fn lists_demo_courses_with_labels() {
        let storage = Storage::demo().unwrap();
        let service = CourseService::new(Arc::clone(&storage.courses));
        let cards = service.list().await.unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].name, "Introduction to Computer Science");
        assert_eq!(cards[0].progress_label, "75% completed");
        assert_eq!(cards[2].fill, 0.45);
    }

    #[tokio::test]
    async fn missing_course_is_not_found() {
        let service = CourseService::new(Arc::clone(&Storage::in_memory().courses));
        let err = service
            .get(&CourseId::new("42").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CourseServiceError::Storage(StorageError::NotFound)
        ));
    }
}
