use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use study_core::model::{Course, CourseId, Deadline, DeadlineId, Exam, ExamId, WeeklyActivity};
use thiserror::Error;

use crate::demo;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Read contract for courses.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// List all courses in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    async fn list_courses(&self) -> Result<Vec<Course>, StorageError>;

    /// Fetch a course by ID.
    ///
    /// Returns `Ok(None)` when the course does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    async fn get_course(&self, id: &CourseId) -> Result<Option<Course>, StorageError>;
}

/// Read contract for exam and assignment deadlines.
#[async_trait]
pub trait DeadlineRepository: Send + Sync {
    /// List all deadlines in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    async fn list_deadlines(&self) -> Result<Vec<Deadline>, StorageError>;
}

#[async_trait]
pub trait ExamRepository: Send + Sync {
    /// List all exams in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    async fn list_exams(&self) -> Result<Vec<Exam>, StorageError>;
}

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Study sessions and completed tasks for the current week.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unavailable.
    async fn weekly_activity(&self) -> Result<WeeklyActivity, StorageError>;
}

/// Insertion-ordered map keyed by id.
#[derive(Debug)]
struct Table<K, V> {
    order: Vec<K>,
    rows: HashMap<K, V>,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            rows: HashMap::new(),
        }
    }
}

impl<K: std::hash::Hash + Eq + Clone, V: Clone> Table<K, V> {
    fn upsert(&mut self, key: K, value: V) {
        if self.rows.insert(key.clone(), value).is_none() {
            self.order.push(key);
        }
    }

    fn get(&self, key: &K) -> Option<V> {
        self.rows.get(key).cloned()
    }

    fn list(&self) -> Vec<V> {
        self.order
            .iter()
            .filter_map(|key| self.rows.get(key).cloned())
            .collect()
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    courses: Arc<Mutex<Table<CourseId, Course>>>,
    deadlines: Arc<Mutex<Table<DeadlineId, Deadline>>>,
    exams: Arc<Mutex<Table<ExamId, Exam>>>,
    activity: Arc<Mutex<WeeklyActivity>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e| StorageError::Connection(e.to_string()))
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a course.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store lock is poisoned.
    pub fn insert_course(&self, course: Course) -> Result<(), StorageError> {
        lock(&self.courses)?.upsert(course.id().clone(), course);
        Ok(())
    }

    /// Insert or replace a deadline.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store lock is poisoned.
    pub fn insert_deadline(&self, deadline: Deadline) -> Result<(), StorageError> {
        lock(&self.deadlines)?.upsert(deadline.id().clone(), deadline);
        Ok(())
    }

    /// Insert or replace an exam.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store lock is poisoned.
    pub fn insert_exam(&self, exam: Exam) -> Result<(), StorageError> {
        lock(&self.exams)?.upsert(exam.id().clone(), exam);
        Ok(())
    }

    /// Replace this week's activity.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store lock is poisoned.
    pub fn set_weekly_activity(&self, activity: WeeklyActivity) -> Result<(), StorageError> {
        *lock(&self.activity)? = activity;
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for InMemoryRepository {
    async fn list_courses(&self) -> Result<Vec<Course>, StorageError> {
        Ok(lock(&self.courses)?.list())
    }

    async fn get_course(&self, id: &CourseId) -> Result<Option<Course>, StorageError> {
        Ok(lock(&self.courses)?.get(id))
    }
}

#[async_trait]
impl DeadlineRepository for InMemoryRepository {
    async fn list_deadlines(&self) -> Result<Vec<Deadline>, StorageError> {
        Ok(lock(&self.deadlines)?.list())
    }
}

#[async_trait]
impl ExamRepository for InMemoryRepository {
    async fn list_exams(&self) -> Result<Vec<Exam>, StorageError> {
        Ok(lock(&self.exams)?.list())
    }
}

#[async_trait]
impl ActivityRepository for InMemoryRepository {
    async fn weekly_activity(&self) -> Result<WeeklyActivity, StorageError> {
        Ok(lock(&self.activity)?.clone())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub courses: Arc<dyn CourseRepository>,
    pub deadlines: Arc<dyn DeadlineRepository>,
    pub exams: Arc<dyn ExamRepository>,
    pub activity: Arc<dyn ActivityRepository>,
}

impl Storage {
    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let courses: Arc<dyn CourseRepository> = Arc::new(repo.clone());
        let deadlines: Arc<dyn DeadlineRepository> = Arc::new(repo.clone());
        let exams: Arc<dyn ExamRepository> = Arc::new(repo.clone());
        let activity: Arc<dyn ActivityRepository> = Arc::new(repo);
        Self {
            courses,
            deadlines,
            exams,
            activity,
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    /// In-memory storage preloaded with the demo dataset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the demo records cannot be inserted.
    pub fn demo() -> Result<Self, StorageError> {
        let repo = InMemoryRepository::new();
        demo::load_into(&repo)?;
        Ok(Self::from_repository(repo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use study_core::model::{ColorTag, CourseDraft};

    fn build_course(id: &str, name: &str, progress: i64) -> Course {
        CourseDraft {
            name: name.into(),
            instructor: "Dr. Alan Smith".into(),
            progress,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 5, 30).unwrap(),
            color: ColorTag::default(),
        }
        .validate(CourseId::new(id).unwrap())
        .unwrap()
    }

    #[tokio::test]
    async fn lists_courses_in_insertion_order() {
        let repo = InMemoryRepository::new();
        repo.insert_course(build_course("b", "Second", 10)).unwrap();
        repo.insert_course(build_course("a", "First", 20)).unwrap();

        let names: Vec<_> = repo
            .list_courses()
            .await
            .unwrap()
            .iter()
            .map(|c| c.name().to_owned())
            .collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn upsert_replaces_without_reordering() {
        let repo = InMemoryRepository::new();
        repo.insert_course(build_course("a", "First", 20)).unwrap();
        repo.insert_course(build_course("b", "Second", 10)).unwrap();
        repo.insert_course(build_course("a", "First", 90)).unwrap();

        let courses = repo.list_courses().await.unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].progress().value(), 90);
    }

    #[tokio::test]
    async fn missing_course_is_none() {
        let repo = InMemoryRepository::new();
        let id = CourseId::new("nope").unwrap();
        assert!(repo.get_course(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_activity_by_default() {
        let storage = Storage::in_memory();
        let activity = storage.activity.weekly_activity().await.unwrap();
        assert!(activity.sessions().is_empty());
        assert_eq!(activity.completed_tasks(), 0);
    }
}
