#![forbid(unsafe_code)]

pub mod demo;
pub mod repository;

pub use repository::{
    ActivityRepository, CourseRepository, DeadlineRepository, ExamRepository, InMemoryRepository,
    Storage, StorageError,
};
