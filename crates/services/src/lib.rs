#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod course_service;
pub mod dashboard_service;
pub mod error;
pub mod exam_service;
pub mod screens;
pub mod views;

pub use study_core::Clock;

pub use app_services::AppServices;
pub use config::DashboardConfig;
pub use course_service::CourseService;
pub use dashboard_service::DashboardService;
pub use error::{ConfigError, CourseServiceError, DashboardError, ExamServiceError};
pub use exam_service::ExamService;
pub use screens::{CoursesScreenState, ExamsScreenState, ExamsTab};
pub use views::{
    CourseCardVm, CourseProgressVm, DashboardView, DeadlineCardVm, ExamCardVm, Route,
};
