use std::sync::Arc;

use storage::repository::Storage;
use tracing::info;

use crate::Clock;
use crate::config::DashboardConfig;
use crate::course_service::CourseService;
use crate::dashboard_service::DashboardService;
use crate::error::DashboardError;
use crate::exam_service::ExamService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    dashboard: Arc<DashboardService>,
    courses: Arc<CourseService>,
    exams: Arc<ExamService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock, config: DashboardConfig) -> Self {
        let dashboard = Arc::new(DashboardService::from_storage(clock, config, storage));
        let courses = Arc::new(CourseService::new(Arc::clone(&storage.courses)));
        let exams = Arc::new(ExamService::new(
            Arc::clone(&storage.courses),
            Arc::clone(&storage.exams),
        ));
        Self {
            dashboard,
            courses,
            exams,
        }
    }

    /// Services over the demo dataset, configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError` if the demo data cannot be loaded or an
    /// environment override is invalid.
    pub fn demo(clock: Clock) -> Result<Self, DashboardError> {
        let config = DashboardConfig::default().apply_env_overrides()?;
        Self::demo_with_config(clock, config)
    }

    /// Services over the demo dataset, configured from `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError` if the demo data cannot be loaded or an
    /// override is invalid.
    pub fn demo_with_overrides(
        clock: Clock,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, DashboardError> {
        let config = DashboardConfig::default().apply_overrides(lookup)?;
        Self::demo_with_config(clock, config)
    }

    fn demo_with_config(clock: Clock, config: DashboardConfig) -> Result<Self, DashboardError> {
        let storage = Storage::demo()?;
        info!(
            policy = ?config.overdue_policy,
            placement = ?config.overdue_placement,
            max_deadlines = config.max_deadlines,
            "starting demo services"
        );
        Ok(Self::new(&storage, clock, config))
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn courses(&self) -> Arc<CourseService> {
        Arc::clone(&self.courses)
    }

    #[must_use]
    pub fn exams(&self) -> Arc<ExamService> {
        Arc::clone(&self.exams)
    }
}
