use std::collections::HashMap;
use std::sync::Arc;

use storage::repository::{ActivityRepository, CourseRepository, DeadlineRepository, Storage};
use study_core::DeadlineClassifier;
use study_core::aggregator::aggregate_activity;
use study_core::format::format_long_date;
use study_core::model::{Course, CourseId};
use tracing::{debug, instrument, warn};

use crate::Clock;
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::views::{CourseProgressVm, DashboardView, DeadlineCardVm};

/// Builds the home screen: header date, weekly stats, next deadlines and
/// course progress.
#[derive(Clone)]
pub struct DashboardService {
    clock: Clock,
    config: DashboardConfig,
    courses: Arc<dyn CourseRepository>,
    deadlines: Arc<dyn DeadlineRepository>,
    activity: Arc<dyn ActivityRepository>,
}

impl DashboardService {
    #[must_use]
    pub fn new(
        clock: Clock,
        config: DashboardConfig,
        courses: Arc<dyn CourseRepository>,
        deadlines: Arc<dyn DeadlineRepository>,
        activity: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self {
            clock,
            config,
            courses,
            deadlines,
            activity,
        }
    }

    #[must_use]
    pub fn from_storage(clock: Clock, config: DashboardConfig, storage: &Storage) -> Self {
        Self::new(
            clock,
            config,
            Arc::clone(&storage.courses),
            Arc::clone(&storage.deadlines),
            Arc::clone(&storage.activity),
        )
    }

    /// Assemble the dashboard for the clock's current date.
    ///
    /// Upcoming exams are counted from the deadline list (exams due today or
    /// later), not taken from a stored total.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Storage` if repository access fails.
    #[instrument(skip_all)]
    pub async fn home(&self) -> Result<DashboardView, DashboardError> {
        let today = self.clock.today();
        let courses = self.courses.list_courses().await?;
        let deadlines = self.deadlines.list_deadlines().await?;
        let activity = self.activity.weekly_activity().await?;

        let stats = aggregate_activity(today, &courses, &activity, &deadlines);
        let names = course_names(&courses);

        let classifier = DeadlineClassifier::new(self.config.overdue_policy);
        let cards: Vec<DeadlineCardVm> = classifier
            .rank(today, &deadlines, self.config.overdue_placement)
            .into_iter()
            .take(self.config.max_deadlines)
            .map(|(deadline, proximity)| {
                let course_name = names.get(deadline.course_ref()).copied();
                if course_name.is_none() {
                    warn!(
                        deadline = %deadline.id(),
                        course = %deadline.course_ref(),
                        "deadline references unknown course"
                    );
                }
                DeadlineCardVm::new(deadline, course_name, proximity)
            })
            .collect();

        debug!(
            %today,
            courses = courses.len(),
            deadlines = deadlines.len(),
            shown = cards.len(),
            study_hours = stats.total_study_hours,
            upcoming_exams = stats.upcoming_exams,
            "built dashboard"
        );

        Ok(DashboardView {
            date_label: format_long_date(today),
            stats,
            deadlines: cards,
            courses: courses.iter().map(CourseProgressVm::from).collect(),
        })
    }
}

pub(crate) fn course_names(courses: &[Course]) -> HashMap<&CourseId, &str> {
    courses.iter().map(|c| (c.id(), c.name())).collect()
}
