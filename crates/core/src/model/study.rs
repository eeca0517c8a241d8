use serde::{Deserialize, Serialize};

/// A block of study time logged during the week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    hours: f64,
}

impl StudySession {
    /// Negative or non-finite hours are recorded as zero.
    #[must_use]
    pub fn new(hours: f64) -> Self {
        Self {
            hours: normalize_hours(hours),
        }
    }

    #[must_use]
    pub fn hours(&self) -> f64 {
        self.hours
    }
}

/// Raw weekly activity the dashboard summarizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyActivity {
    sessions: Vec<StudySession>,
    completed_tasks: u32,
}

impl WeeklyActivity {
    #[must_use]
    pub fn new(sessions: Vec<StudySession>, completed_tasks: u32) -> Self {
        Self {
            sessions,
            completed_tasks,
        }
    }

    #[must_use]
    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    #[must_use]
    pub fn completed_tasks(&self) -> u32 {
        self.completed_tasks
    }

    /// Hour entries in logging order.
    #[must_use]
    pub fn hours(&self) -> Vec<f64> {
        self.sessions.iter().map(StudySession::hours).collect()
    }
}

pub(crate) fn normalize_hours(hours: f64) -> f64 {
    if hours.is_finite() && hours > 0.0 {
        hours
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hours_become_zero() {
        assert_eq!(StudySession::new(-2.0).hours(), 0.0);
        assert_eq!(StudySession::new(f64::NAN).hours(), 0.0);
        assert_eq!(StudySession::new(f64::INFINITY).hours(), 0.0);
        assert_eq!(StudySession::new(1.5).hours(), 1.5);
    }

    #[test]
    fn activity_exposes_hours_in_order() {
        let activity = WeeklyActivity::new(
            vec![StudySession::new(2.0), StudySession::new(3.5)],
            4,
        );
        assert_eq!(activity.hours(), vec![2.0, 3.5]);
        assert_eq!(activity.completed_tasks(), 4);
    }
}
