//! Deadline proximity labels and urgency ordering.
//!
//! Both the reference date and the due date are compared as local calendar
//! dates; time of day never changes the result.
//!
//! ```
//! # use chrono::NaiveDate;
//! # use study_core::classifier::classify;
//! let today = NaiveDate::from_ymd_opt(2025, 5, 8).unwrap();
//! let due = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
//! assert_eq!(classify(today, due).label, "In 2 days");
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::format::format_short_date;
use crate::model::Deadline;

const OVERDUE_LABEL: &str = "Overdue";

//
// ─── TYPES ─────────────────────────────────────────────────────────────────────
//

/// Proximity bucket, for callers that style items differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProximityKind {
    Overdue,
    Today,
    Tomorrow,
    ThisWeek,
    Later,
}

/// Human-readable label plus the day difference it was derived from.
///
/// `days_remaining` doubles as the urgency rank: lower is more urgent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Proximity {
    pub label: String,
    pub days_remaining: i64,
    pub kind: ProximityKind,
}

/// How past-due dates are labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverduePolicy {
    /// Same abbreviated `May 15` form as far-future dates.
    #[default]
    AbbreviatedDate,
    /// A literal `Overdue` label.
    Label,
}

/// Where past-due items land when ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverduePlacement {
    #[default]
    First,
    Last,
}

//
// ─── CLASSIFIER ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeadlineClassifier {
    overdue_policy: OverduePolicy,
}

impl DeadlineClassifier {
    #[must_use]
    pub fn new(overdue_policy: OverduePolicy) -> Self {
        Self { overdue_policy }
    }

    /// Classify `due` relative to `today`.
    #[must_use]
    pub fn classify(&self, today: NaiveDate, due: NaiveDate) -> Proximity {
        let days_remaining = days_between(today, due);
        let kind = kind_for(days_remaining);
        let label = match kind {
            ProximityKind::Today => "Today".to_owned(),
            ProximityKind::Tomorrow => "Tomorrow".to_owned(),
            ProximityKind::ThisWeek => format!("In {days_remaining} days"),
            ProximityKind::Overdue if self.overdue_policy == OverduePolicy::Label => {
                OVERDUE_LABEL.to_owned()
            }
            ProximityKind::Overdue | ProximityKind::Later => format_short_date(due),
        };
        Proximity {
            label,
            days_remaining,
            kind,
        }
    }

    /// Pair each deadline with its proximity, most urgent first.
    ///
    /// Equal ranks keep their input order.
    #[must_use]
    pub fn rank<'a>(
        &self,
        today: NaiveDate,
        deadlines: impl IntoIterator<Item = &'a Deadline>,
        placement: OverduePlacement,
    ) -> Vec<(&'a Deadline, Proximity)> {
        let mut ranked: Vec<_> = deadlines
            .into_iter()
            .map(|deadline| (deadline, self.classify(today, deadline.due_date())))
            .collect();
        ranked.sort_by_key(|(_, proximity)| urgency_key(proximity.days_remaining, placement));
        ranked
    }
}

//
// ─── FREE FUNCTIONS ────────────────────────────────────────────────────────────
//

/// Classify with the default policy: past-due dates render as `May 15`.
#[must_use]
pub fn classify(today: NaiveDate, due: NaiveDate) -> Proximity {
    DeadlineClassifier::default().classify(today, due)
}

/// Classify two instants, ignoring their time of day.
#[must_use]
pub fn classify_instants(now: NaiveDateTime, due: NaiveDateTime) -> Proximity {
    classify(now.date(), due.date())
}

/// Rank deadlines with the default policy.
#[must_use]
pub fn rank_deadlines<'a>(
    today: NaiveDate,
    deadlines: impl IntoIterator<Item = &'a Deadline>,
    placement: OverduePlacement,
) -> Vec<(&'a Deadline, Proximity)> {
    DeadlineClassifier::default().rank(today, deadlines, placement)
}

/// Whole calendar days from `today` to `due`; negative once `due` has passed.
#[must_use]
pub fn days_between(today: NaiveDate, due: NaiveDate) -> i64 {
    due.signed_duration_since(today).num_days()
}

fn kind_for(days_remaining: i64) -> ProximityKind {
    match days_remaining {
        d if d < 0 => ProximityKind::Overdue,
        0 => ProximityKind::Today,
        1 => ProximityKind::Tomorrow,
        2..=6 => ProximityKind::ThisWeek,
        _ => ProximityKind::Later,
    }
}

fn urgency_key(days_remaining: i64, placement: OverduePlacement) -> (bool, i64) {
    let overdue = days_remaining < 0;
    match placement {
        OverduePlacement::First => (!overdue, days_remaining),
        OverduePlacement::Last => (overdue, days_remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColorTag, CourseId, DeadlineCategory, DeadlineId};
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 5, 8)
    }

    fn deadline(id: &str, due: NaiveDate) -> Deadline {
        Deadline::new(
            DeadlineId::new(id).unwrap(),
            format!("Task {id}"),
            CourseId::new("1").unwrap(),
            due,
            DeadlineCategory::Assignment,
            ColorTag::default(),
        )
        .unwrap()
    }

    #[test]
    fn same_day_is_today() {
        let p = classify(today(), today());
        assert_eq!(p.label, "Today");
        assert_eq!(p.days_remaining, 0);
        assert_eq!(p.kind, ProximityKind::Today);
    }

    #[test]
    fn next_day_is_tomorrow() {
        let p = classify(today(), today() + Duration::days(1));
        assert_eq!(p.label, "Tomorrow");
        assert_eq!(p.days_remaining, 1);
    }

    #[test]
    fn within_a_week_counts_days() {
        for n in 2..=6 {
            let p = classify(today(), today() + Duration::days(n));
            assert_eq!(p.label, format!("In {n} days"));
            assert_eq!(p.days_remaining, n);
            assert_eq!(p.kind, ProximityKind::ThisWeek);
        }
    }

    #[test]
    fn a_week_or_more_uses_month_and_day() {
        assert_eq!(classify(today(), date(2025, 5, 15)).label, "May 15");
        assert_eq!(classify(today(), date(2025, 5, 18)).label, "May 18");
        assert_eq!(classify(today(), date(2026, 1, 2)).kind, ProximityKind::Later);
    }

    #[test]
    fn past_due_falls_back_to_date_by_default() {
        let p = classify(today(), date(2025, 5, 1));
        assert_eq!(p.label, "May 1");
        assert_eq!(p.days_remaining, -7);
        assert_eq!(p.kind, ProximityKind::Overdue);
    }

    #[test]
    fn overdue_label_policy() {
        let classifier = DeadlineClassifier::new(OverduePolicy::Label);
        let p = classifier.classify(today(), date(2025, 5, 7));
        assert_eq!(p.label, "Overdue");
        assert_eq!(p.days_remaining, -1);
        // future dates are unaffected
        assert_eq!(classifier.classify(today(), date(2025, 5, 10)).label, "In 2 days");
    }

    #[test]
    fn time_of_day_is_ignored() {
        let now = today().and_hms_opt(23, 59, 0).unwrap();
        let due = date(2025, 5, 9).and_hms_opt(0, 1, 0).unwrap();
        assert_eq!(classify_instants(now, due).label, "Tomorrow");

        let morning = today().and_hms_opt(0, 0, 0).unwrap();
        let evening = today().and_hms_opt(22, 0, 0).unwrap();
        assert_eq!(classify_instants(evening, morning).label, "Today");
    }

    #[test]
    fn dashboard_scenario() {
        let labels: Vec<_> = [date(2025, 5, 10), date(2025, 5, 15), date(2025, 5, 18)]
            .into_iter()
            .map(|due| classify(today(), due).label)
            .collect();
        assert_eq!(labels, vec!["In 2 days", "May 15", "May 18"]);
    }

    #[test]
    fn classification_is_idempotent() {
        let due = date(2025, 5, 12);
        assert_eq!(classify(today(), due), classify(today(), due));
    }

    #[test]
    fn rank_puts_overdue_first_by_default() {
        let items = vec![
            deadline("late", date(2025, 5, 18)),
            deadline("past", date(2025, 5, 2)),
            deadline("soon", date(2025, 5, 10)),
        ];
        let ranked = rank_deadlines(today(), &items, OverduePlacement::First);
        let ids: Vec<_> = ranked.iter().map(|(d, _)| d.id().as_str()).collect();
        assert_eq!(ids, vec!["past", "soon", "late"]);
    }

    #[test]
    fn rank_can_put_overdue_last() {
        let items = vec![
            deadline("past", date(2025, 5, 2)),
            deadline("late", date(2025, 5, 18)),
            deadline("soon", date(2025, 5, 10)),
        ];
        let ranked = rank_deadlines(today(), &items, OverduePlacement::Last);
        let ids: Vec<_> = ranked.iter().map(|(d, _)| d.id().as_str()).collect();
        assert_eq!(ids, vec!["soon", "late", "past"]);
    }

    #[test]
    fn rank_is_stable_for_ties() {
        let items = vec![
            deadline("a", date(2025, 5, 10)),
            deadline("b", date(2025, 5, 10)),
        ];
        let ranked = rank_deadlines(today(), &items, OverduePlacement::First);
        assert_eq!(ranked[0].0.id().as_str(), "a");
        assert_eq!(ranked[1].0.id().as_str(), "b");
    }
}
