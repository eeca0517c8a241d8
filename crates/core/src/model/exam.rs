use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ColorTag, CourseId, ExamId, ProgressPercent};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamError {
    #[error("exam title cannot be empty")]
    EmptyTitle,

    #[error("exam location cannot be empty")]
    EmptyLocation,
}

/// Unvalidated exam input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamDraft {
    pub title: String,
    pub course_ref: CourseId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub study_progress: i64,
    pub color: ColorTag,
}

impl ExamDraft {
    /// Validate the draft into an `Exam`.
    ///
    /// # Errors
    ///
    /// Returns `ExamError` for a blank title or location.
    pub fn validate(self, id: ExamId) -> Result<Exam, ExamError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ExamError::EmptyTitle);
        }
        let location = self.location.trim();
        if location.is_empty() {
            return Err(ExamError::EmptyLocation);
        }
        Ok(Exam {
            id,
            title: title.to_owned(),
            course_ref: self.course_ref,
            date: self.date,
            time: self.time,
            location: location.to_owned(),
            study_progress: ProgressPercent::clamped(self.study_progress),
            color: self.color,
        })
    }
}

/// A scheduled exam with its preparation progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExamRecord", into = "ExamRecord")]
pub struct Exam {
    id: ExamId,
    title: String,
    course_ref: CourseId,
    date: NaiveDate,
    time: NaiveTime,
    location: String,
    study_progress: ProgressPercent,
    color: ColorTag,
}

impl Exam {
    #[must_use]
    pub fn id(&self) -> &ExamId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn course_ref(&self) -> &CourseId {
        &self.course_ref
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    #[must_use]
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn study_progress(&self) -> ProgressPercent {
        self.study_progress
    }

    #[must_use]
    pub fn color(&self) -> &ColorTag {
        &self.color
    }
}

#[derive(Serialize, Deserialize)]
pub struct ExamRecord {
    id: ExamId,
    title: String,
    course_ref: CourseId,
    date: NaiveDate,
    time: NaiveTime,
    location: String,
    study_progress: i64,
    color: ColorTag,
}

impl TryFrom<ExamRecord> for Exam {
    type Error = ExamError;

    fn try_from(record: ExamRecord) -> Result<Self, Self::Error> {
        ExamDraft {
            title: record.title,
            course_ref: record.course_ref,
            date: record.date,
            time: record.time,
            location: record.location,
            study_progress: record.study_progress,
            color: record.color,
        }
        .validate(record.id)
    }
}

impl From<Exam> for ExamRecord {
    fn from(exam: Exam) -> Self {
        Self {
            id: exam.id,
            title: exam.title,
            course_ref: exam.course_ref,
            date: exam.date,
            time: exam.time,
            location: exam.location,
            study_progress: i64::from(exam.study_progress.value()),
            color: exam.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ExamDraft {
        ExamDraft {
            title: "Midterm Exam".into(),
            course_ref: CourseId::new("1").unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            location: "Room 301".into(),
            study_progress: 65,
            color: ColorTag::parse("#4287f5").unwrap(),
        }
    }

    #[test]
    fn validates_a_well_formed_draft() {
        let exam = draft().validate(ExamId::new("1").unwrap()).unwrap();
        assert_eq!(exam.title(), "Midterm Exam");
        assert_eq!(
            exam.starts_at(),
            NaiveDate::from_ymd_opt(2025, 3, 15)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn rejects_blank_location() {
        let mut d = draft();
        d.location = " ".into();
        assert_eq!(
            d.validate(ExamId::generate()).unwrap_err(),
            ExamError::EmptyLocation
        );
    }

    #[test]
    fn serde_round_trip_keeps_the_record() {
        let exam = draft().validate(ExamId::new("1").unwrap()).unwrap();
        let json = serde_json::to_string(&exam).unwrap();
        let back: Exam = serde_json::from_str(&json).unwrap();
        assert_eq!(back, exam);
    }

    #[test]
    fn deserializing_rejects_blank_location() {
        let json = r##"{"id":"1","title":"Midterm Exam","course_ref":"1","date":"2025-03-15",
            "time":"10:00:00","location":"","study_progress":65,"color":"#4287f5"}"##;
        let err = serde_json::from_str::<Exam>(json).unwrap_err();
        assert!(err.to_string().contains("exam location cannot be empty"));
    }
}
