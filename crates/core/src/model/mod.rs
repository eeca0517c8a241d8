mod color;
mod course;
mod deadline;
mod exam;
mod ids;
mod percent;
mod study;

pub use ids::{CourseId, DeadlineId, ExamId, ParseIdError};

pub use color::{ColorTag, ColorTagError};
pub use course::{Course, CourseDraft, CourseError};
pub use deadline::{Deadline, DeadlineCategory, DeadlineError};
pub use exam::{Exam, ExamDraft, ExamError};
pub use percent::ProgressPercent;
pub use study::{StudySession, WeeklyActivity};

pub(crate) use study::normalize_hours;
