use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a Course
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseId(String);

/// Unique identifier for a Deadline
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeadlineId(String);

/// Unique identifier for an Exam
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExamId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            /// Creates an id from a non-empty string.
            ///
            /// # Errors
            ///
            /// Returns `ParseIdError` if the value is blank.
            pub fn new(id: impl Into<String>) -> Result<Self, ParseIdError> {
                let id = id.into();
                let trimmed = id.trim();
                if trimmed.is_empty() {
                    return Err(ParseIdError {
                        kind: stringify!($name).to_string(),
                    });
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Mints a fresh random id for records created locally.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseIdError;

            fn try_from(id: String) -> Result<Self, Self::Error> {
                Self::new(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

string_id!(CourseId);
string_id!(DeadlineId);
string_id!(ExamId);

// ─── FromStr Errors ────────────────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_display() {
        let id = CourseId::new("1").unwrap();
        assert_eq!(id.to_string(), "1");
    }

    #[test]
    fn test_course_id_trims_input() {
        let id: CourseId = "  cs101 ".parse().unwrap();
        assert_eq!(id.as_str(), "cs101");
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let err = "   ".parse::<DeadlineId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse DeadlineId from string");
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(ExamId::generate(), ExamId::generate());
    }

    #[test]
    fn test_debug_names_kind() {
        let id = ExamId::new("3").unwrap();
        assert_eq!(format!("{id:?}"), "ExamId(3)");
    }

    #[test]
    fn test_deserialize_validates() {
        let id: CourseId = serde_json::from_str("\" cs101 \"").unwrap();
        assert_eq!(id.as_str(), "cs101");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cs101\"");
        assert!(serde_json::from_str::<DeadlineId>("\"  \"").is_err());
    }
}
