use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColorTagError {
    #[error("color tag must look like #rrggbb, got `{0}`")]
    Invalid(String),
}

/// Display color attached to a course, exam or deadline.
///
/// Stored lowercase in `#rrggbb` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorTag(String);

impl ColorTag {
    /// Parse a `#rrggbb` tag (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `ColorTagError::Invalid` for any other shape.
    pub fn parse(raw: &str) -> Result<Self, ColorTagError> {
        let trimmed = raw.trim();
        let valid = trimmed.len() == 7
            && trimmed.starts_with('#')
            && trimmed[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(ColorTagError::Invalid(raw.to_owned()));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue components.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }

    /// The tag with a two-digit alpha suffix, e.g. `#f5424230` for chip backgrounds.
    #[must_use]
    pub fn tint(&self, alpha: u8) -> String {
        format!("{}{alpha:02x}", self.0)
    }
}

impl Default for ColorTag {
    fn default() -> Self {
        Self("#000000".to_owned())
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ColorTag {
    type Error = ColorTagError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<ColorTag> for String {
    fn from(tag: ColorTag) -> Self {
        tag.0
    }
}

impl FromStr for ColorTag {
    type Err = ColorTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
