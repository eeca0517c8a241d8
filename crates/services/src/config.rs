//! Dashboard configuration.
//!
//! Loaded from TOML, then optionally overridden by `STUDY_DASH_*` environment
//! variables:
//!
//! ```toml
//! overdue_policy = "label"       # or "abbreviated_date"
//! overdue_placement = "last"     # or "first"
//! max_deadlines = 5
//! ```

use serde::{Deserialize, Serialize};
use study_core::{OverduePlacement, OverduePolicy};

use crate::error::ConfigError;

pub const ENV_OVERDUE_POLICY: &str = "STUDY_DASH_OVERDUE_POLICY";
pub const ENV_OVERDUE_PLACEMENT: &str = "STUDY_DASH_OVERDUE_PLACEMENT";
pub const ENV_MAX_DEADLINES: &str = "STUDY_DASH_MAX_DEADLINES";

const DEFAULT_MAX_DEADLINES: usize = 3;

fn default_max_deadlines() -> usize {
    DEFAULT_MAX_DEADLINES
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// How past-due deadlines are labelled.
    #[serde(default)]
    pub overdue_policy: OverduePolicy,
    /// Whether past-due deadlines sort before or after upcoming ones.
    #[serde(default)]
    pub overdue_placement: OverduePlacement,
    /// Deadlines shown on the home screen.
    #[serde(default = "default_max_deadlines")]
    pub max_deadlines: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            overdue_policy: OverduePolicy::default(),
            overdue_placement: OverduePlacement::default(),
            max_deadlines: DEFAULT_MAX_DEADLINES,
        }
    }
}

impl DashboardConfig {
    /// Parse a TOML document; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply `STUDY_DASH_*` overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable holds an unknown value.
    pub fn apply_env_overrides(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a key holds an unknown value.
    pub fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup(ENV_OVERDUE_POLICY) {
            self.overdue_policy = match raw.trim().to_ascii_lowercase().as_str() {
                "abbreviated_date" => OverduePolicy::AbbreviatedDate,
                "label" => OverduePolicy::Label,
                _ => return Err(invalid(ENV_OVERDUE_POLICY, raw)),
            };
        }
        if let Some(raw) = lookup(ENV_OVERDUE_PLACEMENT) {
            self.overdue_placement = match raw.trim().to_ascii_lowercase().as_str() {
                "first" => OverduePlacement::First,
                "last" => OverduePlacement::Last,
                _ => return Err(invalid(ENV_OVERDUE_PLACEMENT, raw)),
            };
        }
        if let Some(raw) = lookup(ENV_MAX_DEADLINES) {
            self.max_deadlines = raw
                .trim()
                .parse()
                .map_err(|_| invalid(ENV_MAX_DEADLINES, raw))?;
        }
        Ok(self)
    }
}

fn invalid(key: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue { key, value }
}
