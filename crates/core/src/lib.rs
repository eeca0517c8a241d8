//! Pure domain logic for the study dashboard: records, deadline proximity,
//! weekly statistics and progress bars.

#![forbid(unsafe_code)]

pub mod aggregator;
pub mod classifier;
pub mod error;
pub mod format;
pub mod model;
pub mod progress_bar;
pub mod time;

pub use aggregator::{WeeklyStats, aggregate};
pub use classifier::{DeadlineClassifier, OverduePlacement, OverduePolicy, Proximity, classify};
pub use error::Error;
pub use progress_bar::width_fraction;
pub use time::{Clock, DateError};
