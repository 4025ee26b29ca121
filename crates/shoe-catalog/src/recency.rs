//! Recency window for new-release detection.

use chrono::{DateTime, Duration, Utc};

use crate::error::CatalogError;

/// Default window: one 30-day month.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// How recently a shoe must have been released to count as new.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    days: i64,
}

impl RecencyWindow {
    /// Create a window of the given number of days.
    pub fn days(days: i64) -> Result<Self, CatalogError> {
        if days <= 0 || Duration::try_days(days).is_none() {
            return Err(CatalogError::InvalidRecencyWindow(days));
        }
        Ok(Self { days })
    }

    /// Window length in days.
    pub fn len_days(&self) -> i64 {
        self.days
    }

    /// Window length as a duration.
    pub fn duration(&self) -> Duration {
        Duration::days(self.days)
    }

    /// True when `release_date` is no older than the window at `now`.
    ///
    /// Release dates in the future are always new.
    pub fn is_new(&self, release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(release_date) <= self.duration()
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
        }
    }
}
