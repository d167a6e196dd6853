//! Expiry configuration: how often the sweep runs and how long new items live

use serde::Deserialize;

/// Longest accepted due offset (one hundred years)
pub const MAX_DUE_HOURS: i64 = 24 * 365 * 100;

/// Expiry settings
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiryConfig {
    /// Seconds between expiry sweeps (the timer re-arms after each sweep)
    pub sweep_interval_secs: u64,
    /// Hours from creation until a new item is due
    pub default_due_hours: i64,
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self {
            sweep_interval_secs: 60,
            default_due_hours: 24,
        }
    }
}

/// Expiry settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileExpiry {
    pub sweep_interval_secs: Option<u64>,
    pub default_due_hours: Option<i64>,
}

impl ExpiryConfig {
    /// Create from file config with defaults
    ///
    /// A zero interval would spin the timer; it is raised to one second.
    /// Due offsets outside `1..=MAX_DUE_HOURS` fall back to the default.
    pub fn from_file(file: Option<FileExpiry>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            sweep_interval_secs: file
                .sweep_interval_secs
                .unwrap_or(defaults.sweep_interval_secs)
                .max(1),
            default_due_hours: file
                .default_due_hours
                .filter(|hours| (1..=MAX_DUE_HOURS).contains(hours))
                .unwrap_or(defaults.default_due_hours),
        }
    }

    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sweep_interval_secs.max(1))
    }

    pub fn default_due(&self) -> chrono::Duration {
        chrono::Duration::hours(self.default_due_hours.clamp(1, MAX_DUE_HOURS))
    }
}
