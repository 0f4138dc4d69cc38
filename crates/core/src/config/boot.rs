// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Boot gate timing configuration
//!
//! Loaded from TOML with human-readable durations:
//!
//! ```toml
//! delay = "80ms"
//! min_visible = "220ms"
//! max_wait = "1200ms"
//! exit = "160ms"
//! ```
//!
//! Any key may be omitted and falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors from loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {field} of {value:?} is longer than {max:?}")]
    OutOfRange {
        field: &'static str,
        value: Duration,
        max: Duration,
    },
}

/// Timing knobs for one boot gate instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootConfig {
    /// Grace period before anything is shown
    #[serde(with = "humantime_serde")]
    pub delay: Duration,
    /// Minimum time the overlay stays visible once shown
    #[serde(with = "humantime_serde")]
    pub min_visible: Duration,
    /// Ceiling after the delay window at which the cycle is forced to finish
    #[serde(with = "humantime_serde")]
    pub max_wait: Duration,
    /// Length of the hide animation before unmounting
    #[serde(with = "humantime_serde")]
    pub exit: Duration,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(80),
            min_visible: Duration::from_millis(220),
            max_wait: Duration::from_millis(1200),
            exit: Duration::from_millis(160),
        }
    }
}

impl BootConfig {
    /// Longest window accepted from a config file
    pub const MAX_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_min_visible(mut self, min_visible: Duration) -> Self {
        self.min_visible = min_visible;
        self
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub fn with_exit(mut self, exit: Duration) -> Self {
        self.exit = exit;
        self
    }

    /// Upper bound on how long a cycle can keep the overlay mounted.
    ///
    /// Minimum visibility wins over max wait, so a `min_visible` longer than
    /// `max_wait` stretches the bound.
    pub fn worst_case(&self) -> Duration {
        self.delay
            .saturating_add(self.max_wait.max(self.min_visible))
            .saturating_add(self.exit)
    }

    /// Reject windows longer than [`BootConfig::MAX_WINDOW`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = [
            ("delay", self.delay),
            ("min_visible", self.min_visible),
            ("max_wait", self.max_wait),
            ("exit", self.exit),
        ];
        for (field, value) in windows {
            if value > Self::MAX_WINDOW {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    max: Self::MAX_WINDOW,
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: BootConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
#[path = "boot_tests.rs"]
mod tests;
