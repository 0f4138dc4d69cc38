// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted input timelines for the boot gate
//!
//! ```toml
//! until = "2s"
//!
//! [config]
//! delay = "80ms"
//!
//! [[step]]
//! at = "0ms"
//! key = "home"
//!
//! [[step]]
//! at = "100ms"
//! ready = true
//! ```
//!
//! Without `until`, a replay runs for the config's worst case past the last step.

use bootgate_core::{BootConfig, BootGate, ConfigError, FakeClock, Output, Transition};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors from loading or validating a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("scenario has no steps")]
    Empty,
    #[error("first step must set a key")]
    NoInitialKey,
    #[error("step {index} at {at:?} comes before the previous step at {previous:?}")]
    OutOfOrder {
        index: usize,
        at: Duration,
        previous: Duration,
    },
    #[error("step {index} does nothing; set key, ready or teardown")]
    EmptyStep { index: usize },
    #[error("step {index} combines teardown with new inputs")]
    TeardownWithInputs { index: usize },
    #[error("step {index} comes after teardown")]
    AfterTeardown { index: usize },
    #[error("step {index} at {at:?} is later than {max:?}")]
    StepOutOfRange {
        index: usize,
        at: Duration,
        max: Duration,
    },
    #[error("until of {until:?} is later than {max:?}")]
    UntilOutOfRange { until: Duration, max: Duration },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Cycle key as written in a scenario: an integer or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScenarioKey {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioKey::Int(n) => write!(f, "{}", n),
            ScenarioKey::Str(s) => write!(f, "{}", s),
        }
    }
}

/// One scripted input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    /// Offset from the start of the replay
    #[serde(with = "humantime_serde")]
    pub at: Duration,
    pub key: Option<ScenarioKey>,
    pub ready: Option<bool>,
    #[serde(default)]
    pub teardown: bool,
}

/// A config plus an ordered list of steps
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub config: BootConfig,
    #[serde(default, with = "humantime_serde")]
    pub until: Option<Duration>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// One line of a replay timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub at_ms: u64,
    pub cycle: u64,
    pub event: String,
    pub mounted: bool,
    pub visible: bool,
}

impl Record {
    fn from_transition(transition: &Transition, origin: Instant) -> Self {
        Self {
            at_ms: millis(transition.at.saturating_duration_since(origin)),
            cycle: transition.event.cycle().0,
            event: transition.event.name().to_string(),
            mounted: transition.output.mounted,
            visible: transition.output.visible,
        }
    }

    pub fn output(&self) -> Output {
        Output {
            mounted: self.mounted,
            visible: self.visible,
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>6}ms  cycle {:<3} {:<18} {}",
            self.at_ms,
            self.cycle,
            self.event,
            self.output()
        )
    }
}

pub fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Scenario {
    pub fn from_toml(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    fn validate(&self) -> Result<(), ScenarioError> {
        self.config.validate()?;
        let max = BootConfig::MAX_WINDOW;
        if let Some(until) = self.until.filter(|until| *until > max) {
            return Err(ScenarioError::UntilOutOfRange { until, max });
        }

        let first = self.steps.first().ok_or(ScenarioError::Empty)?;
        if first.key.is_none() {
            return Err(ScenarioError::NoInitialKey);
        }

        let mut previous = Duration::ZERO;
        let mut torn_down = false;
        for (index, step) in self.steps.iter().enumerate() {
            if torn_down {
                return Err(ScenarioError::AfterTeardown { index });
            }
            if step.at > max {
                return Err(ScenarioError::StepOutOfRange {
                    index,
                    at: step.at,
                    max,
                });
            }
            if step.at < previous {
                return Err(ScenarioError::OutOfOrder {
                    index,
                    at: step.at,
                    previous,
                });
            }
            let has_inputs = step.key.is_some() || step.ready.is_some();
            if step.teardown && has_inputs {
                return Err(ScenarioError::TeardownWithInputs { index });
            }
            if !step.teardown && !has_inputs {
                return Err(ScenarioError::EmptyStep { index });
            }
            previous = step.at;
            torn_down = step.teardown;
        }
        Ok(())
    }

    /// Offset at which a replay stops
    pub fn end(&self) -> Duration {
        let last = self.steps.last().map(|s| s.at).unwrap_or_default();
        match self.until {
            Some(until) => until.max(last),
            None => last.saturating_add(self.config.worst_case()),
        }
    }

    /// Run the steps against a gate on a fake clock
    pub fn replay(&self) -> Result<Vec<Record>, ScenarioError> {
        let clock = FakeClock::new();
        let origin = clock.origin();
        let mut gate: BootGate<ScenarioKey, FakeClock> = BootGate::new(self.config, clock);
        let mut records = Vec::new();

        let mut push = |transitions: Vec<Transition>| {
            records.extend(
                transitions
                    .iter()
                    .map(|t| Record::from_transition(t, origin)),
            );
        };

        for (index, step) in self.steps.iter().enumerate() {
            let at = origin
                .checked_add(step.at)
                .ok_or(ScenarioError::StepOutOfRange {
                    index,
                    at: step.at,
                    max: BootConfig::MAX_WINDOW,
                })?;
            push(gate.run_until(at));
            tracing::debug!(at = ?step.at, key = ?step.key, ready = ?step.ready, teardown = step.teardown, "step");

            if step.teardown {
                push(gate.teardown());
                continue;
            }
            let transitions = match (&step.key, step.ready) {
                (Some(key), Some(ready)) => gate.update(key.clone(), ready),
                (Some(key), None) => gate.set_key(key.clone()),
                (None, Some(ready)) => gate.set_ready(ready),
                (None, None) => Vec::new(),
            };
            push(transitions);
        }

        let end = self.end();
        let until = origin
            .checked_add(end)
            .ok_or(ScenarioError::UntilOutOfRange {
                until: end,
                max: BootConfig::MAX_WINDOW,
            })?;
        push(gate.run_until(until));
        Ok(records)
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
