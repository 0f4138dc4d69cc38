// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bootgate-core: deferred-visibility loading overlay coordinator
//!
//! This crate provides:
//! - A pure state machine deciding when a loading overlay is mounted and visible
//! - Per-instance timer slots and a synchronous driver ([`BootGate`])
//! - A clock abstraction so timing can be tested deterministically
//! - TOML configuration of the timing windows

pub mod clock;
pub mod config;

pub mod coordinator;
pub mod effect;
pub mod gate;
pub mod phase;
pub mod scheduler;
pub mod timer;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{BootConfig, ConfigError};
pub use coordinator::{BootEvent, BootState};
pub use effect::{Effect, Event};
pub use gate::{BootGate, Transition};
pub use phase::{Output, Phase};
pub use scheduler::{ScheduledTimer, Scheduler};
pub use timer::{CycleId, TimerId, TimerKind};
