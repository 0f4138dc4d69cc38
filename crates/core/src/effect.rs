// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for boot gate orchestration

use crate::timer::{CycleId, TimerId, TimerKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Side effects the coordinator asks its driver to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm a timer, replacing any timer of the same kind
    SetTimer { timer: TimerId, duration: Duration },
    /// Disarm the timer of this kind, if any
    CancelTimer { kind: TimerKind },
    /// Report a transition
    Emit(Event),
}

/// Transitions reported by the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A new cycle entered the pending window
    CycleStarted { cycle: CycleId },
    /// The cycle finished without ever showing the overlay
    Resolved { cycle: CycleId },
    /// The overlay became visible
    Shown { cycle: CycleId },
    /// The hide animation started
    ExitStarted { cycle: CycleId },
    /// The overlay was removed after its hide animation
    Unmounted { cycle: CycleId },
    /// The coordinator was disposed
    TornDown { cycle: CycleId },
}

impl Event {
    /// Short name for logs and timelines
    pub fn name(&self) -> &'static str {
        match self {
            Event::CycleStarted { .. } => "cycle:started",
            Event::Resolved { .. } => "cycle:resolved",
            Event::Shown { .. } => "overlay:shown",
            Event::ExitStarted { .. } => "overlay:exiting",
            Event::Unmounted { .. } => "overlay:unmounted",
            Event::TornDown { .. } => "gate:torn-down",
        }
    }

    pub fn cycle(&self) -> CycleId {
        match self {
            Event::CycleStarted { cycle }
            | Event::Resolved { cycle }
            | Event::Shown { cycle }
            | Event::ExitStarted { cycle }
            | Event::Unmounted { cycle }
            | Event::TornDown { cycle } => *cycle,
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
