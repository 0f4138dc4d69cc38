// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cycle and timer identifiers

use serde::{Deserialize, Serialize};

/// Identifies one attempt at reaching readiness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CycleId(pub u64);

impl CycleId {
    pub fn next(self) -> CycleId {
        CycleId(self.0 + 1)
    }
}

impl std::fmt::Display for CycleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four timer classes a cycle may arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// End of the grace window
    Delay,
    /// Remaining minimum visibility after readiness
    MinVisible,
    /// Backstop for readiness that never arrives
    MaxWait,
    /// End of the hide animation
    Exit,
}

impl TimerKind {
    pub const ALL: [TimerKind; 4] = [
        TimerKind::Delay,
        TimerKind::MinVisible,
        TimerKind::MaxWait,
        TimerKind::Exit,
    ];
}

impl std::fmt::Display for TimerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimerKind::Delay => "delay",
            TimerKind::MinVisible => "min-visible",
            TimerKind::MaxWait => "max-wait",
            TimerKind::Exit => "exit",
        };
        write!(f, "{}", name)
    }
}

/// A timer tagged with the cycle that armed it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId {
    pub kind: TimerKind,
    pub cycle: CycleId,
}

impl TimerId {
    pub fn new(kind: TimerKind, cycle: CycleId) -> Self {
        Self { kind, cycle }
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.kind, self.cycle)
    }
}
