// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer slots for a single coordinator
//!
//! A coordinator owns at most one armed timer per [`TimerKind`]. Arming a kind
//! replaces whatever was in its slot, and cancelling an empty slot is a no-op.

use crate::timer::{TimerId, TimerKind};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// A timer waiting for its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub id: TimerId,
    pub fire_at: Instant,
}

/// Holds the armed timers of one coordinator instance
#[derive(Debug, Default)]
pub struct Scheduler {
    slots: HashMap<TimerKind, ScheduledTimer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `id` to fire `duration` after `now`.
    ///
    /// A deadline past the end of the clock's range can never be reached, so
    /// the slot is left empty.
    pub fn set_timer(&mut self, id: TimerId, duration: Duration, now: Instant) {
        let Some(fire_at) = now.checked_add(duration) else {
            tracing::warn!(%id, ?duration, "timer deadline out of range, not armed");
            self.slots.remove(&id.kind);
            return;
        };
        self.slots.insert(id.kind, ScheduledTimer { id, fire_at });
    }

    /// Disarm the timer of `kind`
    pub fn cancel_timer(&mut self, kind: TimerKind) {
        self.slots.remove(&kind);
    }

    /// Remove and return the earliest timer due at `now`.
    ///
    /// Same-instant ties resolve in declaration order of [`TimerKind`].
    pub fn pop_due(&mut self, now: Instant) -> Option<TimerId> {
        let next = self
            .slots
            .values()
            .filter(|t| t.fire_at <= now)
            .min_by_key(|t| (t.fire_at, t.id.kind))
            .copied()?;
        self.slots.remove(&next.id.kind);
        Some(next.id)
    }

    pub fn has_timers(&self) -> bool {
        !self.slots.is_empty()
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.slots.contains_key(&kind)
    }

    /// Earliest deadline among armed timers
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots.values().map(|t| t.fire_at).min()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
