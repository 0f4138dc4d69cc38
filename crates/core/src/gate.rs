// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous driver for the boot gate
//!
//! [`BootGate`] owns a coordinator together with its timer slots and a clock,
//! and applies the effects each transition requests. Callers feed it inputs and
//! call [`BootGate::tick`] whenever [`BootGate::next_deadline`] has passed.

use crate::clock::{Clock, FakeClock};
use crate::config::BootConfig;
use crate::coordinator::{BootEvent, BootState};
use crate::effect::{Effect, Event};
use crate::phase::{Output, Phase};
use crate::scheduler::Scheduler;
use crate::timer::{CycleId, TimerKind};
use std::fmt::Debug;
use std::time::{Duration, Instant};

/// An event together with when it happened and the output it left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub at: Instant,
    pub event: Event,
    pub output: Output,
}

/// A coordinator wired to its own timers
pub struct BootGate<K, C: Clock> {
    state: BootState<K>,
    scheduler: Scheduler,
    clock: C,
}

impl<K, C> BootGate<K, C>
where
    K: Clone + PartialEq + Debug,
    C: Clock,
{
    pub fn new(config: BootConfig, clock: C) -> Self {
        Self {
            state: BootState::new(config),
            scheduler: Scheduler::new(),
            clock,
        }
    }

    /// Feed the latest caller inputs
    pub fn update(&mut self, key: K, ready: bool) -> Vec<Transition> {
        self.handle(BootEvent::Inputs { key, ready })
    }

    /// Change readiness for the current key. Ignored before the first key.
    pub fn set_ready(&mut self, ready: bool) -> Vec<Transition> {
        match self.state.key().cloned() {
            Some(key) => self.update(key, ready),
            None => Vec::new(),
        }
    }

    /// Switch to `key`, keeping the last readiness value
    pub fn set_key(&mut self, key: K) -> Vec<Transition> {
        let ready = self.state.is_ready();
        self.update(key, ready)
    }

    /// Fire every timer due at the current clock time, earliest first
    pub fn tick(&mut self) -> Vec<Transition> {
        let mut transitions = Vec::new();
        // Pop one at a time so a timer cancelled by an earlier one stays cancelled
        while let Some(timer) = self.scheduler.pop_due(self.clock.now()) {
            transitions.extend(self.handle(BootEvent::TimerFired { timer }));
        }
        transitions
    }

    /// Dispose of the coordinator. All timers are dropped and later inputs ignored.
    pub fn teardown(&mut self) -> Vec<Transition> {
        self.handle(BootEvent::Teardown)
    }

    fn handle(&mut self, event: BootEvent<K>) -> Vec<Transition> {
        let (state, effects) = self.state.transition(event, &self.clock);
        self.state = state;
        self.apply(effects)
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Vec<Transition> {
        let now = self.clock.now();
        let mut transitions = Vec::new();

        for effect in effects {
            match effect {
                Effect::SetTimer { timer, duration } => {
                    tracing::debug!(%timer, ?duration, "timer set");
                    self.scheduler.set_timer(timer, duration, now);
                }
                Effect::CancelTimer { kind } => {
                    if self.scheduler.is_armed(kind) {
                        tracing::trace!(%kind, "timer cancelled");
                    }
                    self.scheduler.cancel_timer(kind);
                }
                Effect::Emit(event) => {
                    tracing::info!(event = event.name(), cycle = %event.cycle(), "boot gate transition");
                    transitions.push(Transition {
                        at: now,
                        event,
                        output: self.state.output(),
                    });
                }
            }
        }

        transitions
    }

    pub fn output(&self) -> Output {
        self.state.output()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn cycle(&self) -> CycleId {
        self.state.cycle()
    }

    pub fn config(&self) -> &BootConfig {
        self.state.config()
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.scheduler.is_armed(kind)
    }

    /// When [`BootGate::tick`] next has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<K> BootGate<K, FakeClock>
where
    K: Clone + PartialEq + Debug,
{
    /// Move the fake clock forward by `duration`, stopping at each deadline on
    /// the way so every timer fires at its exact instant.
    pub fn advance(&mut self, duration: Duration) -> Vec<Transition> {
        match self.clock.now().checked_add(duration) {
            Some(target) => self.run_until(target),
            // Every armed deadline lies before the end of the clock's range
            None => self.run_until_idle(),
        }
    }

    /// Like [`BootGate::advance`], to an absolute instant
    pub fn run_until(&mut self, target: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();
        while let Some(deadline) = self.scheduler.next_deadline() {
            if deadline > target {
                break;
            }
            self.clock.set(deadline);
            transitions.extend(self.tick());
        }
        self.clock.set(target);
        transitions
    }

    fn run_until_idle(&mut self) -> Vec<Transition> {
        let mut transitions = Vec::new();
        while let Some(deadline) = self.scheduler.next_deadline() {
            self.clock.set(deadline);
            transitions.extend(self.tick());
        }
        transitions
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
