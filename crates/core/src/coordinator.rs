// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Boot gate state machine
//!
//! Decides when a loading overlay should appear and disappear for one cycle of
//! work. Nothing is shown if readiness arrives inside the delay window. Once
//! shown, the overlay stays up for at least the minimum visible time and is
//! then animated away. A max-wait backstop forces the cycle closed if
//! readiness never arrives.
//!
//! The machine is pure: every input returns the next state plus the
//! [`Effect`]s (timers to arm or cancel, events to report) a driver must apply.
//! Timers carry the [`CycleId`] that armed them and are ignored once a newer
//! cycle has started.

use crate::clock::Clock;
use crate::config::BootConfig;
use crate::effect::{Effect, Event};
use crate::phase::{Output, Phase};
use crate::timer::{CycleId, TimerId, TimerKind};
use std::fmt::Debug;
use std::time::Instant;

/// Inputs that drive the coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootEvent<K> {
    /// Latest caller inputs. A key different from the previous one, or `ready`
    /// falling back to false, starts a new cycle; a false to true change of
    /// `ready` completes the current cycle.
    Inputs { key: K, ready: bool },
    /// A timer armed through [`Effect::SetTimer`] reached its deadline
    TimerFired { timer: TimerId },
    /// The owner is going away
    Teardown,
}

/// Coordinator state for one overlay
#[derive(Debug, Clone)]
pub struct BootState<K> {
    config: BootConfig,
    cycle: CycleId,
    phase: Phase,
    key: Option<K>,
    ready: bool,
    shown_at: Option<Instant>,
    output: Output,
    torn_down: bool,
}

impl<K: Clone + PartialEq + Debug> BootState<K> {
    /// Create an idle coordinator. The first [`BootEvent::Inputs`] starts cycle 1.
    pub fn new(config: BootConfig) -> Self {
        Self {
            config,
            cycle: CycleId::default(),
            phase: Phase::Done,
            key: None,
            ready: false,
            shown_at: None,
            output: Output::HIDDEN,
            torn_down: false,
        }
    }

    /// Handle an event and return the new state plus effects
    pub fn transition(&self, event: BootEvent<K>, clock: &impl Clock) -> (BootState<K>, Vec<Effect>) {
        let mut state = self.clone();
        let mut effects = Vec::new();

        if state.torn_down {
            return (state, effects);
        }

        let now = clock.now();
        match event {
            BootEvent::Inputs { key, ready } => {
                let key_changed = state.key.as_ref() != Some(&key);
                let rising = ready && !state.ready;
                let falling = !ready && state.ready;
                state.key = Some(key);
                state.ready = ready;

                if key_changed || falling {
                    state.start_cycle(&mut effects);
                } else if rising {
                    state.complete(now, &mut effects);
                }
            }

            BootEvent::TimerFired { timer } => {
                if timer.cycle != state.cycle {
                    tracing::trace!(%timer, current = %state.cycle, "ignoring stale timer");
                } else {
                    match timer.kind {
                        TimerKind::Delay => state.delay_elapsed(now, &mut effects),
                        TimerKind::MaxWait => {
                            tracing::debug!(cycle = %state.cycle, phase = %state.phase, "max wait reached");
                            state.complete(now, &mut effects);
                        }
                        TimerKind::MinVisible => state.start_exit(&mut effects),
                        TimerKind::Exit => state.exit_elapsed(&mut effects),
                    }
                }
            }

            BootEvent::Teardown => {
                state.torn_down = true;
                cancel(&mut effects, &TimerKind::ALL);
                effects.push(Effect::Emit(Event::TornDown { cycle: state.cycle }));
                tracing::debug!(cycle = %state.cycle, "torn down");
            }
        }

        (state, effects)
    }

    fn start_cycle(&mut self, effects: &mut Vec<Effect>) {
        self.cycle = self.cycle.next();
        self.phase = Phase::Pending;
        self.shown_at = None;
        self.output = Output::HIDDEN;

        cancel(effects, &TimerKind::ALL);
        effects.push(Effect::Emit(Event::CycleStarted { cycle: self.cycle }));
        tracing::debug!(cycle = %self.cycle, key = ?self.key, ready = self.ready, "cycle started");

        if self.ready {
            self.resolve(effects);
            return;
        }

        effects.push(Effect::SetTimer {
            timer: TimerId::new(TimerKind::Delay, self.cycle),
            duration: self.config.delay,
        });
        // Max wait is counted from the end of the delay window
        effects.push(Effect::SetTimer {
            timer: TimerId::new(TimerKind::MaxWait, self.cycle),
            duration: self.config.delay.saturating_add(self.config.max_wait),
        });
    }

    fn delay_elapsed(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.phase != Phase::Pending {
            return;
        }
        if self.ready {
            self.complete(now, effects);
            return;
        }

        self.phase = Phase::Visible;
        self.shown_at = Some(now);
        self.output = Output::SHOWN;
        effects.push(Effect::Emit(Event::Shown { cycle: self.cycle }));
        tracing::debug!(cycle = %self.cycle, "overlay shown");
    }

    /// Finish the cycle. Safe to call any number of times.
    fn complete(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if !self.phase.is_open() {
            return;
        }

        cancel(effects, &[TimerKind::Delay, TimerKind::MaxWait]);

        match self.phase {
            Phase::Pending => self.resolve(effects),
            Phase::Visible => {
                let min_visible = self.config.min_visible;
                let elapsed = self
                    .shown_at
                    .map(|shown_at| now.saturating_duration_since(shown_at))
                    .unwrap_or(min_visible);

                if elapsed >= min_visible {
                    self.start_exit(effects);
                } else {
                    let remaining = min_visible - elapsed;
                    tracing::debug!(cycle = %self.cycle, ?remaining, "holding overlay for min visible");
                    effects.push(Effect::SetTimer {
                        timer: TimerId::new(TimerKind::MinVisible, self.cycle),
                        duration: remaining,
                    });
                }
            }
            Phase::Exiting | Phase::Done => {}
        }
    }

    /// Close a cycle that never showed anything
    fn resolve(&mut self, effects: &mut Vec<Effect>) {
        self.phase = Phase::Done;
        self.output = Output::HIDDEN;
        effects.push(Effect::Emit(Event::Resolved { cycle: self.cycle }));
        tracing::debug!(cycle = %self.cycle, "resolved without showing");
    }

    fn start_exit(&mut self, effects: &mut Vec<Effect>) {
        if self.phase != Phase::Visible {
            return;
        }

        self.phase = Phase::Exiting;
        self.output = Output::EXITING;
        effects.push(Effect::SetTimer {
            timer: TimerId::new(TimerKind::Exit, self.cycle),
            duration: self.config.exit,
        });
        effects.push(Effect::Emit(Event::ExitStarted { cycle: self.cycle }));
        tracing::debug!(cycle = %self.cycle, "exit started");
    }

    fn exit_elapsed(&mut self, effects: &mut Vec<Effect>) {
        if self.phase != Phase::Exiting {
            return;
        }

        self.phase = Phase::Done;
        self.output = Output::HIDDEN;
        effects.push(Effect::Emit(Event::Unmounted { cycle: self.cycle }));
        tracing::debug!(cycle = %self.cycle, "overlay unmounted");
    }

    pub fn config(&self) -> &BootConfig {
        &self.config
    }

    pub fn cycle(&self) -> CycleId {
        self.cycle
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn output(&self) -> Output {
        self.output
    }

    /// Key of the current cycle, if any input has been seen
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn shown_at(&self) -> Option<Instant> {
        self.shown_at
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

fn cancel(effects: &mut Vec<Effect>, kinds: &[TimerKind]) {
    effects.extend(kinds.iter().map(|&kind| Effect::CancelTimer { kind }));
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
