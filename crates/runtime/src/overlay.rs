// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Async overlay handle
//!
//! [`Overlay::spawn`] moves a [`BootGate`] onto its own task. The task sleeps
//! until the gate's next deadline or the next command, whichever comes first,
//! and publishes the output snapshot through a `watch` channel whenever it
//! changes. Dropping the handle tears the gate down.

use crate::clock::TokioClock;
use crate::error::OverlayError;
use bootgate_core::{BootConfig, BootGate, Output};
use std::fmt::Debug;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

enum Command<K> {
    Update { key: K, ready: bool },
    SetReady(bool),
    SetKey(K),
    Teardown,
}

/// Handle to a boot gate running on a tokio task
pub struct Overlay<K> {
    commands: mpsc::UnboundedSender<Command<K>>,
    output: watch::Receiver<Output>,
    task: JoinHandle<()>,
}

impl<K> Overlay<K>
where
    K: Clone + PartialEq + Debug + Send + 'static,
{
    /// Start a gate with its first cycle already begun.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(config: BootConfig, key: K, ready: bool) -> Self {
        let mut gate = BootGate::new(config, TokioClock);
        gate.update(key, ready);

        let (output_tx, output_rx) = watch::channel(gate.output());
        let (commands, command_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(drive(gate, command_rx, output_tx));

        Self {
            commands,
            output: output_rx,
            task,
        }
    }

    /// Send both inputs at once
    pub fn update(&self, key: K, ready: bool) -> Result<(), OverlayError> {
        self.send(Command::Update { key, ready })
    }

    pub fn set_ready(&self, ready: bool) -> Result<(), OverlayError> {
        self.send(Command::SetReady(ready))
    }

    /// Start a new cycle for `key` unless it equals the current one
    pub fn set_key(&self, key: K) -> Result<(), OverlayError> {
        self.send(Command::SetKey(key))
    }

    /// Latest published output
    pub fn output(&self) -> Output {
        *self.output.borrow()
    }

    /// Receiver notified on every output change
    pub fn subscribe(&self) -> watch::Receiver<Output> {
        self.output.clone()
    }

    /// Ask the task to tear the gate down without waiting for it
    pub fn teardown(&self) -> Result<(), OverlayError> {
        self.send(Command::Teardown)
    }

    /// Resolves once the task has stopped accepting commands
    pub async fn closed(&self) {
        self.commands.closed().await;
    }

    /// Tear down and wait for the task to finish
    pub async fn shutdown(self) -> Result<(), OverlayError> {
        // Already stopped is fine, the join below still reports panics
        let _ = self.commands.send(Command::Teardown);
        self.task.await?;
        Ok(())
    }

    fn send(&self, command: Command<K>) -> Result<(), OverlayError> {
        self.commands
            .send(command)
            .map_err(|_| OverlayError::Closed)
    }
}

async fn drive<K>(
    mut gate: BootGate<K, TokioClock>,
    mut commands: mpsc::UnboundedReceiver<Command<K>>,
    output: watch::Sender<Output>,
) where
    K: Clone + PartialEq + Debug,
{
    tracing::debug!(cycle = %gate.cycle(), "overlay task started");

    loop {
        let deadline = gate.next_deadline().map(Instant::from_std);
        let wake = async move {
            match deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            // Inputs are applied before a timer due at the same instant
            biased;

            command = commands.recv() => match command {
                Some(Command::Update { key, ready }) => {
                    gate.update(key, ready);
                }
                Some(Command::SetReady(ready)) => {
                    gate.set_ready(ready);
                }
                Some(Command::SetKey(key)) => {
                    gate.set_key(key);
                }
                Some(Command::Teardown) | None => {
                    gate.teardown();
                    break;
                }
            },

            () = wake => {
                gate.tick();
            }
        }

        let next = gate.output();
        output.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    tracing::debug!(cycle = %gate.cycle(), "overlay task stopped");
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
