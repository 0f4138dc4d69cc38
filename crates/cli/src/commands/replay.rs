// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario replay

use crate::output::{self, OutputFormat};
use crate::scenario::{millis, Scenario};
use anyhow::Result;
use bootgate_core::Output;
use bootgate_runtime::Overlay;
use std::path::PathBuf;
use tokio::time::Instant;

#[derive(clap::Args)]
pub struct ReplayArgs {
    /// Scenario file to replay
    scenario: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Run the scenario in real time through the async overlay and print
    /// output changes as they happen
    #[arg(long, conflicts_with = "format")]
    live: bool,
}

pub async fn replay(args: ReplayArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    tracing::debug!(
        path = %args.scenario.display(),
        steps = scenario.steps.len(),
        end = ?scenario.end(),
        "scenario loaded"
    );

    if args.live {
        return live(&scenario).await;
    }

    let records = scenario.replay()?;
    output::print_list(&records, args.format)?;
    Ok(())
}

async fn live(scenario: &Scenario) -> Result<()> {
    let Some((first, rest)) = scenario.steps.split_first() else {
        return Ok(());
    };
    let Some(key) = first.key.clone() else {
        return Ok(());
    };

    let start = Instant::now();
    tokio::time::sleep_until(start + first.at).await;
    let overlay = Overlay::spawn(scenario.config, key, first.ready.unwrap_or(false));
    let mut rx = overlay.subscribe();

    print_change(start, *rx.borrow_and_update());
    let printer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            print_change(start, *rx.borrow_and_update());
        }
    });

    for step in rest {
        tokio::time::sleep_until(start + step.at).await;
        if step.teardown {
            overlay.teardown()?;
            break;
        }
        match (&step.key, step.ready) {
            (Some(key), Some(ready)) => overlay.update(key.clone(), ready)?,
            (Some(key), None) => overlay.set_key(key.clone())?,
            (None, Some(ready)) => overlay.set_ready(ready)?,
            (None, None) => {}
        }
    }

    tokio::time::sleep_until(start + scenario.end()).await;
    overlay.shutdown().await?;
    printer.await?;
    Ok(())
}

fn print_change(start: Instant, output: Output) {
    println!("{:>6}ms  {}", millis(start.elapsed()), output);
}
