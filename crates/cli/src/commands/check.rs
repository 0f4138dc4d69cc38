// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration inspection commands

use crate::output::{self, OutputFormat};
use anyhow::Result;
use bootgate_core::BootConfig;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Configuration file to validate
    config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

/// Effective timing windows of a config
#[derive(Debug, Serialize)]
struct Report {
    #[serde(flatten)]
    config: BootConfig,
    #[serde(with = "humantime_serde")]
    worst_case: Duration,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = [
            ("delay", self.config.delay),
            ("min_visible", self.config.min_visible),
            ("max_wait", self.config.max_wait),
            ("exit", self.config.exit),
            ("worst_case", self.worst_case),
        ];
        for (i, (name, value)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<12} {}", name, humantime::format_duration(*value))?;
        }
        Ok(())
    }
}

pub fn check(args: CheckArgs) -> Result<()> {
    let config = BootConfig::load(&args.config)?;
    tracing::debug!(path = %args.config.display(), ?config, "config loaded");

    let report = Report {
        config,
        worst_case: config.worst_case(),
    };
    output::print(&report, args.format)?;
    Ok(())
}

/// Print the default configuration as TOML
pub fn defaults() -> Result<()> {
    print!("{}", BootConfig::default().to_toml()?);
    Ok(())
}
