// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cycle phases and the output snapshot derived from them

use serde::{Deserialize, Serialize};

/// Phase of the current cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting out the delay window before deciding to show anything
    Pending,
    /// Overlay shown, minimum visibility running
    Visible,
    /// Hide animation playing, still mounted
    Exiting,
    /// Cycle resolved, nothing shown
    Done,
}

impl Phase {
    /// Whether the cycle can still be completed.
    pub fn is_open(&self) -> bool {
        matches!(self, Phase::Pending | Phase::Visible)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Pending => "pending",
            Phase::Visible => "visible",
            Phase::Exiting => "exiting",
            Phase::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// What the caller should render.
///
/// `visible` is only ever true while `mounted` is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Overlay exists in the render tree
    pub mounted: bool,
    /// Overlay is fully shown rather than animating away
    pub visible: bool,
}

impl Output {
    pub const HIDDEN: Output = Output {
        mounted: false,
        visible: false,
    };

    pub const SHOWN: Output = Output {
        mounted: true,
        visible: true,
    };

    pub const EXITING: Output = Output {
        mounted: true,
        visible: false,
    };
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mounted={} visible={}", self.mounted, self.visible)
    }
}
