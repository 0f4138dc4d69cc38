//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    bootgate()
        .args(&["--help"])
        .passes()
        .stdout_has("replay")
        .stdout_has("check")
        .stdout_has("defaults");
}

#[test]
fn replay_help_describes_live_flag() {
    bootgate()
        .args(&["replay", "--help"])
        .passes()
        .stdout_has("--live")
        .stdout_has("--format");
}

#[test]
fn version_flag_prints_version() {
    bootgate()
        .args(&["--version"])
        .passes()
        .stdout_has("bootgate");
}
