//! Default config specs

use crate::prelude::*;

#[test]
fn defaults_prints_toml() {
    bootgate()
        .args(&["defaults"])
        .passes()
        .stdout_has("delay = \"80ms\"")
        .stdout_has("min_visible = \"220ms\"")
        .stdout_has("max_wait = \"1s 200ms\"")
        .stdout_has("exit = \"160ms\"");
}

#[test]
fn defaults_output_is_a_valid_config() {
    let temp = Project::empty();
    let run = bootgate().args(&["defaults"]).passes();
    temp.file("config.toml", &run.stdout());

    temp.bootgate()
        .args(&["check", "config.toml"])
        .passes()
        .stdout_has("worst_case   1s 440ms");
}
