//! Config check specs

use crate::prelude::*;

#[test]
fn check_prints_effective_windows() {
    let temp = Project::empty();
    temp.file("config.toml", "max_wait = \"2s\"\n");

    temp.bootgate()
        .args(&["check", "config.toml"])
        .passes()
        .stdout_eq(concat!(
            "delay        80ms\n",
            "min_visible  220ms\n",
            "max_wait     2s\n",
            "exit         160ms\n",
            "worst_case   2s 240ms\n",
        ));
}

#[test]
fn check_accounts_for_long_min_visible() {
    let temp = Project::empty();
    temp.file("config.toml", "min_visible = \"3s\"\n");

    temp.bootgate()
        .args(&["check", "config.toml"])
        .passes()
        .stdout_has("worst_case   3s 240ms");
}

#[test]
fn check_json_uses_human_durations() {
    let temp = Project::empty();
    temp.file("config.toml", "delay = \"100ms\"\n");

    let run = temp
        .bootgate()
        .args(&["check", "config.toml", "--format", "json"])
        .passes();
    let report = run.json();

    assert_eq!(report["delay"], "100ms");
    assert_eq!(report["max_wait"], "1s 200ms");
    assert_eq!(report["worst_case"], "1s 460ms");
}

#[test]
fn empty_config_uses_defaults() {
    let temp = Project::empty();
    temp.file("config.toml", "");

    temp.bootgate()
        .args(&["check", "config.toml"])
        .passes()
        .stdout_has("worst_case   1s 440ms");
}
