//! Replay timeline specs
//!
//! Replays run on a fake clock, so offsets are exact.

use crate::prelude::*;

#[test]
fn slow_backend_shows_then_exits() {
    let temp = Project::empty();
    temp.file("scenario.toml", SLOW_BACKEND);

    temp.bootgate()
        .args(&["replay", "scenario.toml"])
        .passes()
        .stdout_eq(concat!(
            "     0ms  cycle 1   cycle:started      mounted=false visible=false\n",
            "    80ms  cycle 1   overlay:shown      mounted=true visible=true\n",
            "   300ms  cycle 1   overlay:exiting    mounted=true visible=false\n",
            "   460ms  cycle 1   overlay:unmounted  mounted=false visible=false\n",
        ));
}

#[test]
fn fast_backend_never_mounts() {
    let temp = Project::empty();
    temp.file("scenario.toml", FAST_BACKEND);

    let run = temp
        .bootgate()
        .args(&["replay", "scenario.toml"])
        .passes()
        .stdout_has("cycle:resolved");
    assert!(!run.stdout().contains("mounted=true"));
}

#[test]
fn never_ready_is_bounded_by_max_wait() {
    let temp = Project::empty();
    temp.file("scenario.toml", "[[step]]\nat = \"0ms\"\nkey = \"home\"\n");

    temp.bootgate()
        .args(&["replay", "scenario.toml"])
        .passes()
        .stdout_has("  1280ms  cycle 1   overlay:exiting")
        .stdout_has("  1440ms  cycle 1   overlay:unmounted");
}

#[test]
fn key_change_restarts_the_window() {
    let temp = Project::empty();
    temp.file(
        "scenario.toml",
        "[[step]]\nat = \"0ms\"\nkey = 1\n\n[[step]]\nat = \"50ms\"\nkey = 2\n",
    );

    let run = temp
        .bootgate()
        .args(&["replay", "scenario.toml"])
        .passes()
        .stdout_has("    50ms  cycle 2   cycle:started")
        .stdout_has("   130ms  cycle 2   overlay:shown");
    assert!(!run.stdout().contains("cycle 1   overlay:shown"));
}

#[test]
fn scenario_config_overrides_defaults() {
    let temp = Project::empty();
    temp.file(
        "scenario.toml",
        r#"
[config]
delay = "10ms"
min_visible = "50ms"
exit = "5ms"

[[step]]
at = "0ms"
key = "home"

[[step]]
at = "20ms"
ready = true
"#,
    );

    temp.bootgate()
        .args(&["replay", "scenario.toml"])
        .passes()
        .stdout_has("    10ms  cycle 1   overlay:shown")
        .stdout_has("    60ms  cycle 1   overlay:exiting")
        .stdout_has("    65ms  cycle 1   overlay:unmounted");
}

#[test]
fn json_format_lists_records() {
    let temp = Project::empty();
    temp.file("scenario.toml", SLOW_BACKEND);

    let run = temp
        .bootgate()
        .args(&["replay", "scenario.toml", "--format", "json"])
        .passes();
    let records = run.json();
    let records = records.as_array().unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(records[1]["at_ms"], 80);
    assert_eq!(records[1]["event"], "overlay:shown");
    assert_eq!(records[1]["mounted"], true);
    assert_eq!(records[3]["at_ms"], 460);
    assert_eq!(records[3]["visible"], false);
}

#[test]
fn teardown_ends_the_timeline() {
    let temp = Project::empty();
    temp.file(
        "scenario.toml",
        "[[step]]\nat = \"0ms\"\nkey = \"home\"\n\n[[step]]\nat = \"100ms\"\nteardown = true\n",
    );

    let run = temp
        .bootgate()
        .args(&["replay", "scenario.toml"])
        .passes()
        .stdout_has("   100ms  cycle 1   gate:torn-down     mounted=true visible=true");
    assert!(!run.stdout().contains("overlay:exiting"));
}

#[test]
fn late_first_step_offsets_the_whole_timeline() {
    let temp = Project::empty();
    temp.file(
        "scenario.toml",
        "[[step]]\nat = \"100ms\"\nkey = \"home\"\n\n[[step]]\nat = \"200ms\"\nready = true\n",
    );

    temp.bootgate()
        .args(&["replay", "scenario.toml"])
        .passes()
        .stdout_has("   100ms  cycle 1   cycle:started")
        .stdout_has("   180ms  cycle 1   overlay:shown")
        .stdout_has("   400ms  cycle 1   overlay:exiting");
}

#[test]
fn ready_dropping_after_resolve_shows_the_overlay() {
    let temp = Project::empty();
    temp.file(
        "scenario.toml",
        "[[step]]\nat = \"0ms\"\nkey = \"home\"\nready = true\n\n[[step]]\nat = \"200ms\"\nready = false\n",
    );

    temp.bootgate()
        .args(&["replay", "scenario.toml"])
        .passes()
        .stdout_has("   200ms  cycle 2   cycle:started")
        .stdout_has("   280ms  cycle 2   overlay:shown");
}
