//! Live replay specs
//!
//! Live replays run in real time, so only the sequence of outputs is checked.

use crate::prelude::*;

const QUICK: &str = r#"
[config]
delay = "20ms"
min_visible = "20ms"
max_wait = "200ms"
exit = "20ms"

[[step]]
at = "0ms"
key = "home"

[[step]]
at = "100ms"
ready = true
"#;

#[test]
fn live_replay_prints_each_output_change() {
    let temp = Project::empty();
    temp.file("scenario.toml", QUICK);

    let run = temp
        .bootgate()
        .args(&["replay", "scenario.toml", "--live"])
        .passes();
    let outputs: Vec<String> = run
        .stdout()
        .lines()
        .map(|line| line.split("ms  ").nth(1).unwrap().to_string())
        .collect();

    assert_eq!(
        outputs,
        vec![
            "mounted=false visible=false",
            "mounted=true visible=true",
            "mounted=true visible=false",
            "mounted=false visible=false",
        ]
    );
}

#[test]
fn live_replay_waits_for_the_first_step() {
    let temp = Project::empty();
    temp.file(
        "scenario.toml",
        r#"
[config]
delay = "20ms"
min_visible = "20ms"
max_wait = "200ms"
exit = "20ms"

[[step]]
at = "150ms"
key = "home"
ready = true
"#,
    );

    let run = temp
        .bootgate()
        .args(&["replay", "scenario.toml", "--live"])
        .passes();
    let stdout = run.stdout();
    let first = stdout.lines().next().unwrap();
    let offset: u64 = first.split("ms").next().unwrap().trim().parse().unwrap();

    assert!(offset >= 150, "first change at {}ms", offset);
    assert!(first.ends_with("mounted=false visible=false"));
}
