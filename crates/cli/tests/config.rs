// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn config_file_supplies_search_defaults() {
    let temp = library();
    write(&temp, "timeline.toml", "[search]\ntags = \"history\"\nevent_tags = \"politics\"\n");
    let output = tl().arg("search").current_dir(temp.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(names(&output.stdout), vec!["caesar", "outbreak"]);
}

#[test]
fn flags_override_config() {
    let temp = library();
    write(&temp, "timeline.toml", "[search]\nevent_tags = \"politics\"\n");
    let output = tl()
        .args(["search", "--event-tags", "rome"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert_eq!(names(&output.stdout), vec!["founding", "caesar"]);
}

#[test]
fn explicit_config_path() {
    let temp = library();
    write(&temp, "conf/alt.toml", "[search]\nevent_tags = \"bike\"\n");
    let output = tl()
        .args(["--config", "conf/alt.toml", "search"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert_eq!(names(&output.stdout), vec!["ride"]);
}

#[test]
fn missing_explicit_config_fails() {
    let temp = library();
    tl().args(["--config", "nope.toml", "search"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn unknown_config_key_fails() {
    let temp = library();
    write(&temp, "timeline.toml", "[search]\nlimit = 5\n");
    tl().arg("search")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn config_log_level_enables_debug_output() {
    let temp = library();
    write(&temp, "timeline.toml", "[log]\nlevel = \"debug\"\n");
    tl().arg("search")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded document"));
}

#[test]
fn completion_generates_script() {
    tl().args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tl"));
}
