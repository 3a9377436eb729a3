// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn tl() -> Command {
    let mut cmd = cargo_bin_cmd!("tl");
    cmd.env_remove("TL_LOG");
    cmd
}

pub const WAR_DIARY: &str = r##"{
  "id": "notes/war.md",
  "tags": ["#history/war", "europe"],
  "events": [
    {"name": "outbreak", "title": "War begins", "date": "1914/7/28", "eventTags": "war;politics"},
    {"name": "somme", "dateStart": "1916/7/1", "dateEnd": "1916/11/18", "eventTags": "war/battle"},
    {"name": "armistice", "date": "1918/11/11", "eventTags": "war/end", "milestone": "true"}
  ]
}"##;

pub const ANTIQUITY: &str = r##"{
  "id": "notes/rome.md",
  "tags": ["history/ancient"],
  "events": [
    {"name": "founding", "date": "-753/4/21", "eventTags": "rome"},
    {"name": "caesar", "date": "-44/3/15", "eventTags": "rome;politics"},
    {"name": "legend"}
  ]
}"##;

pub const TRAINING: &str = r##"{
  "id": "log/training.md",
  "tags": ["sport"],
  "events": [
    {"name": "run", "date": "2021/5/1", "value": "10km", "eventTags": "run"},
    {"name": "swim", "date": "2021/5/2", "value": 800, "unit": "m", "eventTags": "swim"},
    {"name": "ride", "date": "2021/5/3", "value": "1.5h", "eventTags": "bike"}
  ]
}"##;

/// A temp directory holding the three sample documents.
pub fn library() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(&temp, "notes/war.json", WAR_DIARY);
    write(&temp, "notes/rome.json", ANTIQUITY);
    write(&temp, "log/training.json", TRAINING);
    temp
}

pub fn write(temp: &TempDir, name: &str, content: &str) {
    let path = temp.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Event names, taken from the second column of text output.
pub fn names(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1).map(String::from))
        .collect()
}
