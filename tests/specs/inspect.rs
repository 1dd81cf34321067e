//! Behavioral specs for `kwscan inspect`.
//!
//! Inspect builds the tables for a keyword set and reports their shape
//! without scanning anything.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > inspect prints table statistics
#[test]
fn inspect_prints_table_stats() {
    let ws = Workspace::empty();
    let mut cmd = ws.cmd();
    cmd.args(["inspect", "-s", "-k", "cat,dog,bird"]);

    run_matches(cmd)
        .stdout_has("tables:\n")
        .stdout_has("  patterns: 3\n")
        .stdout_has("  case mode: case-sensitive\n")
        .stdout_has("  min length: 3\n")
        .stdout_has("  block width: 2\n")
        .stdout_has("  default shift: 2\n")
        .stdout_has("shift histogram:\n");
}

/// > Large keyword sets switch to three-byte blocks
#[test]
fn inspect_reports_wide_blocks_for_large_sets() {
    let ws = Workspace::empty();
    let words: Vec<String> = (0..150).map(|i| format!("word{i:03}")).collect();
    ws.file("words.txt", &words.join("\n"));

    let mut cmd = ws.cmd();
    cmd.args(["inspect", "-f", "words.txt"]);
    run_matches(cmd)
        .stdout_has("  patterns: 150\n")
        .stdout_has("  block width: 3\n");
}

/// > inspect -o json emits the statistics object
#[test]
fn inspect_json() {
    let ws = Workspace::empty();
    let mut cmd = ws.cmd();
    cmd.args(["inspect", "-o", "json", "-k", "abcd,abxy"]);
    let json = run_matches(cmd).json();

    assert_eq!(json["patterns"], 2);
    assert_eq!(json["min_len"], 4);
    assert_eq!(json["block"], 2);
    assert_eq!(json["case_mode"], "case-insensitive");
    assert_eq!(json["default_shift"], 3);
    assert_eq!(json["prefix_buckets"], 1);
    assert!(json["shift_histogram"].is_array());
}

/// > inspect uses configured keywords
#[test]
fn inspect_uses_config_keywords() {
    let ws = Workspace::with_config("version = 1\n[keywords]\nlist = [\"alpha\", \"beta\"]\n");
    let mut cmd = ws.cmd();
    cmd.arg("inspect");
    run_matches(cmd).stdout_has("  patterns: 2\n");
}

#[test]
fn inspect_without_keywords_fails() {
    let ws = Workspace::empty();
    let mut cmd = ws.cmd();
    cmd.arg("inspect");
    run_config_error(cmd).stderr_has("no keywords given");
}
