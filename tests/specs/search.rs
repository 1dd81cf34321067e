//! Behavioral specs for `kwscan search`.
//!
//! Covers match reporting, case handling, overlap, exit codes, and the
//! text source kinds (file, literal, URL).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// MATCHES
// =============================================================================

/// > Each keyword is reported with its offsets, keywords in input order
#[test]
fn reports_offsets_per_keyword() {
    let ws = Workspace::empty();
    run_matches(ws.search(&["-s", "-k", "cat,dog", "the cat sat on the dog"])).stdout_eq(
        "<text>: 2 matches
  cat: 4
  dog: 19
",
    );
}

/// > Keywords sharing a prefix both match at the same offset, in id order
#[test]
fn overlapping_prefixes_both_match() {
    let ws = Workspace::empty();
    run_matches(ws.search(&["-s", "-v", "-k", "ab,abc", "xabcx"])).stdout_eq(
        "<text>:1: ab
<text>:1: abc
",
    );
}

/// > Matches may overlap each other
#[test]
fn overlapping_occurrences_are_all_reported() {
    let ws = Workspace::empty();
    run_matches(ws.search(&["-k", "aa", "aaaa"])).stdout_eq(
        "<text>: 3 matches
  aa: 0, 1, 2
",
    );
}

/// > Case-insensitive matching is the default
#[test]
fn ignores_case_by_default() {
    let ws = Workspace::empty();
    run_matches(ws.search(&["-k", "CAT", "a cat"])).stdout_eq(
        "<text>: 1 match
  CAT: 2
",
    );
}

/// > --case-sensitive compares bytes exactly
#[test]
fn case_sensitive_flag_rejects_other_case() {
    let ws = Workspace::empty();
    run_no_match(ws.search(&["-s", "-k", "CAT", "a cat"])).stdout_eq("<text>: 0 matches\n");
}

#[test]
fn ignore_case_conflicts_with_case_sensitive() {
    let ws = Workspace::empty();
    run_config_error(ws.search(&["-i", "-s", "-k", "cat", "a cat"]))
        .stderr_has("cannot be used with");
}

/// > Non-ASCII bytes never fold
#[test]
fn non_ascii_bytes_match_exactly() {
    let ws = Workspace::empty();
    run_matches(ws.search(&["-k", "café", "un CAFÉ, un café"])).stdout_eq(
        "<text>: 1 match
  café: 13
",
    );
}

// =============================================================================
// EXIT CODES
// =============================================================================

/// > Exit 1 when the scan completes without a match
#[test]
fn no_match_exits_one() {
    let ws = Workspace::empty();
    run_no_match(ws.search(&["-k", "zebra", "the cat sat"]));
}

/// > A text shorter than every keyword yields zero matches
#[test]
fn short_text_is_no_match() {
    let ws = Workspace::empty();
    run_no_match(ws.search(&["-k", "elephant", "cat"])).stdout_eq("<text>: 0 matches\n");
}

/// > --strict turns a too-short text into an input error
#[test]
fn strict_rejects_short_text() {
    let ws = Workspace::empty();
    run_config_error(ws.search(&["--strict", "-k", "elephant", "cat"]))
        .stderr_has("text too short");
}

/// > An empty text is an input error
#[test]
fn empty_text_is_an_error() {
    let ws = Workspace::empty();
    run_config_error(ws.search(&["-k", "cat", ""])).stderr_has("empty text");
}

/// > The block width never exceeds the shortest keyword
#[test]
fn block_width_is_clamped_to_shortest_keyword() {
    let ws = Workspace::empty();
    run_matches(ws.search(&["--block-width", "3", "-k", "ab,abcd", "xabcdx"])).stdout_eq(
        "<text>: 2 matches
  ab: 1
  abcd: 1
",
    );
}

#[test]
fn block_width_out_of_range_is_rejected() {
    let ws = Workspace::empty();
    run_config_error(ws.search(&["--block-width", "4", "-k", "abcd", "abcd"]));
}

/// > A text argument is required
#[test]
fn missing_text_is_argument_error() {
    let ws = Workspace::empty();
    run_config_error(ws.search(&["-k", "cat"])).stderr_has("TEXT");
}

// =============================================================================
// TEXT SOURCES
// =============================================================================

/// > An argument naming an existing file scans the file
#[test]
fn scans_file_argument() {
    let ws = Workspace::empty();
    let syslog = fixture("corpus/syslog.txt");
    let mut cmd = ws.cmd();
    cmd.args(["search", "-k", "error,warning,fatal"]).arg(&syslog);

    let expected = format!(
        "{}: 4 matches
  error: 29, 58
  warning: 8
  fatal: 78
",
        syslog.display()
    );
    run_matches(cmd).stdout_eq(&expected);
}

/// > A missing file name falls back to literal text
#[test]
fn unknown_path_is_treated_as_literal() {
    let ws = Workspace::empty();
    run_matches(ws.search(&["-k", "missing", "no/such/missing.txt"]))
        .stdout_has("<text>: 1 match");
}

/// > Several texts are scanned and summarized
#[test]
fn multiple_texts_print_summary() {
    let ws = Workspace::empty();
    ws.file("a.txt", "cat cat");
    ws.file("b.txt", "dog");
    run_matches(ws.search(&["-k", "cat", "a.txt", "b.txt"])).stdout_eq(
        "a.txt: 2 matches
  cat: 0, 4
b.txt: 0 matches
2 matches in 1 of 2 texts
",
    );
}

/// > Results keep argument order with parallel scanning
#[test]
fn parallel_scan_keeps_argument_order() {
    let ws = Workspace::empty();
    for i in 0..6 {
        ws.file(&format!("t{i}.txt"), &"needle ".repeat(i + 1));
    }
    let names: Vec<String> = (0..6).map(|i| format!("t{i}.txt")).collect();
    let mut cmd = ws.search(&["-j", "3", "-c", "-k", "needle"]);
    cmd.args(&names);

    run_matches(cmd).stdout_eq(
        "t0.txt: 1
t1.txt: 2
t2.txt: 3
t3.txt: 4
t4.txt: 5
t5.txt: 6
",
    );
}

/// > One failing text does not stop the others
#[test]
fn failed_text_is_reported_and_others_scanned() {
    let ws = Workspace::empty();
    ws.file("a.txt", "cat");
    let result = run_config_error(ws.search(&["-k", "cat", "a.txt", ""]));

    assert!(result.stdout().contains("a.txt: 1 match"));
    assert!(result.stderr().contains("kwscan: <text>: empty text"));
}

/// > An unreachable URL is a text source error
#[test]
fn unreachable_url_is_source_error() {
    let ws = Workspace::empty();
    run_config_error(ws.search(&["-k", "cat", "http://127.0.0.1:9/corpus.txt"]))
        .stderr_has("text source error");
}

// =============================================================================
// STREAMING
// =============================================================================

/// > --verbose prints every match in scan order
#[test]
fn verbose_streams_matches_in_scan_order() {
    let ws = Workspace::empty();
    run_matches(ws.search(&["-v", "-s", "-k", "dog,cat", "cat dog cat"])).stdout_eq(
        "<text>:0: cat
<text>:4: dog
<text>:8: cat
",
    );
}

#[test]
fn verbose_conflicts_with_count() {
    let ws = Workspace::empty();
    run_config_error(ws.search(&["-v", "-c", "-k", "cat", "cat"]));
}
