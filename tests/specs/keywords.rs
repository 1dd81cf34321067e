//! Behavioral specs for keyword sources.
//!
//! Tests that kwscan correctly handles:
//! - -k with a comma list or a file path
//! - -e repeated once per keyword
//! - -f keyword files with blank lines and CRLF endings
//! - missing or empty keyword sets

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// COMMA LISTS
// =============================================================================

/// > -k splits on commas and keeps the first of any duplicate
#[test]
fn comma_list_drops_duplicates_and_empties() {
    let ws = Workspace::empty();
    run_matches(ws.search(&["-s", "-k", "dog,,cat,dog", "cat dog"])).stdout_eq(
        "<text>: 2 matches
  dog: 4
  cat: 0
",
    );
}

/// > Whitespace around commas belongs to the keyword
#[test]
fn comma_list_keeps_surrounding_spaces() {
    let ws = Workspace::empty();
    run_no_match(ws.search(&["-s", "-k", "cat , dog", "cat,dog"]));
}

/// > A list with no keywords in it is an input error
#[test]
fn empty_comma_list_is_an_error() {
    let ws = Workspace::empty();
    run_config_error(ws.search(&["-k", ",,", "cat"])).stderr_has("empty pattern set");
}

// =============================================================================
// REPEATED KEYWORDS
// =============================================================================

/// > -e keeps commas inside a keyword
#[test]
fn repeated_keyword_flag_keeps_commas() {
    let ws = Workspace::empty();
    run_matches(ws.search(&["-e", "a,b", "-e", "c", "xa,bx"])).stdout_eq(
        "<text>: 1 match
  a,b: 1
",
    );
}

#[test]
fn keyword_sources_are_mutually_exclusive() {
    let ws = Workspace::empty();
    run_config_error(ws.search(&["-k", "cat", "-e", "dog", "cat dog"]))
        .stderr_has("cannot be used with");
}

// =============================================================================
// KEYWORD FILES
// =============================================================================

/// > -f reads one keyword per line, skipping blank lines
#[test]
fn keywords_file_one_per_line() {
    let ws = Workspace::empty();
    let mut cmd = ws.cmd();
    cmd.arg("search")
        .arg("-f")
        .arg(fixture("corpus/keywords.txt"))
        .arg(fixture("corpus/syslog.txt"));

    run_matches(cmd)
        .stdout_has("4 matches")
        .stdout_has("  error: 29, 58\n")
        .stdout_has("  warning: 8\n")
        .stdout_has("  fatal: 78\n");
}

/// > -k naming an existing file reads keywords from it
#[test]
fn keywords_flag_accepts_file_path() {
    let ws = Workspace::empty();
    ws.file("words.txt", "cat\ndog\n");
    run_matches(ws.search(&["-k", "words.txt", "hot dog"])).stdout_eq(
        "<text>: 1 match
  dog: 4
",
    );
}

/// > A missing keyword file is an input error
#[test]
fn missing_keywords_file_is_an_error() {
    let ws = Workspace::empty();
    run_config_error(ws.search(&["-f", "absent.txt", "cat"]))
        .stderr_has("keyword source error: absent.txt");
}

#[test]
fn blank_keywords_file_is_an_error() {
    let ws = Workspace::empty();
    ws.file("blank.txt", "\n\n\r\n");
    run_config_error(ws.search(&["-f", "blank.txt", "cat"])).stderr_has("empty pattern set");
}

// =============================================================================
// NO KEYWORDS
// =============================================================================

/// > Without a flag or config, kwscan asks for keywords
#[test]
fn no_keywords_is_argument_error() {
    let ws = Workspace::empty();
    run_config_error(ws.search(&["cat"])).stderr_has("no keywords given");
}
