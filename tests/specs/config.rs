//! Behavioral specs for kwscan.toml.
//!
//! Tests that kwscan correctly handles:
//! - discovery from the working directory upward
//! - -C/--config and KWSCAN_CONFIG
//! - flags taking precedence over config values
//! - unknown keys (warning) and invalid values (error)

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// DISCOVERY
// =============================================================================

/// > kwscan.toml in the working directory supplies keywords and case mode
#[test]
fn config_in_working_directory_is_used() {
    let mut cmd = kwscan_cmd();
    cmd.current_dir(fixture("corpus"))
        .args(["search", "syslog.txt"]);

    run_matches(cmd).stdout_eq(
        "syslog.txt: 2 matches
  error: 29
  fatal: 78
",
    );
}

/// > Discovery walks up from subdirectories
#[test]
fn config_found_in_parent_directory() {
    let ws = Workspace::with_config("version = 1\n[keywords]\nlist = [\"needle\"]\n");
    ws.file("sub/dir/hay.txt", "hay needle hay");

    let mut cmd = kwscan_cmd();
    cmd.current_dir(ws.join("sub/dir")).args(["search", "hay.txt"]);
    run_matches(cmd).stdout_has("needle: 4");
}

/// > Discovery stops at the git root
#[test]
fn discovery_stops_at_git_root() {
    let ws = Workspace::with_config("version = 1\n[keywords]\nlist = [\"needle\"]\n");
    std::fs::create_dir_all(ws.join("repo/.git")).unwrap();

    let mut cmd = kwscan_cmd();
    cmd.current_dir(ws.join("repo")).args(["search", "needle"]);
    run_config_error(cmd).stderr_has("no keywords given");
}

/// > Keyword files in config are relative to the config file
#[test]
fn keywords_file_relative_to_config() {
    let ws = Workspace::with_config("version = 1\n[keywords]\nfile = \"lists/words.txt\"\n");
    ws.file("lists/words.txt", "alpha\nbeta\n");
    ws.file("sub/.keep", "");

    let mut cmd = kwscan_cmd();
    cmd.current_dir(ws.join("sub"))
        .args(["search", "-c", "alpha beta gamma"]);
    run_matches(cmd).stdout_eq("<text>: 2\n");
}

// =============================================================================
// EXPLICIT CONFIG
// =============================================================================

/// > -C names the config file to load
#[test]
fn config_flag_loads_named_file() {
    let ws = Workspace::empty();
    ws.file("custom.toml", "version = 1\n[keywords]\nlist = [\"cat\"]\n");
    run_matches(ws.search(&["-C", "custom.toml", "a cat"])).stdout_has("cat: 2");
}

/// > KWSCAN_CONFIG is equivalent to -C
#[test]
fn config_env_var_loads_named_file() {
    let ws = Workspace::empty();
    ws.file("custom.toml", "version = 1\n[keywords]\nlist = [\"cat\"]\n");
    let mut cmd = ws.search(&["a cat"]);
    cmd.env("KWSCAN_CONFIG", ws.join("custom.toml"));
    run_matches(cmd).stdout_has("cat: 2");
}

/// > A named config that does not exist is a config error
#[test]
fn missing_named_config_is_error() {
    let ws = Workspace::empty();
    run_config_error(ws.search(&["-C", "absent.toml", "-k", "cat", "cat"]))
        .stderr_has("config file not found");
}

// =============================================================================
// PRECEDENCE
// =============================================================================

/// > Command-line keywords replace configured keywords
#[test]
fn keyword_flags_override_config() {
    let ws = Workspace::with_config("version = 1\n[keywords]\nlist = [\"cat\"]\n");
    run_matches(ws.search(&["-k", "dog", "cat dog"])).stdout_eq(
        "<text>: 1 match
  dog: 4
",
    );
}

/// > -i overrides case_insensitive = false
#[test]
fn case_flag_overrides_config() {
    let ws = Workspace::with_config("version = 1\n[search]\ncase_insensitive = false\n");
    run_no_match(ws.search(&["-k", "CAT", "a cat"]));
    run_matches(ws.search(&["-i", "-k", "CAT", "a cat"]));
}

/// > short_text = "error" makes short texts fail
#[test]
fn short_text_error_from_config() {
    let ws = Workspace::with_config("version = 1\n[search]\nshort_text = \"error\"\n");
    run_config_error(ws.search(&["-k", "elephant", "cat"])).stderr_has("text too short");
}

/// > output.format and output.limit apply unless overridden
#[test]
fn output_settings_from_config() {
    let ws = Workspace::with_config("version = 1\n[output]\nformat = \"json\"\nlimit = 1\n");
    let json = run_matches(ws.search(&["-k", "a", "aaa"])).json();
    assert_eq!(json["texts"][0]["keywords"][0]["offsets"], serde_json::json!([0]));

    run_matches(ws.search(&["-o", "text", "--limit", "0", "-k", "a", "aaa"]))
        .stdout_eq("<text>: 3 matches\n  a: 0, 1, 2\n");
}

// =============================================================================
// VALIDATION
// =============================================================================

/// > Unknown keys warn and are ignored
#[test]
fn unknown_key_warns() {
    let ws = Workspace::with_config("version = 1\n[search]\nturbo = true\n");
    run_matches(ws.search(&["-k", "cat", "a cat"]))
        .stderr_has("unrecognized field `search.turbo` (ignored)");
}

#[test]
fn unknown_section_warns() {
    let ws = Workspace::with_config("version = 1\n[plugins]\nx = 1\n");
    run_matches(ws.search(&["-k", "cat", "a cat"]))
        .stderr_has("unrecognized field `plugins` (ignored)");
}

/// > version is required and must be supported
#[test]
fn missing_version_is_error() {
    let ws = Workspace::with_config("[keywords]\nlist = [\"cat\"]\n");
    run_config_error(ws.search(&["a cat"])).stderr_has("missing required field: version");
}

#[test]
fn unsupported_version_is_error() {
    let ws = Workspace::with_config("version = 2\n");
    run_config_error(ws.search(&["-k", "cat", "a cat"]))
        .stderr_has("unsupported config version 2");
}

#[test]
fn invalid_block_width_is_error() {
    let ws = Workspace::with_config("version = 1\n[search]\nblock_width = 7\n");
    run_config_error(ws.search(&["-k", "cat", "a cat"])).stderr_has("search.block_width");
}

#[test]
fn list_and_file_together_is_error() {
    let ws = Workspace::with_config(
        "version = 1\n[keywords]\nlist = [\"cat\"]\nfile = \"words.txt\"\n",
    );
    run_config_error(ws.search(&["a cat"])).stderr_has("config error");
}

#[test]
fn malformed_toml_is_error() {
    let ws = Workspace::with_config("version = = 1\n");
    run_config_error(ws.search(&["-k", "cat", "a cat"])).stderr_has("config error");
}

/// > Configured keywords apply to every text
#[test]
fn config_keywords_across_several_texts() {
    let mut cmd = kwscan_cmd();
    cmd.current_dir(fixture("corpus"))
        .args(["search", "quiet.txt", "syslog.txt"]);

    run_matches(cmd)
        .stdout_has("quiet.txt: 0 matches\n")
        .stdout_has("syslog.txt: 2 matches\n")
        .stdout_has("2 matches in 1 of 2 texts\n");
}

#[test]
fn config_keywords_without_match_exit_one() {
    let mut cmd = kwscan_cmd();
    cmd.current_dir(fixture("corpus"))
        .args(["search", "quiet.txt"]);
    run_no_match(cmd).stdout_eq("quiet.txt: 0 matches\n");
}
