// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--color` / `--no-color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default:
//!    - If not stdout.is_tty() → no color
//!    - If CLAUDE_CODE, CODEX, CI, or CURSOR env var set → no color
//!    - Else → use color

use std::io::IsTerminal;
use termcolor::ColorChoice;

use crate::env::{self, names};

/// Resolve color choice from command-line flags, then the environment.
pub fn choose(force: bool, disable: bool) -> ColorChoice {
    if disable {
        ColorChoice::Never
    } else if force {
        ColorChoice::Always
    } else {
        resolve_color()
    }
}

/// Resolve color choice from environment variables.
///
/// Priority: NO_COLOR > COLOR > auto-detect
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color() -> ColorChoice {
    if env::is_set(names::NO_COLOR) {
        return ColorChoice::Never;
    }
    if env::is_set(names::COLOR) {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    if is_agent_environment() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Check if running in an AI agent or CI environment.
fn is_agent_environment() -> bool {
    [names::CLAUDE_CODE, names::CODEX, names::CURSOR, names::CI]
        .into_iter()
        .any(env::is_set)
}

/// Color scheme for search output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Cyan text source (file path, URL).
    pub fn source() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow byte offset.
    pub fn offset() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Bold red matched keyword.
    pub fn keyword() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Bold match count.
    pub fn count() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Bold heading in table statistics.
    pub fn heading() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
