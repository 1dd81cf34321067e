// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use super::TextReport;
use crate::tables::TableStats;
use crate::timing::TimingInfo;

/// Top-level search output.
#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    case_mode: &'a str,
    patterns: usize,
    total: usize,
    texts: &'a [TextReport],
    #[serde(skip_serializing_if = "Option::is_none")]
    timing: Option<&'a TimingInfo>,
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write search results with optional timing.
    pub fn write_search(
        &mut self,
        case_mode: &str,
        patterns: usize,
        texts: &[TextReport],
        timing: Option<&TimingInfo>,
    ) -> std::io::Result<()> {
        let output = SearchOutput {
            case_mode,
            patterns,
            total: texts.iter().map(|t| t.total).sum(),
            texts,
            timing,
        };
        self.write_value(&output)
    }

    /// Write table statistics.
    pub fn write_stats(&mut self, stats: &TableStats) -> std::io::Result<()> {
        self.write_value(stats)
    }

    fn write_value<T: Serialize + ?Sized>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
