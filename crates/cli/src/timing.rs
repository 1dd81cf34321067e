// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timing data structures for --timing flag.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Phase timing breakdown.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PhaseTiming {
    /// Keyword and text loading time.
    pub load_ms: u64,
    /// Table construction time.
    pub build_ms: u64,
    /// Scan time across all texts.
    pub scan_ms: u64,
    /// Total elapsed time.
    pub total_ms: u64,
}

/// Complete timing information.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimingInfo {
    /// Phase breakdown.
    #[serde(flatten)]
    pub phases: PhaseTiming,
    /// Number of texts scanned.
    pub texts: usize,
    /// Bytes scanned.
    pub bytes: usize,
}

impl PhaseTiming {
    /// Format as text output lines for stderr.
    pub fn format_text(&self) -> String {
        format!(
            "load: {}ms\nbuild: {}ms\nscan: {}ms\ntotal: {}ms",
            self.load_ms, self.build_ms, self.scan_ms, self.total_ms
        )
    }
}

impl TimingInfo {
    /// Scan throughput line, in MB/s.
    pub fn format_throughput(&self) -> String {
        let mb = self.bytes as f64 / 1_000_000.0;
        if self.phases.scan_ms == 0 {
            format!("scanned: {:.1}MB in {} texts", mb, self.texts)
        } else {
            let rate = mb / (self.phases.scan_ms as f64 / 1000.0);
            format!(
                "scanned: {:.1}MB in {} texts ({:.1}MB/s)",
                mb, self.texts, rate
            )
        }
    }
}

/// Measures consecutive phases from one starting instant.
#[derive(Debug)]
pub struct Stopwatch {
    start: Instant,
    lap: Instant,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

impl Stopwatch {
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            lap: now,
        }
    }

    /// Milliseconds since the previous lap (or start).
    pub fn lap(&mut self) -> u64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.lap);
        self.lap = now;
        millis(elapsed)
    }

    /// Milliseconds since start.
    pub fn total(&self) -> u64 {
        millis(self.start.elapsed())
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "timing_tests.rs"]
mod tests;
