//! Output formatting for search results.
//!
//! A [`TextReport`] is built once per scanned text and handed to either
//! formatter. Offsets beyond the limit are dropped from the report but
//! still counted.

pub mod json;
pub mod text;

use serde::Serialize;

use crate::pattern::{PatternId, PatternSet};
use crate::scanner::{Match, MatchCollection};

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Maximum offsets to show per keyword (None = unlimited).
    pub limit: Option<usize>,
}

impl FormatOptions {
    /// Create options with no limit.
    pub fn no_limit() -> Self {
        Self { limit: None }
    }

    /// Create options with a specific limit. Zero means no limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: (limit > 0).then_some(limit),
        }
    }
}

/// Occurrences of one keyword in one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordHits {
    pub id: PatternId,
    pub keyword: String,
    pub count: usize,
    pub offsets: Vec<usize>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

/// Outcome of scanning one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextReport {
    pub source: String,
    pub bytes: usize,
    pub total: usize,
    pub keywords: Vec<KeywordHits>,
    /// Matches in scan order, present in streaming mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Match>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TextReport {
    /// Report for a completed scan, grouped by keyword in id order.
    pub fn new(
        source: String,
        bytes: usize,
        patterns: &PatternSet,
        matches: &MatchCollection,
        options: &FormatOptions,
    ) -> Self {
        let keywords = matches
            .iter()
            .map(|(id, offsets)| {
                let shown = options.limit.map_or(offsets.len(), |l| l.min(offsets.len()));
                KeywordHits {
                    id,
                    keyword: patterns
                        .get(id)
                        .map(|p| p.display().into_owned())
                        .unwrap_or_default(),
                    count: offsets.len(),
                    offsets: offsets[..shown].to_vec(),
                    truncated: shown < offsets.len(),
                }
            })
            .collect();

        Self {
            source,
            bytes,
            total: matches.total(),
            keywords,
            events: None,
            error: None,
        }
    }

    /// Attach the ordered event log.
    pub fn with_events(mut self, events: Vec<Match>) -> Self {
        self.events = Some(events);
        self
    }

    /// Report for a text that could not be loaded or scanned.
    pub fn failed(source: String, error: &crate::Error) -> Self {
        Self {
            source,
            bytes: 0,
            total: 0,
            keywords: Vec::new(),
            events: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
