// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use memchr::memchr_iter;

use crate::error::{Error, Result};

/// A keyword list, before it is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordSource {
    /// Keywords given one by one.
    List(Vec<String>),
    /// A file with one keyword per line.
    File(PathBuf),
    /// A comma-separated string.
    Delimited(String),
}

impl KeywordSource {
    /// An existing path is a keyword file, anything else a comma list.
    pub fn detect(arg: &str) -> Self {
        let path = Path::new(arg);
        if !arg.is_empty() && path.is_file() {
            KeywordSource::File(path.to_path_buf())
        } else {
            KeywordSource::Delimited(arg.to_string())
        }
    }

    /// Load the keywords as byte strings, in source order.
    pub fn load(&self) -> Result<Vec<Vec<u8>>> {
        let keywords = match self {
            KeywordSource::List(list) => list.iter().map(|k| k.as_bytes().to_vec()).collect(),
            KeywordSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|source| Error::KeywordSource {
                    path: path.clone(),
                    source,
                })?;
                parse_lines(&bytes)
            }
            KeywordSource::Delimited(text) => parse_delimited(text),
        };
        tracing::debug!(source = self.kind(), count = keywords.len(), "loaded keywords");
        Ok(keywords)
    }

    fn kind(&self) -> &'static str {
        match self {
            KeywordSource::List(_) => "list",
            KeywordSource::File(_) => "file",
            KeywordSource::Delimited(_) => "delimited",
        }
    }
}

/// One keyword per line. Blank lines are skipped and `\r\n` endings accepted.
pub fn parse_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    let mut keywords = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', bytes).chain(std::iter::once(bytes.len())) {
        let mut line = &bytes[start..end];
        if let Some(stripped) = line.strip_suffix(b"\r") {
            line = stripped;
        }
        if !line.is_empty() {
            keywords.push(line.to_vec());
        }
        start = end + 1;
    }
    keywords
}

/// Comma-separated keywords. Empty entries are dropped and repeats removed,
/// keeping the first occurrence.
pub fn parse_delimited(text: &str) -> Vec<Vec<u8>> {
    let mut seen = HashSet::new();
    text.split(',')
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(*k))
        .map(|k| k.as_bytes().to_vec())
        .collect()
}

#[cfg(test)]
#[path = "keywords_tests.rs"]
mod tests;
