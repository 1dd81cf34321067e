// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::reader::{FileReader, TextBuffer};

/// A text to scan, before it is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// An existing file.
    Path(PathBuf),
    /// An http or https URL.
    Url(String),
    /// The argument itself.
    Literal(Vec<u8>),
}

impl TextSource {
    /// Classify an argument: existing path, then URL, then literal text.
    pub fn detect(arg: &str) -> Self {
        let path = Path::new(arg);
        if !arg.is_empty() && path.exists() {
            tracing::trace!(path = %path.display(), "text from file");
            TextSource::Path(path.to_path_buf())
        } else if is_url(arg) {
            tracing::trace!(url = arg, "text from url");
            TextSource::Url(arg.to_string())
        } else {
            tracing::trace!(len = arg.len(), "text is literal");
            TextSource::Literal(arg.as_bytes().to_vec())
        }
    }

    /// Label used in reports.
    pub fn name(&self) -> String {
        match self {
            TextSource::Path(path) => path.display().to_string(),
            TextSource::Url(url) => url.clone(),
            TextSource::Literal(_) => "<text>".to_string(),
        }
    }

    /// Materialize the text.
    pub fn load(&self, reader: &FileReader) -> Result<TextBuffer> {
        match self {
            TextSource::Path(path) => reader.read(path).map_err(|e| match e {
                Error::Io { source, .. } => Error::TextSource {
                    source_name: path.display().to_string(),
                    message: source.to_string(),
                },
                other => other,
            }),
            TextSource::Url(url) => fetch(url).map(TextBuffer::Owned),
            TextSource::Literal(bytes) => Ok(TextBuffer::Owned(bytes.clone())),
        }
    }
}

/// True for `http://host...` and `https://host...`.
pub fn is_url(arg: &str) -> bool {
    let Some((scheme, rest)) = arg.split_once("://") else {
        return false;
    };
    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return false;
    }
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !host.is_empty() && !host.chars().any(char::is_whitespace)
}

fn fetch(url: &str) -> Result<Vec<u8>> {
    let failed = |message: String| Error::TextSource {
        source_name: url.to_string(),
        message,
    };

    let response = ureq::get(url).call().map_err(|e| failed(e.to_string()))?;
    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|e| failed(e.to_string()))?;

    tracing::debug!(url, bytes = body.len(), "fetched text");
    Ok(body)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
