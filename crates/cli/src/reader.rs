//! Size-gated file reading.
//!
//! Selects read strategy based on file size:
//! - up to 64MB: Direct read into buffer
//! - over 64MB: Read-only memory map
//!
//! Scans never mutate the text, so either form hands the scanner a `&[u8]`.

use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Error, Result};

/// Size above which files are memory-mapped (64MB).
pub const MAP_THRESHOLD: u64 = 64 * 1024 * 1024;

/// Read strategy used for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStrategy {
    /// Direct read into buffer.
    Direct,

    /// Read-only memory map.
    Mapped,
}

impl ReadStrategy {
    /// Determine the read strategy for a file of the given size.
    pub fn for_size(size: u64, threshold: u64) -> Self {
        if size > threshold {
            ReadStrategy::Mapped
        } else {
            ReadStrategy::Direct
        }
    }
}

/// Bytes of a text, owned or mapped.
#[derive(Debug)]
pub enum TextBuffer {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

impl TextBuffer {
    pub fn strategy(&self) -> ReadStrategy {
        match self {
            TextBuffer::Owned(_) => ReadStrategy::Direct,
            TextBuffer::Mapped(_) => ReadStrategy::Mapped,
        }
    }
}

impl Deref for TextBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            TextBuffer::Owned(bytes) => bytes.as_slice(),
            TextBuffer::Mapped(map) => &map[..],
        }
    }
}

impl AsRef<[u8]> for TextBuffer {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl From<Vec<u8>> for TextBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        TextBuffer::Owned(bytes)
    }
}

/// Size-gated file reader.
#[derive(Debug, Clone, Copy)]
pub struct FileReader {
    /// Files larger than this are mapped.
    map_threshold: u64,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            map_threshold: MAP_THRESHOLD,
        }
    }
}

impl FileReader {
    /// Create a new file reader with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with a custom map threshold.
    pub fn with_map_threshold(map_threshold: u64) -> Self {
        Self { map_threshold }
    }

    /// Read a file, mapping it when it is larger than the threshold.
    pub fn read(&self, path: &Path) -> Result<TextBuffer> {
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        let size = file.metadata().map_err(|e| io_error(path, e))?.len();

        match ReadStrategy::for_size(size, self.map_threshold) {
            ReadStrategy::Direct => read_direct(file, path, size).map(TextBuffer::Owned),
            ReadStrategy::Mapped => {
                tracing::info!(
                    path = %path.display(),
                    size_mb = size as f64 / 1_000_000.0,
                    "Mapping large file"
                );
                map_file(&file, path).map(TextBuffer::Mapped)
            }
        }
    }

    /// Strategy that `read` would pick for `path`.
    pub fn strategy(&self, path: &Path) -> Result<ReadStrategy> {
        let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
        Ok(ReadStrategy::for_size(metadata.len(), self.map_threshold))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn read_direct(mut file: File, path: &Path, size: u64) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(size as usize);
    file.read_to_end(&mut buffer).map_err(|e| io_error(path, e))?;
    Ok(buffer)
}

#[allow(unsafe_code)]
fn map_file(file: &File, path: &Path) -> Result<Mmap> {
    // SAFETY: the map is read-only and lives no longer than the scan that
    // borrows it. Truncating the file underneath a running scan is not
    // supported.
    unsafe { Mmap::map(file) }.map_err(|e| io_error(path, e))
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
