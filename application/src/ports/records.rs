//! Dataset and results file ports
//!
//! Datasets and results files are JSONL. Readers hand back raw non-empty
//! lines so that malformed JSON is a per-line concern of the use case;
//! writers persist one record per call.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// I/O failures on dataset and results files. These abort a run.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to open {path}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// One non-empty line of a JSONL file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    /// 1-based line number in the file
    pub line_number: usize,
    /// Line text, or why the line could not be decoded
    pub content: Result<String, String>,
}

impl RecordLine {
    pub fn new(line_number: usize, content: impl Into<String>) -> Self {
        Self {
            line_number,
            content: Ok(content.into()),
        }
    }

    /// A line the reader could not decode. Use cases skip it like any
    /// other malformed record.
    pub fn unreadable(line_number: usize, reason: impl Into<String>) -> Self {
        Self {
            line_number,
            content: Err(reason.into()),
        }
    }

    /// Decoded text, or the decoding failure as a skip reason.
    pub fn text(&self) -> Result<&str, String> {
        self.content.as_deref().map_err(Clone::clone)
    }
}

/// Reads JSONL files line by line
pub trait RecordReader: Send + Sync {
    /// Every non-blank line of the file, in order. Only failures to open
    /// or read the file are errors; a bad line is returned as unreadable.
    fn read_lines(&self, path: &Path) -> Result<Vec<RecordLine>, DatasetError>;
}

/// Append-only results file
///
/// Each call writes and flushes one whole record.
pub trait RecordWriter: Send {
    fn write_record(&mut self, record: &serde_json::Value) -> Result<(), DatasetError>;

    /// Path actually written to
    fn path(&self) -> &Path;
}
