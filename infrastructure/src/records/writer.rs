//! JSONL results writer
//!
//! Writes one JSON object per line. Every record is flushed as soon as it
//! is written, so an interrupted run leaves a readable prefix behind.

use super::path::safe_output_path;
use sdg_application::ports::records::{DatasetError, RecordWriter};
use serde_json::Value;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Results file that is never opened over an existing file.
pub struct JsonlResultsWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl JsonlResultsWriter {
    /// Create the results file at `requested`, or at a suffixed sibling when
    /// that path is taken. Parent directories are created as needed.
    pub fn create(requested: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let requested = requested.as_ref();
        if let Some(parent) = requested.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| DatasetError::Open {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        let path = safe_output_path(requested);
        if path != requested {
            warn!(
                "{} already exists, writing results to {}",
                requested.display(),
                path.display()
            );
        }

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| DatasetError::Open {
                path: path.clone(),
                message: e.to_string(),
            })?;

        info!("Writing results to {}", path.display());
        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    fn write_error(&self, e: impl std::fmt::Display) -> DatasetError {
        DatasetError::Write {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

impl RecordWriter for JsonlResultsWriter {
    fn write_record(&mut self, record: &Value) -> Result<(), DatasetError> {
        let line = serde_json::to_string(record).map_err(|e| self.write_error(e))?;
        writeln!(self.writer, "{}", line).map_err(|e| self.write_error(e))?;
        self.writer.flush().map_err(|e| self.write_error(e))
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for JsonlResultsWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
