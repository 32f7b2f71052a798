//! JSONL file reader

use sdg_application::ports::records::{DatasetError, RecordLine, RecordReader};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Reads JSONL files from the local file system.
///
/// Blank lines are skipped; line numbers stay those of the file. Lines that
/// are not valid UTF-8 come back as unreadable instead of failing the read.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonlRecordReader;

impl JsonlRecordReader {
    pub fn new() -> Self {
        Self
    }
}

impl RecordReader for JsonlRecordReader {
    fn read_lines(&self, path: &Path) -> Result<Vec<RecordLine>, DatasetError> {
        let file = File::open(path).map_err(|e| DatasetError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut lines = Vec::new();
        for (index, bytes) in BufReader::new(file).split(b'\n').enumerate() {
            let line_number = index + 1;
            let bytes = bytes.map_err(|e| DatasetError::Read {
                path: path.to_path_buf(),
                message: format!("line {}: {}", line_number, e),
            })?;
            match String::from_utf8(bytes) {
                Ok(line) => {
                    let line = line.strip_suffix('\r').unwrap_or(&line);
                    if line.trim().is_empty() {
                        continue;
                    }
                    lines.push(RecordLine::new(line_number, line));
                }
                Err(e) => {
                    warn!("Line {} of {} is not valid UTF-8", line_number, path.display());
                    lines.push(RecordLine::unreadable(
                        line_number,
                        format!("invalid UTF-8: {}", e.utf8_error()),
                    ));
                }
            }
        }

        debug!("Read {} records from {}", lines.len(), path.display());
        Ok(lines)
    }
}
