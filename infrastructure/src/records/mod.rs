//! JSONL dataset and results files
//!
//! - [`JsonlRecordReader`] — reads datasets and results files line by line
//! - [`JsonlResultsWriter`] — append-only results file, flushed per record
//! - [`safe_output_path`] — collision-free output path selection

mod path;
mod reader;
mod writer;

pub use path::safe_output_path;
pub use reader::JsonlRecordReader;
pub use writer::JsonlResultsWriter;
