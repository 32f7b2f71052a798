//! Parsing of delimiter-tagged model output.
//!
//! Pure text processing with no I/O. Extraction never fails: an absent tag
//! is an empty string and unmatched evidence is dropped.
//!
//! - [`tags`] — `<sdg>`, `<reason>`, `<citation>`, `<explanation>`, `<summary>`
//! - [`evidence`] — citation/explanation pairing and its rendering

pub mod evidence;
pub mod tags;

pub use evidence::{Evidence, EvidencePair, extract_evidence, format_evidence};
pub use tags::{ParsedFields, TagKind, extract_tag, strip_reasoning};
