//! Named tag extraction.
//!
//! A tag is a delimiter pair such as `<sdg>...</sdg>`. Names match
//! case-insensitively and content may span lines. When a reasoning preamble
//! closed by `</think>` is present, only the text after the first marker is
//! scanned.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Marker that closes a reasoning preamble.
pub const REASONING_TERMINATOR: &str = "</think>";

/// Tag families recognised in model output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Sdg,
    Reason,
    Citation,
    Explanation,
    Summary,
}

impl TagKind {
    pub const ALL: [TagKind; 5] = [
        TagKind::Sdg,
        TagKind::Reason,
        TagKind::Citation,
        TagKind::Explanation,
        TagKind::Summary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TagKind::Sdg => "sdg",
            TagKind::Reason => "reason",
            TagKind::Citation => "citation",
            TagKind::Explanation => "explanation",
            TagKind::Summary => "summary",
        }
    }

    fn index(&self) -> usize {
        match self {
            TagKind::Sdg => 0,
            TagKind::Reason => 1,
            TagKind::Citation => 2,
            TagKind::Explanation => 3,
            TagKind::Summary => 4,
        }
    }
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lazily compiled regex for a tag family. Group 1 is the inner content
/// with surrounding whitespace excluded.
pub(crate) fn tag_regex(kind: TagKind) -> &'static Regex {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    let all = RES.get_or_init(|| {
        TagKind::ALL
            .iter()
            .map(|k| {
                let name = k.name();
                Regex::new(&format!(r"(?is)<{name}>\s*(.*?)\s*</{name}>"))
                    .expect("tag regex must compile")
            })
            .collect()
    });
    &all[kind.index()]
}

/// Drop everything up to and including the first `</think>`.
///
/// Text without the marker is returned unchanged.
pub fn strip_reasoning(text: &str) -> &str {
    match text.find(REASONING_TERMINATOR) {
        Some(pos) => &text[pos + REASONING_TERMINATOR.len()..],
        None => text,
    }
}

/// Trimmed content of the first `kind` tag, or `""` when absent.
pub fn extract_tag(text: &str, kind: TagKind) -> String {
    let scanned = strip_reasoning(text);
    tag_regex(kind)
        .captures(scanned)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Every tag family extracted from one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFields {
    pub sdg: String,
    pub reason: String,
    pub citation: String,
    pub explanation: String,
    pub summary: String,
}

impl ParsedFields {
    pub fn parse(text: &str) -> Self {
        Self {
            sdg: extract_tag(text, TagKind::Sdg),
            reason: extract_tag(text, TagKind::Reason),
            citation: extract_tag(text, TagKind::Citation),
            explanation: extract_tag(text, TagKind::Explanation),
            summary: extract_tag(text, TagKind::Summary),
        }
    }

    pub fn get(&self, kind: TagKind) -> &str {
        match kind {
            TagKind::Sdg => &self.sdg,
            TagKind::Reason => &self.reason,
            TagKind::Citation => &self.citation,
            TagKind::Explanation => &self.explanation,
            TagKind::Summary => &self.summary,
        }
    }
}
