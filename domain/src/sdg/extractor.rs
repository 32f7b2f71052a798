//! SDG identifier extraction from free-form model output.
//!
//! Models answer in inconsistent notations ("SDG7", "7.1", or just "7").
//! Three independent recognition rules run over the same text and their
//! results are unioned:
//!
//! | Rule | Example | Captured |
//! |------|---------|----------|
//! | Explicit token | `SDG 13.4`, `sdg7` | goal number, sub-target ignored |
//! | Sub-target | `16.1` | integer part |
//! | Standalone | `3, 7; 12` | self-contained 1-2 digit numbers |
//!
//! Every candidate outside `1..=17` is dropped. The rules never suppress each
//! other: `"Article 16.1, paragraph 3"` yields both SDG3 and SDG16.

use super::identifier::{SdgId, SdgList};
use regex::Regex;
use std::sync::OnceLock;

/// `sdg` token, optional whitespace, 1-2 digits, optional `.<digits>`.
fn explicit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\bsdg\s*([0-9]{1,2})(?:\.[0-9]+)?\b")
            .expect("explicit SDG regex must compile")
    })
}

/// Bare `<1-2 digits>.<digits>` between word boundaries.
fn subtarget_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b([0-9]{1,2})\.[0-9]+\b").expect("sub-target regex must compile")
    })
}

/// Extract the canonical goal list from `text`.
///
/// Returns the empty list (rendered `["None"]`) when nothing valid is found.
pub fn extract_sdgs(text: &str) -> SdgList {
    if text.trim().is_empty() {
        return SdgList::none();
    }

    explicit_numbers(text)
        .into_iter()
        .chain(subtarget_numbers(text))
        .chain(standalone_numbers(text))
        .filter_map(SdgId::from_number)
        .collect()
}

/// Same as [`extract_sdgs`] but returns the rendered labels.
pub fn extract_sdg_labels(text: &str) -> Vec<String> {
    extract_sdgs(text).labels()
}

/// Extract from an optional input; `None` yields the empty list.
pub fn extract_sdgs_opt(text: Option<&str>) -> SdgList {
    text.map(extract_sdgs).unwrap_or_default()
}

/// Extract from an arbitrary JSON value read from a results file.
///
/// Strings are scanned directly and arrays of strings are scanned as one
/// comma-joined text. Any other shape is not text and yields the empty list.
pub fn extract_sdgs_from_value(value: &serde_json::Value) -> SdgList {
    match value {
        serde_json::Value::String(s) => extract_sdgs(s),
        serde_json::Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            extract_sdgs(&joined)
        }
        _ => SdgList::none(),
    }
}

fn explicit_numbers(text: &str) -> Vec<u32> {
    explicit_re()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
        .collect()
}

fn subtarget_numbers(text: &str) -> Vec<u32> {
    subtarget_re()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
        .collect()
}

/// Numbers that read as self-contained tokens.
///
/// A run of 1-2 digits qualifies when it starts the (trimmed) text or follows
/// whitespace, `,`, `;` or `:`, and when it ends the text or is followed by
/// whitespace, `,` or `;`. Longer digit runs never qualify.
fn standalone_numbers(text: &str) -> Vec<u32> {
    let chars: Vec<char> = text.trim().chars().collect();
    let mut numbers = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }

        if i - start > 2 {
            continue;
        }

        let preceded = start == 0 || is_leading_delimiter(chars[start - 1]);
        let followed = i == chars.len() || is_trailing_delimiter(chars[i]);
        if preceded && followed {
            let run: String = chars[start..i].iter().collect();
            if let Ok(n) = run.parse() {
                numbers.push(n);
            }
        }
    }

    numbers
}

fn is_leading_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | ':')
}

fn is_trailing_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(text: &str) -> Vec<String> {
        extract_sdg_labels(text)
    }

    // ==================== Notations ====================

    #[test]
    fn test_every_goal_in_every_notation() {
        for n in 1..=17 {
            let expected = vec![format!("SDG{n}")];
            assert_eq!(labels(&format!("SDG{n}")), expected, "explicit {n}");
            assert_eq!(labels(&format!("{n}.3")), expected, "sub-target {n}");
            assert_eq!(labels(&format!("{n}")), expected, "standalone {n}");
        }
    }

    #[test]
    fn test_out_of_range_never_matches() {
        for n in [0, 18, 42, 99] {
            assert_eq!(labels(&format!("SDG{n}")), vec!["None"], "explicit {n}");
            assert_eq!(labels(&format!("{n}.1")), vec!["None"], "sub-target {n}");
            assert_eq!(labels(&format!("{n}")), vec!["None"], "standalone {n}");
        }
    }

    #[test]
    fn test_explicit_variants() {
        assert_eq!(labels("sdg 2"), vec!["SDG2"]);
        assert_eq!(labels("Sdg13.4"), vec!["SDG13"]);
        assert_eq!(labels("Goal: SDG 9 and SDG9"), vec!["SDG9"]);
        // Three digits do not form a goal number
        assert_eq!(labels("SDG123"), vec!["None"]);
        // No word boundary before the token
        assert_eq!(labels("xsdg5"), vec!["None"]);
    }

    #[test]
    fn test_standalone_delimiters() {
        assert_eq!(labels("3, 7; 12"), vec!["SDG3", "SDG7", "SDG12"]);
        assert_eq!(labels("goals:4"), vec!["SDG4"]);
        assert_eq!(labels("1,2"), vec!["SDG1", "SDG2"]);
        // Followed by a colon or letter: not self-contained
        assert_eq!(labels("7: energy"), vec!["None"]);
        assert_eq!(labels("7th goal"), vec!["None"]);
        // Part of a larger number
        assert_eq!(labels("in 2023 we"), vec!["None"]);
        assert_eq!(labels("(5)"), vec!["None"]);
    }

    // ==================== Canonical list ====================

    #[test]
    fn test_mixed_notations_sorted_and_deduplicated() {
        assert_eq!(
            labels("mentions 7, then SDG3, then 16.2"),
            vec!["SDG3", "SDG7", "SDG16"]
        );
        assert_eq!(labels("SDG7 7 7.2"), vec!["SDG7"]);
    }

    #[test]
    fn test_idempotent_on_canonical_output() {
        let first = extract_sdgs("SDG3, SDG7");
        let second = extract_sdgs(&first.to_string());
        assert_eq!(first, second);
        assert_eq!(second.labels(), vec!["SDG3", "SDG7"]);
    }

    #[test]
    fn test_empty_and_absent_input() {
        assert_eq!(labels(""), vec!["None"]);
        assert_eq!(labels("   \n"), vec!["None"]);
        assert!(extract_sdgs_opt(None).is_none());
        assert_eq!(labels("no goal is relevant here"), vec!["None"]);
    }

    #[test]
    fn test_non_text_values() {
        assert!(extract_sdgs_from_value(&serde_json::json!(7)).is_none());
        assert!(extract_sdgs_from_value(&serde_json::Value::Null).is_none());
        assert!(extract_sdgs_from_value(&serde_json::json!({"sdg": "SDG1"})).is_none());
        assert_eq!(
            extract_sdgs_from_value(&serde_json::json!("SDG4")).labels(),
            vec!["SDG4"]
        );
        assert_eq!(
            extract_sdgs_from_value(&serde_json::json!(["SDG6", "SDG2"])).labels(),
            vec!["SDG2", "SDG6"]
        );
    }

    // ==================== Overlap policy ====================

    #[test]
    fn test_rules_are_unioned_without_suppression() {
        // "16.1" registers through the sub-target rule, "3" as standalone
        assert_eq!(labels("Article 16.1, paragraph 3"), vec!["SDG3", "SDG16"]);
    }

    #[test]
    fn test_rule_helpers_in_isolation() {
        assert_eq!(explicit_numbers("SDG 4.1 and sdg12"), vec![4, 12]);
        assert_eq!(subtarget_numbers("targets 6.1 and 116.2"), vec![6]);
        assert_eq!(standalone_numbers("  5 , 40 and 123 "), vec![5, 40]);
    }
}
