//! Citation/explanation evidence pairing.
//!
//! Citations are visited in order of appearance. Each is paired with the
//! nearest `<explanation>` that starts after the citation's closing tag;
//! citations with no such explanation are dropped. An explanation may end
//! up paired with more than one citation when none sits between them.

use super::tags::{TagKind, extract_tag, strip_reasoning, tag_regex};
use serde::{Deserialize, Serialize};

/// One (citation, explanation) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidencePair {
    pub citation: String,
    pub explanation: String,
}

impl EvidencePair {
    pub fn new(citation: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            citation: citation.into(),
            explanation: explanation.into(),
        }
    }
}

/// Evidence extracted from a citation response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub summary: String,
    pub pairs: Vec<EvidencePair>,
}

impl Evidence {
    /// Evidence for a patent with no relevant goal: the caller's
    /// justification stands in as the summary and there are no pairs.
    pub fn irrelevant(reason: impl Into<String>) -> Self {
        Self {
            summary: reason.into(),
            pairs: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.pairs.is_empty()
    }

    /// Numbered rendering of the pairs, see [`format_evidence`].
    pub fn rendered(&self) -> String {
        format_evidence(&self.pairs)
    }
}

/// Extract the summary and every citation/explanation pair from `text`.
pub fn extract_evidence(text: &str) -> Evidence {
    let summary = extract_tag(text, TagKind::Summary);
    let scanned = strip_reasoning(text);
    let explanation_re = tag_regex(TagKind::Explanation);

    let pairs = tag_regex(TagKind::Citation)
        .captures_iter(scanned)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let citation = caps.get(1)?.as_str().trim();
            let explanation = explanation_re
                .captures(&scanned[whole.end()..])?
                .get(1)?
                .as_str()
                .trim();
            Some(EvidencePair::new(citation, explanation))
        })
        .collect();

    Evidence { summary, pairs }
}

/// Render pairs as
/// `**Citation i:**\n<citation>\n**Explanation i:**\n<explanation>`,
/// numbered from 1 and separated by a blank line.
pub fn format_evidence(pairs: &[EvidencePair]) -> String {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            let n = i + 1;
            format!(
                "**Citation {n}:**\n{}\n**Explanation {n}:**\n{}",
                pair.citation, pair.explanation
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_citation_without_explanation_is_dropped() {
        let text = "<citation>A</citation><explanation>B</explanation><citation>C</citation>";
        let evidence = extract_evidence(text);
        assert_eq!(evidence.pairs, vec![EvidencePair::new("A", "B")]);
    }

    #[test]
    fn test_pairs_in_citation_order() {
        let text = "<summary> overall </summary>\n\
                    <citation>first</citation>\n<explanation>why first</explanation>\n\
                    <citation>second</citation>\n<explanation>why second</explanation>";
        let evidence = extract_evidence(text);
        assert_eq!(evidence.summary, "overall");
        assert_eq!(
            evidence.pairs,
            vec![
                EvidencePair::new("first", "why first"),
                EvidencePair::new("second", "why second"),
            ]
        );
    }

    #[test]
    fn test_explanation_before_citation_is_not_used() {
        let text = "<explanation>early</explanation><citation>A</citation>";
        assert!(extract_evidence(text).pairs.is_empty());
    }

    #[test]
    fn test_explanation_shared_by_consecutive_citations() {
        let text = "<citation>A</citation><citation>B</citation><explanation>E</explanation>";
        let evidence = extract_evidence(text);
        assert_eq!(
            evidence.pairs,
            vec![EvidencePair::new("A", "E"), EvidencePair::new("B", "E")]
        );
    }

    #[test]
    fn test_reasoning_preamble_is_skipped() {
        let text = "<citation>draft</citation><explanation>x</explanation></think>\
                    <citation>final</citation><explanation>y</explanation>";
        let evidence = extract_evidence(text);
        assert_eq!(evidence.pairs, vec![EvidencePair::new("final", "y")]);
    }

    #[test]
    fn test_format_is_exact() {
        let pairs = vec![EvidencePair::new("A", "B"), EvidencePair::new("C", "D")];
        assert_eq!(
            format_evidence(&pairs),
            "**Citation 1:**\nA\n**Explanation 1:**\nB\n\n**Citation 2:**\nC\n**Explanation 2:**\nD"
        );
        assert_eq!(format_evidence(&[]), "");
    }

    #[test]
    fn test_no_tags_yields_empty_evidence() {
        let evidence = extract_evidence("The model refused to answer.");
        assert!(evidence.is_empty());
        assert_eq!(evidence.rendered(), "");
    }

    #[test]
    fn test_irrelevant_evidence() {
        let evidence = Evidence::irrelevant("not related to any goal");
        assert_eq!(evidence.summary, "not related to any goal");
        assert_eq!(evidence.rendered(), "");
    }
}
