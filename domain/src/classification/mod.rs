//! Classification outcomes and policies.
//!
//! - [`Classification`] — the goals found for one description plus the reason
//! - [`MatchPolicy`] — how a prediction is compared to a ground-truth label
//! - [`ClassifierKind`] — which classifier variant a run uses

use crate::core::error::DomainError;
use crate::sdg::identifier::{NONE_SENTINEL, SdgList};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Result of classifying one description (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub sdgs: SdgList,
    pub reason: String,
}

impl Classification {
    pub fn new(sdgs: SdgList, reason: impl Into<String>) -> Self {
        Self {
            sdgs,
            reason: reason.into(),
        }
    }

    /// No goal identified. This is a valid outcome, not a failure.
    pub fn none(reason: impl Into<String>) -> Self {
        Self::new(SdgList::none(), reason)
    }

    pub fn is_relevant(&self) -> bool {
        !self.sdgs.is_none()
    }

    /// Comma-joined labels, `None` when empty.
    pub fn rendered(&self) -> String {
        self.sdgs.to_string()
    }
}

/// Comparison between a predicted goal list and a single truth label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Rendered prediction (`SDG3, SDG7`) must equal the label
    Exact,
    /// Label must be a member of the predicted list
    #[default]
    Contains,
}

impl MatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::Exact => "exact",
            MatchPolicy::Contains => "contains",
        }
    }

    /// Check a prediction against a truth label.
    ///
    /// A comma-separated truth (`"SDG1, SDG3"`) under `Contains` requires
    /// every listed goal. The label `"None"` only matches an empty prediction.
    pub fn is_match(&self, predicted: &SdgList, truth: &str) -> bool {
        let truth = truth.trim();
        if truth.is_empty() {
            return false;
        }
        match self {
            MatchPolicy::Exact => predicted.to_string() == truth,
            MatchPolicy::Contains => truth
                .split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .all(|label| match label {
                    NONE_SENTINEL => predicted.is_none(),
                    _ => predicted.contains_label(label),
                }),
        }
    }
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" | "strict" => Ok(MatchPolicy::Exact),
            "contains" | "member" => Ok(MatchPolicy::Contains),
            _ => Err(DomainError::InvalidMatchPolicy(s.to_string())),
        }
    }
}

/// Classifier variant selected by configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    /// Generative model prompted with a label template
    #[default]
    ZeroShotLlm,
    /// Keyword lexicon per goal
    RuleBased,
    /// Zero-shot natural-language-inference label scoring
    Nli,
}

impl ClassifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierKind::ZeroShotLlm => "zero_shot_llm",
            ClassifierKind::RuleBased => "rule_based",
            ClassifierKind::Nli => "nli",
        }
    }

    /// Whether this variant talks to the generation service.
    pub fn uses_generation(&self) -> bool {
        matches!(self, ClassifierKind::ZeroShotLlm)
    }
}

impl std::fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClassifierKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "zero_shot_llm" | "llm" => Ok(ClassifierKind::ZeroShotLlm),
            "rule_based" | "rules" => Ok(ClassifierKind::RuleBased),
            "nli" | "fine_tuned" => Ok(ClassifierKind::Nli),
            _ => Err(DomainError::InvalidClassifierKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdg::extractor::extract_sdgs;

    // ==================== MatchPolicy Tests ====================

    #[test]
    fn test_contains_policy() {
        let predicted = extract_sdgs("SDG3, SDG7");
        assert!(MatchPolicy::Contains.is_match(&predicted, "SDG7"));
        assert!(MatchPolicy::Contains.is_match(&predicted, " SDG3"));
        assert!(!MatchPolicy::Contains.is_match(&predicted, "SDG1"));
        assert!(!MatchPolicy::Contains.is_match(&predicted, "None"));
        assert!(MatchPolicy::Contains.is_match(&predicted, "SDG3, SDG7"));
        assert!(!MatchPolicy::Contains.is_match(&predicted, "SDG3, SDG9"));
        assert!(!MatchPolicy::Contains.is_match(&predicted, ""));
    }

    #[test]
    fn test_exact_policy_compares_rendering() {
        let predicted = extract_sdgs("SDG3, SDG7");
        assert!(MatchPolicy::Exact.is_match(&predicted, "SDG3, SDG7"));
        assert!(!MatchPolicy::Exact.is_match(&predicted, "SDG7"));

        let single = extract_sdgs("SDG7");
        assert!(MatchPolicy::Exact.is_match(&single, "SDG7"));
    }

    #[test]
    fn test_none_label_matches_only_empty_prediction() {
        let empty = SdgList::none();
        assert!(MatchPolicy::Exact.is_match(&empty, "None"));
        assert!(MatchPolicy::Contains.is_match(&empty, "None"));
        assert!(!MatchPolicy::Contains.is_match(&extract_sdgs("SDG1"), "None"));
    }

    #[test]
    fn test_match_policy_parse() {
        assert_eq!("exact".parse::<MatchPolicy>().unwrap(), MatchPolicy::Exact);
        assert_eq!("Contains".parse::<MatchPolicy>().unwrap(), MatchPolicy::Contains);
        assert!("fuzzy".parse::<MatchPolicy>().is_err());
        assert_eq!(MatchPolicy::default(), MatchPolicy::Contains);
    }

    // ==================== ClassifierKind Tests ====================

    #[test]
    fn test_classifier_kind_parse() {
        assert_eq!(
            "zero_shot_llm".parse::<ClassifierKind>().unwrap(),
            ClassifierKind::ZeroShotLlm
        );
        assert_eq!(
            "rule-based".parse::<ClassifierKind>().unwrap(),
            ClassifierKind::RuleBased
        );
        assert_eq!("NLI".parse::<ClassifierKind>().unwrap(), ClassifierKind::Nli);
        assert_eq!(
            "bert".parse::<ClassifierKind>(),
            Err(DomainError::InvalidClassifierKind("bert".to_string()))
        );
    }

    #[test]
    fn test_classifier_kind_serde() {
        let json = serde_json::to_string(&ClassifierKind::RuleBased).unwrap();
        assert_eq!(json, "\"rule_based\"");
        assert!(ClassifierKind::ZeroShotLlm.uses_generation());
        assert!(!ClassifierKind::Nli.uses_generation());
    }

    // ==================== Classification Tests ====================

    #[test]
    fn test_classification_none() {
        let c = Classification::none("unrelated");
        assert!(!c.is_relevant());
        assert_eq!(c.rendered(), "None");
    }
}
