//! Rule-based keyword classifier.
//!
//! Counts occurrences of each goal's catalogue keywords in the lowercased
//! description. The goal with the most hits wins; ties go to the lower goal
//! number. No hits at all yields no goal.

use super::{ClassificationError, Prediction, SdgClassifier};
use async_trait::async_trait;
use sdg_domain::{Classification, ClassifierKind, GoalInfo, SdgId, SdgList, all_goals};

#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn hits(goal: &GoalInfo, text: &str) -> (usize, Vec<&'static str>) {
        let mut count = 0;
        let mut matched = Vec::new();
        for keyword in goal.keywords {
            let n = text.matches(keyword).count();
            if n > 0 {
                count += n;
                matched.push(*keyword);
            }
        }
        (count, matched)
    }

    /// Pure classification, shared by the async trait method.
    pub fn classify(&self, description: &str) -> Prediction {
        let text = description.to_lowercase();

        let mut best: Option<(&GoalInfo, usize, Vec<&'static str>)> = None;
        for goal in all_goals() {
            let (count, matched) = Self::hits(goal, &text);
            // Strictly greater keeps the lower goal on ties
            if count > 0 && best.as_ref().is_none_or(|(_, c, _)| count > *c) {
                best = Some((goal, count, matched));
            }
        }

        match best.and_then(|(goal, _, matched)| Some((SdgId::from_number(goal.number)?, matched))) {
            Some((id, matched)) => {
                let reason = format!("Matched keywords: {}", matched.join(", "));
                let sdgs: SdgList = std::iter::once(id).collect();
                Prediction::new(id.label(), Classification::new(sdgs, reason))
            }
            None => Prediction::new(
                sdg_domain::NONE_SENTINEL,
                Classification::none("No goal keyword found"),
            ),
        }
    }
}

#[async_trait]
impl SdgClassifier for KeywordClassifier {
    async fn classify_description(
        &self,
        description: &str,
    ) -> Result<Prediction, ClassificationError> {
        Ok(self.classify(description))
    }

    fn kind(&self) -> ClassifierKind {
        ClassifierKind::RuleBased
    }

    fn model_name(&self) -> String {
        "keyword-lexicon".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_hit_count_wins() {
        let prediction = KeywordClassifier::new()
            .classify("A solar module with a battery store, charged by Solar cells.");
        assert_eq!(prediction.classification.sdgs.labels(), vec!["SDG7"]);
        assert_eq!(prediction.sdg_tag, "SDG7");
        assert!(prediction.classification.reason.contains("solar"));
    }

    #[test]
    fn test_ties_go_to_lower_goal() {
        // one hit for SDG3 (vaccine) and one for SDG13 (climate)
        let prediction = KeywordClassifier::new().classify("A vaccine cooler for hot climate zones");
        assert_eq!(prediction.classification.sdgs.labels(), vec!["SDG3"]);
    }

    #[test]
    fn test_no_hits_is_none() {
        let prediction = KeywordClassifier::new().classify("A folding chair");
        assert!(prediction.classification.sdgs.is_none());
        assert_eq!(prediction.sdg_tag, "None");
    }

    #[tokio::test]
    async fn test_trait_method() {
        let classifier = KeywordClassifier::new();
        let prediction = classifier
            .classify_description("Drip irrigation for crop fields")
            .await
            .unwrap();
        assert_eq!(prediction.classification.rendered(), "SDG2");
        assert_eq!(classifier.kind(), ClassifierKind::RuleBased);
    }
}
