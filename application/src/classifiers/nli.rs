//! Zero-shot NLI classifier.
//!
//! Scores the description against the 17 official goal titles through a
//! [`LabelScorer`]. Short descriptions are not scored, and a top score below
//! the threshold means no goal.

use super::{ClassificationError, Prediction, SdgClassifier};
use crate::config::NliSettings;
use crate::ports::label_scorer::LabelScorer;
use async_trait::async_trait;
use sdg_domain::util::word_count;
use sdg_domain::{
    Classification, ClassifierKind, NONE_SENTINEL, SdgList, all_goals, goal_from_title,
};
use std::sync::Arc;
use tracing::debug;

pub struct NliClassifier<S: LabelScorer + 'static> {
    scorer: Arc<S>,
    settings: NliSettings,
    model: String,
    candidates: Vec<String>,
}

impl<S: LabelScorer + 'static> NliClassifier<S> {
    pub fn new(scorer: Arc<S>, settings: NliSettings, model: impl Into<String>) -> Self {
        Self {
            scorer,
            settings,
            model: model.into(),
            candidates: all_goals().iter().map(|g| g.title.to_string()).collect(),
        }
    }

    fn no_goal(reason: impl Into<String>) -> Prediction {
        Prediction::new(NONE_SENTINEL, Classification::none(reason))
    }
}

#[async_trait]
impl<S: LabelScorer + 'static> SdgClassifier for NliClassifier<S> {
    async fn classify_description(
        &self,
        description: &str,
    ) -> Result<Prediction, ClassificationError> {
        let words = word_count(description);
        if words <= self.settings.min_words {
            debug!(words, "Description too short for NLI scoring");
            return Ok(Self::no_goal(format!(
                "Description has {words} words; more than {} required",
                self.settings.min_words
            )));
        }

        let scores = self.scorer.score(description, &self.candidates).await?;
        let Some(top) = scores
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
        else {
            return Err(ClassificationError::MalformedResponse(
                "label scorer returned no scores".to_string(),
            ));
        };
        debug!(label = %top.label, score = top.score, "Top NLI label");

        if top.score < self.settings.threshold {
            return Ok(Self::no_goal(format!(
                "Top score {:.3} below threshold {:.3}",
                top.score, self.settings.threshold
            )));
        }

        let goal = goal_from_title(&top.label).ok_or_else(|| {
            ClassificationError::MalformedResponse(format!("unknown label: {}", top.label))
        })?;
        let sdgs: SdgList = std::iter::once(goal).collect();
        let reason = format!("{} (score {:.3})", top.label, top.score);
        Ok(Prediction::new(goal.label(), Classification::new(sdgs, reason)))
    }

    fn kind(&self) -> ClassifierKind {
        ClassifierKind::Nli
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }
}
