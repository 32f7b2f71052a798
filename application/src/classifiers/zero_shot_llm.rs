//! Generative zero-shot classifier (the classification orchestrator).
//!
//! Prompt → generation service → response normalization → `<sdg>` and
//! `<reason>` tags → SDG identifier extraction.

use super::{ClassificationError, Prediction, SdgClassifier};
use crate::config::GenerationParams;
use crate::ports::generation::{GenerationService, normalize_response};
use async_trait::async_trait;
use sdg_domain::{Classification, ClassifierKind, ParsedFields, PromptTemplate, extract_sdgs};
use std::sync::Arc;
use tracing::debug;

pub struct ZeroShotLlmClassifier<G: GenerationService + 'static> {
    service: Arc<G>,
    template: PromptTemplate,
    params: GenerationParams,
}

impl<G: GenerationService + 'static> ZeroShotLlmClassifier<G> {
    pub fn new(service: Arc<G>, template: PromptTemplate, params: GenerationParams) -> Self {
        Self {
            service,
            template,
            params,
        }
    }
}

#[async_trait]
impl<G: GenerationService + 'static> SdgClassifier for ZeroShotLlmClassifier<G> {
    async fn classify_description(
        &self,
        description: &str,
    ) -> Result<Prediction, ClassificationError> {
        let prompt = self.template.render(description);
        let raw = self
            .service
            .generate(&self.params.model, &prompt, &self.params.options())
            .await?;

        let text = normalize_response(raw);
        debug!("Raw model output: {}", text);
        if text.is_empty() {
            return Err(ClassificationError::MalformedResponse(
                "empty response".to_string(),
            ));
        }

        let fields = ParsedFields::parse(&text);
        let sdgs = extract_sdgs(&fields.sdg);
        debug!(sdg_tag = %fields.sdg, sdgs = %sdgs, "Extracted goal tag");

        Ok(Prediction::new(fields.sdg, Classification::new(sdgs, fields.reason)))
    }

    fn kind(&self) -> ClassifierKind {
        ClassifierKind::ZeroShotLlm
    }

    fn model_name(&self) -> String {
        self.params.model.clone()
    }

    fn prompt_name(&self) -> Option<String> {
        Some(self.template.name().to_string())
    }
}
