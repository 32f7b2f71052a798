//! Cite Evidence use case
//!
//! Asks the generation service for passages supporting a classification and
//! pairs them into [`Evidence`].

use crate::classifiers::ClassificationError;
use crate::config::GenerationParams;
use crate::ports::generation::{GenerationService, normalize_response};
use sdg_domain::{Classification, Evidence, PromptTemplate, extract_evidence};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for generating citation/explanation evidence
pub struct CiteEvidenceUseCase<G: GenerationService + 'static> {
    service: Arc<G>,
    template: PromptTemplate,
    params: GenerationParams,
}

impl<G: GenerationService + 'static> CiteEvidenceUseCase<G> {
    pub fn new(service: Arc<G>, template: PromptTemplate, params: GenerationParams) -> Self {
        Self {
            service,
            template,
            params,
        }
    }

    /// Produce evidence for `classification` of `description`.
    ///
    /// When no goal was identified the service is not called: the
    /// classification reason becomes the summary and there are no pairs.
    pub async fn execute(
        &self,
        description: &str,
        classification: &Classification,
    ) -> Result<Evidence, ClassificationError> {
        if !classification.is_relevant() {
            debug!("No goal identified, skipping citation generation");
            return Ok(Evidence::irrelevant(classification.reason.clone()));
        }

        let sdg = classification.rendered();
        info!("Generating citations for {}", sdg);
        let prompt = self.template.render_with_sdg(description, &sdg);

        let raw = tokio::time::timeout(
            self.params.timeout,
            self.service
                .generate(&self.params.model, &prompt, &self.params.options()),
        )
        .await
        .map_err(|_| ClassificationError::Timeout(self.params.timeout))??;

        let text = normalize_response(raw);
        debug!("Raw citation output: {}", text);
        let evidence = extract_evidence(&text);
        debug!(
            "Extracted {} citation/explanation pairs",
            evidence.pairs.len()
        );
        Ok(evidence)
    }
}
