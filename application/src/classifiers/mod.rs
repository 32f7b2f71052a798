//! SDG classifiers
//!
//! Every variant implements [`SdgClassifier`]; the binary picks one from
//! configuration.
//!
//! | Variant | Source of the answer |
//! |---------|----------------------|
//! | [`ZeroShotLlmClassifier`] | generation service prompted with a label template |
//! | [`NliClassifier`] | zero-shot NLI scoring of the 17 goal titles |
//! | [`KeywordClassifier`] | keyword lexicon per goal |

pub mod keyword;
pub mod nli;
pub mod zero_shot_llm;

pub use keyword::KeywordClassifier;
pub use nli::NliClassifier;
pub use zero_shot_llm::ZeroShotLlmClassifier;

use crate::ports::generation::GatewayError;
use crate::ports::prompt_provider::PromptError;
use async_trait::async_trait;
use sdg_domain::{Classification, ClassifierKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Why a classification could not produce an answer.
///
/// "No goal identified" is not an error: it is a [`Classification`] with an
/// empty goal list.
#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("Generation service failed: {0}")]
    ServiceFailed(#[from] GatewayError),

    #[error("Classification timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),
}

impl ClassificationError {
    /// Short machine-readable kind, written to results files
    pub fn kind(&self) -> &'static str {
        match self {
            ClassificationError::ServiceFailed(_) => "service_failed",
            ClassificationError::Timeout(_) => "timeout",
            ClassificationError::MalformedResponse(_) => "malformed_response",
            ClassificationError::Prompt(_) => "prompt",
        }
    }
}

/// Classifier output for one description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Raw goal answer before normalization (content of `<sdg>` for the
    /// generative variant)
    pub sdg_tag: String,
    pub classification: Classification,
}

impl Prediction {
    pub fn new(sdg_tag: impl Into<String>, classification: Classification) -> Self {
        Self {
            sdg_tag: sdg_tag.into(),
            classification,
        }
    }
}

#[async_trait]
pub trait SdgClassifier: Send + Sync {
    async fn classify_description(&self, description: &str)
    -> Result<Prediction, ClassificationError>;

    fn kind(&self) -> ClassifierKind;

    /// Identifier recorded in run metadata
    fn model_name(&self) -> String;

    /// Template recorded in run metadata, when the variant uses one
    fn prompt_name(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Scripted test doubles shared by classifier and use case tests.

    use super::*;
    use crate::ports::generation::{GenerationOptions, GenerationService};
    use serde_json::Value;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Generation service replaying scripted responses and recording prompts
    pub struct ScriptedService {
        responses: Mutex<VecDeque<Result<Value, GatewayError>>>,
        pub prompts: Mutex<Vec<String>>,
        pub options: Mutex<Vec<GenerationOptions>>,
    }

    impl ScriptedService {
        pub fn new(responses: Vec<Result<Value, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                prompts: Mutex::new(Vec::new()),
                options: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GenerationService for ScriptedService {
        async fn generate(
            &self,
            _model: &str,
            prompt: &str,
            options: &GenerationOptions,
        ) -> Result<Value, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.options.lock().unwrap().push(*options);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("script exhausted".to_string())))
        }

        async fn available_models(&self) -> Result<Vec<String>, GatewayError> {
            Ok(vec!["test-model".to_string()])
        }
    }
}
