//! Prompt template provider port

use sdg_domain::PromptTemplate;
use thiserror::Error;

/// Errors raised while loading a prompt template
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt template not found: {0}")]
    NotFound(String),

    #[error("Failed to read prompt template {name}: {message}")]
    Io { name: String, message: String },

    #[error("Prompt template {name} has no {placeholder} placeholder")]
    MissingPlaceholder {
        name: String,
        placeholder: &'static str,
    },
}

/// Source of prompt templates by name
///
/// Template authoring lives outside this workspace; providers only resolve
/// a name to text.
pub trait PromptProvider: Send + Sync {
    fn load(&self, name: &str) -> Result<PromptTemplate, PromptError>;

    /// Load and require the given placeholders.
    fn load_checked(
        &self,
        name: &str,
        placeholders: &[&'static str],
    ) -> Result<PromptTemplate, PromptError> {
        let template = self.load(name)?;
        if let Some(missing) = placeholders.iter().find(|p| !template.has_placeholder(p)) {
            return Err(PromptError::MissingPlaceholder {
                name: name.to_string(),
                placeholder: *missing,
            });
        }
        Ok(template)
    }
}

/// Provider serving only the built-in templates.
pub struct BuiltinPrompts;

impl PromptProvider for BuiltinPrompts {
    fn load(&self, name: &str) -> Result<PromptTemplate, PromptError> {
        PromptTemplate::builtin(name).ok_or_else(|| PromptError::NotFound(name.to_string()))
    }
}
