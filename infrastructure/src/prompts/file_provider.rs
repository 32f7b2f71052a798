//! Prompt templates read from a directory
//!
//! A template named `sdg_label` is read from `<dir>/sdg_label.md`. Names
//! with no file fall back to the built-in templates.

use sdg_application::ports::prompt_provider::{PromptError, PromptProvider};
use sdg_domain::PromptTemplate;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extension of template files
const TEMPLATE_EXTENSION: &str = "md";

/// Prompt provider backed by a template directory
#[derive(Debug, Clone, Default)]
pub struct FilePromptProvider {
    directory: Option<PathBuf>,
}

impl FilePromptProvider {
    /// Provider reading from `directory`; `None` serves built-ins only.
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    fn template_path(&self, name: &str) -> Option<PathBuf> {
        // names are identifiers, never paths
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return None;
        }
        self.directory
            .as_ref()
            .map(|dir| dir.join(format!("{name}.{TEMPLATE_EXTENSION}")))
    }
}

impl PromptProvider for FilePromptProvider {
    fn load(&self, name: &str) -> Result<PromptTemplate, PromptError> {
        if let Some(path) = self.template_path(name).filter(|p| p.is_file()) {
            let body = std::fs::read_to_string(&path).map_err(|e| PromptError::Io {
                name: name.to_string(),
                message: format!("{}: {}", path.display(), e),
            })?;
            debug!("Loaded prompt template {} from {}", name, path.display());
            return Ok(PromptTemplate::new(name, body));
        }

        PromptTemplate::builtin(name).ok_or_else(|| PromptError::NotFound(name.to_string()))
    }
}
