//! Prompt configuration from TOML (`[prompts]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw prompt template location from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptsConfig {
    /// Directory holding `<name>.md` templates; built-ins are used otherwise
    pub directory: Option<PathBuf>,
}
