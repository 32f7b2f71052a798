//! Configuration file loading for patent-sdg
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PATENT_SDG_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./patent-sdg.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/patent-sdg/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_NLI_ENDPOINT, FileClassifierConfig, FileConfig,
    FileEvaluationConfig, FileGenerationConfig, FileLoggingConfig, FileNliConfig, FileOutputConfig,
    FilePromptsConfig,
};
pub use loader::{ConfigLoader, ConfigSource, ENV_PREFIX, PROJECT_CONFIG_FILE};
