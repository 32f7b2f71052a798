//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "patent-sdg.toml";

/// Prefix of environment overrides, e.g. `PATENT_SDG_GENERATION__MODEL`
pub const ENV_PREFIX: &str = "PATENT_SDG_";

const APP_DIR: &str = "patent-sdg";

/// One candidate configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub label: &'static str,
    pub path: PathBuf,
    pub found: bool,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path.filter(|p| !p.exists()) {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// The merged provider chain, lowest priority first.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// `$XDG_CONFIG_HOME/patent-sdg/config.toml` or the platform equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(PROJECT_CONFIG_FILE);
        path.exists().then_some(path)
    }

    /// Candidate files in priority order, for display
    pub fn config_sources(config_path: Option<&Path>) -> Vec<ConfigSource> {
        let mut sources = Vec::new();

        if let Some(path) = config_path {
            sources.push(ConfigSource {
                label: "Explicit",
                found: path.exists(),
                path: path.to_path_buf(),
            });
        }

        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        sources.push(ConfigSource {
            label: "Project",
            found: project.exists(),
            path: project,
        });

        if let Some(path) = Self::global_config_path() {
            sources.push(ConfigSource {
                label: "Global",
                found: path.exists(),
                path,
            });
        }

        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdg_domain::ClassifierKind;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.generation.model, "qwen3:8b");
        assert_eq!(config.evaluation.concurrency, 1);
    }

    #[test]
    fn test_global_config_path_names_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("patent-sdg"));
        }
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
[generation]
model = "llama3:8b"
temperature = 0.0

[classifier]
kind = "rule_based"
"#,
        )
        .unwrap();

        let config: FileConfig = ConfigLoader::figment(Some(path.as_path())).extract().unwrap();
        assert_eq!(config.generation.model, "llama3:8b");
        assert_eq!(config.generation.temperature, 0.0);
        // untouched keys keep their defaults
        assert_eq!(config.generation.timeout_seconds, 300);
        assert_eq!(config.classifier.parse_kind().unwrap(), ClassifierKind::RuleBased);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_sources_lists_explicit_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.toml");
        fs::write(&path, "").unwrap();

        let sources = ConfigLoader::config_sources(Some(path.as_path()));
        assert_eq!(sources[0].label, "Explicit");
        assert!(sources[0].found);
        assert_eq!(sources[1].label, "Project");
    }
}
