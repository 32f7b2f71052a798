//! Presentation-level configuration
//!
//! Resolves how results are displayed from command-line flags and the
//! `[output]` section of the configuration file.

use sdg_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// A format given on the command line wins over the file. JSON output
    /// and `--quiet` both turn progress off.
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
        quiet: bool,
    ) -> Self {
        let format = cli_format.or(file_format).unwrap_or_default();
        Self {
            format,
            color: color && format == OutputFormat::Text,
            show_progress: !quiet && format == OutputFormat::Text,
        }
    }

    /// Apply the color choice to the whole process.
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_format_wins() {
        let config = OutputConfig::resolve(
            Some(OutputFormat::Json),
            Some(OutputFormat::Text),
            true,
            false,
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.show_progress);
        assert!(!config.color);
    }

    #[test]
    fn test_file_format_and_quiet() {
        let config = OutputConfig::resolve(None, None, true, true);
        assert_eq!(
            config,
            OutputConfig {
                format: OutputFormat::Text,
                color: true,
                show_progress: false,
            }
        );
    }
}
