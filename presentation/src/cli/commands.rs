//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use sdg_domain::{ClassifierKind, MatchPolicy, OutputFormat};
use std::path::PathBuf;

/// Results file written by `evaluate` unless `--results` is given
pub const DEFAULT_RESULTS_FILE: &str = "evaluation_results.jsonl";

/// CLI arguments for patent-sdg
#[derive(Parser, Debug)]
#[command(name = "patent-sdg")]
#[command(author, version, about = "Classify patents against the UN Sustainable Development Goals")]
#[command(long_about = r#"
patent-sdg classifies patent descriptions against the 17 UN Sustainable
Development Goals and evaluates classifiers on labelled datasets.

Configuration files are loaded from (in priority order):
1. PATENT_SDG_* environment variables (e.g. PATENT_SDG_GENERATION__MODEL)
2. --config <path>        Explicit config file
3. ./patent-sdg.toml      Project-level config
4. ~/.config/patent-sdg/config.toml   Global config

Example:
  patent-sdg classify --file patent.txt --cite
  patent-sdg extract "Targets 7.2 and SDG13 apply"
  patent-sdg evaluate testset.jsonl --concurrency 4
  patent-sdg report evaluation_results.jsonl --multi
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (text or json)
    #[arg(short, long, global = true, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify one patent description
    Classify(ClassifyArgs),

    /// List the goals referenced in a piece of text (no model involved)
    Extract(TextInput),

    /// Run a classifier over a labelled dataset and write a results file
    Evaluate(EvaluateArgs),

    /// Re-score an existing results file
    Report(ReportArgs),

    /// Show the effective configuration and the files it was read from
    ShowConfig,
}

/// Text given inline or read from a file
#[derive(Args, Debug, Clone)]
pub struct TextInput {
    /// Text to process
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: TextInput,

    /// Also ask the model for supporting citations
    #[arg(long)]
    pub cite: bool,

    /// Classifier to use (overrides configuration)
    #[arg(long, value_name = "KIND")]
    pub classifier: Option<ClassifierKind>,
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Labelled JSONL dataset (`description_text` and `sdg` per line)
    pub dataset: PathBuf,

    /// Results file; a numbered sibling is used if it already exists
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_RESULTS_FILE)]
    pub results: PathBuf,

    /// Classifications in flight at once (overrides configuration)
    #[arg(short = 'j', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// How predictions are compared to labels: contains or exact
    #[arg(long, value_name = "POLICY")]
    pub policy: Option<MatchPolicy>,

    /// Classifier to use (overrides configuration)
    #[arg(long, value_name = "KIND")]
    pub classifier: Option<ClassifierKind>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Results file produced by `evaluate`
    pub path: PathBuf,

    /// Score every predicted goal instead of single-label accuracy
    #[arg(long)]
    pub multi: bool,

    /// How predictions are compared to labels: contains or exact
    #[arg(long, value_name = "POLICY")]
    pub policy: Option<MatchPolicy>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_evaluate() {
        let cli = Cli::parse_from([
            "patent-sdg",
            "evaluate",
            "testset.jsonl",
            "-j",
            "4",
            "--policy",
            "exact",
            "-o",
            "json",
        ]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Command::Evaluate(args) => {
                assert_eq!(args.dataset, PathBuf::from("testset.jsonl"));
                assert_eq!(args.results, PathBuf::from(DEFAULT_RESULTS_FILE));
                assert_eq!(args.concurrency, Some(4));
                assert_eq!(args.policy, Some(MatchPolicy::Exact));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_classify_from_file() {
        let cli = Cli::parse_from([
            "patent-sdg",
            "-vv",
            "classify",
            "--file",
            "p.txt",
            "--cite",
            "--classifier",
            "rule-based",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Classify(args) => {
                assert!(args.cite);
                assert_eq!(args.input.file, Some(PathBuf::from("p.txt")));
                assert_eq!(args.classifier, Some(ClassifierKind::RuleBased));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_text_input_required() {
        assert!(Cli::try_parse_from(["patent-sdg", "extract"]).is_err());
        assert!(Cli::try_parse_from(["patent-sdg", "extract", "SDG3"]).is_ok());
    }

    #[test]
    fn test_report_multi() {
        let cli = Cli::parse_from(["patent-sdg", "report", "r.jsonl", "--multi"]);
        assert!(matches!(cli.command, Command::Report(ReportArgs { multi: true, .. })));
    }
}
