//! CLI entrypoint for patent-sdg
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use sdg_application::{
    CiteEvidenceUseCase, EvaluationError, EvaluationParams, KeywordClassifier, NliClassifier, PromptProvider,
    RecordWriter, ReportUseCase, RunEvaluationInput, RunEvaluationUseCase, SdgClassifier,
    ZeroShotLlmClassifier,
};
use sdg_domain::prompt::{DESCRIPTION_PLACEHOLDER, SDG_PLACEHOLDER};
use sdg_domain::{ClassifierKind, EvaluationSummary, OutputFormat, extract_sdgs};
use sdg_infrastructure::{
    ConfigLoader, FileConfig, FilePromptProvider, HfZeroShotScorer, JsonlRecordReader,
    JsonlResultsWriter, OllamaGateway,
};
use sdg_presentation::{
    ClassificationView, ClassifyArgs, Cli, Command, EvaluateArgs, EvaluationProgressReporter,
    OutputConfig, OutputFormatter, ReportArgs, TextInput, formatter_for,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Configuration error: {}", e))?
    };

    let _log_guard = init_tracing(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting patent-sdg");

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            error!("{}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    let output = OutputConfig::resolve(
        cli.output,
        config.output.format,
        config.output.color,
        cli.quiet,
    );
    output.apply();
    let formatter = formatter_for(output.format);

    match cli.command {
        Command::Extract(input) => {
            let text = read_text(&input)?;
            println!("{}", formatter.format_extraction(&extract_sdgs(&text)));
        }
        Command::Classify(args) => classify(args, &config, formatter.as_ref()).await?,
        Command::Evaluate(args) => evaluate(args, &config, output, formatter.as_ref()).await?,
        Command::Report(args) => report(args, &config, formatter.as_ref())?,
        Command::ShowConfig => show_config(cli.config.as_deref(), &config, output.format)?,
    }

    Ok(())
}

/// Console logging by verbosity, plus a JSON file layer when configured.
///
/// The returned guard flushes the file writer when dropped.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .with_context(|| format!("Log file path has no file name: {}", path.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn read_text(input: &TextInput) -> Result<String> {
    match (&input.text, &input.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, None) => bail!("Provide the text or --file <PATH>"),
    }
}

// ==================== Dependency Injection ====================

/// Classifier and the adapters it was built on, torn down together.
struct Runtime {
    classifier: Arc<dyn SdgClassifier>,
    citer: Option<CiteEvidenceUseCase<OllamaGateway>>,
    gateway: Option<Arc<OllamaGateway>>,
}

impl Runtime {
    async fn build(config: &FileConfig, kind: ClassifierKind, cite: bool) -> Result<Self> {
        let params = config.generation_params();
        let gateway = if kind.uses_generation() || cite {
            let gateway = OllamaGateway::connect(
                &config.generation.host,
                config.generation.timeout(),
                &params.model,
            )
            .await
            .with_context(|| format!("Cannot use model {}", params.model))?;
            Some(Arc::new(gateway))
        } else {
            None
        };

        match Self::assemble(config, kind, cite, gateway.clone()) {
            Ok(runtime) => Ok(runtime),
            Err(e) => {
                shutdown_gateway(gateway);
                Err(e)
            }
        }
    }

    /// Wire classifier and citation use case onto an already connected gateway.
    fn assemble(
        config: &FileConfig,
        kind: ClassifierKind,
        cite: bool,
        gateway: Option<Arc<OllamaGateway>>,
    ) -> Result<Self> {
        let settings = config.classifier_settings();
        let params = config.generation_params();
        let prompts = FilePromptProvider::new(config.prompts.directory.clone());

        let classifier: Arc<dyn SdgClassifier> = match (kind, &gateway) {
            (ClassifierKind::ZeroShotLlm, Some(gateway)) => {
                let template =
                    prompts.load_checked(&settings.label_prompt, &[DESCRIPTION_PLACEHOLDER])?;
                Arc::new(ZeroShotLlmClassifier::new(
                    Arc::clone(gateway),
                    template,
                    params.clone(),
                ))
            }
            (ClassifierKind::ZeroShotLlm, None) => {
                bail!("The zero-shot LLM classifier needs a generation service")
            }
            (ClassifierKind::RuleBased, _) => Arc::new(KeywordClassifier::new()),
            (ClassifierKind::Nli, _) => {
                let scorer = HfZeroShotScorer::new(
                    &config.nli.endpoint,
                    &config.nli.token_env,
                    config.generation.timeout(),
                )?;
                let model = scorer.endpoint().to_string();
                Arc::new(NliClassifier::new(Arc::new(scorer), settings.nli, model))
            }
        };

        let citer = match (&gateway, cite) {
            (Some(gateway), true) => {
                let template = prompts.load_checked(
                    &settings.citation_prompt,
                    &[DESCRIPTION_PLACEHOLDER, SDG_PLACEHOLDER],
                )?;
                Some(CiteEvidenceUseCase::new(
                    Arc::clone(gateway),
                    template,
                    params,
                ))
            }
            _ => None,
        };

        info!("Using {} classifier ({})", kind, classifier.model_name());
        Ok(Self {
            classifier,
            citer,
            gateway,
        })
    }

    fn shutdown(self) {
        let Self {
            classifier,
            citer,
            gateway,
        } = self;
        drop(classifier);
        drop(citer);
        shutdown_gateway(gateway);
    }
}

/// Close the gateway once its last handle is released.
fn shutdown_gateway(gateway: Option<Arc<OllamaGateway>>) {
    if let Some(gateway) = gateway.and_then(|g| Arc::try_unwrap(g).ok()) {
        gateway.shutdown();
    }
}

// ==================== Commands ====================

async fn classify(
    args: ClassifyArgs,
    config: &FileConfig,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let text = read_text(&args.input)?;
    let kind = args
        .classifier
        .unwrap_or_else(|| config.classifier_settings().kind);
    let runtime = Runtime::build(config, kind, args.cite).await?;
    let view = classify_with(&runtime, kind, &text).await;
    runtime.shutdown();

    println!("{}", formatter.format_classification(&view?));
    Ok(())
}

async fn classify_with(
    runtime: &Runtime,
    kind: ClassifierKind,
    text: &str,
) -> Result<ClassificationView> {
    let prediction = runtime.classifier.classify_description(text).await?;
    let evidence = match &runtime.citer {
        Some(citer) => Some(citer.execute(text, &prediction.classification).await?),
        None => None,
    };

    Ok(ClassificationView {
        classifier: kind.as_str().to_string(),
        model: runtime.classifier.model_name(),
        sdg_tag: prediction.sdg_tag,
        classification: prediction.classification,
        evidence,
    })
}

async fn evaluate(
    args: EvaluateArgs,
    config: &FileConfig,
    output: OutputConfig,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    if !args.dataset.is_file() {
        bail!("Dataset not found: {}", args.dataset.display());
    }

    let kind = args
        .classifier
        .unwrap_or_else(|| config.classifier_settings().kind);
    let runtime = Runtime::build(config, kind, false).await?;

    let mut params = config.evaluation_params();
    if let Some(concurrency) = args.concurrency {
        params = params.with_concurrency(concurrency);
    }
    if let Some(policy) = args.policy {
        params = params.with_match_policy(policy);
    }

    let outcome = evaluate_with(&runtime, &args, params, output.show_progress).await;
    runtime.shutdown();

    let (result, results_path) = outcome?;
    let summary = match result {
        Ok(summary) => summary,
        Err(e @ EvaluationError::EmptyDataset(_)) => {
            // nothing was written
            let _ = std::fs::remove_file(&results_path);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", formatter.format_summary(&summary));
    if output.format == OutputFormat::Text {
        println!("Results written to {}", results_path.display());
    }
    Ok(())
}

/// Run the evaluation; the results file is closed before returning.
async fn evaluate_with(
    runtime: &Runtime,
    args: &EvaluateArgs,
    params: EvaluationParams,
    show_progress: bool,
) -> Result<(Result<EvaluationSummary, EvaluationError>, PathBuf)> {
    let use_case = RunEvaluationUseCase::new(
        Arc::clone(&runtime.classifier),
        Arc::new(JsonlRecordReader::new()),
        params,
    );
    let mut writer = JsonlResultsWriter::create(&args.results)?;
    let results_path = writer.path().to_path_buf();
    let input = RunEvaluationInput::new(&args.dataset);

    let result = if show_progress {
        let progress = EvaluationProgressReporter::new();
        use_case
            .execute_with_progress(input, &mut writer, &progress)
            .await
    } else {
        use_case.execute(input, &mut writer).await
    };
    Ok((result, results_path))
}

fn report(args: ReportArgs, config: &FileConfig, formatter: &dyn OutputFormatter) -> Result<()> {
    let policy = args
        .policy
        .unwrap_or_else(|| config.evaluation_params().match_policy);
    let use_case = ReportUseCase::new(Arc::new(JsonlRecordReader::new())).with_policy(policy);

    let rendered = if args.multi {
        formatter.format_multi_label(&use_case.multi_label(&args.path)?)
    } else {
        formatter.format_summary(&use_case.single_label(&args.path)?)
    };
    println!("{}", rendered);
    Ok(())
}

fn show_config(explicit: Option<&Path>, config: &FileConfig, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("Configuration sources (in priority order):");
    for source in ConfigLoader::config_sources(explicit) {
        let mark = if source.found { "FOUND" } else { "     " };
        println!("  [{}] {:<8} {}", mark, source.label, source.path.display());
    }
    println!("  [     ] Default  built-in defaults");
    println!();
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline_gateway() -> Arc<OllamaGateway> {
        Arc::new(OllamaGateway::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap())
    }

    // ==================== Runtime lifecycle ====================

    #[test]
    fn test_failed_assembly_releases_gateway() {
        let mut config = FileConfig::default();
        config.classifier.label_prompt = "no_such_template".to_string();

        let gateway = offline_gateway();
        let released = Arc::downgrade(&gateway);
        let result = Runtime::assemble(
            &config,
            ClassifierKind::ZeroShotLlm,
            true,
            Some(Arc::clone(&gateway)),
        );
        assert!(result.is_err());
        assert_eq!(Arc::strong_count(&gateway), 1);

        shutdown_gateway(Some(gateway));
        assert!(released.upgrade().is_none());
    }

    #[test]
    fn test_shutdown_releases_every_handle() {
        let config = FileConfig::default();
        let gateway = offline_gateway();
        let released = Arc::downgrade(&gateway);

        let runtime =
            Runtime::assemble(&config, ClassifierKind::RuleBased, true, Some(gateway)).unwrap();
        assert!(runtime.citer.is_some());
        assert_eq!(runtime.classifier.kind(), ClassifierKind::RuleBased);

        runtime.shutdown();
        assert!(released.upgrade().is_none());
    }
}
