//! Console output formatter

use super::formatter::{ClassificationView, OutputFormatter};
use colored::Colorize;
use sdg_domain::{
    EvaluationSummary, IncorrectSample, MultiLabelSummary, RunMetadata, SdgList, goal_info,
};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single-label summary
    pub fn format_summary(summary: &EvaluationSummary) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Evaluation Results"));
        output.push('\n');
        output.push_str(&Self::metadata(&summary.metadata));

        output.push_str(&Self::section_header("Overall"));
        output.push_str(&format!(
            "{} {}\n",
            "Accuracy:".cyan().bold(),
            Self::percent(summary.accuracy).bold()
        ));
        output.push_str(&format!(
            "Correct: {}  Incorrect: {}  Total: {}\n",
            summary.correct.to_string().green(),
            summary.incorrect.to_string().red(),
            summary.total
        ));
        if summary.failed > 0 {
            output.push_str(&format!(
                "{} {}\n",
                "Failed classifications:".yellow(),
                summary.failed
            ));
        }
        if summary.skipped > 0 {
            output.push_str(&format!("{} {}\n", "Skipped lines:".yellow(), summary.skipped));
        }
        output.push_str(&Self::timing(
            summary.total_time,
            summary.average_prediction_time,
            summary.predictions_per_second,
        ));

        if !summary.breakdown.is_empty() {
            output.push_str(&Self::section_header("Per-label accuracy"));
            for row in &summary.breakdown {
                output.push_str(&format!(
                    "  {:<8} {:>8}  ({}/{})\n",
                    row.label,
                    Self::percent(row.accuracy),
                    row.correct,
                    row.total
                ));
            }
        }

        output.push_str(&Self::incorrect(&summary.incorrect_samples));
        output.push_str(&Self::footer());
        output
    }

    /// Format a multi-label report
    pub fn format_multi_label(summary: &MultiLabelSummary) -> String {
        let metrics = &summary.metrics;
        let mut output = String::new();

        output.push_str(&Self::header("Multi-label Evaluation"));
        output.push('\n');
        output.push_str(&Self::metadata(&summary.metadata));

        output.push_str(&Self::section_header("Overall"));
        output.push_str(&format!(
            "{} {} ({}/{})\n",
            "Exact match:".cyan().bold(),
            Self::percent(metrics.exact_match_ratio).bold(),
            metrics.exact_matches,
            metrics.samples
        ));
        output.push_str(&format!(
            "{:<8} precision {:.4}  recall {:.4}  f1 {:.4}\n",
            "Micro",
            metrics.micro.precision,
            metrics.micro.recall,
            metrics.micro.f1
        ));
        output.push_str(&format!(
            "{:<8} precision {:.4}  recall {:.4}  f1 {:.4}\n",
            "Macro",
            metrics.macro_avg.precision,
            metrics.macro_avg.recall,
            metrics.macro_avg.f1
        ));
        output.push_str(&Self::timing(
            summary.total_time,
            summary.average_prediction_time,
            summary.predictions_per_second,
        ));

        if !metrics.per_label.is_empty() {
            output.push_str(&Self::section_header("Per-label metrics"));
            output.push_str(&format!(
                "  {:<8} {:>4} {:>4} {:>4} {:>9} {:>9} {:>9} {:>9}\n",
                "label", "tp", "fp", "fn", "precision", "recall", "f1", "accuracy"
            ));
            for row in &metrics.per_label {
                output.push_str(&format!(
                    "  {:<8} {:>4} {:>4} {:>4} {:>9.4} {:>9.4} {:>9.4} {:>9.4}\n",
                    row.label,
                    row.counts.tp,
                    row.counts.fp,
                    row.counts.fn_,
                    row.counts.precision(),
                    row.counts.recall(),
                    row.counts.f1(),
                    row.accuracy
                ));
            }
        }

        output.push_str(&Self::incorrect(&summary.incorrect_samples));
        output.push_str(&Self::footer());
        output
    }

    /// Format one classification
    pub fn format_classification(view: &ClassificationView) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} ({})\n\n",
            "Classifier:".dimmed(),
            view.classifier,
            view.model
        ));

        let goals = &view.classification.sdgs;
        if goals.is_none() {
            output.push_str(&format!("{} {}\n", "SDG:".cyan().bold(), "None".yellow()));
        } else {
            output.push_str(&format!("{}\n", "SDG:".cyan().bold()));
            output.push_str(&Self::goal_lines(goals));
        }

        if !view.classification.reason.is_empty() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                "Reason:".cyan().bold(),
                Self::indent(&view.classification.reason, "  ")
            ));
        }

        if let Some(evidence) = &view.evidence {
            output.push_str(&Self::section_header("Evidence"));
            if !evidence.summary.is_empty() {
                output.push_str(&format!(
                    "{}\n{}\n\n",
                    "Summary:".bold(),
                    Self::indent(&evidence.summary, "  ")
                ));
            }
            if evidence.pairs.is_empty() {
                output.push_str(&format!("{}\n", "No citations returned.".dimmed()));
            } else {
                output.push_str(&evidence.rendered());
                output.push('\n');
            }
        }

        output
    }

    /// Format an extraction result
    pub fn format_extraction(sdgs: &SdgList) -> String {
        if sdgs.is_none() {
            return format!("{}\n", "None".yellow());
        }
        Self::goal_lines(sdgs)
    }

    fn goal_lines(sdgs: &SdgList) -> String {
        sdgs.goals()
            .map(|id| {
                let info = goal_info(*id);
                format!("  {} {}\n", id.label().green().bold(), info.short_name)
            })
            .collect()
    }

    fn metadata(metadata: &RunMetadata) -> String {
        metadata
            .entries()
            .iter()
            .map(|(key, value)| format!("{} {}\n", format!("{key}:").dimmed(), value))
            .collect()
    }

    fn timing(total: f64, average: f64, per_second: f64) -> String {
        format!(
            "{} {:.2}s total, {:.3}s per prediction, {:.3} predictions/s\n",
            "Time:".dimmed(),
            total,
            average,
            per_second
        )
    }

    fn incorrect(samples: &[IncorrectSample]) -> String {
        if samples.is_empty() {
            return String::new();
        }
        let mut output = Self::section_header("Sample incorrect predictions");
        for sample in samples {
            let id = sample.patent_number.as_deref().unwrap_or("-");
            output.push_str(&format!(
                "\n{} expected {} got {}\n  {}\n",
                format!("── {id} ──").yellow().bold(),
                sample.true_label.green(),
                sample.predicted.red(),
                sample.description
            ));
        }
        output
    }

    fn percent(ratio: f64) -> String {
        format!("{:.2}%", ratio * 100.0)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_summary(&self, summary: &EvaluationSummary) -> String {
        Self::format_summary(summary)
    }

    fn format_multi_label(&self, summary: &MultiLabelSummary) -> String {
        Self::format_multi_label(summary)
    }

    fn format_classification(&self, view: &ClassificationView) -> String {
        Self::format_classification(view)
    }

    fn format_extraction(&self, sdgs: &SdgList) -> String {
        Self::format_extraction(sdgs)
    }
}
