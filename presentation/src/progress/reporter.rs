//! Progress reporting for evaluation runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sdg_application::ports::progress::EvaluationProgress;
use std::sync::Mutex;

/// Reports evaluation progress with a progress bar and running accuracy
pub struct EvaluationProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl EvaluationProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    /// Run `f` on the current bar, if a run is in progress.
    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) -> bool {
        match self.bar.lock() {
            Ok(guard) => match guard.as_ref() {
                Some(pb) => {
                    f(pb);
                    true
                }
                None => false,
            },
            Err(_) => false,
        }
    }

    fn accuracy_message(correct: usize, done: usize) -> String {
        if done == 0 {
            return String::new();
        }
        format!(
            "accuracy {:.2}% ({}/{})",
            correct as f64 / done as f64 * 100.0,
            correct,
            done
        )
    }
}

impl Default for EvaluationProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationProgress for EvaluationProgressReporter {
    fn on_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Evaluating");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_sample(&self, correct: usize, done: usize, is_correct: bool) {
        self.with_bar(|pb| {
            let mark = if is_correct { "v".green() } else { "x".red() };
            pb.set_message(format!("{} {}", mark, Self::accuracy_message(correct, done)));
            pb.set_position(done as u64);
        });
    }

    fn on_finish(&self) {
        let finished = self.bar.lock().ok().and_then(|mut bar| bar.take());
        if let Some(pb) = finished {
            pb.finish_with_message(format!("{}", "complete!".green()));
        }
    }

    fn on_skipped(&self, line_number: usize, reason: &str) {
        let message = format!("{} line {} skipped: {}", "!".yellow(), line_number, reason);
        let shown = self.with_bar(|pb| pb.println(&message));
        if !shown {
            eprintln!("{}", message);
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl EvaluationProgress for SimpleProgress {
    fn on_start(&self, total: usize) {
        println!("{} {} ({} samples)", "->".cyan(), "Evaluating".bold(), total);
    }

    fn on_sample(&self, correct: usize, done: usize, is_correct: bool) {
        let mark = if is_correct { "v".green() } else { "x".red() };
        println!(
            "  {} {}",
            mark,
            EvaluationProgressReporter::accuracy_message(correct, done)
        );
    }

    fn on_finish(&self) {
        println!();
    }

    fn on_skipped(&self, line_number: usize, reason: &str) {
        println!("  {} line {} skipped: {}", "!".yellow(), line_number, reason);
    }
}
