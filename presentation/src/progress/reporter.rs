//! Progress reporting for answer runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use router_application::ports::progress::ProgressNotifier;
use router_domain::TaskDomain;
use std::io::IsTerminal;
use std::sync::{Mutex, MutexGuard};

/// Reports progress with a single progress bar over all questions
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    /// The bar draws to stderr, so it is only shown when stderr is a terminal
    pub fn is_supported() -> bool {
        std::io::stderr().is_terminal()
    }

    fn run_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn bar(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.bar.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn domain_label(domain: Option<TaskDomain>) -> &'static str {
    domain.map_or("unrouted", |d| d.display_name())
}

impl ProgressNotifier for ProgressReporter {
    fn on_run_start(&self, total_questions: usize) {
        let pb = ProgressBar::new(total_questions as u64);
        pb.set_style(Self::run_style());
        pb.set_prefix("Answering");
        pb.set_message("Starting...");
        *self.bar() = Some(pb);
    }

    fn on_question_classified(&self, index: usize, domain: TaskDomain) {
        if let Some(pb) = self.bar().as_ref() {
            pb.set_message(format!("#{} {}", index, domain.display_name().dimmed()));
        }
    }

    fn on_question_complete(&self, index: usize, domain: Option<TaskDomain>, success: bool) {
        if let Some(pb) = self.bar().as_ref() {
            let status = if success {
                format!("{} #{} {}", "v".green(), index, domain_label(domain))
            } else {
                format!("{} #{} {}", "x".red(), index, domain_label(domain))
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_run_complete(&self) {
        if let Some(pb) = self.bar().take() {
            pb.finish_with_message(format!("{}", "done".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_run_start(&self, total_questions: usize) {
        println!(
            "{} {} ({} questions)",
            "->".cyan(),
            "Answering".bold(),
            total_questions
        );
    }

    fn on_question_classified(&self, index: usize, domain: TaskDomain) {
        println!("  Question {}: domain identified: {}", index, domain);
    }

    fn on_question_complete(&self, index: usize, domain: Option<TaskDomain>, success: bool) {
        if success {
            println!("  {} #{} {}", "v".green(), index, domain_label(domain));
        } else {
            println!("  {} #{} {} (error answer)", "x".red(), index, domain_label(domain));
        }
    }

    fn on_run_complete(&self) {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_tracks_position() {
        let reporter = ProgressReporter::new();
        reporter.on_run_start(3);
        reporter.on_question_classified(0, TaskDomain::Math);
        reporter.on_question_complete(0, Some(TaskDomain::Math), true);
        reporter.on_question_complete(1, None, false);

        assert_eq!(reporter.bar().as_ref().map(|pb| pb.position()), Some(2));

        reporter.on_run_complete();
        assert!(reporter.bar().is_none());
    }

    #[test]
    fn test_bar_visibility_follows_stderr() {
        let reporter = ProgressReporter::new();
        reporter.on_run_start(1);

        let hidden = reporter.bar().as_ref().map(|pb| pb.is_hidden());
        assert_eq!(hidden, Some(!ProgressReporter::is_supported()));
    }

    #[test]
    fn test_events_before_start_are_ignored() {
        let reporter = ProgressReporter::default();
        reporter.on_question_complete(0, Some(TaskDomain::Coding), true);
        reporter.on_run_complete();
        assert!(reporter.bar().is_none());
    }
}
