//! Console output formatting

use colored::Colorize;
use router_application::BuildReport;
use router_domain::TaskDomain;
use serde_json::Value;
use std::fmt::Display;
use std::path::Path;

/// Formats run summaries and inspected records for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Question and answer at `index`, framed by separators
    ///
    /// An index past the questions yields only an error line; an index past
    /// the answers prints the question with a not-found marker.
    pub fn format_inspection(index: usize, questions: &[Value], answers: &[Value]) -> String {
        let Some(question) = questions.get(index) else {
            return Self::format_out_of_range(index, questions.len());
        };

        let separator = Self::separator();
        let mut output = String::new();
        output.push_str(&format!("{}\nQuestion Index: {}\n{}\n", separator, index, separator));

        output.push_str("QUESTION:\n");
        output.push_str(&Self::pretty(question));
        output.push_str(&format!("\n{}\n", separator));

        match answers.get(index) {
            Some(answer) => {
                output.push_str("ANSWER:\n");
                output.push_str(&Self::pretty(answer));
                output.push('\n');
            }
            None => output.push_str("ANSWER: [Not found - index out of range for answers]\n"),
        }

        output.push_str(&separator);
        output.push('\n');
        output
    }

    fn format_out_of_range(index: usize, question_count: usize) -> String {
        match question_count.checked_sub(1) {
            Some(last) => format!("Error: Index {} out of range (0 - {})\n", index, last),
            None => format!("Error: Index {} out of range (no questions loaded)\n", index),
        }
    }

    /// A file the inspector could not load; the error names the path
    pub fn format_load_error(error: impl Display) -> String {
        format!("{} {}", "Error loading data:".red(), error)
    }

    /// Per-domain counts for a finished run
    pub fn format_report(report: &BuildReport) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Run summary"));

        for domain in TaskDomain::ALL {
            let count = report.count(domain);
            if count > 0 {
                output.push_str(&format!("  {:<20} {}\n", domain.display_name(), count));
            }
        }
        if report.unrouted > 0 {
            output.push_str(&format!("  {:<20} {}\n", "unrouted", report.unrouted));
        }

        let errors = if report.errors == 0 {
            "0".green()
        } else {
            report.errors.to_string().yellow()
        };
        output.push_str(&format!(
            "\n  {} answered, {} error answers\n",
            report.total, errors
        ));
        output
    }

    /// Final line after the written file passed validation
    pub fn format_validated(count: usize, path: &Path) -> String {
        format!(
            "Wrote {} answers to {} and validated format successfully.",
            count,
            path.display()
        )
    }

    fn pretty(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    }

    fn separator() -> String {
        "-".repeat(40)
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
