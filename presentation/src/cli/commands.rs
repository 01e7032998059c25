//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for answer-router
#[derive(Parser, Debug)]
#[command(name = "answer-router")]
#[command(author, version, about = "Route questions to domain-specific LLM pipelines")]
#[command(long_about = r#"
answer-router classifies every question in a JSON file into one of five
domains (math, coding, planning, common sense, future prediction), runs the
matching prompt pipeline against an OpenAI-compatible endpoint, and writes
one answer per question.

Configuration files are loaded from (in priority order):
1. API_BASE / OPENAI_API_KEY / MODEL_NAME   Environment
2. --config <path>                          Explicit config file
3. ./answer-router.toml                     Project-level config
4. ~/.config/answer-router/config.toml      Global config

Example:
  answer-router generate --input_file data/test.json --output_file out/answers.json
  answer-router inspect 42
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer every question in the input file
    Generate(GenerateArgs),

    /// Print the question and answer at a 0-based index
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// JSON array of {"input": ...} records
    #[arg(long = "input_file", alias = "input-file", value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Where to write the JSON array of {"output": ...} records
    #[arg(long = "output_file", alias = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Reasoning samples per math question
    #[arg(long, value_name = "N")]
    pub samples: Option<usize>,

    /// Internal predictions per future-prediction question
    #[arg(long, value_name = "N")]
    pub prediction_samples: Option<usize>,

    /// Trust the `domain` field of input records instead of classifying
    #[arg(long)]
    pub use_domain_hints: bool,

    /// Append the prompt/response transcript to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Per-request timeout in seconds, overriding every step default
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

#[derive(Args, Debug, Default)]
pub struct InspectArgs {
    /// Question index (0-based)
    pub index: usize,

    /// Question file
    #[arg(long = "input_file", alias = "input-file", value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Answer files, concatenated in order (replaces the configured list)
    #[arg(long = "answers", value_name = "PATH")]
    pub answer_files: Vec<PathBuf>,
}
