//! CLI entrypoint for answer-router
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use router_application::{BuildAnswersUseCase, BuildReport, ProgressNotifier};
use router_domain::{AnswerLimits, validate_answers};
use router_infrastructure::{
    ChatCompletionsGateway, ConfigLoader, FileConfig, JsonAnswerFile, JsonlConversationLogger,
    load_question_records, load_questions, read_answers, read_answers_lenient,
};
use router_presentation::{
    Cli, Command, ConsoleFormatter, GenerateArgs, InspectArgs, ProgressReporter, SimpleProgress,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;

    let log_file = cli.log_file.clone().or_else(|| config.logging.file.clone());
    let _guard = init_logging(cli.verbose, log_file.as_deref())?;

    info!("Starting answer-router");

    match cli.command {
        Some(Command::Generate(args)) => generate(config, args, cli.quiet).await,
        Some(Command::Inspect(args)) => {
            inspect(&config, args);
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return ConfigLoader::load_without_files()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e));
    }

    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Stderr logging filtered by verbosity (`RUST_LOG` wins when set), plus an
/// optional plain-text log file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(directory)
                .with_context(|| format!("Failed to create {}", directory.display()))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Command-line flags take precedence over every config source
fn apply_overrides(config: &mut FileConfig, args: &GenerateArgs) {
    if let Some(path) = &args.input_file {
        config.paths.input_file = path.clone();
    }
    if let Some(path) = &args.output_file {
        config.paths.output_file = path.clone();
    }
    if let Some(samples) = args.samples {
        config.pipeline.math_samples = samples;
    }
    if let Some(samples) = args.prediction_samples {
        config.pipeline.prediction_samples = samples;
    }
    if args.use_domain_hints {
        config.pipeline.use_domain_hints = true;
    }
    if let Some(path) = &args.conversation_log {
        config.logging.conversation_log = Some(path.clone());
    }
    if let Some(seconds) = args.timeout {
        config.api.timeout_seconds = Some(seconds);
    }
}

async fn generate(mut config: FileConfig, args: GenerateArgs, quiet: bool) -> Result<()> {
    apply_overrides(&mut config, &args);
    config.validate().context("Invalid configuration")?;

    let input_path = config.paths.input_file.clone();
    let output_path = config.paths.output_file.clone();

    let questions = load_questions(&input_path)?;
    info!(
        "Loaded {} questions from {}",
        questions.len(),
        input_path.display()
    );

    // === Dependency Injection ===
    let gateway = Arc::new(ChatCompletionsGateway::new(&config.api)?);
    let mut use_case =
        BuildAnswersUseCase::new(gateway, config.pipeline_config(), config.behavior_config());

    if let Some(path) = &config.logging.conversation_log {
        let logger = JsonlConversationLogger::open(path)
            .with_context(|| format!("Failed to open conversation log {}", path.display()))?;
        info!("Writing conversation transcript to {}", path.display());
        use_case = use_case.with_logger(Arc::new(logger));
    }

    let mut sink = JsonAnswerFile::new(&output_path);
    let report: BuildReport = if quiet {
        use_case.execute(&questions, &mut sink).await?
    } else {
        let progress: Box<dyn ProgressNotifier> = if ProgressReporter::is_supported() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };
        use_case
            .execute_with_progress(&questions, &mut sink, progress.as_ref())
            .await?
    };

    if !quiet {
        println!("{}", ConsoleFormatter::format_report(&report));
    }
    if report.errors > 0 {
        warn!("{} of {} answers are error answers", report.errors, report.total);
    }

    let answers = read_answers(&output_path)?;
    let limits = AnswerLimits {
        max_chars: config.pipeline.max_output_chars,
    };
    validate_answers(questions.len(), &answers, limits)
        .with_context(|| format!("Answer file {} failed validation", output_path.display()))?;

    println!(
        "{}",
        ConsoleFormatter::format_validated(answers.len(), &output_path)
    );
    Ok(())
}

/// Print one question/answer pair; unreadable files count as empty
fn inspect(config: &FileConfig, args: InspectArgs) {
    println!("Loading data...");

    let input_path = args
        .input_file
        .unwrap_or_else(|| config.paths.input_file.clone());
    let questions = load_question_records(&input_path).unwrap_or_else(|e| {
        println!("{}", ConsoleFormatter::format_load_error(&e));
        Vec::new()
    });

    let answer_files: Vec<PathBuf> = if args.answer_files.is_empty() {
        config.paths.answer_files()
    } else {
        args.answer_files
    };
    let answers: Vec<Value> = answer_files
        .iter()
        .flat_map(|path| {
            read_answers_lenient(path).unwrap_or_else(|e| {
                println!("{}", ConsoleFormatter::format_load_error(&e));
                Vec::new()
            })
        })
        .collect();

    print!(
        "{}",
        ConsoleFormatter::format_inspection(args.index, &questions, &answers)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = FileConfig::default();
        let args = GenerateArgs {
            input_file: Some(PathBuf::from("in.json")),
            samples: Some(5),
            use_domain_hints: true,
            timeout: Some(30),
            ..Default::default()
        };

        apply_overrides(&mut config, &args);
        assert_eq!(config.paths.input_file, PathBuf::from("in.json"));
        assert_eq!(
            config.paths.output_file,
            FileConfig::default().paths.output_file
        );
        assert_eq!(config.pipeline.math_samples, 5);
        assert_eq!(config.pipeline.prediction_samples, 3);
        assert!(config.pipeline.use_domain_hints);
        assert_eq!(config.api.timeout_seconds, Some(30));
    }

    #[test]
    fn test_zero_samples_flag_fails_validation() {
        let mut config = FileConfig::default();
        let args = GenerateArgs {
            samples: Some(0),
            ..Default::default()
        };
        apply_overrides(&mut config, &args);
        assert!(config.validate().is_err());
    }
}
