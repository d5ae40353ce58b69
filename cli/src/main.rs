//! CLI entrypoint for quizpack
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quizpack_application::{ConversionNotifier, ConvertQuizInput, ConvertQuizUseCase};
use quizpack_domain::OutputFormat;
use quizpack_infrastructure::{ConfigLoader, LocaleLoader, QuizOverrides, ZipPackageAssembler};
use quizpack_presentation::{
    Cli, ConsoleFormatter, ConversionSummary, ProgressReporter, SimpleProgress, set_color_enabled,
};
use std::fs;
use std::io::{self, IsTerminal, Read};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // CLI flags take precedence over file values and are validated with them
    config.quiz.apply_overrides(QuizOverrides {
        title: cli.title.clone(),
        randomize_questions: cli.randomize_override(),
        pool_size: cli.pool_size,
        pass_percentage: cli.pass_percentage,
    });
    if let Some(template) = &cli.template {
        config.template.path = template.clone();
    }
    for issue in config.check()? {
        warn!("{}", issue.message);
    }
    set_color_enabled(config.output.color);

    let settings = config.quiz.to_settings().0;
    let template = config.template.path.clone();
    let format = cli
        .format
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let notifier: Box<dyn ConversionNotifier> = if cli.quiet {
        Box::new(SimpleProgress::quiet())
    } else if io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress::new())
    };

    // === Input ===
    let source_name = cli.source_name();
    let document = match cli.input_file() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read question document from stdin")?;
            buf
        }
    };

    let mut input = ConvertQuizInput::new(&source_name, document, template).with_settings(settings);
    if let Some(path) = &cli.image {
        let image = fs::read(path)
            .with_context(|| format!("Failed to read image '{}'", path.display()))?;
        input = input.with_image(image);
    }

    // === Dependency Injection ===
    let locale = LocaleLoader::load(config.locale.path.as_deref())?;
    let use_case = ConvertQuizUseCase::new(ZipPackageAssembler::new(), locale)
        .with_pipeline(config.compat.pipeline());

    info!("Converting '{}'", source_name);
    let output = use_case.execute_with_notifier(input, notifier.as_ref())?;
    drop(notifier);

    // === Output ===
    let written_to = match &output.package {
        Some(package) => {
            let path = cli.output_path();
            fs::write(&path, &package.bytes)
                .with_context(|| format!("Failed to write package to '{}'", path.display()))?;
            Some(path)
        }
        None => None,
    };

    let summary = ConversionSummary::new(&source_name, &output, written_to.as_deref());
    let rendered = match format {
        OutputFormat::Text => ConsoleFormatter::format(&summary),
        OutputFormat::Json => ConsoleFormatter::format_json(&summary),
    };
    println!("{}", rendered.trim_end());

    if written_to.is_none() {
        bail!("No package created for '{}'", source_name);
    }

    Ok(())
}
