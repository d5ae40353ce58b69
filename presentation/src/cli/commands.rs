//! CLI command definitions

use clap::{Parser, ValueEnum};
use quizpack_application::PASTED_SOURCE_NAME;
use quizpack_domain::{PassPercentage, PoolSize, util::file_stem};
use std::path::{Path, PathBuf};

/// Output name used when the document is read from stdin
pub const STDIN_OUTPUT_NAME: &str = "pasted_content.h5p";

/// Format of the conversion summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON summary on stdout
    Json,
}

impl From<OutputFormat> for quizpack_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => quizpack_domain::OutputFormat::Text,
            OutputFormat::Json => quizpack_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for quizpack
#[derive(Parser, Debug)]
#[command(name = "quizpack")]
#[command(author, version, about = "Convert JSON quiz questions into an H5P question set")]
#[command(long_about = r#"
quizpack turns a JSON document of quiz questions into an H5P package
(.h5p) that can be uploaded to any H5P-enabled platform.

Supported question types: MultipleChoice, TrueFalse. Other types are
skipped with a warning.

Input format:
  {"questions": [
    {"type": "MultipleChoice", "question": "...",
     "options": [{"text": "...", "is_correct": true, "feedback": "..."}]},
    {"type": "TrueFalse", "question": "...", "correct_answer": true,
     "feedback_correct": "...", "feedback_incorrect": "..."}
  ]}

Configuration files are loaded from (in priority order):
1. QUIZPACK_* environment variables
2. --config <path>     Explicit config file
3. ./quizpack.toml     Project-level config
4. ~/.config/quizpack/config.toml   Global config

Example:
  quizpack questions.json --title "Zellbiologie" --pool-size 10
  cat questions.json | quizpack - -o quiz.h5p --image cover.png
"#)]
pub struct Cli {
    /// Question document; omit or use "-" to read from stdin
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Title of the quiz
    #[arg(short, long)]
    pub title: Option<String>,

    /// Shuffle questions on every play-through
    #[arg(long, overrides_with = "no_randomize")]
    pub randomize: bool,

    /// Keep questions in document order
    #[arg(long, overrides_with = "randomize")]
    pub no_randomize: bool,

    /// Questions drawn per play-through (1-16)
    #[arg(short, long, value_name = "N", value_parser = parse_pool_size)]
    pub pool_size: Option<PoolSize>,

    /// Score needed to pass: 50, 60, 66, 75 or 100
    #[arg(long, value_name = "PERCENT", value_parser = parse_pass_percentage)]
    pub pass_percentage: Option<PassPercentage>,

    /// PNG or JPEG shown on the intro page
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Template archive to build the package from
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Where to write the package
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Summary format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Input file, or `None` when reading stdin
    pub fn input_file(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Name of the document in notices
    pub fn source_name(&self) -> String {
        match self.input_file() {
            Some(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => PASTED_SOURCE_NAME.to_string(),
        }
    }

    /// Randomization override, if any flag was given
    pub fn randomize_override(&self) -> Option<bool> {
        if self.no_randomize {
            Some(false)
        } else if self.randomize {
            Some(true)
        } else {
            None
        }
    }

    /// Output path: `--output`, else the input stem with `.h5p`
    pub fn output_path(&self) -> PathBuf {
        if let Some(path) = &self.output {
            return path.clone();
        }
        match self.input_file() {
            Some(path) => {
                let name = path.to_string_lossy();
                PathBuf::from(format!("{}.h5p", file_stem(&name)))
            }
            None => PathBuf::from(STDIN_OUTPUT_NAME),
        }
    }
}

fn parse_pool_size(s: &str) -> Result<PoolSize, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number between 1 and 16", s))?;
    PoolSize::new(value).map_err(|e| e.to_string())
}

fn parse_pass_percentage(s: &str) -> Result<PassPercentage, String> {
    let value: u8 = s
        .trim_end_matches('%')
        .parse()
        .map_err(|_| format!("'{}' is not a percentage", s))?;
    PassPercentage::try_from(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("quizpack").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(cli.input_file().is_none());
        assert_eq!(cli.source_name(), "Pasted_JSON");
        assert_eq!(cli.output_path(), PathBuf::from("pasted_content.h5p"));
        assert_eq!(cli.randomize_override(), None);
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_dash_reads_stdin() {
        let cli = parse(&["-"]);
        assert!(cli.input_file().is_none());
        assert_eq!(cli.output_path(), PathBuf::from(STDIN_OUTPUT_NAME));
    }

    #[test]
    fn test_output_defaults_to_input_stem() {
        let cli = parse(&["data/kapitel3.json"]);
        assert_eq!(cli.source_name(), "kapitel3.json");
        assert_eq!(cli.output_path(), PathBuf::from("kapitel3.h5p"));

        let cli = parse(&["data/kapitel3.json", "-o", "out/quiz.h5p"]);
        assert_eq!(cli.output_path(), PathBuf::from("out/quiz.h5p"));
    }

    #[test]
    fn test_settings_flags() {
        let cli = parse(&[
            "q.json",
            "--title",
            "Bio",
            "--no-randomize",
            "--pool-size",
            "12",
            "--pass-percentage",
            "75%",
            "--format",
            "json",
        ]);
        assert_eq!(cli.title.as_deref(), Some("Bio"));
        assert_eq!(cli.randomize_override(), Some(false));
        assert_eq!(cli.pool_size.map(PoolSize::get), Some(12));
        assert_eq!(cli.pass_percentage, Some(PassPercentage::SeventyFive));
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        for args in [
            ["--pool-size", "0"],
            ["--pool-size", "17"],
            ["--pool-size", "many"],
            ["--pass-percentage", "70"],
        ] {
            let argv = std::iter::once("quizpack").chain(args.iter().copied());
            assert!(Cli::try_parse_from(argv).is_err(), "{:?}", args);
        }
    }

    #[test]
    fn test_verbosity_count() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }
}
