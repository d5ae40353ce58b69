//! Configuration file loading for quizpack
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZPACK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quizpack.toml` or `./.quizpack.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quizpack/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_TEMPLATE_PATH, FileCompatConfig, FileConfig, FileLocaleConfig,
    FileOutputConfig, FileQuizConfig, FileTemplateConfig, QuizOverrides,
};
pub use loader::ConfigLoader;
