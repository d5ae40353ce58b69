//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod compat;
mod output;
mod quiz;
mod template;

pub use compat::FileCompatConfig;
pub use output::FileOutputConfig;
pub use quiz::{FileQuizConfig, QuizOverrides};
pub use template::{DEFAULT_TEMPLATE_PATH, FileLocaleConfig, FileTemplateConfig};

use quizpack_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a configuration contains at least one error-level issue
#[derive(Debug, Error)]
#[error("invalid configuration: {}", join_messages(.issues))]
pub struct ConfigValidationError {
    pub issues: Vec<ConfigIssue>,
}

fn join_messages(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz defaults
    pub quiz: FileQuizConfig,
    /// Template archive location
    pub template: FileTemplateConfig,
    /// Locale table override
    pub locale: FileLocaleConfig,
    /// Player compatibility switches
    pub compat: FileCompatConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.quiz.to_settings().1;

        if self.template.path.as_os_str().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyTemplatePath,
                "template.path cannot be empty",
            ));
        }

        issues
    }

    /// Split issues into warnings and a fatal error, if any issue is an error.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError { issues: errors })
        }
    }
}
