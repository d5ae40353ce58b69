//! Quiz defaults from TOML (`[quiz]` section)

use quizpack_domain::{
    ConfigIssue, ConfigIssueCode, DEFAULT_TITLE, PassPercentage, PoolSize, QuizSettings,
};
use serde::{Deserialize, Serialize};

/// Raw quiz configuration from TOML
///
/// # Example
///
/// ```toml
/// [quiz]
/// title = "Zellbiologie"
/// randomize_questions = false
/// pool_size = 10          # 1-16
/// pass_percentage = 75    # 50, 60, 66, 75 or 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    pub title: String,
    pub randomize_questions: bool,
    /// Kept as a plain number so that range errors surface as issues
    pub pool_size: u8,
    pub pass_percentage: u8,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            randomize_questions: true,
            pool_size: PoolSize::DEFAULT,
            pass_percentage: PassPercentage::default().value(),
        }
    }
}

/// Quiz values supplied outside the config files, e.g. on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizOverrides {
    pub title: Option<String>,
    pub randomize_questions: Option<bool>,
    pub pool_size: Option<PoolSize>,
    pub pass_percentage: Option<PassPercentage>,
}

impl FileQuizConfig {
    /// Replace every value that `overrides` supplies.
    pub fn apply_overrides(&mut self, overrides: QuizOverrides) {
        if let Some(title) = overrides.title {
            self.title = title;
        }
        if let Some(randomize) = overrides.randomize_questions {
            self.randomize_questions = randomize;
        }
        if let Some(pool_size) = overrides.pool_size {
            self.pool_size = pool_size.get();
        }
        if let Some(pass_percentage) = overrides.pass_percentage {
            self.pass_percentage = pass_percentage.value();
        }
    }

    /// Convert to domain settings, collecting issues for invalid values.
    ///
    /// Invalid values fall back to their defaults.
    pub fn to_settings(&self) -> (QuizSettings, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        if self.title.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyTitle,
                "quiz.title is empty; the package will have no title",
            ));
        }

        let pool_size = PoolSize::new(self.pool_size).unwrap_or_else(|e| {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::PoolSizeOutOfRange,
                format!("quiz.pool_size: {}", e),
            ));
            PoolSize::default()
        });

        let pass_percentage = PassPercentage::try_from(self.pass_percentage).unwrap_or_else(|e| {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidPassPercentage,
                format!("quiz.pass_percentage: {}", e),
            ));
            PassPercentage::default()
        });

        let settings = QuizSettings::new(self.title.clone())
            .with_randomize_questions(self.randomize_questions)
            .with_pool_size(pool_size)
            .with_pass_percentage(pass_percentage);

        (settings, issues)
    }
}
