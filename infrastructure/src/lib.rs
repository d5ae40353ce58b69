//! Infrastructure layer for quizpack
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and locale loading.

pub mod config;
pub mod locale;
pub mod package;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_TEMPLATE_PATH, FileCompatConfig, FileConfig,
    FileLocaleConfig, FileOutputConfig, FileQuizConfig, FileTemplateConfig, QuizOverrides,
};
pub use locale::{LocaleError, LocaleLoader};
pub use package::ZipPackageAssembler;
