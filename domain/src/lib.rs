//! Domain layer for quizpack
//!
//! This crate contains the quiz models and the pure conversion steps.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Conversion
//!
//! 1. [`InputDocument`] parses the question JSON
//! 2. [`QuestionMapper`] turns each record into H5P sub-content
//! 3. [`ContentAssembler`] wraps the questions in a question set document
//! 4. [`serialize_content`] writes it out and runs the [`PostProcessPipeline`]
//! 5. [`PackageManifest`] describes the package root
//!
//! Archive handling itself lives in the infrastructure layer.

pub mod config;
pub mod content;
pub mod error;
pub mod input;
pub mod locale;
pub mod mapping;
pub mod notice;
pub mod package;
pub mod postprocess;
pub mod settings;
pub mod util;
pub mod validation;

// Re-export commonly used types
pub use config::OutputFormat;
pub use content::{ContentAssembler, ContentDocument, CorrectFlag, OutputQuestion, QuestionParams};
pub use error::DomainError;
pub use input::{ChoiceOptions, InputDocument, InputQuestion};
pub use locale::LocaleBundle;
pub use mapping::{MappingNotice, MappingReport, QuestionMapper};
pub use notice::{ConversionStep, Notice, NoticeLevel};
pub use package::{
    CONTENT_PATH, INTRO_IMAGE_REF, MANIFEST_PATH, PackageManifest, TITLE_IMAGE_PATH,
    manifest_title,
};
pub use postprocess::{ContentPostProcessor, PostProcessPipeline, SharpSCompat, serialize_content};
pub use settings::{DEFAULT_TITLE, PassPercentage, PoolSize, QuizSettings, SettingsError};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
