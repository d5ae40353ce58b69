//! Convert quiz use case
//!
//! Turns one question document into one package archive:
//!
//! 1. **Parse** - read the JSON document
//! 2. **Map** - convert each question, skipping the ones that cannot be used
//! 3. **Assemble** - wrap the questions in a question set document
//! 4. **Serialize** - write the document and run post-processing
//! 5. **Package** - copy the template archive around the new content
//!
//! Structural problems with the document abort the request. Problems with a
//! single question only skip that question and are reported as notices.
//! A document without usable questions is not an error; it simply yields
//! no package.

use crate::ports::notifier::{ConversionNotifier, NoNotifier};
use crate::ports::package_assembler::{PackageAssembler, PackageError, PackageRequest};
use quizpack_domain::{
    ContentAssembler, ConversionStep, DomainError, InputDocument, LocaleBundle, Notice,
    PackageManifest, PostProcessPipeline, QuestionMapper, QuizSettings, serialize_content,
};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Source name used when the document was not read from a file
pub const PASTED_SOURCE_NAME: &str = "Pasted_JSON";

/// Errors that abort a conversion
#[derive(Error, Debug)]
pub enum ConvertQuizError {
    #[error("Invalid input in '{source_name}': {error}")]
    InvalidInput {
        source_name: String,
        #[source]
        error: DomainError,
    },

    #[error("Failed to produce content for '{source_name}': {error}")]
    Content {
        source_name: String,
        #[source]
        error: DomainError,
    },

    #[error(transparent)]
    Package(#[from] PackageError),
}

/// Input for the ConvertQuiz use case
#[derive(Debug, Clone)]
pub struct ConvertQuizInput {
    /// Name of the document in notices (file name or [`PASTED_SOURCE_NAME`])
    pub source_name: String,
    /// Raw JSON text of the question document
    pub document: String,
    pub settings: QuizSettings,
    /// Template archive to build the package from
    pub template: PathBuf,
    /// Replacement intro image; empty bytes count as no image
    pub image: Option<Vec<u8>>,
}

impl ConvertQuizInput {
    pub fn new(
        source_name: impl Into<String>,
        document: impl Into<String>,
        template: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            document: document.into(),
            settings: QuizSettings::default(),
            template: template.into(),
            image: None,
        }
    }

    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_image(mut self, image: Vec<u8>) -> Self {
        self.image = Some(image);
        self
    }
}

/// A finished package archive
#[derive(Debug, Clone)]
pub struct QuizPackage {
    pub bytes: Vec<u8>,
    /// Title written to the manifest
    pub title: String,
    pub image_included: bool,
}

/// Result of a conversion that was not aborted
#[derive(Debug, Clone)]
pub struct ConvertQuizOutput {
    /// `None` when the document had no usable questions
    pub package: Option<QuizPackage>,
    pub mapped: usize,
    pub skipped: usize,
    /// Every notice emitted during the run, in order
    pub notices: Vec<Notice>,
}

impl ConvertQuizOutput {
    fn empty(notices: Vec<Notice>, skipped: usize) -> Self {
        Self {
            package: None,
            mapped: 0,
            skipped,
            notices,
        }
    }
}

/// Forwards notices to the notifier and keeps a copy for the output
struct NoticeLog<'a> {
    notifier: &'a dyn ConversionNotifier,
    notices: Vec<Notice>,
}

impl<'a> NoticeLog<'a> {
    fn new(notifier: &'a dyn ConversionNotifier) -> Self {
        Self {
            notifier,
            notices: Vec::new(),
        }
    }

    fn push(&mut self, notice: Notice) {
        self.notifier.on_notice(&notice);
        self.notices.push(notice);
    }
}

/// Use case for converting a question document into a package
pub struct ConvertQuizUseCase<A: PackageAssembler> {
    assembler: A,
    locale: LocaleBundle,
    pipeline: PostProcessPipeline,
}

impl<A: PackageAssembler> ConvertQuizUseCase<A> {
    /// Create the use case with the standard post-processing stages
    pub fn new(assembler: A, locale: LocaleBundle) -> Self {
        Self {
            assembler,
            locale,
            pipeline: PostProcessPipeline::standard(),
        }
    }

    pub fn with_pipeline(mut self, pipeline: PostProcessPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Execute the use case without progress reporting
    pub fn execute(&self, input: ConvertQuizInput) -> Result<ConvertQuizOutput, ConvertQuizError> {
        self.execute_with_notifier(input, &NoNotifier)
    }

    /// Execute the use case, reporting steps and notices to `notifier`
    pub fn execute_with_notifier(
        &self,
        input: ConvertQuizInput,
        notifier: &dyn ConversionNotifier,
    ) -> Result<ConvertQuizOutput, ConvertQuizError> {
        let source = input.source_name.as_str();
        let mut log = NoticeLog::new(notifier);

        self.assembler.ensure_template(&input.template)?;

        // Step 1: Parse
        notifier.on_step_start(ConversionStep::Parse);
        let document = InputDocument::from_json_str(&input.document).map_err(|error| {
            ConvertQuizError::InvalidInput {
                source_name: source.to_string(),
                error,
            }
        })?;
        notifier.on_step_complete(ConversionStep::Parse);

        if document.is_empty() {
            warn!("No questions in '{}'", source);
            log.push(Notice::warning(format!("No questions found in '{}'.", source)));
            return Ok(ConvertQuizOutput::empty(log.notices, 0));
        }
        debug!("Parsed {} question records from '{}'", document.len(), source);

        // Step 2: Map
        notifier.on_step_start(ConversionStep::Map);
        let report = QuestionMapper::new(&self.locale).map_all(document.questions());
        for notice in &report.notices {
            log.push(notice.to_notice(source));
        }
        let (mapped, skipped) = (report.mapped(), report.skipped());
        log.push(Notice::info(format!(
            "Mapped {} questions from '{}'.",
            mapped, source
        )));
        notifier.on_step_complete(ConversionStep::Map);

        if mapped == 0 {
            warn!("No valid questions in '{}'", source);
            log.push(Notice::warning(format!(
                "No valid questions mapped from '{}'.",
                source
            )));
            return Ok(ConvertQuizOutput::empty(log.notices, skipped));
        }

        // Step 3: Assemble
        notifier.on_step_start(ConversionStep::Assemble);
        let content = ContentAssembler::new(&self.locale).assemble(report.questions, &input.settings);
        notifier.on_step_complete(ConversionStep::Assemble);

        // Step 4: Serialize
        notifier.on_step_start(ConversionStep::Serialize);
        let content = serialize_content(&content, &self.pipeline).map_err(|error| {
            ConvertQuizError::Content {
                source_name: source.to_string(),
                error,
            }
        })?;
        debug!(
            stages = ?self.pipeline.stage_names(),
            bytes = content.len(),
            "Content serialized"
        );
        notifier.on_step_complete(ConversionStep::Serialize);

        // Step 5: Package
        notifier.on_step_start(ConversionStep::Package);
        let manifest = PackageManifest::new(&input.settings.title);
        let image = match input.image.as_deref() {
            Some([]) => {
                log.push(Notice::warning(
                    "Uploaded image is empty; keeping the template image.",
                ));
                None
            }
            other => other,
        };
        let bytes = self.assembler.assemble(&PackageRequest {
            template: &input.template,
            content: &content,
            manifest: &manifest,
            image,
        })?;
        if image.is_some() {
            log.push(Notice::info(
                "Uploaded image has been integrated into the package.",
            ));
        }
        notifier.on_step_complete(ConversionStep::Package);

        info!(
            "Packaged {} questions from '{}' ({} bytes)",
            mapped,
            source,
            bytes.len()
        );

        Ok(ConvertQuizOutput {
            package: Some(QuizPackage {
                bytes,
                title: manifest.title,
                image_included: image.is_some(),
            }),
            mapped,
            skipped,
            notices: log.notices,
        })
    }
}
