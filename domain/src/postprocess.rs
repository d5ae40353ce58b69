//! Serialization and text post-processing of the content document
//!
//! The document is serialized once, then run through a [`PostProcessPipeline`]
//! of text stages. After every stage the text must still parse as JSON;
//! otherwise the whole conversion fails.

use crate::content::ContentDocument;
use crate::error::DomainError;
use crate::util::to_pretty_json;

/// A text transformation applied to the serialized content document.
pub trait ContentPostProcessor: Send + Sync {
    /// Short identifier used in logs and errors
    fn name(&self) -> &'static str;

    fn process(&self, content: String) -> String;
}

/// Replaces every `ß` with `ss`.
///
/// Some player installations render `ß` incorrectly. Disable through
/// `compat.replace_sharp_s` where that is not a concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharpSCompat;

impl ContentPostProcessor for SharpSCompat {
    fn name(&self) -> &'static str {
        "sharp-s"
    }

    fn process(&self, content: String) -> String {
        if content.contains('ß') {
            content.replace('ß', "ss")
        } else {
            content
        }
    }
}

/// Ordered list of post-processing stages
#[derive(Default)]
pub struct PostProcessPipeline {
    stages: Vec<Box<dyn ContentPostProcessor>>,
}

impl PostProcessPipeline {
    /// A pipeline without stages; content passes through unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stages enabled by default
    pub fn standard() -> Self {
        Self::new().with_stage(SharpSCompat)
    }

    pub fn with_stage(mut self, stage: impl ContentPostProcessor + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Apply every stage in order, re-validating the JSON after each one.
    pub fn run(&self, content: String) -> Result<String, DomainError> {
        let mut content = content;
        for stage in &self.stages {
            content = stage.process(content);
            serde_json::from_str::<serde_json::Value>(&content).map_err(|e| {
                DomainError::PostProcess {
                    stage: stage.name(),
                    reason: e.to_string(),
                }
            })?;
        }
        Ok(content)
    }
}

impl std::fmt::Debug for PostProcessPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostProcessPipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Serialize the document and apply the pipeline.
pub fn serialize_content(
    document: &ContentDocument,
    pipeline: &PostProcessPipeline,
) -> Result<String, DomainError> {
    let text = to_pretty_json(document).map_err(|e| DomainError::Serialization(e.to_string()))?;
    pipeline.run(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentAssembler;
    use crate::locale::german_bundle;
    use crate::settings::QuizSettings;

    struct Truncate;

    impl ContentPostProcessor for Truncate {
        fn name(&self) -> &'static str {
            "truncate"
        }

        fn process(&self, content: String) -> String {
            content[..content.len() / 2].to_string()
        }
    }

    #[test]
    fn test_sharp_s_is_replaced() {
        let out = SharpSCompat.process("{\"a\": \"Straße\"}".to_string());
        assert_eq!(out, "{\"a\": \"Strasse\"}");
    }

    #[test]
    fn test_sanitizing_is_idempotent_without_sharp_s() {
        let pipeline = PostProcessPipeline::standard();
        let input = "{\n    \"title\": \"Überprüfen\"\n}".to_string();
        let once = pipeline.run(input.clone()).unwrap();
        let twice = pipeline.run(once.clone()).unwrap();
        assert_eq!(once, input);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_invalid_output_is_rejected() {
        let pipeline = PostProcessPipeline::new().with_stage(Truncate);
        let err = pipeline.run("{\"a\": [1, 2, 3]}".to_string()).unwrap_err();
        assert!(matches!(err, DomainError::PostProcess { stage: "truncate", .. }));
    }

    #[test]
    fn test_empty_pipeline_passes_through() {
        let pipeline = PostProcessPipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.run("not json".to_string()).unwrap(), "not json");
    }

    #[test]
    fn test_serialized_content_has_no_sharp_s() {
        let locale = german_bundle();
        let settings = QuizSettings::new("Größen");
        let doc = ContentAssembler::new(&locale).assemble(Vec::new(), &settings);

        let text = serialize_content(&doc, &PostProcessPipeline::standard()).unwrap();
        assert!(!text.contains('ß'));
        assert!(text.contains("Grössen"));
        assert!(text.starts_with("{\n    \"introPage\""));

        let raw = serialize_content(&doc, &PostProcessPipeline::new()).unwrap();
        assert!(raw.contains("Größen"));
    }

    #[test]
    fn test_standard_stage_names() {
        assert_eq!(PostProcessPipeline::standard().stage_names(), vec!["sharp-s"]);
    }
}
