//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Expected a JSON object, but got {0}")]
    NotAnObject(&'static str),

    #[error("Expected 'questions' to be a list, but got {0}")]
    QuestionsNotAList(&'static str),

    #[error("Question #{position} must be a JSON object, but got {found}")]
    QuestionNotAnObject {
        position: usize,
        found: &'static str,
    },

    #[error("Failed to serialize content document: {0}")]
    Serialization(String),

    #[error("Content is no longer valid JSON after '{stage}': {reason}")]
    PostProcess { stage: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_object_display() {
        let error = DomainError::NotAnObject("array");
        assert_eq!(error.to_string(), "Expected a JSON object, but got array");
    }
}
