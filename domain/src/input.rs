//! Input question documents
//!
//! Question JSON is usually produced by a language model, so parsing is
//! forgiving below the document level: missing fields take
//! defaults, flags follow JSON truthiness, and unknown `type` tags become
//! [`InputQuestion::Unsupported`] instead of errors. Only a document whose
//! shape is wrong (not an object, `questions` not a list, a question that is
//! not an object) is rejected.

use crate::error::DomainError;
use serde_json::{Map, Value};

/// Type tag of multiple-choice questions
pub const MULTIPLE_CHOICE_TAG: &str = "MultipleChoice";
/// Type tag of true/false questions
pub const TRUE_FALSE_TAG: &str = "TrueFalse";

/// Parsed input document; all keys other than `questions` are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputDocument {
    questions: Vec<InputQuestion>,
}

impl InputDocument {
    /// Parse a document from raw JSON text
    pub fn from_json_str(raw: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| DomainError::InvalidJson(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Interpret an already parsed JSON value
    ///
    /// A missing `questions` key reads as an empty list.
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        let Value::Object(root) = value else {
            return Err(DomainError::NotAnObject(json_type_name(value)));
        };

        let questions = match root.get("questions") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| InputQuestion::from_value(i + 1, item))
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => return Err(DomainError::QuestionsNotAList(json_type_name(other))),
        };

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[InputQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// One question record from the input document
#[derive(Debug, Clone, PartialEq)]
pub enum InputQuestion {
    MultipleChoice(MultipleChoiceInput),
    TrueFalse(TrueFalseInput),
    /// A record whose `type` tag is not recognized
    Unsupported { type_tag: String },
}

impl InputQuestion {
    /// Parse the record at 1-based `position`
    pub fn from_value(position: usize, value: &Value) -> Result<Self, DomainError> {
        let Value::Object(record) = value else {
            return Err(DomainError::QuestionNotAnObject {
                position,
                found: json_type_name(value),
            });
        };

        let type_tag = match record.get("type") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.trim().to_string(),
            Some(other) => other.to_string(),
        };

        Ok(match type_tag.as_str() {
            MULTIPLE_CHOICE_TAG => InputQuestion::MultipleChoice(MultipleChoiceInput {
                prompt: text_field(record, "question"),
                options: ChoiceOptions::from_field(record.get("options")),
            }),
            TRUE_FALSE_TAG => InputQuestion::TrueFalse(TrueFalseInput {
                prompt: text_field(record, "question"),
                correct_answer: record.get("correct_answer").is_some_and(is_truthy),
                feedback_correct: text_field(record, "feedback_correct").unwrap_or_default(),
                feedback_incorrect: text_field(record, "feedback_incorrect").unwrap_or_default(),
            }),
            _ => InputQuestion::Unsupported { type_tag },
        })
    }

    /// The type tag this question was parsed from
    pub fn type_tag(&self) -> &str {
        match self {
            InputQuestion::MultipleChoice(_) => MULTIPLE_CHOICE_TAG,
            InputQuestion::TrueFalse(_) => TRUE_FALSE_TAG,
            InputQuestion::Unsupported { type_tag } => type_tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipleChoiceInput {
    pub prompt: Option<String>,
    pub options: ChoiceOptions,
}

/// The `options` field of a multiple-choice record
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceOptions {
    List(Vec<ChoiceOption>),
    /// `options` was present but not a list
    NotAList { found: &'static str },
    /// The list contained an entry that is not an object
    InvalidEntry { index: usize, found: &'static str },
}

impl ChoiceOptions {
    fn from_field(field: Option<&Value>) -> Self {
        let items = match field {
            None => return ChoiceOptions::List(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return ChoiceOptions::NotAList {
                    found: json_type_name(other),
                };
            }
        };

        let mut options = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let Value::Object(entry) = item else {
                return ChoiceOptions::InvalidEntry {
                    index,
                    found: json_type_name(item),
                };
            };
            options.push(ChoiceOption {
                text: text_field(entry, "text").unwrap_or_default(),
                is_correct: entry.get("is_correct").is_some_and(is_truthy),
                feedback: text_field(entry, "feedback").unwrap_or_default(),
            });
        }
        ChoiceOptions::List(options)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub text: String,
    pub is_correct: bool,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrueFalseInput {
    pub prompt: Option<String>,
    pub correct_answer: bool,
    pub feedback_correct: String,
    pub feedback_incorrect: String,
}

/// Read a textual field; non-string scalars keep their JSON spelling.
fn text_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Human-readable JSON type name for error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Result<InputDocument, DomainError> {
        InputDocument::from_value(&value)
    }

    #[test]
    fn test_rejects_non_object_document() {
        assert_eq!(
            InputDocument::from_json_str("[1, 2]"),
            Err(DomainError::NotAnObject("array"))
        );
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = InputDocument::from_json_str("{\"questions\": [").unwrap_err();
        assert!(matches!(err, DomainError::InvalidJson(_)));
    }

    #[test]
    fn test_rejects_questions_that_are_not_a_list() {
        assert_eq!(
            parse(json!({"questions": "nope"})),
            Err(DomainError::QuestionsNotAList("string"))
        );
        assert_eq!(
            parse(json!({"questions": null})),
            Err(DomainError::QuestionsNotAList("null"))
        );
    }

    #[test]
    fn test_missing_questions_key_is_empty() {
        let doc = parse(json!({"title": "ignored"})).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_rejects_question_that_is_not_an_object() {
        assert_eq!(
            parse(json!({"questions": [{"type": "TrueFalse"}, 3]})),
            Err(DomainError::QuestionNotAnObject {
                position: 2,
                found: "number"
            })
        );
    }

    #[test]
    fn test_parses_multiple_choice() {
        let doc = parse(json!({
            "meta": {"source": "ignored"},
            "questions": [{
                "type": " MultipleChoice ",
                "question": "Pick one",
                "options": [
                    {"text": "A", "is_correct": true, "feedback": "Right"},
                    {"text": "B"}
                ]
            }]
        }))
        .unwrap();

        let InputQuestion::MultipleChoice(mc) = &doc.questions()[0] else {
            panic!("expected multiple choice");
        };
        assert_eq!(mc.prompt.as_deref(), Some("Pick one"));
        assert_eq!(
            mc.options,
            ChoiceOptions::List(vec![
                ChoiceOption {
                    text: "A".to_string(),
                    is_correct: true,
                    feedback: "Right".to_string(),
                },
                ChoiceOption {
                    text: "B".to_string(),
                    is_correct: false,
                    feedback: String::new(),
                },
            ])
        );
    }

    #[test]
    fn test_options_not_a_list() {
        let doc = parse(json!({"questions": [
            {"type": "MultipleChoice", "question": "Q", "options": {"text": "A"}}
        ]}))
        .unwrap();
        let InputQuestion::MultipleChoice(mc) = &doc.questions()[0] else {
            panic!("expected multiple choice");
        };
        assert_eq!(mc.options, ChoiceOptions::NotAList { found: "object" });
    }

    #[test]
    fn test_option_entry_not_an_object() {
        let doc = parse(json!({"questions": [
            {"type": "MultipleChoice", "options": [{"text": "A"}, "B"]}
        ]}))
        .unwrap();
        let InputQuestion::MultipleChoice(mc) = &doc.questions()[0] else {
            panic!("expected multiple choice");
        };
        assert_eq!(mc.prompt, None);
        assert_eq!(
            mc.options,
            ChoiceOptions::InvalidEntry {
                index: 1,
                found: "string"
            }
        );
    }

    #[test]
    fn test_parses_true_false_with_defaults() {
        let doc = parse(json!({"questions": [{"type": "TrueFalse"}]})).unwrap();
        assert_eq!(
            doc.questions()[0],
            InputQuestion::TrueFalse(TrueFalseInput {
                prompt: None,
                correct_answer: false,
                feedback_correct: String::new(),
                feedback_incorrect: String::new(),
            })
        );
    }

    #[test]
    fn test_flags_follow_truthiness() {
        let doc = parse(json!({"questions": [
            {"type": "TrueFalse", "correct_answer": "yes"},
            {"type": "TrueFalse", "correct_answer": 0},
            {"type": "TrueFalse", "correct_answer": true}
        ]}))
        .unwrap();
        let flags: Vec<bool> = doc
            .questions()
            .iter()
            .map(|q| match q {
                InputQuestion::TrueFalse(tf) => tf.correct_answer,
                _ => panic!("expected true/false"),
            })
            .collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_unknown_type_is_kept_as_unsupported() {
        let doc = parse(json!({"questions": [
            {"type": "Essay", "question": "Explain"},
            {"question": "No tag"}
        ]}))
        .unwrap();
        assert_eq!(doc.questions()[0].type_tag(), "Essay");
        assert_eq!(
            doc.questions()[1],
            InputQuestion::Unsupported {
                type_tag: String::new()
            }
        );
    }
}
