//! Output question records in the H5P sub-content schema.
//!
//! These types only serialize. Field order follows the files the H5P
//! editor writes.

use crate::locale::{ConfirmDialog, MultiChoiceUi, TrueFalseL10n};
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// Library identifier of multiple-choice questions
pub const MULTI_CHOICE_LIBRARY: &str = "H5P.MultiChoice 1.16";
/// Library identifier of true/false questions
pub const TRUE_FALSE_LIBRARY: &str = "H5P.TrueFalse 1.8";
/// License marker for "undisclosed"
pub const LICENSE_UNDISCLOSED: &str = "U";

/// One question of the question set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputQuestion {
    pub library: String,
    pub params: QuestionParams,
    pub sub_content_id: String,
    pub metadata: QuestionMetadata,
}

impl OutputQuestion {
    pub fn multi_choice(&self) -> Option<&MultiChoiceParams> {
        match &self.params {
            QuestionParams::MultiChoice(p) => Some(p),
            QuestionParams::TrueFalse(_) => None,
        }
    }

    pub fn true_false(&self) -> Option<&TrueFalseParams> {
        match &self.params {
            QuestionParams::TrueFalse(p) => Some(p),
            QuestionParams::MultiChoice(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuestionParams {
    MultiChoice(MultiChoiceParams),
    TrueFalse(TrueFalseParams),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionMetadata {
    pub content_type: String,
    pub license: String,
    pub title: String,
    pub authors: Vec<String>,
    pub changes: Vec<String>,
    pub extra_title: String,
}

impl QuestionMetadata {
    pub fn new(content_type: &str, title: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            license: LICENSE_UNDISCLOSED.to_string(),
            title: title.to_string(),
            authors: Vec::new(),
            changes: Vec::new(),
            extra_title: title.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub disable_image_zooming: bool,
}

/// Score range with optional message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRange {
    pub from: u8,
    pub to: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

// ==================== Multiple Choice ====================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiChoiceParams {
    pub question: String,
    pub answers: Vec<Answer>,
    pub behaviour: MultiChoiceBehaviour,
    pub media: Media,
    pub overall_feedback: Vec<FeedbackRange>,
    #[serde(rename = "UI")]
    pub ui: MultiChoiceUi,
    pub confirm_check: ConfirmDialog,
    pub confirm_retry: ConfirmDialog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub text: String,
    pub correct: bool,
    pub tips_and_feedback: TipsAndFeedback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsAndFeedback {
    pub tip: String,
    pub chosen_feedback: String,
    pub not_chosen_feedback: String,
}

impl TipsAndFeedback {
    /// Wrap option feedback in the markup the runtime renders.
    pub fn chosen(feedback: &str) -> Self {
        Self {
            tip: String::new(),
            chosen_feedback: format!("<div>{}</div>\n", feedback),
            not_chosen_feedback: String::new(),
        }
    }
}

/// Behaviour flags of a single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiChoiceBehaviour {
    pub single_answer: bool,
    pub enable_retry: bool,
    pub enable_solutions_button: bool,
    pub enable_check_button: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub single_point: bool,
    pub random_answers: bool,
    pub show_solutions_requires_input: bool,
    pub confirm_check_dialog: bool,
    pub confirm_retry_dialog: bool,
    pub auto_check: bool,
    pub pass_percentage: u8,
    pub show_score_points: bool,
}

impl Default for MultiChoiceBehaviour {
    fn default() -> Self {
        Self {
            single_answer: true,
            enable_retry: false,
            enable_solutions_button: false,
            enable_check_button: true,
            kind: "auto".to_string(),
            single_point: false,
            random_answers: true,
            show_solutions_requires_input: true,
            confirm_check_dialog: false,
            confirm_retry_dialog: false,
            auto_check: false,
            pass_percentage: 100,
            show_score_points: true,
        }
    }
}

// ==================== True / False ====================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrueFalseParams {
    pub question: String,
    pub correct: CorrectFlag,
    pub behaviour: TrueFalseBehaviour,
    pub media: Media,
    pub l10n: TrueFalseL10n,
    pub confirm_check: ConfirmDialog,
    pub confirm_retry: ConfirmDialog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrueFalseBehaviour {
    pub enable_retry: bool,
    pub enable_solutions_button: bool,
    pub enable_check_button: bool,
    pub confirm_check_dialog: bool,
    pub confirm_retry_dialog: bool,
    pub auto_check: bool,
    pub feedback_on_correct: String,
    pub feedback_on_wrong: String,
}

impl TrueFalseBehaviour {
    pub fn with_feedback(on_correct: &str, on_wrong: &str) -> Self {
        Self {
            enable_retry: false,
            enable_solutions_button: false,
            enable_check_button: true,
            confirm_check_dialog: false,
            confirm_retry_dialog: false,
            auto_check: false,
            feedback_on_correct: on_correct.to_string(),
            feedback_on_wrong: on_wrong.to_string(),
        }
    }
}

/// The correct answer of a true/false question.
///
/// The runtime stores it as the string `"true"` or `"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrectFlag(pub bool);

impl CorrectFlag {
    pub fn as_str(self) -> &'static str {
        if self.0 { "true" } else { "false" }
    }
}

impl std::fmt::Display for CorrectFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorrectFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(CorrectFlag(true)),
            "false" => Ok(CorrectFlag(false)),
            other => Err(format!("expected \"true\" or \"false\", got {:?}", other)),
        }
    }
}

impl Serialize for CorrectFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_flag_roundtrip() {
        for flag in [true, false] {
            let text = CorrectFlag(flag).to_string();
            assert_eq!(text.parse::<CorrectFlag>(), Ok(CorrectFlag(flag)));
        }
        assert!("yes".parse::<CorrectFlag>().is_err());
    }

    #[test]
    fn test_correct_flag_serializes_as_string() {
        let json = serde_json::to_string(&CorrectFlag(true)).unwrap();
        assert_eq!(json, "\"true\"");
    }

    #[test]
    fn test_chosen_feedback_markup() {
        let tips = TipsAndFeedback::chosen("Genau");
        assert_eq!(tips.chosen_feedback, "<div>Genau</div>\n");
        assert!(tips.tip.is_empty());
        assert!(tips.not_chosen_feedback.is_empty());
    }

    #[test]
    fn test_behaviour_type_key() {
        let value = serde_json::to_value(MultiChoiceBehaviour::default()).unwrap();
        assert_eq!(value["type"], "auto");
        assert_eq!(value["passPercentage"], 100);
        assert_eq!(value["singleAnswer"], true);
        assert_eq!(value["randomAnswers"], true);
    }

    #[test]
    fn test_feedback_range_omits_missing_message() {
        let value = serde_json::to_value(FeedbackRange {
            from: 0,
            to: 100,
            feedback: None,
        })
        .unwrap();
        assert!(value.get("feedback").is_none());
    }
}
