//! Localized string tables
//!
//! Every user-facing label in a generated package comes from a
//! [`LocaleBundle`]. Bundles are plain data loaded from TOML resource files
//! (see `locales/de.toml`), so wording changes never touch the mapping code.
//!
//! Structs that derive `Serialize` with camelCase keys are copied into the
//! content document as-is; their field names follow the H5P runtime.

use serde::{Deserialize, Serialize};

/// Placeholder in [`QuizStrings::introduction`] replaced by the pool size.
pub const POOL_SIZE_PLACEHOLDER: &str = "{pool_size}";

/// Complete set of strings for one interface language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleBundle {
    /// Two-letter language code of the table (e.g. `"de"`).
    pub language: String,
    /// Prompt used when an input question has no text.
    pub missing_prompt: String,
    pub confirm_check: ConfirmDialog,
    pub confirm_retry: ConfirmDialog,
    pub multi_choice: MultiChoiceStrings,
    pub true_false: TrueFalseStrings,
    pub quiz: QuizStrings,
}

/// Labels of a confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmDialog {
    pub header: String,
    pub body: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MultiChoiceStrings {
    /// Metadata title of every multiple-choice question.
    pub title: String,
    pub ui: MultiChoiceUi,
}

/// `UI` block of `H5P.MultiChoice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiChoiceUi {
    pub check_answer_button: String,
    pub submit_answer_button: String,
    pub show_solution_button: String,
    pub try_again_button: String,
    pub tips_label: String,
    pub score_bar_label: String,
    pub tip_available: String,
    pub feedback_available: String,
    pub read_feedback: String,
    pub wrong_answer: String,
    pub correct_answer: String,
    pub should_check: String,
    pub should_not_check: String,
    pub no_input: String,
    pub a11y_check: String,
    pub a11y_show_solution: String,
    pub a11y_retry: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrueFalseStrings {
    /// Metadata title of every true/false question.
    pub title: String,
    pub l10n: TrueFalseL10n,
}

/// `l10n` block of `H5P.TrueFalse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrueFalseL10n {
    pub true_text: String,
    pub false_text: String,
    pub score: String,
    pub check_answer: String,
    pub submit_answer: String,
    pub show_solution_button: String,
    pub try_again: String,
    pub wrong_answer_message: String,
    pub correct_answer_message: String,
    pub score_bar_label: String,
    pub a11y_check: String,
    pub a11y_show_solution: String,
    pub a11y_retry: String,
}

/// Strings of the surrounding question set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizStrings {
    pub start_button_text: String,
    /// Intro page markup; may contain [`POOL_SIZE_PLACEHOLDER`].
    pub introduction: String,
    pub end_game: EndGameStrings,
    pub texts: QuizTexts,
}

impl QuizStrings {
    /// Render the intro page markup for the given pool size.
    pub fn introduction_for(&self, pool_size: u8) -> String {
        self.introduction
            .replace(POOL_SIZE_PLACEHOLDER, &pool_size.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndGameStrings {
    pub no_result_message: String,
    pub message: String,
    pub score_bar_label: String,
    pub solution_button_text: String,
    pub retry_button_text: String,
    pub finish_button_text: String,
    pub submit_button_text: String,
    pub skip_button_text: String,
    /// Score bands shown on the result page, in ascending order.
    pub feedback: Vec<FeedbackBand>,
}

/// A score range (inclusive percentages) with its result message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedbackBand {
    pub from: u8,
    pub to: u8,
    pub text: String,
}

/// Navigation `texts` block of `H5P.QuestionSet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTexts {
    pub prev_button: String,
    pub next_button: String,
    pub finish_button: String,
    pub submit_button: String,
    pub textual_progress: String,
    pub jump_to_question: String,
    pub question_label: String,
    pub read_speaker_progress: String,
    pub unanswered_text: String,
    pub answered_text: String,
    pub current_question_text: String,
    pub navigation_label: String,
}

/// German table shipped with the workspace, for tests.
#[cfg(test)]
pub(crate) fn german_bundle() -> LocaleBundle {
    toml::from_str(include_str!("../../locales/de.toml")).expect("bundled locale parses")
}
