//! Question mapping: input records → H5P sub-content
//!
//! Mapping is per question and non-atomic. An unsupported type or a broken
//! option list affects only that question; the rest of the document is
//! still mapped. Everything the caller should know about is collected as
//! [`MappingNotice`]s in the returned [`MappingReport`].

use crate::content::question::{
    Answer, CorrectFlag, FeedbackRange, MULTI_CHOICE_LIBRARY, Media, MultiChoiceBehaviour,
    MultiChoiceParams, OutputQuestion, QuestionMetadata, QuestionParams, TRUE_FALSE_LIBRARY,
    TipsAndFeedback, TrueFalseBehaviour, TrueFalseParams,
};
use crate::input::{ChoiceOptions, InputQuestion, MultipleChoiceInput, TrueFalseInput};
use crate::locale::LocaleBundle;
use crate::notice::Notice;
use uuid::Uuid;

const MULTI_CHOICE_CONTENT_TYPE: &str = "Multiple Choice";
const TRUE_FALSE_CONTENT_TYPE: &str = "True/False Question";

/// Something the caller should be told about a single question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingNotice {
    /// The question's type tag is not supported; it was skipped.
    UnsupportedType { position: usize, type_tag: String },
    /// `options` was not a list; the question was kept without answers.
    OptionsNotAList { position: usize, prompt: String },
    /// The question could not be mapped and was skipped.
    Failed { position: usize, reason: String },
}

impl MappingNotice {
    /// Render the notice for a document named `source`.
    pub fn to_notice(&self, source: &str) -> Notice {
        match self {
            MappingNotice::UnsupportedType { position, type_tag } => Notice::warning(format!(
                "Unsupported question type '{}' in '{}'. Skipping question #{}.",
                type_tag, source, position
            )),
            MappingNotice::OptionsNotAList { prompt, .. } => Notice::warning(format!(
                "'options' is not a list in MultipleChoice question: {}",
                prompt
            )),
            MappingNotice::Failed { position, reason } => Notice::error(format!(
                "Error mapping question #{} in '{}': {}",
                position, source, reason
            )),
        }
    }

    /// Whether the question this notice refers to was left out
    pub fn is_skip(&self) -> bool {
        !matches!(self, MappingNotice::OptionsNotAList { .. })
    }
}

/// Result of mapping a whole document
#[derive(Debug, Clone, Default)]
pub struct MappingReport {
    pub questions: Vec<OutputQuestion>,
    pub notices: Vec<MappingNotice>,
}

impl MappingReport {
    pub fn mapped(&self) -> usize {
        self.questions.len()
    }

    pub fn skipped(&self) -> usize {
        self.notices.iter().filter(|n| n.is_skip()).count()
    }
}

/// Maps input questions using the strings of one locale.
pub struct QuestionMapper<'a> {
    locale: &'a LocaleBundle,
}

impl<'a> QuestionMapper<'a> {
    pub fn new(locale: &'a LocaleBundle) -> Self {
        Self { locale }
    }

    /// Map every question, in order. Positions in notices are 1-based.
    pub fn map_all(&self, questions: &[InputQuestion]) -> MappingReport {
        let mut report = MappingReport::default();

        for (i, question) in questions.iter().enumerate() {
            let position = i + 1;
            match question {
                InputQuestion::MultipleChoice(mc) => {
                    match self.map_multiple_choice(position, mc) {
                        Ok((mapped, notice)) => {
                            report.questions.push(mapped);
                            report.notices.extend(notice);
                        }
                        Err(notice) => report.notices.push(notice),
                    }
                }
                InputQuestion::TrueFalse(tf) => report.questions.push(self.map_true_false(tf)),
                InputQuestion::Unsupported { type_tag } => {
                    report.notices.push(MappingNotice::UnsupportedType {
                        position,
                        type_tag: type_tag.clone(),
                    })
                }
            }
        }

        report
    }

    /// Map one multiple-choice question.
    ///
    /// An `options` value that is not a list still yields a question, with no
    /// answers and a notice. An option entry that is not an object fails the
    /// whole question.
    pub fn map_multiple_choice(
        &self,
        position: usize,
        input: &MultipleChoiceInput,
    ) -> Result<(OutputQuestion, Option<MappingNotice>), MappingNotice> {
        let prompt = self.prompt(input.prompt.as_deref());

        let (answers, notice) = match &input.options {
            ChoiceOptions::List(options) => (
                options
                    .iter()
                    .map(|option| Answer {
                        text: option.text.clone(),
                        correct: option.is_correct,
                        tips_and_feedback: TipsAndFeedback::chosen(&option.feedback),
                    })
                    .collect(),
                None,
            ),
            ChoiceOptions::NotAList { .. } => (
                Vec::new(),
                Some(MappingNotice::OptionsNotAList {
                    position,
                    prompt: prompt.clone(),
                }),
            ),
            ChoiceOptions::InvalidEntry { index, found } => {
                return Err(MappingNotice::Failed {
                    position,
                    reason: format!("option {} is {}, expected an object", index + 1, found),
                });
            }
        };

        let strings = &self.locale.multi_choice;
        let question = OutputQuestion {
            library: MULTI_CHOICE_LIBRARY.to_string(),
            params: QuestionParams::MultiChoice(MultiChoiceParams {
                question: prompt,
                answers,
                behaviour: MultiChoiceBehaviour::default(),
                media: Media {
                    disable_image_zooming: false,
                },
                overall_feedback: vec![FeedbackRange {
                    from: 0,
                    to: 100,
                    feedback: None,
                }],
                ui: strings.ui.clone(),
                confirm_check: self.locale.confirm_check.clone(),
                confirm_retry: self.locale.confirm_retry.clone(),
            }),
            sub_content_id: new_sub_content_id(),
            metadata: QuestionMetadata::new(MULTI_CHOICE_CONTENT_TYPE, &strings.title),
        };

        Ok((question, notice))
    }

    /// Map one true/false question
    pub fn map_true_false(&self, input: &TrueFalseInput) -> OutputQuestion {
        let strings = &self.locale.true_false;
        OutputQuestion {
            library: TRUE_FALSE_LIBRARY.to_string(),
            params: QuestionParams::TrueFalse(TrueFalseParams {
                question: self.prompt(input.prompt.as_deref()),
                correct: CorrectFlag(input.correct_answer),
                behaviour: TrueFalseBehaviour::with_feedback(
                    &input.feedback_correct,
                    &input.feedback_incorrect,
                ),
                media: Media {
                    disable_image_zooming: false,
                },
                l10n: strings.l10n.clone(),
                confirm_check: self.locale.confirm_check.clone(),
                confirm_retry: self.locale.confirm_retry.clone(),
            }),
            sub_content_id: new_sub_content_id(),
            metadata: QuestionMetadata::new(TRUE_FALSE_CONTENT_TYPE, &strings.title),
        }
    }

    fn prompt(&self, prompt: Option<&str>) -> String {
        prompt.unwrap_or(&self.locale.missing_prompt).to_string()
    }
}

fn new_sub_content_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ChoiceOption, InputDocument};
    use crate::locale::german_bundle;
    use crate::notice::NoticeLevel;
    use serde_json::json;
    use std::collections::HashSet;

    fn options(count: usize) -> Vec<ChoiceOption> {
        (0..count)
            .map(|i| ChoiceOption {
                text: format!("Option {}", i),
                is_correct: i == 0,
                feedback: format!("Feedback {}", i),
            })
            .collect()
    }

    fn mc(count: usize) -> InputQuestion {
        InputQuestion::MultipleChoice(MultipleChoiceInput {
            prompt: Some("Which one?".to_string()),
            options: ChoiceOptions::List(options(count)),
        })
    }

    #[test]
    fn test_multiple_choice_keeps_every_option() {
        let locale = german_bundle();
        let mapper = QuestionMapper::new(&locale);

        for k in [0, 1, 4, 9] {
            let report = mapper.map_all(&[mc(k)]);
            let params = report.questions[0].multi_choice().unwrap();
            assert_eq!(params.answers.len(), k);
            for (i, answer) in params.answers.iter().enumerate() {
                assert_eq!(answer.text, format!("Option {}", i));
                assert_eq!(answer.correct, i == 0);
                assert_eq!(
                    answer.tips_and_feedback.chosen_feedback,
                    format!("<div>Feedback {}</div>\n", i)
                );
            }
        }
    }

    #[test]
    fn test_multiple_choice_constants() {
        let locale = german_bundle();
        let report = QuestionMapper::new(&locale).map_all(&[mc(2)]);
        let question = &report.questions[0];

        assert_eq!(question.library, "H5P.MultiChoice 1.16");
        assert_eq!(question.metadata.content_type, "Multiple Choice");
        assert_eq!(question.metadata.license, "U");
        let params = question.multi_choice().unwrap();
        assert!(params.behaviour.single_answer);
        assert!(!params.behaviour.enable_retry);
        assert!(!params.behaviour.enable_solutions_button);
        assert_eq!(params.behaviour.pass_percentage, 100);
        assert_eq!(params.ui.check_answer_button, "Überprüfen");
        assert_eq!(params.confirm_retry.confirm_label, "Bestätigen");
    }

    #[test]
    fn test_missing_prompt_uses_locale_default() {
        let locale = german_bundle();
        let input = MultipleChoiceInput {
            prompt: None,
            options: ChoiceOptions::List(Vec::new()),
        };
        let (question, notice) = QuestionMapper::new(&locale)
            .map_multiple_choice(1, &input)
            .unwrap();
        assert_eq!(question.multi_choice().unwrap().question, "Keine Frage gestellt.");
        assert!(notice.is_none());
    }

    #[test]
    fn test_null_prompt_uses_locale_default() {
        let locale = german_bundle();
        let doc = InputDocument::from_value(&json!({"questions": [
            {"type": "TrueFalse", "question": null},
            {"type": "MultipleChoice", "question": null, "options": []}
        ]}))
        .unwrap();

        let report = QuestionMapper::new(&locale).map_all(doc.questions());

        let tf = report.questions[0].true_false().unwrap();
        assert_eq!(tf.question, "Keine Frage gestellt.");
        let mc = report.questions[1].multi_choice().unwrap();
        assert_eq!(mc.question, "Keine Frage gestellt.");
    }

    #[test]
    fn test_options_not_a_list_keeps_question_without_answers() {
        let locale = german_bundle();
        let input = InputQuestion::MultipleChoice(MultipleChoiceInput {
            prompt: Some("Broken".to_string()),
            options: ChoiceOptions::NotAList { found: "string" },
        });
        let report = QuestionMapper::new(&locale).map_all(&[input]);

        assert_eq!(report.mapped(), 1);
        assert_eq!(report.skipped(), 0);
        assert!(report.questions[0].multi_choice().unwrap().answers.is_empty());
        let notice = report.notices[0].to_notice("doc");
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.contains("Broken"));
    }

    #[test]
    fn test_invalid_option_entry_skips_question() {
        let locale = german_bundle();
        let input = InputQuestion::MultipleChoice(MultipleChoiceInput {
            prompt: None,
            options: ChoiceOptions::InvalidEntry {
                index: 0,
                found: "number",
            },
        });
        let report = QuestionMapper::new(&locale).map_all(&[input, mc(1)]);

        assert_eq!(report.mapped(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.notices[0].to_notice("doc").level, NoticeLevel::Error);
    }

    #[test]
    fn test_true_false_correct_flag_roundtrips() {
        let locale = german_bundle();
        let mapper = QuestionMapper::new(&locale);

        for answer in [true, false] {
            let question = mapper.map_true_false(&TrueFalseInput {
                prompt: Some("Is it?".to_string()),
                correct_answer: answer,
                feedback_correct: "Yes".to_string(),
                feedback_incorrect: "No".to_string(),
            });
            let params = question.true_false().unwrap();
            let text = params.correct.to_string();
            assert_eq!(text, if answer { "true" } else { "false" });
            assert_eq!(text.parse::<CorrectFlag>().unwrap().0, answer);
            assert_eq!(params.behaviour.feedback_on_correct, "Yes");
            assert_eq!(params.behaviour.feedback_on_wrong, "No");
            assert_eq!(question.library, "H5P.TrueFalse 1.8");
            assert_eq!(question.metadata.title, "Richtig Falsch");
        }
    }

    #[test]
    fn test_unsupported_type_is_skipped_with_warning() {
        let locale = german_bundle();
        let doc = InputDocument::from_value(&json!({"questions": [
            {"type": "Essay", "question": "Explain"},
            {"type": "MultipleChoice", "question": "Q", "options": [{"text": "A", "is_correct": true}]}
        ]}))
        .unwrap();

        let report = QuestionMapper::new(&locale).map_all(doc.questions());

        assert_eq!(report.mapped(), 1);
        assert_eq!(report.notices.len(), 1);
        let notice = report.notices[0].to_notice("Pasted_JSON");
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(
            notice.message,
            "Unsupported question type 'Essay' in 'Pasted_JSON'. Skipping question #1."
        );
    }

    #[test]
    fn test_sub_content_ids_are_distinct() {
        let locale = german_bundle();
        let questions: Vec<InputQuestion> = (0..50).map(|_| mc(2)).collect();
        let report = QuestionMapper::new(&locale).map_all(&questions);

        let ids: HashSet<&str> = report
            .questions
            .iter()
            .map(|q| q.sub_content_id.as_str())
            .collect();
        assert_eq!(ids.len(), 50);
        for id in ids {
            assert_eq!(Uuid::parse_str(id).unwrap().get_version_num(), 4);
        }
    }
}
