//! The question set content document (`content/content.json`)

use super::question::{FeedbackRange, LICENSE_UNDISCLOSED, OutputQuestion};
use crate::locale::{LocaleBundle, QuizTexts};
use crate::package::INTRO_IMAGE_REF;
use crate::settings::QuizSettings;
use serde::Serialize;

/// Root of the content document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub intro_page: IntroPage,
    pub progress_type: String,
    pub pass_percentage: u8,
    pub disable_backwards_navigation: bool,
    pub random_questions: bool,
    pub end_game: EndGame,
    #[serde(rename = "override")]
    pub override_settings: OverrideSettings,
    pub texts: QuizTexts,
    pub pool_size: u8,
    pub questions: Vec<OutputQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroPage {
    pub show_intro_page: bool,
    pub start_button_text: String,
    pub title: String,
    pub introduction: String,
    pub background_image: BackgroundImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackgroundImage {
    pub path: String,
    pub mime: String,
    pub copyright: Copyright,
    pub width: u32,
    pub height: u32,
}

impl Default for BackgroundImage {
    fn default() -> Self {
        Self {
            path: INTRO_IMAGE_REF.to_string(),
            mime: "image/png".to_string(),
            copyright: Copyright {
                license: LICENSE_UNDISCLOSED.to_string(),
            },
            width: 52,
            height: 52,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Copyright {
    pub license: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndGame {
    pub show_result_page: bool,
    pub show_solution_button: bool,
    pub show_retry_button: bool,
    pub no_result_message: String,
    pub message: String,
    pub score_bar_label: String,
    pub overall_feedback: Vec<FeedbackRange>,
    pub solution_button_text: String,
    pub retry_button_text: String,
    pub finish_button_text: String,
    pub submit_button_text: String,
    pub show_animations: bool,
    pub skippable: bool,
    pub skip_button_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideSettings {
    pub check_button: bool,
}

/// Builds the content document around a list of mapped questions.
///
/// Only the settings and the questions vary between documents; every other
/// value is a constant or comes from the locale bundle.
pub struct ContentAssembler<'a> {
    locale: &'a LocaleBundle,
}

impl<'a> ContentAssembler<'a> {
    pub fn new(locale: &'a LocaleBundle) -> Self {
        Self { locale }
    }

    /// Assemble the document. The pool size is not compared against the
    /// number of questions.
    pub fn assemble(
        &self,
        questions: Vec<OutputQuestion>,
        settings: &QuizSettings,
    ) -> ContentDocument {
        let quiz = &self.locale.quiz;
        let end_game = &quiz.end_game;
        let pool_size = settings.pool_size.get();

        ContentDocument {
            intro_page: IntroPage {
                show_intro_page: true,
                start_button_text: quiz.start_button_text.clone(),
                title: settings.title.clone(),
                introduction: quiz.introduction_for(pool_size),
                background_image: BackgroundImage::default(),
            },
            progress_type: "textual".to_string(),
            pass_percentage: settings.pass_percentage.value(),
            disable_backwards_navigation: true,
            random_questions: settings.randomize_questions,
            end_game: EndGame {
                show_result_page: true,
                show_solution_button: true,
                show_retry_button: true,
                no_result_message: end_game.no_result_message.clone(),
                message: end_game.message.clone(),
                score_bar_label: end_game.score_bar_label.clone(),
                overall_feedback: end_game
                    .feedback
                    .iter()
                    .map(|band| FeedbackRange {
                        from: band.from,
                        to: band.to,
                        feedback: Some(band.text.clone()),
                    })
                    .collect(),
                solution_button_text: end_game.solution_button_text.clone(),
                retry_button_text: end_game.retry_button_text.clone(),
                finish_button_text: end_game.finish_button_text.clone(),
                submit_button_text: end_game.submit_button_text.clone(),
                show_animations: false,
                skippable: false,
                skip_button_text: end_game.skip_button_text.clone(),
            },
            override_settings: OverrideSettings { check_button: true },
            texts: quiz.texts.clone(),
            pool_size,
            questions,
        }
    }
}
