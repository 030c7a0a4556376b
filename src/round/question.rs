//! Questions and their answers
//!
//! A question is shown on a question slide, and its answers are revealed on
//! the following answer slide. Media-first questions additionally show their
//! media on a slide of its own before the question text.

use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::media::Media;

/// How a question is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// A question with predefined answer options
    #[default]
    MultipleChoice,
    /// A question answered in free text, revealed from `correct_answer`
    OpenEnded,
    /// A question whose media is shown on its own slide before the text
    MediaFirst,
}

/// One answer option of a question
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// The answer text
    #[garde(length(max = crate::constants::question::MAX_ANSWER_LENGTH))]
    pub text: String,
    /// Whether this option is highlighted as correct on the reveal slide
    #[garde(skip)]
    pub is_correct: bool,
    /// Optional explanation shown with the reveal
    #[garde(length(max = crate::constants::question::MAX_EXPLANATION_LENGTH))]
    pub explanation: Option<String>,
}

impl Answer {
    /// Creates an answer option without explanation
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
            explanation: None,
        }
    }
}

type ValidationResult = garde::Result;

/// Checks that a media-first question has media to lead with
fn validate_media_first(kind: QuestionKind, media: Option<&Media>) -> ValidationResult {
    if kind == QuestionKind::MediaFirst && media.is_none() {
        Err(garde::Error::new("media-first question has no media"))
    } else {
        Ok(())
    }
}

/// A single question of a round or subject
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier of the question, unique within its round
    #[garde(length(min = 1, max = crate::constants::round::MAX_ID_LENGTH))]
    pub id: String,
    /// The question text
    #[garde(length(max = crate::constants::question::MAX_TEXT_LENGTH))]
    pub text: String,
    /// Presentation kind, multiple choice when absent from the document
    #[serde(rename = "type", default)]
    #[garde(custom(|kind: &QuestionKind, _: &()| {
        validate_media_first(*kind, self.media.as_ref())
    }))]
    pub kind: QuestionKind,
    /// Media shown with (or, for media-first questions, before) the question
    #[garde(dive)]
    pub media: Option<Media>,
    /// Answer options, revealed on the answer slide
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[garde(length(max = crate::constants::question::MAX_ANSWER_COUNT), dive)]
    pub answers: Vec<Answer>,
    /// Free-text answer for open-ended questions
    #[garde(length(max = crate::constants::question::MAX_ANSWER_LENGTH))]
    pub correct_answer: Option<String>,
    /// Whether more than one option is correct
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    #[garde(skip)]
    pub multiple_correct: bool,
    /// Media shown on the answer slide
    #[garde(dive)]
    pub media_answer: Option<Media>,
}

impl Question {
    /// Creates a multiple choice question with the given options
    pub fn multiple_choice(
        id: impl Into<String>,
        text: impl Into<String>,
        answers: Vec<Answer>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind: QuestionKind::MultipleChoice,
            media: None,
            multiple_correct: answers.iter().filter(|a| a.is_correct).count() > 1,
            answers,
            correct_answer: None,
            media_answer: None,
        }
    }

    /// Creates an open-ended question with a free-text answer
    pub fn open_ended(
        id: impl Into<String>,
        text: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind: QuestionKind::OpenEnded,
            media: None,
            answers: Vec::new(),
            correct_answer: Some(correct_answer.into()),
            multiple_correct: false,
            media_answer: None,
        }
    }

    /// Creates a media-first question: the media gets its own slide first
    pub fn media_first(id: impl Into<String>, text: impl Into<String>, media: Media) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind: QuestionKind::MediaFirst,
            media: Some(media),
            answers: Vec::new(),
            correct_answer: None,
            multiple_correct: false,
            media_answer: None,
        }
    }

    /// Whether the question is shown as a media slide before its text
    pub fn opens_with_media(&self) -> bool {
        self.kind == QuestionKind::MediaFirst && self.media.is_some()
    }

    /// The answer options flagged as correct
    pub fn correct_answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|a| a.is_correct)
    }
}
