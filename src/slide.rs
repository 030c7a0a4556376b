//! Slide descriptors
//!
//! A slide is one screen the host can be on. Each descriptor carries only
//! the fields its kind needs: the round for round-level slides, and the
//! question index (plus the subject, in special rounds) for the slides that
//! show a single question.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::round::{
    config::{RoundId, SubjectId},
    question::Question,
};

/// The finite set of navigable screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideKind {
    /// Password prompt shown before anything else
    Authentication,
    /// Landing slide after a successful login
    Welcome,
    /// The round menu, the recurring home slide
    RoundSelection,
    /// Title card of the selected round
    RoundIntroduction,
    /// Rules of the selected round
    Rules,
    /// Media of a media-first question, shown before its text
    QuestionMedia,
    /// A question
    Question,
    /// The answer reveal of a question
    Answer,
    /// Closing slide of a round
    EndOfRound,
    /// The subject menu of a special round
    SubjectSelection,
}

/// Location of a single question within a round
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
    /// Round the question belongs to
    pub round_id: RoundId,
    /// Index within the active question sequence
    pub question_index: usize,
    /// Subject whose sequence the index refers to, special rounds only
    pub subject_id: Option<SubjectId>,
}

impl Cursor {
    /// Creates a cursor at the given question
    pub fn new(round_id: RoundId, question_index: usize, subject_id: Option<SubjectId>) -> Self {
        Self {
            round_id,
            question_index,
            subject_id,
        }
    }

    /// The same cursor moved to another question of the same sequence
    #[must_use]
    pub fn at(&self, question_index: usize) -> Self {
        Self {
            question_index,
            ..self.clone()
        }
    }
}

/// The slide currently reported to the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Slide {
    /// Password prompt
    #[default]
    Authentication,
    /// Landing slide
    Welcome,
    /// Round menu
    RoundSelection,
    /// Title card of a round
    RoundIntroduction {
        /// The round being introduced
        round_id: RoundId,
    },
    /// Rules of a round
    Rules {
        /// The round whose rules are shown
        round_id: RoundId,
    },
    /// Media of a media-first question
    QuestionMedia(Cursor),
    /// A question
    Question(Cursor),
    /// The answer reveal of a question
    Answer(Cursor),
    /// Closing slide of a round
    EndOfRound {
        /// The round that ended
        round_id: RoundId,
    },
    /// Subject menu of a special round
    SubjectSelection {
        /// The special round
        round_id: RoundId,
    },
}

impl Slide {
    /// The first slide of a question: its media for media-first questions,
    /// otherwise the question itself
    pub fn leading(question: &Question, cursor: Cursor) -> Self {
        if question.opens_with_media() {
            Self::QuestionMedia(cursor)
        } else {
            Self::Question(cursor)
        }
    }

    /// The kind of this slide without its fields
    pub fn kind(&self) -> SlideKind {
        match self {
            Self::Authentication => SlideKind::Authentication,
            Self::Welcome => SlideKind::Welcome,
            Self::RoundSelection => SlideKind::RoundSelection,
            Self::RoundIntroduction { .. } => SlideKind::RoundIntroduction,
            Self::Rules { .. } => SlideKind::Rules,
            Self::QuestionMedia(_) => SlideKind::QuestionMedia,
            Self::Question(_) => SlideKind::Question,
            Self::Answer(_) => SlideKind::Answer,
            Self::EndOfRound { .. } => SlideKind::EndOfRound,
            Self::SubjectSelection { .. } => SlideKind::SubjectSelection,
        }
    }

    /// The round this slide belongs to, if any
    pub fn round_id(&self) -> Option<RoundId> {
        match self {
            Self::Authentication | Self::Welcome | Self::RoundSelection => None,
            Self::RoundIntroduction { round_id }
            | Self::Rules { round_id }
            | Self::EndOfRound { round_id }
            | Self::SubjectSelection { round_id } => Some(*round_id),
            Self::QuestionMedia(cursor) | Self::Question(cursor) | Self::Answer(cursor) => {
                Some(cursor.round_id)
            }
        }
    }

    /// The question location of question, answer and media slides
    pub fn cursor(&self) -> Option<&Cursor> {
        match self {
            Self::QuestionMedia(cursor) | Self::Question(cursor) | Self::Answer(cursor) => {
                Some(cursor)
            }
            _ => None,
        }
    }
}
