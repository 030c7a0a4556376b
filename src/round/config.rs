//! Round and subject configuration
//!
//! A round is either linear (an ordered list of questions) or special (a menu
//! of subjects, each with its own list of questions). The round documents
//! authored for the show carry this as an `isSpecial` flag next to exactly one
//! of `questions` or `subjects`; here it is a tagged [`RoundContent`] so that
//! a round can never hold both.

use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

use super::question::Question;

/// Identifier of a round, a positive integer
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct RoundId(u32);

impl RoundId {
    /// Wraps a raw round number
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw round number
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Identifier of a subject, unique within its round
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SubjectId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

type ValidationResult = garde::Result;

fn validate_round_id(id: &RoundId, _ctx: &()) -> ValidationResult {
    if id.get() == 0 {
        Err(garde::Error::new("round id must be positive"))
    } else {
        Ok(())
    }
}

fn validate_subject_id(id: &SubjectId, _ctx: &()) -> ValidationResult {
    let len = id.as_str().len();
    if (1..=crate::constants::round::MAX_ID_LENGTH).contains(&len) {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "subject id length outside of bounds [1,{}]",
            crate::constants::round::MAX_ID_LENGTH
        )))
    }
}

#[allow(clippy::ptr_arg)]
fn validate_unique_subjects(subjects: &Vec<Subject>, _ctx: &()) -> ValidationResult {
    let mut seen = std::collections::HashSet::new();
    match subjects.iter().find(|s| !seen.insert(&s.id)) {
        Some(duplicate) => Err(garde::Error::new(format!(
            "subject id {} is used more than once",
            duplicate.id
        ))),
        None => Ok(()),
    }
}

/// A named group of questions inside a special round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Subject {
    /// Identifier used to select the subject
    #[garde(custom(validate_subject_id))]
    pub id: SubjectId,
    /// Name shown on the subject menu
    #[garde(length(min = 1, max = crate::constants::round::MAX_SUBJECT_NAME_LENGTH))]
    pub name: String,
    /// The subject's questions, in presentation order
    #[garde(dive)]
    pub questions: Vec<Question>,
}

/// The questions of a round, either directly or grouped by subject
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub enum RoundContent {
    /// An ordered list of questions walked from first to last
    Linear {
        /// The round's questions
        #[garde(dive)]
        questions: Vec<Question>,
    },
    /// A menu of subjects the host picks from
    Special {
        /// The selectable subjects
        #[garde(dive, custom(validate_unique_subjects))]
        subjects: Vec<Subject>,
    },
}

/// A round of the quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(try_from = "RoundDocument", into = "RoundDocument")]
pub struct Round {
    /// Identifier the round is selected by
    #[garde(custom(validate_round_id))]
    pub id: RoundId,
    /// Title shown on the round menu and introduction
    #[garde(length(max = crate::constants::round::MAX_TITLE_LENGTH))]
    pub title: String,
    /// Description shown on the round introduction
    #[garde(length(max = crate::constants::round::MAX_DESCRIPTION_LENGTH))]
    pub description: String,
    /// Rapid-fire rounds use the longer countdown
    #[garde(skip)]
    pub rapid_fire: bool,
    /// The questions of the round
    #[garde(dive)]
    pub content: RoundContent,
}

impl Round {
    /// Whether the round is a subject menu rather than a linear list
    pub fn is_special(&self) -> bool {
        matches!(self.content, RoundContent::Special { .. })
    }

    /// The round's own questions, `None` for special rounds
    pub fn questions(&self) -> Option<&[Question]> {
        match &self.content {
            RoundContent::Linear { questions } => Some(questions),
            RoundContent::Special { .. } => None,
        }
    }

    /// The round's subjects, empty for linear rounds
    pub fn subjects(&self) -> &[Subject] {
        match &self.content {
            RoundContent::Linear { .. } => &[],
            RoundContent::Special { subjects } => subjects,
        }
    }

    /// Looks up a subject of a special round
    pub fn subject(&self, id: &SubjectId) -> Option<&Subject> {
        self.subjects().iter().find(|s| &s.id == id)
    }

    /// Resolves the question sequence navigation is scoped to
    ///
    /// Linear rounds always answer with their own questions and ignore the
    /// subject. Special rounds answer with the questions of the given
    /// subject, or `None` when no subject is given or it does not exist.
    pub fn sequence(&self, subject: Option<&SubjectId>) -> Option<&[Question]> {
        match &self.content {
            RoundContent::Linear { questions } => Some(questions),
            RoundContent::Special { .. } => self.subject(subject?).map(|s| s.questions.as_slice()),
        }
    }
}

/// Errors raised when a round document's flag disagrees with its payload
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// A round marked special without subjects, or with questions
    #[error("round {0} is special and must list subjects but no questions")]
    Special(RoundId),
    /// A linear round without questions, or with subjects
    #[error("round {0} is not special and must list questions but no subjects")]
    Linear(RoundId),
}

/// The authored document form of a round
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoundDocument {
    id: RoundId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    is_special: bool,
    #[serde(default)]
    is_rapid_fire: bool,
    questions: Option<Vec<Question>>,
    subjects: Option<Vec<Subject>>,
}

impl TryFrom<RoundDocument> for Round {
    type Error = ShapeError;

    fn try_from(document: RoundDocument) -> Result<Self, Self::Error> {
        let content = match (document.is_special, document.questions, document.subjects) {
            (true, None, Some(subjects)) => RoundContent::Special { subjects },
            (true, _, _) => return Err(ShapeError::Special(document.id)),
            (false, Some(questions), None) => RoundContent::Linear { questions },
            (false, _, _) => return Err(ShapeError::Linear(document.id)),
        };

        Ok(Self {
            id: document.id,
            title: document.title,
            description: document.description,
            rapid_fire: document.is_rapid_fire,
            content,
        })
    }
}

impl From<Round> for RoundDocument {
    fn from(round: Round) -> Self {
        let (is_special, questions, subjects) = match round.content {
            RoundContent::Linear { questions } => (false, Some(questions), None),
            RoundContent::Special { subjects } => (true, None, Some(subjects)),
        };

        Self {
            id: round.id,
            title: round.title,
            description: round.description,
            is_special,
            is_rapid_fire: round.rapid_fire,
            questions,
            subjects,
        }
    }
}
