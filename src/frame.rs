//! Render model of the current slide
//!
//! A [`Frame`] is everything a presentation layer needs to draw one slide:
//! the slide descriptor, its resolved content, the countdown and the
//! fullscreen flag. Frames are plain serializable values; drawing them is
//! left to a [`crate::session::Screen`].

use itertools::Itertools;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::{
    catalog::RoundLookup,
    navigator::Navigator,
    round::{
        config::{Round, RoundId, SubjectId},
        media::Media,
        question::{Answer, Question, QuestionKind},
    },
    slide::Slide,
    timer::Countdown,
};

/// `count` followed by `word`, pluralized as needed
fn counted(word: &str, count: usize) -> String {
    pluralizer::pluralize(word, isize::try_from(count).unwrap_or(isize::MAX), true)
}

/// A round as listed on the round menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundEntry {
    /// Round id
    pub id: RoundId,
    /// Round title
    pub title: String,
    /// Round description
    pub description: String,
    /// Whether the round is subject-based
    pub special: bool,
    /// Whether the round uses the long countdown
    pub rapid_fire: bool,
}

impl From<&Round> for RoundEntry {
    fn from(round: &Round) -> Self {
        Self {
            id: round.id,
            title: round.title.clone(),
            description: round.description.clone(),
            special: round.is_special(),
            rapid_fire: round.rapid_fire,
        }
    }
}

/// A subject as listed on the subject menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectEntry {
    /// Subject id, passed back when the subject is selected
    pub id: SubjectId,
    /// Display name
    pub name: String,
    /// Number of questions in the subject
    pub question_count: usize,
}

/// Where a question sits in its sequence
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// One-based question number
    pub number: usize,
    /// Length of the sequence
    pub total: usize,
    /// Subject name, in special rounds
    pub subject: Option<String>,
}

impl Progress {
    /// Whether this is the last question of its sequence
    pub fn is_last(&self) -> bool {
        self.number == self.total
    }
}

/// Resolved content of a slide
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Content {
    /// Password prompt
    Login {
        /// Application title
        title: &'static str,
    },
    /// Landing slide
    Welcome {
        /// Application title
        title: &'static str,
        /// Line shown under the title
        tagline: &'static str,
    },
    /// Round menu
    RoundMenu {
        /// Rounds in menu order
        rounds: Vec<RoundEntry>,
    },
    /// Title card of a round
    Introduction {
        /// The round
        round: RoundEntry,
        /// Size of the round, e.g. "This round contains 2 questions."
        summary: String,
    },
    /// Rules of a round
    Rules {
        /// One rule per line
        lines: Vec<String>,
    },
    /// Subject menu of a special round
    SubjectMenu {
        /// Round title
        title: String,
        /// Subjects in authored order
        subjects: Vec<SubjectEntry>,
    },
    /// Media of a media-first question
    Media {
        /// The media to show
        media: Media,
        /// Position of the question
        progress: Progress,
    },
    /// A question
    Question {
        /// Question text
        text: String,
        /// Position of the question
        progress: Progress,
        /// Answer option texts, in order
        options: Vec<String>,
        /// Whether more than one option is correct
        multiple_correct: bool,
        /// Whether the question is answered verbally
        open_ended: bool,
        /// Media shown alongside the text; media-first questions already
        /// showed theirs
        media: Option<Media>,
    },
    /// Answer reveal
    Answer {
        /// Question text
        text: String,
        /// Position of the question
        progress: Progress,
        /// The correct options
        correct: Vec<Answer>,
        /// The expected answer of an open-ended question
        correct_answer: Option<String>,
        /// Media revealed with the answer
        media_answer: Option<Media>,
    },
    /// Closing slide of a round
    RoundComplete {
        /// Round title
        title: String,
        /// What the round featured
        summary: String,
    },
    /// The slide refers to content that does not resolve
    Unavailable,
}

/// Everything needed to draw the current slide
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// The slide descriptor
    pub slide: Slide,
    /// Resolved content
    pub content: Content,
    /// The countdown
    pub timer: Countdown,
    /// Whether the presentation is fullscreen
    pub fullscreen: bool,
}

impl Frame {
    /// Converts the frame to a JSON string for the presentation layer
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

fn introduction_summary(round: &Round) -> String {
    if round.is_special() {
        format!(
            "This is a special \"Choose Yourself\" round with {} different subjects.",
            round.subjects().len()
        )
    } else {
        format!(
            "This round contains {}.",
            counted("question", round.questions().map_or(0, <[_]>::len))
        )
    }
}

fn completion_summary(round: &Round) -> String {
    if round.is_special() {
        format!(
            "This special round featured {} different subjects.",
            round.subjects().len()
        )
    } else {
        format!(
            "This round featured {}.",
            counted("question", round.questions().map_or(0, <[_]>::len))
        )
    }
}

fn rules(round: &Round) -> Vec<String> {
    if round.is_special() {
        [
            "This is a 'Choose Yourself' round. You'll select subjects from the available options.",
            "Each subject contains several questions on that topic.",
            "After selecting a subject, you'll be presented with a question.",
            "After answering the question, you can return to select another subject.",
            "You can choose the same subject multiple times if you wish.",
        ]
        .map(str::to_owned)
        .to_vec()
    } else {
        let mut lines = vec![format!(
            "This round contains {}.",
            counted("question", round.questions().map_or(0, <[_]>::len))
        )];
        if round.rapid_fire {
            lines.push("Every question has a 60-second timer.".to_owned());
        }
        lines.extend(
            [
                "Each question will be displayed one at a time.",
                "Some questions may contain images, audio, or video.",
                "After each question, we'll reveal the correct answer.",
                "Navigate through questions using the arrows or spacebar.",
            ]
            .map(str::to_owned),
        );
        lines
    }
}

impl<C: RoundLookup> Navigator<C> {
    /// Builds the render model of the current slide
    pub fn frame(&self, fullscreen: bool) -> Frame {
        Frame {
            slide: self.slide().clone(),
            content: self.content().unwrap_or(Content::Unavailable),
            timer: *self.position().timer(),
            fullscreen,
        }
    }

    fn progress(&self) -> Option<Progress> {
        let round = self.round()?;
        let subject = self
            .position()
            .subject_id()
            .and_then(|id| round.subject(id));
        let total = round.sequence(self.position().subject_id())?.len();
        Some(Progress {
            number: self.position().question_index() + 1,
            total,
            subject: subject.map(|subject| subject.name.clone()),
        })
    }

    fn content(&self) -> Option<Content> {
        let content = match self.slide() {
            Slide::Authentication => Content::Login {
                title: crate::constants::app::NAME,
            },
            Slide::Welcome => Content::Welcome {
                title: crate::constants::app::NAME,
                tagline: crate::constants::app::TAGLINE,
            },
            Slide::RoundSelection => Content::RoundMenu {
                rounds: self
                    .catalog()
                    .round_ids()
                    .into_iter()
                    .filter_map(|id| self.catalog().round(id))
                    .map(RoundEntry::from)
                    .collect_vec(),
            },
            Slide::RoundIntroduction { .. } => {
                let round = self.round()?;
                Content::Introduction {
                    round: round.into(),
                    summary: introduction_summary(round),
                }
            }
            Slide::Rules { .. } => Content::Rules {
                lines: rules(self.round()?),
            },
            Slide::SubjectSelection { .. } => {
                let round = self.round()?;
                Content::SubjectMenu {
                    title: round.title.clone(),
                    subjects: round
                        .subjects()
                        .iter()
                        .map(|subject| SubjectEntry {
                            id: subject.id.clone(),
                            name: subject.name.clone(),
                            question_count: subject.questions.len(),
                        })
                        .collect_vec(),
                }
            }
            Slide::QuestionMedia(_) => Content::Media {
                media: self.question()?.media.clone()?,
                progress: self.progress()?,
            },
            Slide::Question(_) => {
                let question = self.question()?;
                Content::Question {
                    text: question.text.clone(),
                    progress: self.progress()?,
                    options: question
                        .answers
                        .iter()
                        .map(|answer| answer.text.clone())
                        .collect_vec(),
                    multiple_correct: question.multiple_correct,
                    open_ended: question.kind == QuestionKind::OpenEnded,
                    media: side_media(question),
                }
            }
            Slide::Answer(_) => {
                let question = self.question()?;
                Content::Answer {
                    text: question.text.clone(),
                    progress: self.progress()?,
                    correct: question.correct_answers().cloned().collect_vec(),
                    correct_answer: question.correct_answer.clone(),
                    media_answer: question.media_answer.clone(),
                }
            }
            Slide::EndOfRound { .. } => {
                let round = self.round()?;
                Content::RoundComplete {
                    title: round.title.clone(),
                    summary: completion_summary(round),
                }
            }
        };
        Some(content)
    }
}

/// Media shown on the question slide itself
fn side_media(question: &Question) -> Option<Media> {
    if question.kind == QuestionKind::MediaFirst {
        None
    } else {
        question.media.clone()
    }
}
