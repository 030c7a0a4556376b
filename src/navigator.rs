//! Slide navigation state machine
//!
//! The [`Navigator`] owns the host's current [`Position`] and decides, for
//! each navigation event, which slide comes next. Every operation either
//! applies completely and reports `true`, or leaves the position untouched
//! and reports `false`; unknown references and events without a transition
//! on the current slide are silently ignored.
//!
//! # Flow
//!
//! ```text
//! authentication -> welcome -> roundSelection -> roundIntroduction -> rules
//!
//! linear rounds:   rules -> [questionMedia ->] question -> answer -> ... -> endOfRound
//! special rounds:  rules -> subjectSelection -> [questionMedia ->] question -> answer
//!                  -> ... -> subjectSelection
//!
//! endOfRound -> roundSelection
//! ```

use derive_where::derive_where;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::RoundLookup,
    config::TimerSettings,
    round::{
        config::{Round, RoundId, SubjectId},
        question::Question,
    },
    slide::{Cursor, Slide},
    timer::Countdown,
};

/// Where the host currently is
///
/// The round and question themselves are resolved from the catalog on
/// demand through [`Navigator::round`] and [`Navigator::question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub(crate) slide: Slide,
    pub(crate) round_id: Option<RoundId>,
    pub(crate) question_index: usize,
    pub(crate) subject_id: Option<SubjectId>,
    pub(crate) timer: Countdown,
}

impl Position {
    /// The position a session starts at: the login slide, no round
    fn new(timers: &TimerSettings) -> Self {
        Self {
            slide: Slide::Authentication,
            round_id: None,
            question_index: 0,
            subject_id: None,
            timer: Countdown::new(timers.duration_for(None)),
        }
    }

    /// The current slide
    pub fn slide(&self) -> &Slide {
        &self.slide
    }

    /// The active round
    pub fn round_id(&self) -> Option<RoundId> {
        self.round_id
    }

    /// Index within the active question sequence
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// The active subject, meaningful in special rounds only
    pub fn subject_id(&self) -> Option<&SubjectId> {
        self.subject_id.as_ref()
    }

    /// The countdown
    pub fn timer(&self) -> &Countdown {
        &self.timer
    }
}

/// The slide navigation engine of one quiz session
#[derive(Clone)]
#[derive_where(Debug)]
pub struct Navigator<C> {
    #[derive_where(skip)]
    pub(crate) catalog: C,
    pub(crate) timers: TimerSettings,
    pub(crate) position: Position,
}

impl<C: RoundLookup> Navigator<C> {
    /// Creates a navigator on the login slide
    pub fn new(catalog: C, timers: TimerSettings) -> Self {
        Self {
            position: Position::new(&timers),
            catalog,
            timers,
        }
    }

    /// The current position
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The current slide
    pub fn slide(&self) -> &Slide {
        &self.position.slide
    }

    /// The catalog rounds are resolved from
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The countdown defaults in use
    pub fn timers(&self) -> &TimerSettings {
        &self.timers
    }

    /// The active round
    pub fn round(&self) -> Option<&Round> {
        self.catalog.round(self.position.round_id?)
    }

    /// The question at the current index of the active sequence
    pub fn question(&self) -> Option<&Question> {
        let (_, questions) = self.active_sequence()?;
        questions.get(self.position.question_index)
    }

    /// Resolves the active round together with the question sequence the
    /// index is scoped to: the round's questions, or the active subject's
    fn active_sequence(&self) -> Option<(&Round, &[Question])> {
        let round = self.round()?;
        let questions = round.sequence(self.position.subject_id.as_ref())?;
        Some((round, questions))
    }

    /// A cursor at `index` of the active sequence
    fn cursor_at(&self, round: &Round, index: usize) -> Cursor {
        let subject_id = if round.is_special() {
            self.position.subject_id.clone()
        } else {
            None
        };
        Cursor::new(round.id, index, subject_id)
    }

    /// The slide after the current question: the next question, or the
    /// end of the sequence
    fn following_slide(&self) -> Option<Slide> {
        let (round, questions) = self.active_sequence()?;
        let next = self.position.question_index + 1;
        Some(match questions.get(next) {
            Some(question) => Slide::leading(question, self.cursor_at(round, next)),
            None if round.is_special() => Slide::SubjectSelection { round_id: round.id },
            None => Slide::EndOfRound { round_id: round.id },
        })
    }

    /// The slide before the current question: the previous answer, or the
    /// menu the sequence was entered from
    fn preceding_slide(&self) -> Option<Slide> {
        let (round, questions) = self.active_sequence()?;
        match self.position.question_index.checked_sub(1) {
            None if round.is_special() => Some(Slide::SubjectSelection { round_id: round.id }),
            None => Some(Slide::Rules { round_id: round.id }),
            Some(previous) => questions
                .get(previous)
                .map(|_| Slide::Answer(self.cursor_at(round, previous))),
        }
    }

    /// Moves to `target` if there is one
    fn apply(&mut self, event: &'static str, target: Option<Slide>) -> bool {
        let Some(slide) = target else {
            tracing::trace!(event, slide = ?self.position.slide.kind(), "no transition");
            return false;
        };

        tracing::debug!(
            event,
            from = ?self.position.slide.kind(),
            to = ?slide.kind(),
            "slide transition"
        );
        self.place(slide);
        true
    }

    /// Stores `slide`, keeping round, index and subject in line with it
    fn place(&mut self, slide: Slide) {
        if let Some(round_id) = slide.round_id() {
            if self.position.round_id != Some(round_id) {
                self.position.round_id = Some(round_id);
                self.position.question_index = 0;
                self.position.subject_id = None;
            }
        }
        if let Some(cursor) = slide.cursor() {
            self.position.question_index = cursor.question_index;
            self.position.subject_id.clone_from(&cursor.subject_id);
        }
        self.position.slide = slide;
    }

    fn is_authenticated(&self) -> bool {
        self.position.slide != Slide::Authentication
    }

    /// Leaves the login slide after the credentials were accepted
    ///
    /// # Returns
    ///
    /// `true` if the navigator was on the login slide
    pub fn admit(&mut self) -> bool {
        let target = (!self.is_authenticated()).then_some(Slide::Welcome);
        self.apply("admit", target)
    }

    /// Returns to the login slide with a fresh position
    pub fn reset(&mut self) {
        tracing::debug!("navigator reset");
        self.position = Position::new(&self.timers);
    }

    /// Selects a round and shows its introduction
    ///
    /// The question index goes back to 0, the subject is cleared and the
    /// countdown is set to the round's default length. Whether the countdown
    /// runs is left as it was.
    ///
    /// # Returns
    ///
    /// `false` if the round is not in the catalog or nobody is logged in
    pub fn select_round(&mut self, id: RoundId) -> bool {
        if !self.is_authenticated() {
            tracing::trace!(round = %id, "round selection before login");
            return false;
        }
        let Some(round) = self.catalog.round(id) else {
            tracing::warn!(round = %id, "selected round is not in the catalog");
            return false;
        };
        let seconds = self.timers.duration_for(Some(round));

        tracing::debug!(round = %id, seconds, "round selected");
        self.position.round_id = Some(id);
        self.position.question_index = 0;
        self.position.subject_id = None;
        self.position.slide = Slide::RoundIntroduction { round_id: id };
        self.position.timer.reset(seconds);
        true
    }

    /// Selects a subject of the active special round and shows its first
    /// question
    ///
    /// # Returns
    ///
    /// `false` if the round is not special, the subject does not exist, or
    /// the subject has no questions
    pub fn select_subject(&mut self, id: &SubjectId) -> bool {
        let target = self.round().and_then(|round| {
            let subject = round.subject(id)?;
            let first = subject.questions.first()?;
            Some(Slide::leading(
                first,
                Cursor::new(round.id, 0, Some(subject.id.clone())),
            ))
        });
        if target.is_none() {
            tracing::warn!(subject = %id, "subject cannot be selected");
        }
        self.apply("select_subject", target)
    }

    /// Moves forward one slide
    pub fn advance(&mut self) -> bool {
        let target = self.round().and_then(|round| match &self.position.slide {
            Slide::RoundIntroduction { .. } => Some(Slide::Rules { round_id: round.id }),
            Slide::Rules { .. } if round.is_special() => {
                Some(Slide::SubjectSelection { round_id: round.id })
            }
            Slide::Rules { .. } => Some(match round.questions().and_then(<[_]>::first) {
                Some(first) => Slide::leading(first, self.cursor_at(round, 0)),
                None => Slide::EndOfRound { round_id: round.id },
            }),
            Slide::QuestionMedia(cursor) => Some(Slide::Question(cursor.clone())),
            Slide::Question(cursor) => Some(Slide::Answer(cursor.clone())),
            Slide::Answer(_) => self.following_slide(),
            Slide::EndOfRound { .. } => Some(Slide::RoundSelection),
            Slide::Authentication
            | Slide::Welcome
            | Slide::RoundSelection
            | Slide::SubjectSelection { .. } => None,
        });
        self.apply("advance", target)
    }

    /// Moves back one slide
    pub fn retreat(&mut self) -> bool {
        let target = self.round().and_then(|round| match &self.position.slide {
            Slide::Rules { .. } => Some(Slide::RoundIntroduction { round_id: round.id }),
            Slide::SubjectSelection { .. } => Some(Slide::Rules { round_id: round.id }),
            Slide::QuestionMedia(_) => self.preceding_slide(),
            Slide::Question(cursor) => match self.question() {
                Some(question) if question.opens_with_media() => {
                    Some(Slide::QuestionMedia(cursor.clone()))
                }
                _ => self.preceding_slide(),
            },
            Slide::Answer(cursor) => self
                .question()
                .map(|question| Slide::leading(question, cursor.clone())),
            Slide::EndOfRound { .. } => match round.questions() {
                None => Some(Slide::SubjectSelection { round_id: round.id }),
                Some([]) => None,
                Some(questions) => Some(Slide::Answer(Cursor::new(
                    round.id,
                    questions.len() - 1,
                    None,
                ))),
            },
            Slide::Authentication
            | Slide::Welcome
            | Slide::RoundSelection
            | Slide::RoundIntroduction { .. } => None,
        });
        self.apply("retreat", target)
    }

    /// Moves to the next question without revealing the current answer
    ///
    /// On a question or question media slide this goes where advancing from
    /// the answer slide would: the next question of the sequence, or the
    /// end of it. On every other slide it is the same as [`Self::advance`].
    /// The navigator does not decide when skipping is appropriate; callers
    /// pick between advancing and skipping.
    pub fn skip(&mut self) -> bool {
        match self.position.slide {
            Slide::Question(_) | Slide::QuestionMedia(_) => {
                let target = self.following_slide();
                self.apply("skip", target)
            }
            _ => self.advance(),
        }
    }

    /// Goes back to the round menu from any slide after login
    pub fn return_to_round_menu(&mut self) -> bool {
        let target = self.is_authenticated().then_some(Slide::RoundSelection);
        self.apply("round_menu", target)
    }

    /// Places the navigator on an arbitrary slide
    ///
    /// The slide must resolve against the catalog: its round must exist, a
    /// subject must belong to that special round, the index must be in
    /// range, and a media slide must belong to a media-first question. The
    /// countdown is left alone, even when the round changes.
    ///
    /// # Returns
    ///
    /// `false` if nobody is logged in or the slide does not resolve
    pub fn jump_to_slide(&mut self, slide: Slide) -> bool {
        if !self.is_authenticated() || !self.resolves(&slide) {
            tracing::warn!(slide = ?slide, "cannot jump to slide");
            return false;
        }
        self.apply("jump", Some(slide))
    }

    /// Whether every reference a slide carries resolves in the catalog
    pub(crate) fn resolves(&self, slide: &Slide) -> bool {
        match slide {
            Slide::Authentication => false,
            Slide::Welcome | Slide::RoundSelection => true,
            Slide::RoundIntroduction { round_id }
            | Slide::Rules { round_id }
            | Slide::EndOfRound { round_id } => self.catalog.round(*round_id).is_some(),
            Slide::SubjectSelection { round_id } => self
                .catalog
                .round(*round_id)
                .is_some_and(Round::is_special),
            Slide::QuestionMedia(cursor) => self
                .resolve_cursor(cursor)
                .is_some_and(Question::opens_with_media),
            Slide::Question(cursor) | Slide::Answer(cursor) => {
                self.resolve_cursor(cursor).is_some()
            }
        }
    }

    /// Resolves the question a cursor points at
    pub(crate) fn resolve_cursor(&self, cursor: &Cursor) -> Option<&Question> {
        let round = self.catalog.round(cursor.round_id)?;
        if !round.is_special() && cursor.subject_id.is_some() {
            return None;
        }
        round
            .sequence(cursor.subject_id.as_ref())?
            .get(cursor.question_index)
    }

    /// Starts or stops the countdown
    pub fn toggle_timer(&mut self) {
        self.position.timer.toggle();
    }

    /// Sets the countdown back to the active round's default length
    pub fn reset_timer(&mut self) {
        let seconds = self.timers.duration_for(self.round());
        self.position.timer.reset(seconds);
    }

    /// Advances the countdown by one second; see [`Countdown::tick`]
    pub fn tick(&mut self) -> bool {
        let changed = self.position.timer.tick();
        if self.position.timer.is_expired() {
            tracing::debug!("countdown reached zero");
        }
        changed
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{
        catalog::Catalog,
        round::{
            config::{RoundContent, Subject},
            media::{Media, MediaKind},
            question::Answer,
        },
        slide::SlideKind,
    };

    fn plain(id: &str) -> Question {
        Question::multiple_choice(id, "Which one?", vec![Answer::new("This", true)])
    }

    fn media_first(id: &str) -> Question {
        Question::media_first(id, "Name it", Media::new(MediaKind::Image, "/m.png"))
    }

    fn linear(id: u32, rapid_fire: bool, questions: Vec<Question>) -> Round {
        Round {
            id: RoundId::new(id),
            title: format!("Round {id}"),
            description: String::new(),
            rapid_fire,
            content: RoundContent::Linear { questions },
        }
    }

    fn subject(id: &str, questions: Vec<Question>) -> Subject {
        Subject {
            id: id.into(),
            name: id.to_uppercase(),
            questions,
        }
    }

    fn create_test_catalog() -> Catalog {
        Catalog::new([
            linear(1, false, vec![plain("a"), plain("b")]),
            linear(
                2,
                true,
                vec![media_first("m0"), plain("p1"), media_first("m2")],
            ),
            Round {
                id: RoundId::new(3),
                title: "Choose".to_string(),
                description: String::new(),
                rapid_fire: false,
                content: RoundContent::Special {
                    subjects: vec![
                        subject("sports", vec![plain("s0"), media_first("s1"), plain("s2")]),
                        subject("history", vec![plain("h0"), plain("h1")]),
                        subject("film", vec![media_first("f0"), plain("f1")]),
                        subject("empty", Vec::new()),
                    ],
                },
            },
            linear(4, false, Vec::new()),
        ])
        .unwrap()
    }

    /// A navigator logged in and sitting on the round menu
    fn create_test_navigator() -> Navigator<Catalog> {
        let mut navigator = Navigator::new(create_test_catalog(), TimerSettings::default());
        assert!(navigator.admit());
        assert!(navigator.return_to_round_menu());
        navigator
    }

    fn cursor(round: u32, index: usize, subject: Option<&str>) -> Cursor {
        Cursor::new(RoundId::new(round), index, subject.map(SubjectId::from))
    }

    fn kind(navigator: &Navigator<Catalog>) -> SlideKind {
        navigator.slide().kind()
    }

    #[test]
    fn test_initial_position() {
        let navigator = Navigator::new(create_test_catalog(), TimerSettings::default());
        assert_eq!(navigator.slide(), &Slide::Authentication);
        assert!(navigator.round().is_none());
        assert_eq!(navigator.position().question_index(), 0);
        assert_eq!(navigator.position().timer().remaining(), 15);
        assert!(!navigator.position().timer().is_active());
    }

    #[test]
    fn test_nothing_moves_before_login() {
        let mut navigator = Navigator::new(create_test_catalog(), TimerSettings::default());
        let before = navigator.position().clone();

        assert!(!navigator.advance());
        assert!(!navigator.retreat());
        assert!(!navigator.skip());
        assert!(!navigator.select_round(RoundId::new(1)));
        assert!(!navigator.select_subject(&"sports".into()));
        assert!(!navigator.return_to_round_menu());
        assert!(!navigator.jump_to_slide(Slide::RoundSelection));
        assert_eq!(navigator.position(), &before);

        assert!(navigator.admit());
        assert_eq!(navigator.slide(), &Slide::Welcome);
        assert!(!navigator.admit());
    }

    #[test]
    fn test_linear_round_walkthrough() {
        let mut navigator = create_test_navigator();

        assert!(navigator.select_round(RoundId::new(1)));
        assert_eq!(
            navigator.slide(),
            &Slide::RoundIntroduction {
                round_id: RoundId::new(1)
            }
        );
        assert_eq!(navigator.position().round_id(), Some(RoundId::new(1)));
        assert_eq!(navigator.position().question_index(), 0);
        assert_eq!(navigator.position().timer().remaining(), 15);

        assert!(navigator.advance());
        assert_eq!(kind(&navigator), SlideKind::Rules);

        assert!(navigator.advance());
        assert_eq!(navigator.slide(), &Slide::Question(cursor(1, 0, None)));
        assert_eq!(navigator.question().map(|q| q.id.as_str()), Some("a"));

        assert!(navigator.advance());
        assert_eq!(navigator.slide(), &Slide::Answer(cursor(1, 0, None)));

        assert!(navigator.advance());
        assert_eq!(navigator.slide(), &Slide::Question(cursor(1, 1, None)));
        assert_eq!(navigator.question().map(|q| q.id.as_str()), Some("b"));

        assert!(navigator.advance());
        assert_eq!(navigator.slide(), &Slide::Answer(cursor(1, 1, None)));

        assert!(navigator.advance());
        assert_eq!(
            navigator.slide(),
            &Slide::EndOfRound {
                round_id: RoundId::new(1)
            }
        );

        assert!(navigator.advance());
        assert_eq!(navigator.slide(), &Slide::RoundSelection);
    }

    #[test]
    fn test_retreat_from_answer_returns_to_same_question() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(2));
        navigator.advance();

        // m0 media, m0 question, m0 answer, p1 question, p1 answer,
        // m2 media, m2 question, m2 answer
        let mut answers = Vec::new();
        while navigator.advance() {
            if let Slide::Answer(cursor) = navigator.slide() {
                answers.push(cursor.clone());
            }
            if kind(&navigator) == SlideKind::EndOfRound {
                break;
            }
        }
        assert_eq!(answers.len(), 3);

        for answer in answers {
            let index = answer.question_index;
            assert!(navigator.jump_to_slide(Slide::Answer(answer.clone())));

            assert!(navigator.retreat());
            let expected = if index == 1 {
                Slide::Question(answer.clone())
            } else {
                Slide::QuestionMedia(answer.clone())
            };
            assert_eq!(navigator.slide(), &expected);
            assert_eq!(navigator.position().question_index(), index);
        }
    }

    #[test]
    fn test_advance_then_retreat_is_symmetric() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(1));
        assert!(navigator.jump_to_slide(Slide::Answer(cursor(1, 0, None))));
        let before = navigator.position().clone();

        assert!(navigator.advance());
        assert_eq!(navigator.slide(), &Slide::Question(cursor(1, 1, None)));
        assert!(navigator.retreat());
        assert_eq!(navigator.position(), &before);
    }

    #[test]
    fn test_last_answer_and_end_of_round_boundary() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(2));
        assert!(navigator.jump_to_slide(Slide::Answer(cursor(2, 2, None))));

        assert!(navigator.advance());
        assert_eq!(kind(&navigator), SlideKind::EndOfRound);

        assert!(navigator.retreat());
        assert_eq!(navigator.slide(), &Slide::Answer(cursor(2, 2, None)));
        assert_eq!(navigator.position().question_index(), 2);
        assert_eq!(navigator.question().map(|q| q.id.as_str()), Some("m2"));
    }

    #[test]
    fn test_media_first_question_shows_media_first() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(2));
        navigator.advance();

        assert!(navigator.advance());
        assert_eq!(navigator.slide(), &Slide::QuestionMedia(cursor(2, 0, None)));

        assert!(navigator.advance());
        assert_eq!(navigator.slide(), &Slide::Question(cursor(2, 0, None)));

        assert!(navigator.retreat());
        assert_eq!(navigator.slide(), &Slide::QuestionMedia(cursor(2, 0, None)));

        assert!(navigator.retreat());
        assert_eq!(
            navigator.slide(),
            &Slide::Rules {
                round_id: RoundId::new(2)
            }
        );
    }

    #[test]
    fn test_retreat_from_media_first_question_never_skips_media() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(2));
        assert!(navigator.jump_to_slide(Slide::Question(cursor(2, 2, None))));

        assert!(navigator.retreat());
        assert_eq!(navigator.slide(), &Slide::QuestionMedia(cursor(2, 2, None)));

        assert!(navigator.retreat());
        assert_eq!(navigator.slide(), &Slide::Answer(cursor(2, 1, None)));
        assert_eq!(navigator.question().map(|q| q.id.as_str()), Some("p1"));
    }

    #[test]
    fn test_retreat_from_plain_question() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(1));
        assert!(navigator.jump_to_slide(Slide::Question(cursor(1, 1, None))));

        assert!(navigator.retreat());
        assert_eq!(navigator.slide(), &Slide::Answer(cursor(1, 0, None)));

        assert!(navigator.retreat());
        assert_eq!(navigator.slide(), &Slide::Question(cursor(1, 0, None)));

        assert!(navigator.retreat());
        assert_eq!(kind(&navigator), SlideKind::Rules);

        assert!(navigator.retreat());
        assert_eq!(kind(&navigator), SlideKind::RoundIntroduction);

        assert!(!navigator.retreat());
        assert_eq!(kind(&navigator), SlideKind::RoundIntroduction);
    }

    #[test]
    fn test_special_round_walkthrough() {
        let mut navigator = create_test_navigator();
        assert!(navigator.select_round(RoundId::new(3)));
        assert!(navigator.advance());
        assert!(navigator.advance());
        assert_eq!(
            navigator.slide(),
            &Slide::SubjectSelection {
                round_id: RoundId::new(3)
            }
        );
        assert!(!navigator.advance());

        assert!(navigator.select_subject(&"history".into()));
        assert_eq!(
            navigator.slide(),
            &Slide::Question(cursor(3, 0, Some("history")))
        );
        assert_eq!(navigator.question().map(|q| q.id.as_str()), Some("h0"));

        assert!(navigator.advance());
        assert_eq!(
            navigator.slide(),
            &Slide::Answer(cursor(3, 0, Some("history")))
        );
        assert!(navigator.advance());
        assert_eq!(
            navigator.slide(),
            &Slide::Question(cursor(3, 1, Some("history")))
        );
        assert!(navigator.advance());
        assert!(navigator.advance());
        assert_eq!(kind(&navigator), SlideKind::SubjectSelection);

        assert!(navigator.retreat());
        assert_eq!(kind(&navigator), SlideKind::Rules);
    }

    #[test]
    fn test_first_subject_question_retreats_to_subject_menu() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(3));
        assert!(navigator.jump_to_slide(Slide::SubjectSelection {
            round_id: RoundId::new(3)
        }));
        assert!(navigator.select_subject(&"sports".into()));

        assert!(navigator.retreat());
        assert_eq!(kind(&navigator), SlideKind::SubjectSelection);
    }

    #[test]
    fn test_subject_media_retreats_within_subject() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(3));
        navigator.advance();
        navigator.advance();

        assert!(navigator.select_subject(&"film".into()));
        assert_eq!(
            navigator.slide(),
            &Slide::QuestionMedia(cursor(3, 0, Some("film")))
        );
        assert!(navigator.retreat());
        assert_eq!(
            navigator.slide(),
            &Slide::SubjectSelection {
                round_id: RoundId::new(3)
            }
        );

        assert!(navigator.select_subject(&"sports".into()));
        assert!(navigator.skip());
        assert_eq!(
            navigator.slide(),
            &Slide::QuestionMedia(cursor(3, 1, Some("sports")))
        );
        assert!(navigator.retreat());
        assert_eq!(
            navigator.slide(),
            &Slide::Answer(cursor(3, 0, Some("sports")))
        );
        assert_eq!(navigator.question().map(|q| q.id.as_str()), Some("s0"));
    }

    #[test]
    fn test_subject_isolation() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(3));
        navigator.advance();
        navigator.advance();

        assert!(navigator.select_subject(&"sports".into()));
        navigator.advance();
        navigator.advance();
        assert_eq!(navigator.position().question_index(), 1);

        assert!(navigator.select_subject(&"history".into()));
        assert_eq!(navigator.position().question_index(), 0);
        assert_eq!(
            navigator.position().subject_id(),
            Some(&SubjectId::from("history"))
        );

        let mut seen = Vec::new();
        loop {
            if let Some(question) = navigator.question() {
                seen.push(question.id.clone());
            }
            if !navigator.advance() || kind(&navigator) == SlideKind::SubjectSelection {
                break;
            }
        }
        assert!(seen.iter().all(|id| id.starts_with('h')));

        assert!(navigator.select_subject(&"history".into()));
        while navigator.retreat() {
            if let Some(question) = navigator.question() {
                assert!(question.id.starts_with('h'));
            }
            if kind(&navigator) == SlideKind::SubjectSelection {
                break;
            }
        }
    }

    #[test]
    fn test_invalid_round_is_a_no_op() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(1));
        navigator.advance();
        let before = navigator.position().clone();

        assert!(!navigator.select_round(RoundId::new(999)));
        assert_eq!(navigator.position(), &before);
    }

    #[test]
    fn test_invalid_subject_is_a_no_op() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(3));
        navigator.advance();
        navigator.advance();
        let before = navigator.position().clone();

        assert!(!navigator.select_subject(&"geography".into()));
        assert!(!navigator.select_subject(&"empty".into()));
        assert_eq!(navigator.position(), &before);

        navigator.select_round(RoundId::new(1));
        let before = navigator.position().clone();
        assert!(!navigator.select_subject(&"sports".into()));
        assert_eq!(navigator.position(), &before);
    }

    #[test]
    fn test_timer_default_by_round_kind() {
        let mut navigator = create_test_navigator();

        assert!(navigator.select_round(RoundId::new(2)));
        assert_eq!(navigator.position().timer().remaining(), 60);

        navigator.toggle_timer();
        navigator.tick();
        navigator.tick();
        assert_eq!(navigator.position().timer().remaining(), 58);

        assert!(navigator.select_round(RoundId::new(1)));
        assert_eq!(navigator.position().timer().remaining(), 15);
        assert!(navigator.position().timer().is_active());

        assert!(navigator.select_round(RoundId::new(2)));
        assert_eq!(navigator.position().timer().remaining(), 60);
    }

    #[test]
    fn test_custom_timer_settings() {
        let timers = TimerSettings {
            standard: 20,
            rapid_fire: 90,
        };
        let mut navigator = Navigator::new(create_test_catalog(), timers);
        assert_eq!(navigator.position().timer().remaining(), 20);
        navigator.admit();
        navigator.select_round(RoundId::new(2));
        assert_eq!(navigator.position().timer().remaining(), 90);
    }

    #[test]
    fn test_skip_bypasses_answer() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(3));
        navigator.advance();
        navigator.advance();
        navigator.select_subject(&"sports".into());
        assert_eq!(
            navigator.slide(),
            &Slide::Question(cursor(3, 0, Some("sports")))
        );

        assert!(navigator.skip());
        assert_eq!(
            navigator.slide(),
            &Slide::QuestionMedia(cursor(3, 1, Some("sports")))
        );

        assert!(navigator.skip());
        assert_eq!(
            navigator.slide(),
            &Slide::Question(cursor(3, 2, Some("sports")))
        );

        assert!(navigator.skip());
        assert_eq!(
            navigator.slide(),
            &Slide::SubjectSelection {
                round_id: RoundId::new(3)
            }
        );
    }

    #[test]
    fn test_skip_in_linear_round_ends_round() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(1));
        assert!(navigator.jump_to_slide(Slide::Question(cursor(1, 1, None))));

        assert!(navigator.skip());
        assert_eq!(kind(&navigator), SlideKind::EndOfRound);
    }

    #[test]
    fn test_skip_elsewhere_behaves_like_advance() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(1));

        assert!(navigator.skip());
        assert_eq!(kind(&navigator), SlideKind::Rules);
        assert!(navigator.skip());
        assert_eq!(kind(&navigator), SlideKind::Question);

        navigator.advance();
        assert_eq!(kind(&navigator), SlideKind::Answer);
        assert!(navigator.skip());
        assert_eq!(navigator.slide(), &Slide::Question(cursor(1, 1, None)));
    }

    #[test]
    fn test_empty_round_goes_straight_to_end() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(4));
        navigator.advance();

        assert!(navigator.advance());
        assert_eq!(kind(&navigator), SlideKind::EndOfRound);
        assert!(navigator.question().is_none());

        assert!(!navigator.retreat());
        assert_eq!(kind(&navigator), SlideKind::EndOfRound);
    }

    #[test]
    fn test_special_end_of_round_retreats_to_subject_menu() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(3));
        assert!(navigator.jump_to_slide(Slide::EndOfRound {
            round_id: RoundId::new(3)
        }));

        assert!(navigator.retreat());
        assert_eq!(kind(&navigator), SlideKind::SubjectSelection);
    }

    #[test]
    fn test_select_round_clears_subject() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(3));
        navigator.advance();
        navigator.advance();
        navigator.select_subject(&"sports".into());
        navigator.advance();
        navigator.advance();

        assert!(navigator.select_round(RoundId::new(3)));
        assert!(navigator.position().subject_id().is_none());
        assert_eq!(navigator.position().question_index(), 0);
        assert!(navigator.question().is_none());
    }

    #[test]
    fn test_return_to_round_menu_from_anywhere() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(2));
        navigator.advance();
        navigator.advance();

        assert!(navigator.return_to_round_menu());
        assert_eq!(navigator.slide(), &Slide::RoundSelection);
        assert_eq!(navigator.position().round_id(), Some(RoundId::new(2)));
        assert!(!navigator.advance());
        assert!(!navigator.retreat());
    }

    #[test]
    fn test_jump_to_slide_validates_references() {
        let mut navigator = create_test_navigator();
        let before = navigator.position().clone();

        assert!(!navigator.jump_to_slide(Slide::Authentication));
        assert!(!navigator.jump_to_slide(Slide::Rules {
            round_id: RoundId::new(999)
        }));
        assert!(!navigator.jump_to_slide(Slide::SubjectSelection {
            round_id: RoundId::new(1)
        }));
        assert!(!navigator.jump_to_slide(Slide::Question(cursor(1, 2, None))));
        assert!(!navigator.jump_to_slide(Slide::Question(cursor(1, 0, Some("sports")))));
        assert!(!navigator.jump_to_slide(Slide::Question(cursor(3, 0, None))));
        assert!(!navigator.jump_to_slide(Slide::Question(cursor(3, 0, Some("movies")))));
        assert!(!navigator.jump_to_slide(Slide::QuestionMedia(cursor(2, 1, None))));
        assert_eq!(navigator.position(), &before);

        assert!(navigator.jump_to_slide(Slide::QuestionMedia(cursor(3, 1, Some("sports")))));
        assert_eq!(navigator.position().round_id(), Some(RoundId::new(3)));
        assert_eq!(navigator.position().question_index(), 1);
        assert_eq!(
            navigator.position().subject_id(),
            Some(&SubjectId::from("sports"))
        );
        assert_eq!(navigator.position().timer().remaining(), 15);

        assert!(navigator.jump_to_slide(Slide::Rules {
            round_id: RoundId::new(1)
        }));
        assert!(navigator.position().subject_id().is_none());
        assert_eq!(navigator.position().question_index(), 0);
    }

    #[test]
    fn test_timer_reset_uses_active_round() {
        let mut navigator = create_test_navigator();
        navigator.reset_timer();
        assert_eq!(navigator.position().timer().remaining(), 15);

        navigator.select_round(RoundId::new(2));
        navigator.toggle_timer();
        for _ in 0..10 {
            navigator.tick();
        }
        assert_eq!(navigator.position().timer().remaining(), 50);

        navigator.reset_timer();
        assert_eq!(navigator.position().timer().remaining(), 60);
        assert!(navigator.position().timer().is_active());
    }

    #[test]
    fn test_timer_never_moves_the_slide() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(1));
        navigator.advance();
        navigator.advance();
        let slide = navigator.slide().clone();

        navigator.toggle_timer();
        for _ in 0..20 {
            navigator.tick();
        }
        assert_eq!(navigator.position().timer().remaining(), 0);
        assert!(!navigator.position().timer().is_active());
        assert_eq!(navigator.slide(), &slide);
    }

    #[test]
    fn test_reset_returns_to_login() {
        let mut navigator = create_test_navigator();
        navigator.select_round(RoundId::new(2));
        navigator.reset();

        assert_eq!(navigator.slide(), &Slide::Authentication);
        assert!(navigator.round().is_none());
        assert_eq!(navigator.position().timer().remaining(), 15);
    }

    #[test]
    fn test_navigator_over_borrowed_catalog() {
        let catalog = Catalog::builtin();
        let mut navigator = Navigator::new(&catalog, TimerSettings::default());
        navigator.admit();
        assert!(navigator.select_round(RoundId::new(3)));
        assert!(navigator.round().is_some_and(Round::is_special));
        assert!(format!("{navigator:?}").contains("Navigator"));
    }
}
