//! Persisted navigation state
//!
//! A [`Snapshot`] is the serializable form of a navigator's position, used to
//! carry a session across a reload. Restoring checks every reference against
//! the catalog, so a snapshot taken against different round content is
//! rejected instead of producing a position that points nowhere.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

use crate::{
    catalog::RoundLookup,
    config::TimerSettings,
    navigator::{Navigator, Position},
    round::config::{RoundId, SubjectId},
    slide::Slide,
    timer::Countdown,
};

/// Errors that can occur while restoring a snapshot
#[derive(Error, Debug)]
pub enum Error {
    /// The snapshot document could not be parsed
    #[error("malformed snapshot: {0}")]
    Document(#[from] serde_json::Error),
    /// The snapshot refers to content the catalog does not have, or its
    /// fields disagree with each other
    #[error("snapshot does not resolve: {0}")]
    InvalidSnapshot(&'static str),
}

/// Serializable navigation state
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Whether the host was logged in
    pub is_authenticated: bool,
    /// The active round
    pub current_round: Option<RoundId>,
    /// The slide being shown
    pub current_slide: Slide,
    /// Id of the question at the current index, if it resolves
    pub current_question: Option<String>,
    /// Index within the active question sequence
    #[serde(default)]
    pub question_index: usize,
    /// The active subject
    pub current_subject_id: Option<SubjectId>,
}

impl Snapshot {
    /// Parses a snapshot document
    ///
    /// # Errors
    ///
    /// * `Error::Document` - The document is not a valid snapshot
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the snapshot to JSON
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

impl<C: RoundLookup> Navigator<C> {
    /// Captures the current position
    pub fn to_snapshot(&self) -> Snapshot {
        let position = self.position();
        Snapshot {
            is_authenticated: position.slide() != &Slide::Authentication,
            current_round: position.round_id(),
            current_slide: position.slide().clone(),
            current_question: self.question().map(|question| question.id.clone()),
            question_index: position.question_index(),
            current_subject_id: position.subject_id().cloned(),
        }
    }

    /// Rebuilds a navigator from a snapshot
    ///
    /// # Errors
    ///
    /// * `Error::InvalidSnapshot` - See [`Self::restore`]
    pub fn from_snapshot(
        catalog: C,
        snapshot: Snapshot,
        timers: TimerSettings,
    ) -> Result<Self, Error> {
        let mut navigator = Self::new(catalog, timers);
        navigator.restore(snapshot)?;
        Ok(navigator)
    }

    /// Moves to the position a snapshot describes
    ///
    /// The countdown is not part of a snapshot; it restarts stopped at the
    /// restored round's default length. A rejected snapshot leaves the
    /// position as it was.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidSnapshot` - A reference does not resolve against
    ///   the catalog, or the fields contradict each other
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), Error> {
        if let Err(reason) = self.check_snapshot(&snapshot) {
            tracing::warn!(reason, "rejected snapshot");
            return Err(Error::InvalidSnapshot(reason));
        }

        let seconds = self.timers.duration_for(
            snapshot
                .current_round
                .and_then(|id| self.catalog.round(id)),
        );
        self.position = Position {
            slide: snapshot.current_slide,
            round_id: snapshot.current_round,
            question_index: snapshot.question_index,
            subject_id: snapshot.current_subject_id,
            timer: Countdown::new(seconds),
        };
        tracing::debug!(slide = ?self.position.slide.kind(), "restored snapshot");
        Ok(())
    }

    fn check_snapshot(&self, snapshot: &Snapshot) -> Result<(), &'static str> {
        let slide = &snapshot.current_slide;
        let on_login = slide == &Slide::Authentication;

        if !snapshot.is_authenticated {
            return if on_login {
                Ok(())
            } else {
                Err("slide requires a logged in host")
            };
        }
        if on_login {
            return Err("logged in host on the login slide");
        }
        if !self.resolves(slide) {
            return Err("slide does not resolve");
        }

        let round = match snapshot.current_round {
            Some(id) => Some(self.catalog().round(id).ok_or("unknown round")?),
            None => None,
        };
        if slide.round_id().is_some() && slide.round_id() != snapshot.current_round {
            return Err("slide belongs to another round");
        }

        if let Some(subject) = &snapshot.current_subject_id {
            if round.and_then(|round| round.subject(subject)).is_none() {
                return Err("unknown subject");
            }
        }
        if let Some(cursor) = slide.cursor() {
            if cursor.question_index != snapshot.question_index
                || cursor.subject_id != snapshot.current_subject_id
            {
                return Err("slide disagrees with question index or subject");
            }
        }

        let question = round
            .and_then(|round| round.sequence(snapshot.current_subject_id.as_ref()))
            .and_then(|questions| questions.get(snapshot.question_index));
        match (&snapshot.current_question, question) {
            (Some(expected), Some(question)) if *expected == question.id => Ok(()),
            (Some(_), _) => Err("question does not match"),
            (None, None) => Ok(()),
            (None, Some(_)) if slide.cursor().is_none() => Ok(()),
            (None, Some(_)) => Err("question slide without a question"),
        }
    }
}
