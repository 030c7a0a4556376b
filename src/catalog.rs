//! The round catalog
//!
//! The catalog is the read-only content provider of a session: an in-memory
//! map from round id to round. Navigation only needs [`RoundLookup`]; the
//! [`Catalog`] type adds construction from validated rounds, from round
//! documents, and from a content source with a built-in fallback.

use std::{collections::BTreeMap, fmt::Display, rc::Rc, sync::Arc};

use garde::Validate;
use itertools::Itertools;
use thiserror::Error;

use crate::round::config::{Round, RoundId};

mod builtin;

/// Read access to rounds by id
pub trait RoundLookup {
    /// Looks up a round by id
    fn round(&self, id: RoundId) -> Option<&Round>;

    /// All round ids, in menu order
    fn round_ids(&self) -> Vec<RoundId>;
}

impl<T: RoundLookup + ?Sized> RoundLookup for &T {
    fn round(&self, id: RoundId) -> Option<&Round> {
        (**self).round(id)
    }

    fn round_ids(&self) -> Vec<RoundId> {
        (**self).round_ids()
    }
}

impl<T: RoundLookup + ?Sized> RoundLookup for Rc<T> {
    fn round(&self, id: RoundId) -> Option<&Round> {
        (**self).round(id)
    }

    fn round_ids(&self) -> Vec<RoundId> {
        (**self).round_ids()
    }
}

impl<T: RoundLookup + ?Sized> RoundLookup for Arc<T> {
    fn round(&self, id: RoundId) -> Option<&Round> {
        (**self).round(id)
    }

    fn round_ids(&self) -> Vec<RoundId> {
        (**self).round_ids()
    }
}

/// Errors that can occur while building a catalog
#[derive(Error, Debug)]
pub enum Error {
    /// A round breaks a content limit
    #[error("round {id} is invalid: {report}")]
    Invalid {
        /// The offending round
        id: RoundId,
        /// What is wrong with it
        report: garde::Report,
    },
    /// Two rounds share an id
    #[error("round {0} is defined more than once")]
    Duplicate(RoundId),
    /// A round document could not be parsed
    #[error("malformed round document: {0}")]
    Document(#[from] serde_json::Error),
}

/// An immutable set of rounds keyed by id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rounds: BTreeMap<RoundId, Round>,
}

impl Catalog {
    /// Builds a catalog from rounds, validating each one
    ///
    /// # Errors
    ///
    /// * `Error::Invalid` - A round breaks a content limit
    /// * `Error::Duplicate` - Two rounds share an id
    pub fn new<I: IntoIterator<Item = Round>>(rounds: I) -> Result<Self, Error> {
        let mut map = BTreeMap::new();
        for round in rounds {
            round.validate().map_err(|report| Error::Invalid {
                id: round.id,
                report,
            })?;
            if map.contains_key(&round.id) {
                return Err(Error::Duplicate(round.id));
            }
            map.insert(round.id, round);
        }
        Ok(Self { rounds: map })
    }

    /// Builds a catalog from round documents (JSON)
    ///
    /// # Errors
    ///
    /// * `Error::Document` - A document is not a valid round
    /// * `Error::Invalid` - A round breaks a content limit
    /// * `Error::Duplicate` - Two documents share a round id
    pub fn from_documents<I, S>(documents: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rounds: Vec<Round> = documents
            .into_iter()
            .map(|document| serde_json::from_str(document.as_ref()))
            .collect::<Result<_, _>>()?;
        Self::new(rounds)
    }

    /// Loads rounds `1..=MAX_ROUNDS` from a content source
    ///
    /// `fetch` returns the round document for an id, `Ok(None)` when the
    /// source has no such round, or an error when the source failed. Failed
    /// fetches, malformed documents, invalid rounds and repeated ids are
    /// logged and skipped. When no round could be loaded at all, the
    /// built-in catalog is used instead.
    pub fn load<F, E>(mut fetch: F) -> Self
    where
        F: FnMut(RoundId) -> Result<Option<String>, E>,
        E: Display,
    {
        let mut rounds = BTreeMap::new();

        for id in (1..=crate::constants::round::MAX_ROUNDS).map(RoundId::new) {
            let document = match fetch(id) {
                Ok(Some(document)) => document,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(round = %id, "failed to fetch round: {e}");
                    continue;
                }
            };
            let round = match serde_json::from_str::<Round>(&document) {
                Ok(round) => round,
                Err(e) => {
                    tracing::warn!(round = %id, "failed to parse round: {e}");
                    continue;
                }
            };
            if let Err(report) = round.validate() {
                tracing::warn!(round = %id, "skipping invalid round: {report}");
                continue;
            }
            if rounds.contains_key(&round.id) {
                tracing::warn!(round = %round.id, "skipping repeated round id");
                continue;
            }
            rounds.insert(round.id, round);
        }

        if rounds.is_empty() {
            tracing::info!("no rounds loaded, using the built-in catalog");
            Self::builtin()
        } else {
            tracing::info!(count = rounds.len(), "loaded rounds");
            Self { rounds }
        }
    }

    /// The built-in catalog used when no round content is available
    pub fn builtin() -> Self {
        Self {
            rounds: builtin::rounds()
                .into_iter()
                .map(|round| (round.id, round))
                .collect(),
        }
    }

    /// Iterates over the rounds in ascending id order
    pub fn rounds(&self) -> impl Iterator<Item = &Round> {
        self.rounds.values()
    }

    /// Returns the number of rounds
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Checks if the catalog has no rounds
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

impl RoundLookup for Catalog {
    fn round(&self, id: RoundId) -> Option<&Round> {
        self.rounds.get(&id)
    }

    fn round_ids(&self) -> Vec<RoundId> {
        self.rounds.keys().copied().collect_vec()
    }
}
