//! Runtime settings for a quiz session
//!
//! Settings cover what an operator may want to change without touching the
//! authored rounds: the host password, the countdown defaults for ordinary
//! and rapid-fire rounds, and the keyboard bindings. Every field has a
//! default taken from [`crate::constants`].

use enum_map::{Enum, EnumMap, enum_map};
use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::round::config::Round;

/// Host actions that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyAction {
    /// Move forward
    Next,
    /// Move backward
    Previous,
    /// Return to the round menu
    Home,
    /// Toggle fullscreen
    Fullscreen,
    /// Start or stop the countdown
    Timer,
}

/// Keyboard bindings, keyed by action
///
/// Keys use DOM `KeyboardEvent.key` names. Single-character keys match
/// case-insensitively, so `f` and `F` both toggle fullscreen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyMap(EnumMap<KeyAction, Vec<String>>);

impl Default for KeyMap {
    fn default() -> Self {
        use crate::constants::keys;

        let owned = |keys: &[&str]| keys.iter().map(|&k| k.to_owned()).collect::<Vec<_>>();
        Self(enum_map! {
            KeyAction::Next => owned(keys::NEXT),
            KeyAction::Previous => owned(keys::PREVIOUS),
            KeyAction::Home => owned(keys::HOME),
            KeyAction::Fullscreen => owned(keys::FULLSCREEN),
            KeyAction::Timer => owned(keys::TIMER),
        })
    }
}

impl KeyMap {
    /// Finds the action bound to a pressed key
    pub fn action(&self, key: &str) -> Option<KeyAction> {
        let single_char = key.chars().count() == 1;
        self.0.iter().find_map(|(action, bindings)| {
            bindings
                .iter()
                .any(|binding| binding == key || (single_char && binding.eq_ignore_ascii_case(key)))
                .then_some(action)
        })
    }

    /// The keys bound to an action
    pub fn keys(&self, action: KeyAction) -> &[String] {
        &self.0[action]
    }
}

/// Default countdown lengths, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TimerSettings {
    /// Countdown for ordinary rounds
    #[garde(range(min = crate::constants::timer::MIN_SECONDS, max = crate::constants::timer::MAX_SECONDS))]
    pub standard: u32,
    /// Countdown for rapid-fire rounds
    #[garde(range(min = crate::constants::timer::MIN_SECONDS, max = crate::constants::timer::MAX_SECONDS))]
    pub rapid_fire: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            standard: crate::constants::timer::STANDARD_SECONDS,
            rapid_fire: crate::constants::timer::RAPID_FIRE_SECONDS,
        }
    }
}

impl TimerSettings {
    /// The countdown a round starts with; the standard one when no round
    /// is active
    pub fn duration_for(&self, round: Option<&Round>) -> u32 {
        match round {
            Some(round) if round.rapid_fire => self.rapid_fire,
            _ => self.standard,
        }
    }
}

/// Settings of a quiz session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Password the host logs in with
    #[garde(length(min = 1))]
    pub password: String,
    /// Countdown defaults
    #[garde(dive)]
    pub timer: TimerSettings,
    /// Keyboard bindings
    #[garde(skip)]
    pub keys: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            password: crate::constants::app::DEFAULT_PASSWORD.to_owned(),
            timer: TimerSettings::default(),
            keys: KeyMap::default(),
        }
    }
}

/// Errors that can occur while reading settings
#[derive(Error, Debug)]
pub enum Error {
    /// The settings document is not valid JSON for [`Settings`]
    #[error("malformed settings: {0}")]
    Document(#[from] serde_json::Error),
    /// The settings parsed but break a limit
    #[error("invalid settings: {0}")]
    Invalid(garde::Report),
}

impl From<garde::Report> for Error {
    fn from(report: garde::Report) -> Self {
        Self::Invalid(report)
    }
}

impl Settings {
    /// Reads settings from a JSON document; missing fields keep their
    /// defaults
    ///
    /// # Errors
    ///
    /// * `Error::Document` - The document is not valid settings JSON
    /// * `Error::Invalid` - A value is outside its allowed range
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}
