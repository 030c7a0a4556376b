//! Configuration constants for the quiz show driver
//!
//! This module contains the limits used to validate authored round content
//! and the defaults used when no runtime settings override them.

/// Application-wide constants
pub mod app {
    /// Name shown on the login and welcome slides
    pub const NAME: &str = "Quiz Arena";
    /// Line shown under the name on the welcome slide
    pub const TAGLINE: &str = "The ultimate quiz experience for large audiences";
    /// Host password used when the settings do not provide one
    pub const DEFAULT_PASSWORD: &str = "quiz123";
}

/// Round content limits
pub mod round {
    /// Highest round id the loader asks the content source for
    pub const MAX_ROUNDS: u32 = 10;
    /// Maximum length of a round title
    pub const MAX_TITLE_LENGTH: usize = 200;
    /// Maximum length of a round description
    pub const MAX_DESCRIPTION_LENGTH: usize = 500;
    /// Maximum length of a subject display name
    pub const MAX_SUBJECT_NAME_LENGTH: usize = 100;
    /// Maximum length of question and subject identifiers
    pub const MAX_ID_LENGTH: usize = 64;
}

/// Question content limits
pub mod question {
    /// Maximum length of the question text
    pub const MAX_TEXT_LENGTH: usize = 500;
    /// Maximum number of answer options on a single question
    pub const MAX_ANSWER_COUNT: usize = 8;
    /// Maximum length of an answer option or free-text answer
    pub const MAX_ANSWER_LENGTH: usize = 200;
    /// Maximum length of an answer explanation
    pub const MAX_EXPLANATION_LENGTH: usize = 500;
}

/// Media attachment limits
pub mod media {
    /// Maximum length of a media url
    pub const MAX_URL_LENGTH: usize = 2048;
    /// Maximum length of a media caption
    pub const MAX_CAPTION_LENGTH: usize = 200;
}

/// Countdown timer defaults
pub mod timer {
    /// Default countdown for ordinary rounds, in seconds
    pub const STANDARD_SECONDS: u32 = 15;
    /// Default countdown for rapid-fire rounds, in seconds
    pub const RAPID_FIRE_SECONDS: u32 = 60;
    /// Smallest countdown the settings accept
    pub const MIN_SECONDS: u32 = 1;
    /// Largest countdown the settings accept
    pub const MAX_SECONDS: u32 = 600;
}

/// Default keyboard bindings, using DOM `KeyboardEvent.key` names
pub mod keys {
    /// Keys that move forward
    pub const NEXT: &[&str] = &["ArrowRight", " ", "PageDown"];
    /// Keys that move backward
    pub const PREVIOUS: &[&str] = &["ArrowLeft", "PageUp"];
    /// Keys that return to the round menu
    pub const HOME: &[&str] = &["Home"];
    /// Keys that toggle fullscreen
    pub const FULLSCREEN: &[&str] = &["f"];
    /// Keys that toggle the countdown
    pub const TIMER: &[&str] = &["t"];
}
