//! Host session
//!
//! A [`Session`] wraps a [`Navigator`] with everything around it that a
//! presenter interacts with: the password gate, keyboard bindings, the
//! on-screen buttons, the fullscreen flag and the once-per-second countdown
//! trigger. After every command that changed something, the current
//! [`Frame`] is pushed to the session's [`Screen`].

use derive_where::derive_where;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    catalog::RoundLookup,
    config::{KeyAction, KeyMap, Settings},
    frame::Frame,
    navigator::Navigator,
    round::config::{Round, RoundId, SubjectId},
    slide::Slide,
    snapshot::{self, Snapshot},
};

/// Trait for presenting frames to the host
///
/// This trait abstracts whatever draws the slides. Implementations might
/// render to a browser, a terminal, or record frames for inspection.
pub trait Screen {
    /// Draws a frame
    ///
    /// # Arguments
    ///
    /// * `frame` - The render model of the current slide
    fn render(&self, frame: &Frame);

    /// Enters or leaves fullscreen presentation
    ///
    /// # Arguments
    ///
    /// * `fullscreen` - Whether the presentation should fill the screen
    fn set_fullscreen(&self, fullscreen: bool);
}

/// Errors that can occur while logging in
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The password does not match the configured one
    #[error("incorrect password")]
    Unauthorized,
}

/// Commands the host can issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Log in with a password
    Authenticate(String),
    /// Move forward one slide
    Next,
    /// Move back one slide
    Previous,
    /// Move to the next question without revealing the answer
    Skip,
    /// The on-screen forward button; see [`Session::forward_command`]
    Forward,
    /// Return to the round menu
    Home,
    /// Select a round
    SelectRound(RoundId),
    /// Select a subject of the active special round
    SelectSubject(SubjectId),
    /// Go directly to a slide
    JumpTo(Slide),
    /// Start or stop the countdown as it is
    ToggleTimer,
    /// The countdown button: a stopped countdown is refilled before it starts
    StartStopTimer,
    /// Refill the countdown without starting or stopping it
    ResetTimer,
    /// Enter or leave fullscreen
    ToggleFullscreen,
    /// Log out and return to the login slide
    Logout,
}

impl From<KeyAction> for Command {
    fn from(action: KeyAction) -> Self {
        match action {
            KeyAction::Next => Self::Next,
            KeyAction::Previous => Self::Previous,
            KeyAction::Home => Self::Home,
            KeyAction::Fullscreen => Self::ToggleFullscreen,
            KeyAction::Timer => Self::ToggleTimer,
        }
    }
}

/// A host session driving one presentation
#[derive_where(Debug; S)]
pub struct Session<C, S> {
    navigator: Navigator<C>,
    #[derive_where(skip)]
    password: String,
    keys: KeyMap,
    fullscreen: bool,
    screen: S,
}

impl<C: RoundLookup, S: Screen> Session<C, S> {
    /// Creates a session on the login slide and draws it
    pub fn new(catalog: C, settings: Settings, screen: S) -> Self {
        let session = Self {
            navigator: Navigator::new(catalog, settings.timer),
            password: settings.password,
            keys: settings.keys,
            fullscreen: false,
            screen,
        };
        session.present();
        session
    }

    /// The navigator behind the session
    pub fn navigator(&self) -> &Navigator<C> {
        &self.navigator
    }

    /// The screen frames are pushed to
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Whether the host is logged in
    pub fn is_authenticated(&self) -> bool {
        self.navigator.slide() != &Slide::Authentication
    }

    /// Whether the presentation is fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Logs the host in
    ///
    /// The correct password while already logged in succeeds without
    /// moving.
    ///
    /// # Errors
    ///
    /// * `Error::Unauthorized` - The password does not match; the session
    ///   stays where it is
    pub fn authenticate(&mut self, password: &str) -> Result<(), Error> {
        if password != self.password {
            tracing::warn!("rejected login attempt");
            return Err(Error::Unauthorized);
        }
        if self.is_authenticated() {
            return Ok(());
        }

        tracing::info!("host logged in");
        self.navigator.admit();
        self.present();
        Ok(())
    }

    /// Logs the host out and returns to the login slide
    pub fn logout(&mut self) {
        tracing::info!("host logged out");
        self.navigator.reset();
        self.present();
    }

    /// The command the on-screen forward button issues on the current slide
    ///
    /// On a question slide of a special round the button skips the answer
    /// reveal; everywhere else it moves forward one slide. Keyboard
    /// navigation always moves forward one slide.
    pub fn forward_command(&self) -> Command {
        match self.navigator.slide() {
            Slide::Question(_) if self.navigator.round().is_some_and(Round::is_special) => {
                Command::Skip
            }
            _ => Command::Next,
        }
    }

    /// Executes a host command
    ///
    /// Before login only [`Command::Authenticate`] is accepted.
    ///
    /// # Returns
    ///
    /// `true` if the command changed anything
    pub fn execute(&mut self, command: Command) -> bool {
        if !self.is_authenticated() {
            return match command {
                Command::Authenticate(password) => self.authenticate(&password).is_ok(),
                command => {
                    tracing::trace!(?command, "ignored before login");
                    false
                }
            };
        }

        let applied = match command {
            Command::Authenticate(_) => false,
            Command::Next => self.navigator.advance(),
            Command::Previous => self.navigator.retreat(),
            Command::Skip => self.navigator.skip(),
            Command::Forward => match self.forward_command() {
                Command::Skip => self.navigator.skip(),
                _ => self.navigator.advance(),
            },
            Command::Home => self.navigator.return_to_round_menu(),
            Command::SelectRound(id) => self.navigator.select_round(id),
            Command::SelectSubject(id) => self.navigator.select_subject(&id),
            Command::JumpTo(slide) => self.navigator.jump_to_slide(slide),
            Command::ToggleTimer => {
                self.navigator.toggle_timer();
                true
            }
            Command::StartStopTimer => {
                if !self.navigator.position().timer().is_active() {
                    self.navigator.reset_timer();
                }
                self.navigator.toggle_timer();
                true
            }
            Command::ResetTimer => {
                self.navigator.reset_timer();
                true
            }
            Command::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                self.screen.set_fullscreen(self.fullscreen);
                true
            }
            Command::Logout => {
                self.logout();
                return true;
            }
        };

        if applied {
            self.present();
        }
        applied
    }

    /// Executes the command bound to a pressed key
    ///
    /// # Arguments
    ///
    /// * `key` - The DOM `KeyboardEvent.key` name of the pressed key
    ///
    /// # Returns
    ///
    /// `true` if the key is bound and its command changed anything
    pub fn key(&mut self, key: &str) -> bool {
        match self.keys.action(key) {
            Some(action) => self.execute(action.into()),
            None => false,
        }
    }

    /// The once-per-second countdown trigger
    pub fn tick(&mut self) -> bool {
        let changed = self.navigator.tick();
        if changed {
            self.present();
        }
        changed
    }

    /// The render model of the current slide
    pub fn frame(&self) -> Frame {
        self.navigator.frame(self.fullscreen)
    }

    /// Captures the navigation state
    pub fn snapshot(&self) -> Snapshot {
        self.navigator.to_snapshot()
    }

    /// Moves to the navigation state a snapshot describes
    ///
    /// # Errors
    ///
    /// * `snapshot::Error::InvalidSnapshot` - The snapshot does not resolve
    ///   against this session's catalog
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), snapshot::Error> {
        self.navigator.restore(snapshot)?;
        self.present();
        Ok(())
    }

    fn present(&self) {
        self.screen.render(&self.frame());
    }
}
