//! # Quizdeck
//!
//! This library drives a host-operated quiz show presentation. It holds the
//! authored rounds, decides which slide the host is on and where each
//! navigation event leads, runs the host-controlled countdown, and turns the
//! current slide into a render model for whatever draws it.
//!
//! The [`navigator::Navigator`] is the slide state machine. A
//! [`session::Session`] wraps it with login, key bindings, the on-screen
//! buttons and a [`session::Screen`] that receives every updated
//! [`frame::Frame`].

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::wildcard_imports)]

pub mod catalog;
pub mod config;
pub mod constants;
pub mod frame;
pub mod navigator;
pub mod round;
pub mod session;
pub mod slide;
pub mod snapshot;
pub mod timer;
