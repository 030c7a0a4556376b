//! Authored round content
//!
//! This module contains the immutable content model the navigator walks
//! through: rounds, the subjects of special rounds, questions and their
//! media attachments. Everything here is created once when the catalog is
//! loaded and never mutated afterwards.

pub mod config;
pub mod media;
pub mod question;
