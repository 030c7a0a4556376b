//! Media attachments for questions and answers
//!
//! Questions may carry an image, audio clip or video, either alongside the
//! question text or on a slide of its own before it (media-first questions).
//! Answers may carry their own media for the reveal slide.

use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// The kind of content a media attachment points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A still image
    Image,
    /// An audio clip
    Audio,
    /// A video clip
    Video,
}

/// A media attachment referenced by url
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Media {
    /// What the url points at
    #[serde(rename = "type")]
    #[garde(skip)]
    pub kind: MediaKind,
    /// Location of the media, resolved by the presentation layer
    #[garde(length(min = 1, max = crate::constants::media::MAX_URL_LENGTH))]
    pub url: String,
    /// Optional caption shown under the media
    #[garde(length(max = crate::constants::media::MAX_CAPTION_LENGTH))]
    pub caption: Option<String>,
}

impl Media {
    /// Creates a media attachment without a caption
    pub fn new(kind: MediaKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            caption: None,
        }
    }

    /// Attaches a caption to this media
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}
