//! Poster session area record.
//!
//! # Responsibility
//! - Define the whole-record snapshot the server sends and accepts.
//! - Keep field naming aligned with the generated client schema.
//!
//! # Invariants
//! - `id` is never rewritten once an area exists.
//! - `stars` cannot go negative (`u32`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of one poster session area.
///
/// Kept as a type alias: the server owns the format, core never parses it.
pub type PosterAreaId = String;

/// Opaque reference to a town participant.
pub type PlayerId = String;

/// Whole-record snapshot of a poster session area.
///
/// Interacted participants are local derived state and are deliberately absent
/// from this shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PosterSessionArea {
    pub id: PosterAreaId,
    pub title: String,
    /// Opaque payload: base64 image data or a URL.
    pub image_contents: String,
    pub stars: u32,
}

impl PosterSessionArea {
    /// Creates an area with a generated identity and no stars.
    pub fn new(title: impl Into<String>, image_contents: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, image_contents)
    }

    /// Creates an area with a caller-provided identity and no stars.
    ///
    /// Used when the identity was already assigned by the server.
    pub fn with_id(
        id: impl Into<PosterAreaId>,
        title: impl Into<String>,
        image_contents: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_contents: image_contents.into(),
            stars: 0,
        }
    }

    /// Returns a copy with `stars` replaced.
    pub fn with_stars(mut self, stars: u32) -> Self {
        self.stars = stars;
        self
    }
}
