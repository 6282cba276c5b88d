//! JSON encoding for poster area records.

use crate::model::poster_area::PosterSessionArea;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type WireResult<T> = Result<T, WireError>;

/// Errors raised while moving records across the JSON boundary.
#[derive(Debug)]
pub enum WireError {
    /// Input was not valid JSON or did not match the record shape.
    Malformed(serde_json::Error),
    Encode(serde_json::Error),
}

impl Display for WireError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed poster area payload: {err}"),
            Self::Encode(err) => write!(f, "failed to encode poster area: {err}"),
        }
    }
}

impl Error for WireError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

/// Encodes one record using the external field names.
pub fn encode_area(area: &PosterSessionArea) -> WireResult<String> {
    serde_json::to_string(area).map_err(WireError::Encode)
}

/// Decodes one record, rejecting unknown or missing fields.
pub fn decode_area(payload: &str) -> WireResult<PosterSessionArea> {
    serde_json::from_str(payload).map_err(WireError::Malformed)
}
