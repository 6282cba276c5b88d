//! Observable per-area state consumed by the UI layer.

pub mod events;
pub mod poster_area;
