//! Record shapes exchanged with the town server.
//!
//! # Responsibility
//! - Define the canonical poster session area record.
//! - Own the JSON boundary used to ship records over the wire.
//!
//! # Invariants
//! - Every area is identified by an opaque, stable `PosterAreaId`.
//! - Records are plain values; observable state lives in `controller`.

pub mod poster_area;
pub mod wire;
