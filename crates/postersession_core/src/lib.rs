//! Core state for poster session areas.
//! Mirrors server-owned area records into observable local controllers.

pub mod controller;
pub mod logging;
pub mod model;

pub use controller::events::{
    EventEmitter, ListenerId, PosterAreaChange, PosterAreaEvent, UnknownEventName,
};
pub use controller::poster_area::PosterSessionAreaController;
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::poster_area::{PlayerId, PosterAreaId, PosterSessionArea};
pub use model::wire::{decode_area, encode_area, WireError, WireResult};

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
