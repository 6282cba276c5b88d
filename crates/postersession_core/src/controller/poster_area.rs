//! Observable controller for one poster session area.
//!
//! # Responsibility
//! - Hold the local copy of one area and gate every write on value equality.
//! - Notify listeners of each field that actually changed.
//! - Merge whole-record snapshots from the server without touching identity.
//!
//! # Invariants
//! - `id` is fixed at construction; no operation rewrites it.
//! - Writing a field's current value emits nothing.
//! - `update_from` applies title, image contents, stars in that order, so a
//!   listener sees earlier fields already applied and later ones not yet.
//!
//! # Re-entrancy
//! Handlers are owned by the controller and run while it is mutably borrowed,
//! so they cannot write back through that borrow. Callers sharing a controller
//! behind `Rc<RefCell<_>>` must not mutate it from inside a handler.

use crate::controller::events::{
    EventEmitter, ListenerId, PosterAreaChange, PosterAreaEvent, UnknownEventName,
};
use crate::model::poster_area::{PlayerId, PosterAreaId, PosterSessionArea};
use log::{debug, warn};
use std::collections::BTreeSet;

/// Locally mutable, observable mirror of a server-side poster area.
#[derive(Debug)]
pub struct PosterSessionAreaController {
    id: PosterAreaId,
    title: String,
    image_contents: String,
    stars: u32,
    players_who_starred: BTreeSet<PlayerId>,
    emitter: EventEmitter,
}

impl PosterSessionAreaController {
    /// Builds a controller from an initial snapshot. Emits nothing.
    pub fn new(area: PosterSessionArea) -> Self {
        Self {
            id: area.id,
            title: area.title,
            image_contents: area.image_contents,
            stars: area.stars,
            players_who_starred: BTreeSet::new(),
            emitter: EventEmitter::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image_contents(&self) -> &str {
        &self.image_contents
    }

    pub fn stars(&self) -> u32 {
        self.stars
    }

    /// Returns whether the title changed (and `posterTitleChange` fired).
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if self.title == title {
            return false;
        }
        self.title = title;
        self.emitter.emit(&PosterAreaChange::Title(&self.title));
        true
    }

    /// Returns whether the payload changed (and `posterImageContentsChange` fired).
    pub fn set_image_contents(&mut self, image_contents: impl Into<String>) -> bool {
        let image_contents = image_contents.into();
        if self.image_contents == image_contents {
            return false;
        }
        self.image_contents = image_contents;
        self.emitter
            .emit(&PosterAreaChange::ImageContents(&self.image_contents));
        true
    }

    /// Returns whether the count changed (and `posterStarChange` fired).
    pub fn set_stars(&mut self, stars: u32) -> bool {
        if self.stars == stars {
            return false;
        }
        self.stars = stars;
        self.emitter.emit(&PosterAreaChange::Stars(stars));
        true
    }

    /// Merges an authoritative snapshot through the setters.
    ///
    /// `area.id` is read only to flag a mismatch in the log; the controller keeps
    /// its own identity either way. Returns the events that fired.
    pub fn update_from(&mut self, area: &PosterSessionArea) -> Vec<PosterAreaEvent> {
        if area.id != self.id {
            warn!(
                "event=poster_update_from module=controller status=id_mismatch area_id={}",
                self.id
            );
        }

        let mut fired = Vec::new();
        if self.set_title(area.title.as_str()) {
            fired.push(PosterAreaEvent::TitleChange);
        }
        if self.set_image_contents(area.image_contents.as_str()) {
            fired.push(PosterAreaEvent::ImageContentsChange);
        }
        if self.set_stars(area.stars) {
            fired.push(PosterAreaEvent::StarChange);
        }

        debug!(
            "event=poster_update_from module=controller status=ok area_id={} changed={}",
            self.id,
            fired.len()
        );
        fired
    }

    /// Exports current state as a detached record.
    pub fn to_snapshot(&self) -> PosterSessionArea {
        PosterSessionArea {
            id: self.id.clone(),
            title: self.title.clone(),
            image_contents: self.image_contents.clone(),
            stars: self.stars,
        }
    }

    /// Participants who starred this poster, sorted, as an owned copy.
    pub fn players_who_starred(&self) -> Vec<PlayerId> {
        self.players_who_starred.iter().cloned().collect()
    }

    /// Records a local star interaction. Returns `false` if already recorded.
    ///
    /// The star count itself stays server-owned and arrives via `update_from`.
    pub fn record_star_from(&mut self, player: impl Into<PlayerId>) -> bool {
        self.players_who_starred.insert(player.into())
    }

    pub fn add_listener<F>(&mut self, event: PosterAreaEvent, handler: F) -> ListenerId
    where
        F: FnMut(&PosterAreaChange<'_>) + 'static,
    {
        self.emitter.add_listener(event, handler)
    }

    /// Subscribes by external event name, e.g. `"posterStarChange"`.
    pub fn add_listener_by_name<F>(
        &mut self,
        event_name: &str,
        handler: F,
    ) -> Result<ListenerId, UnknownEventName>
    where
        F: FnMut(&PosterAreaChange<'_>) + 'static,
    {
        let event = event_name.parse::<PosterAreaEvent>()?;
        Ok(self.emitter.add_listener(event, handler))
    }

    /// Unsubscribes one handler; unknown handles are ignored.
    pub fn remove_listener(&mut self, event: PosterAreaEvent, id: ListenerId) -> bool {
        self.emitter.remove_listener(event, id)
    }

    pub fn listener_count(&self, event: PosterAreaEvent) -> usize {
        self.emitter.listener_count(event)
    }
}

impl From<PosterSessionArea> for PosterSessionAreaController {
    fn from(area: PosterSessionArea) -> Self {
        Self::new(area)
    }
}
