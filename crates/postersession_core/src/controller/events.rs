//! Change events and the synchronous listener registry behind them.
//!
//! # Invariants
//! - Handlers for one event run in registration order.
//! - Delivery is synchronous; `emit` returns after the last handler returns.
//! - Removing an unknown listener is a no-op.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Change event kinds exposed by a poster area controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PosterAreaEvent {
    TitleChange,
    ImageContentsChange,
    StarChange,
}

impl PosterAreaEvent {
    pub const ALL: [PosterAreaEvent; 3] = [
        PosterAreaEvent::TitleChange,
        PosterAreaEvent::ImageContentsChange,
        PosterAreaEvent::StarChange,
    ];

    /// Stable external event name used by UI bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TitleChange => "posterTitleChange",
            Self::ImageContentsChange => "posterImageContentsChange",
            Self::StarChange => "posterStarChange",
        }
    }
}

impl Display for PosterAreaEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a listener is keyed by a name no event carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventName(pub String);

impl Display for UnknownEventName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown poster area event: {}", self.0)
    }
}

impl Error for UnknownEventName {}

impl FromStr for PosterAreaEvent {
    type Err = UnknownEventName;

    /// Accepts the external names plus the short `titleChange`,
    /// `imageContentsChange` and `starCountChange` forms.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let name = value.trim();
        match name {
            "posterTitleChange" | "titleChange" => Ok(Self::TitleChange),
            "posterImageContentsChange" | "imageContentsChange" => {
                Ok(Self::ImageContentsChange)
            }
            "posterStarChange" | "starCountChange" => Ok(Self::StarChange),
            _ => Err(UnknownEventName(name.to_string())),
        }
    }
}

/// Payload delivered to listeners: the new value only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterAreaChange<'a> {
    Title(&'a str),
    ImageContents(&'a str),
    Stars(u32),
}

impl PosterAreaChange<'_> {
    pub fn kind(&self) -> PosterAreaEvent {
        match self {
            Self::Title(_) => PosterAreaEvent::TitleChange,
            Self::ImageContents(_) => PosterAreaEvent::ImageContentsChange,
            Self::Stars(_) => PosterAreaEvent::StarChange,
        }
    }
}

/// Handle returned on subscription; the only way to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

type Handler = Box<dyn FnMut(&PosterAreaChange<'_>)>;

/// Ordered per-event handler lists.
#[derive(Default)]
pub struct EventEmitter {
    next_id: u64,
    listeners: BTreeMap<PosterAreaEvent, Vec<(ListenerId, Handler)>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener<F>(&mut self, event: PosterAreaEvent, handler: F) -> ListenerId
    where
        F: FnMut(&PosterAreaChange<'_>) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(event)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Unsubscribes one handler. Returns `false` when it was not registered.
    pub fn remove_listener(&mut self, event: PosterAreaEvent, id: ListenerId) -> bool {
        let Some(handlers) = self.listeners.get_mut(&event) else {
            return false;
        };
        let before = handlers.len();
        handlers.retain(|(registered, _)| *registered != id);
        handlers.len() != before
    }

    pub fn listener_count(&self, event: PosterAreaEvent) -> usize {
        self.listeners.get(&event).map_or(0, Vec::len)
    }

    /// Calls every handler registered for `change.kind()`.
    pub fn emit(&mut self, change: &PosterAreaChange<'_>) {
        if let Some(handlers) = self.listeners.get_mut(&change.kind()) {
            for (_, handler) in handlers.iter_mut() {
                handler(change);
            }
        }
    }
}

impl Debug for EventEmitter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let counts = self
            .listeners
            .iter()
            .map(|(event, handlers)| (event.as_str(), handlers.len()))
            .collect::<BTreeMap<_, _>>();
        f.debug_struct("EventEmitter")
            .field("listeners", &counts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{EventEmitter, PosterAreaChange, PosterAreaEvent};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emits_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = EventEmitter::new();
        for tag in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            emitter.add_listener(PosterAreaEvent::TitleChange, move |_| {
                calls.borrow_mut().push(tag);
            });
        }

        emitter.emit(&PosterAreaChange::Title("t"));
        assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn emit_only_reaches_matching_event() {
        let hits = Rc::new(RefCell::new(0));
        let mut emitter = EventEmitter::new();
        let counter = Rc::clone(&hits);
        emitter.add_listener(PosterAreaEvent::StarChange, move |_| {
            *counter.borrow_mut() += 1;
        });

        emitter.emit(&PosterAreaChange::Title("t"));
        emitter.emit(&PosterAreaChange::ImageContents("i"));
        assert_eq!(*hits.borrow(), 0);

        emitter.emit(&PosterAreaChange::Stars(2));
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn remove_listener_is_noop_for_unknown_handle() {
        let mut emitter = EventEmitter::new();
        let id = emitter.add_listener(PosterAreaEvent::TitleChange, |_| {});

        assert!(!emitter.remove_listener(PosterAreaEvent::StarChange, id));
        assert!(emitter.remove_listener(PosterAreaEvent::TitleChange, id));
        assert!(!emitter.remove_listener(PosterAreaEvent::TitleChange, id));
        assert_eq!(emitter.listener_count(PosterAreaEvent::TitleChange), 0);
    }

    #[test]
    fn event_names_parse_back() {
        for event in PosterAreaEvent::ALL {
            assert_eq!(event.as_str().parse::<PosterAreaEvent>(), Ok(event));
        }
    }

    #[test]
    fn short_event_names_are_aliases() {
        assert_eq!(
            "titleChange".parse::<PosterAreaEvent>(),
            Ok(PosterAreaEvent::TitleChange)
        );
        assert_eq!(
            "imageContentsChange".parse::<PosterAreaEvent>(),
            Ok(PosterAreaEvent::ImageContentsChange)
        );
        assert_eq!(
            "starCountChange".parse::<PosterAreaEvent>(),
            Ok(PosterAreaEvent::StarChange)
        );
    }

    #[test]
    fn unknown_event_name_reports_trimmed_name() {
        let err = "  starChange \n"
            .parse::<PosterAreaEvent>()
            .expect_err("starChange is not an event");
        assert_eq!(err.0, "starChange");
        assert_eq!(err.to_string(), "unknown poster area event: starChange");
    }
}
