//! Events produced for the hosting UI.
//!
//! The engine is single-threaded and event-driven, so delivery is a
//! synchronous call into an [`EventSink`]. Hosts adapt this to whatever
//! their UI uses for inspector updates and toast notifications.

use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warning,
    Error,
}

/// Something the host should react to.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignerEvent {
    /// The primary selection changed; `None` means nothing is selected.
    /// The inspector panel re-renders its label/style fields from this.
    SelectionChanged(Option<Uuid>),
    /// Informational feedback for copy/paste/delete/save.
    Notify { level: NotifyLevel, message: String },
}

/// Receives designer events synchronously.
pub trait EventSink {
    fn emit(&mut self, event: DesignerEvent);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: DesignerEvent) {}
}

/// Sink that buffers events behind a shared handle, used by tests and by
/// hosts that drain events once per frame.
#[derive(Debug, Clone, Default)]
pub struct BufferedSink {
    events: Rc<RefCell<Vec<DesignerEvent>>>,
}

impl BufferedSink {
    /// Creates an empty buffering sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clone sharing the same buffer.
    pub fn handle(&self) -> Self {
        self.clone()
    }

    /// Drains and returns all buffered events.
    pub fn take(&self) -> Vec<DesignerEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl EventSink for BufferedSink {
    fn emit(&mut self, event: DesignerEvent) {
        self.events.borrow_mut().push(event);
    }
}
