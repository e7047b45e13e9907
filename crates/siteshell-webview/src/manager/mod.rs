//! Frame lifecycle management.
//!
//! `FrameManager` builds the single `wry::WebView` child that displays the
//! embedded site, wires its handlers into an event sink, and hands back a
//! `FrameHandle`. Handlers run on the platform webview thread and only push
//! events; the shell's event loop drains them serially, so all state
//! mutation stays on one thread.

use std::sync::{Arc, Mutex};

use crate::events::FrameEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::FrameHandle;
pub use types::FrameConfig;

/// Builds the embedded frame and collects its events.
pub struct FrameManager {
    /// Event sink, drained by the shell each poll tick.
    pub(crate) events: Arc<Mutex<Vec<FrameEvent>>>,
    /// The one origin the frame is allowed to show.
    pub(crate) origin: String,
}

impl FrameManager {
    /// Create a manager confined to `origin`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            origin: origin.into(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<FrameEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }
}
