//! Events emitted by the embedded frame.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the frame, drained by the shell's event loop.
#[derive(Debug, Clone)]
pub enum FrameEvent {
    /// Page load state changed. Carries the URL the frame is on.
    PageLoad { state: PageLoadState, url: String },
    /// The embedded page declared a new path.
    NavMessage { path: String },
    /// A navigation passed the origin check and was allowed to proceed.
    NavigationRequested { url: String },
}
