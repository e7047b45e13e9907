use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{FrameEvent, PageLoadState};
use crate::ipc::NavMessage;

use super::FrameManager;

// =============================================================================
// ORIGIN CONFINEMENT
// =============================================================================

/// Check whether the frame may navigate to `url`.
///
/// Only the configured origin (and the initial blank document) is permitted.
/// Everything else is blocked.
pub fn is_navigation_allowed(url: &str, origin: &str) -> bool {
    if url == "about:blank" {
        return true;
    }
    match url.strip_prefix(origin) {
        Some(rest) => matches!(rest.as_bytes().first(), None | Some(b'/' | b'?' | b'#')),
        None => false,
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl FrameManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<FrameEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body();

            // Only one message shape is accepted: an object with a `path`
            let msg = match NavMessage::from_json(body) {
                Some(m) => m,
                None => {
                    warn!(body_len = body.len(), "nav message rejected: no path field");
                    return;
                }
            };
            if !msg.path_is_rooted() {
                warn!(path = %msg.path, "nav message rejected: path not rooted");
                return;
            }

            debug!(path = %msg.path, "nav message from embedded page");
            if let Ok(mut evts) = events.lock() {
                evts.push(FrameEvent::NavMessage { path: msg.path });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<FrameEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(FrameEvent::PageLoad { state, url });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<FrameEvent>>>,
        origin: String,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url, &origin) {
                warn!(url = %url, "navigation blocked: outside the embedded origin");
                return false;
            }

            debug!(url = %url, "navigation allowed");
            if let Ok(mut evts) = events.lock() {
                evts.push(FrameEvent::NavigationRequested { url });
            }
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
