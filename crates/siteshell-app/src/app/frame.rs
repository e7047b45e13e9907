//! Bridging frame events into the sync engine and applying its effects.

use siteshell_sync::SyncUpdate;
use siteshell_webview::{FrameEvent, PageLoadState};

use super::core::ShellApp;

impl ShellApp {
    /// Drain pending frame events and feed them through the engine.
    ///
    /// Events arrive in the order the runtime dispatched them and each
    /// handler runs to completion here, on the event-loop thread; both
    /// channels mutate the one navigation state from this single place.
    pub(super) fn poll_frame_events(&mut self) {
        for event in self.manager.drain_events() {
            match event {
                FrameEvent::NavMessage { path } => {
                    if let Some(update) = self.sync.on_message(&path) {
                        self.apply_update(update);
                    }
                }

                FrameEvent::PageLoad {
                    state: PageLoadState::Finished,
                    url,
                } => {
                    // A foreign-origin URL yields no update; that is the
                    // expected cross-origin case, not an error.
                    if let Some(update) = self.sync.on_frame_load(&url) {
                        self.apply_update(update);
                    }
                }
                FrameEvent::PageLoad {
                    state: PageLoadState::Started,
                    ..
                } => {}

                FrameEvent::NavigationRequested { url } => {
                    tracing::debug!(url = %url, "frame navigation");
                }
            }
        }
    }

    /// Apply one engine update: navigate the frame if asked, then rewrite
    /// the visible location.
    fn apply_update(&mut self, update: SyncUpdate) {
        if let Some(target) = update.navigate {
            if let Some(ref mut frame) = self.frame {
                if let Err(e) = frame.navigate(&target) {
                    tracing::warn!(target = %target, error = %e, "frame navigation failed");
                }
            }
        }
        self.apply_host_path(&update.host);
    }

    /// Keep the frame filling the window.
    pub(super) fn sync_frame_bounds(&self) {
        let (Some(window), Some(frame)) = (&self.window, &self.frame) else {
            return;
        };
        let bounds = super::init::full_window_bounds(window);
        if let Err(e) = frame.set_bounds(bounds) {
            tracing::warn!(error = %e, "failed to update frame bounds");
        }
    }
}
