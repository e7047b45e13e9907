use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::NAV_REPORT_SCRIPT;

use super::handle::FrameHandle;
use super::types::FrameConfig;
use super::FrameManager;

impl FrameManager {
    /// Build the embedded frame as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The frame is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: FrameConfig,
    ) -> Result<FrameHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_incognito(config.incognito)
            .with_focused(true);

        // Navigation reporting bridge, injected into every document
        builder = builder.with_initialization_script(NAV_REPORT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // Nav messages: embedded page -> Rust
        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));

        // Load events, including navigations the user performed in-frame
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));

        // Confine the frame to the configured origin
        builder =
            Self::attach_navigation_handler(builder, Arc::clone(&events), self.origin.clone());

        builder = builder.with_url(config.url.as_str());

        let webview = builder.build_as_child(window)?;

        debug!(url = %config.url, "frame created");

        Ok(FrameHandle {
            webview,
            current_target: config.url,
        })
    }
}
