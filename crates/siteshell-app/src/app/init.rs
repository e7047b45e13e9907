//! Window creation and frame setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use siteshell_webview::FrameConfig;

use super::core::ShellApp;

impl ShellApp {
    /// Create the host window. The configured site title is applied here,
    /// once, at startup; later title writes come from the visible-location
    /// policy only.
    ///
    /// Returns `false` if creation failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.site.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        self.window = Some(window);
        tracing::info!("Window created");
        true
    }

    /// Build the embedded frame pointed at the current frame target.
    /// Runs after startup reconciliation, so a deep link loads the right
    /// embedded page on first render.
    pub(super) fn create_frame(&mut self) {
        let window = match &self.window {
            Some(w) => w,
            None => {
                tracing::warn!("Cannot create frame: no window");
                return;
            }
        };

        let bounds = full_window_bounds(window);
        let config = FrameConfig::with_url(self.sync.frame_target().clone());

        match self.manager.create(window.as_ref(), bounds, config) {
            Ok(handle) => {
                tracing::info!(target = %handle.current_target(), "Frame created");
                self.frame = Some(handle);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create frame");
            }
        }
    }
}

/// The frame fills the whole window.
pub(super) fn full_window_bounds(window: &winit::window::Window) -> wry::Rect {
    let size = window.inner_size();
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}
