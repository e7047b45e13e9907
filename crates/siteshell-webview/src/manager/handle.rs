use siteshell_sync::TrustedUrl;
use wry::WebView;

/// Handle to the embedded frame.
///
/// Dropping the handle tears the WebView down together with every handler
/// registered on it; there are no other owned resources.
pub struct FrameHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// The target the frame was last pointed at (best-effort tracking;
    /// in-frame navigation moves the real location without updating this).
    pub(super) current_target: TrustedUrl,
}

impl FrameHandle {
    /// The target the frame was last pointed at.
    pub fn current_target(&self) -> &TrustedUrl {
        &self.current_target
    }

    /// Point the frame at an attested URL.
    pub fn navigate(&mut self, target: &TrustedUrl) -> Result<(), wry::Error> {
        self.current_target = target.clone();
        self.webview.load_url(target.as_str())
    }

    /// Execute JavaScript in the frame context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Set the frame bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}
