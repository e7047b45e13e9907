//! Navigation messages from the embedded page.
//!
//! The embedded page reaches the host through `window.ipc.postMessage`,
//! which triggers the `ipc_handler` registered on the WebView. Exactly one
//! message shape is accepted: an object carrying a `path` field. Everything
//! else is dropped.

use serde::{Deserialize, Serialize};

/// A navigation report posted by the embedded page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavMessage {
    /// The path+query the page navigated to.
    pub path: String,
}

impl NavMessage {
    /// Parse a navigation message from a raw JSON string (from postMessage).
    /// `None` for anything without a `path` field.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Whether the carried path is rooted. Unrooted or scheme-carrying
    /// values are rejected before they reach the sync engine.
    pub fn path_is_rooted(&self) -> bool {
        self.path.starts_with('/') && !self.path.starts_with("//")
    }
}

/// JavaScript injected into every document the frame loads. SPA-style
/// navigations (history API, popstate, hash changes) never fire a load
/// event, so the page reports them itself as `{path}` messages.
pub const NAV_REPORT_SCRIPT: &str = r#"
(function() {
    if (window.__siteshellNavReport) {
        return;
    }
    window.__siteshellNavReport = true;

    var report = function() {
        window.ipc.postMessage(JSON.stringify({
            path: window.location.pathname + window.location.search
        }));
    };

    var wrap = function(name) {
        var original = history[name];
        history[name] = function() {
            var result = original.apply(this, arguments);
            report();
            return result;
        };
    };

    wrap('pushState');
    wrap('replaceState');
    window.addEventListener('popstate', report);
    window.addEventListener('hashchange', report);
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_with_path() {
        let msg = NavMessage::from_json(r#"{"path": "/docs/abc?tab=2"}"#).unwrap();
        assert_eq!(msg.path, "/docs/abc?tab=2");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let msg = NavMessage::from_json(r#"{"path": "/p", "title": "x"}"#).unwrap();
        assert_eq!(msg.path, "/p");
    }

    #[test]
    fn rejects_message_without_path() {
        assert!(NavMessage::from_json(r#"{"kind": "ping"}"#).is_none());
        assert!(NavMessage::from_json(r#"{}"#).is_none());
        assert!(NavMessage::from_json(r#""just a string""#).is_none());
        assert!(NavMessage::from_json("not json").is_none());
        assert!(NavMessage::from_json("").is_none());
    }

    #[test]
    fn rejects_non_string_path() {
        assert!(NavMessage::from_json(r#"{"path": 42}"#).is_none());
        assert!(NavMessage::from_json(r#"{"path": null}"#).is_none());
        assert!(NavMessage::from_json(r#"{"path": ["/a"]}"#).is_none());
    }

    #[test]
    fn rooted_paths_pass() {
        assert!(NavMessage { path: "/".into() }.path_is_rooted());
        assert!(NavMessage { path: "/a/b?c=1".into() }.path_is_rooted());
    }

    #[test]
    fn unrooted_paths_fail() {
        assert!(!NavMessage { path: "".into() }.path_is_rooted());
        assert!(!NavMessage { path: "a/b".into() }.path_is_rooted());
        assert!(!NavMessage { path: "https://evil.com/".into() }.path_is_rooted());
        // Protocol-relative URLs would escape the origin
        assert!(!NavMessage { path: "//evil.com/x".into() }.path_is_rooted());
    }

    #[test]
    fn report_script_posts_path_and_query() {
        assert!(NAV_REPORT_SCRIPT.contains("window.ipc.postMessage"));
        assert!(NAV_REPORT_SCRIPT.contains("location.pathname + window.location.search"));
        assert!(NAV_REPORT_SCRIPT.contains("popstate"));
        assert!(NAV_REPORT_SCRIPT.contains("pushState"));
    }
}
