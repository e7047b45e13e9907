//! Path synchronization between the host shell and the embedded site.
//!
//! The shell shows one remote site in a WebView and mirrors the site's
//! internal navigation into a host-visible location (and back):
//! - inbound channel A: navigation messages posted by the embedded page
//! - inbound channel B: the URL observed on each finished page load
//!
//! Both channels feed [`PathSync`], which owns the single
//! [`NavigationState`] and answers with [`SyncUpdate`] effects for the
//! caller to apply. This crate is pure state logic with no WebView or
//! windowing types, so the whole behavior is unit-testable.

pub mod engine;
pub mod frame_url;
pub mod state;
pub mod trusted;

pub use engine::{HostPath, PathSync, SyncUpdate};
pub use frame_url::ForeignOrigin;
pub use state::NavigationState;
pub use trusted::TrustedUrl;
