//! WebView bridge for the embedded site.
//!
//! Wraps the `wry` crate to provide:
//! - One managed WebView child showing the configured site
//! - Navigation messages from the embedded page (JS -> Rust)
//! - Page-load observation (the load-event channel)
//! - Origin confinement: the frame never leaves the configured site

pub mod events;
pub mod ipc;
pub mod manager;

pub use events::{FrameEvent, PageLoadState};
pub use ipc::NavMessage;
pub use manager::{FrameConfig, FrameHandle, FrameManager};
