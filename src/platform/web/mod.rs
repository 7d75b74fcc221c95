//! Browser binding
//!
//! Everything here talks to the DOM through `web-sys`; the logic it drives
//! lives in the platform-independent modules.

pub mod actions;
pub mod dom;
pub mod timers;

pub use actions::{Actions, preload_images, setup_checklist};
pub use dom::{DomView, Notifier, inject_styles, query_all};
pub use timers::{BrowserTimers, after};
