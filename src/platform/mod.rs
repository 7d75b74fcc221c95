//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Rendering frames (DOM on web, log lines natively)
//! - Timers (`setTimeout` on web)
//! - Input events, clipboard and file reading (web only)

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;
