//! Slide Deck - A browser slideshow presentation controller
//!
//! Core modules:
//! - `nav`: Slide navigation state machine, render projection and input table
//! - `schedule`: Timer seam and trailing-edge debounce
//! - `checklist`: Checklist slide progress tracking
//! - `clipboard`: Copy-button targets and fallback flow
//! - `upload`: Image upload placeholders
//! - `notify`: Transient notifications and injected styles
//! - `platform`: Browser DOM binding (wasm32 only)

pub mod checklist;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod nav;
pub mod notify;
pub mod platform;
pub mod schedule;
pub mod upload;

pub use config::{DeckConfig, DeckVariant};
pub use error::{DeckError, Result};
pub use nav::{Bindings, DeckView, Frame, InputSource, NavCommand, Presenter, SlideNavigator};

/// Deck timing and gesture constants
pub mod consts {
    /// Slides in the standard build
    pub const STANDARD_TOTAL_SLIDES: usize = 10;
    /// Slides in the branding build (with upload slots)
    pub const BRANDING_TOTAL_SLIDES: usize = 9;

    /// Minimum horizontal travel (px) for a swipe to navigate
    pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
    /// Two touch ends closer than this (ms) count as a double tap
    pub const DOUBLE_TAP_MS: f64 = 300.0;

    /// Trailing-edge debounce for window resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 250;
    /// Delay before focusing the active slide heading (lets the transition settle)
    pub const FOCUS_DELAY_MS: u32 = 100;
    /// Lifetime of the screen reader live region
    pub const ANNOUNCE_CLEANUP_MS: u32 = 1000;
    /// Copy button shows its confirmation text this long
    pub const BUTTON_RESET_MS: u32 = 2000;
    /// Notification visible time before it slides out
    pub const NOTIFICATION_MS: u32 = 3000;
    /// Slide-out animation length
    pub const NOTIFICATION_FADE_MS: u32 = 300;
}
