//! Slide navigation module
//!
//! The navigation state machine and everything that feeds it. Pure logic:
//! - No DOM access
//! - Out-of-range requests are ignored, never reported
//! - Views receive a complete `Frame` on every render

pub mod frame;
pub mod input;
pub mod presenter;
pub mod state;

pub use frame::{Frame, SlideMark, SlideState, announcement_text};
pub use input::{
    Bindings, InputSource, Key, NavCommand, SwipeTracker, ZoomGuard, parse_goto_index,
};
pub use presenter::{DeckView, Presenter};
pub use state::SlideNavigator;
