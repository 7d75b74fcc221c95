//! Input sources and the table that maps them to navigation commands
//!
//! Gesture recognizers (swipe, zoom suppression) are plain state machines
//! fed with coordinates and timestamps by the platform layer.

use std::collections::HashMap;

/// Keys the deck responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Space,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "Home" => Some(Key::Home),
            "End" => Some(Key::End),
            " " | "Spacebar" => Some(Key::Space),
            _ => None,
        }
    }
}

/// Where a navigation request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    PrevButton,
    NextButton,
    Dot(usize),
    Key(Key),
    SwipeLeft,
    SwipeRight,
    /// Debounced window resize
    Resize,
}

/// What the navigator should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    GoTo(usize),
    First,
    Last,
    /// Re-render without changing the index
    Refresh,
}

/// Validate an index passed to the global `goToSlide`. Negative, fractional,
/// non-finite and out-of-`usize` values are rejected.
pub fn parse_goto_index(index: f64) -> Option<usize> {
    if !index.is_finite() || index < 0.0 || index.fract() != 0.0 || index > usize::MAX as f64 {
        return None;
    }
    Some(index as usize)
}

/// Registration table from input source to command
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    table: HashMap<InputSource, NavCommand>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard deck bindings, one dot per slide
    pub fn standard(total_slides: usize) -> Self {
        let mut bindings = Self::new();
        bindings
            .bind(InputSource::PrevButton, NavCommand::Previous)
            .bind(InputSource::NextButton, NavCommand::Next)
            .bind(InputSource::Key(Key::ArrowLeft), NavCommand::Previous)
            .bind(InputSource::Key(Key::ArrowRight), NavCommand::Next)
            .bind(InputSource::Key(Key::Space), NavCommand::Next)
            .bind(InputSource::Key(Key::Home), NavCommand::First)
            .bind(InputSource::Key(Key::End), NavCommand::Last)
            .bind(InputSource::SwipeLeft, NavCommand::Next)
            .bind(InputSource::SwipeRight, NavCommand::Previous)
            .bind(InputSource::Resize, NavCommand::Refresh);
        for i in 0..total_slides {
            bindings.bind(InputSource::Dot(i), NavCommand::GoTo(i));
        }
        bindings
    }

    /// Register (or replace) a binding
    pub fn bind(&mut self, source: InputSource, command: NavCommand) -> &mut Self {
        self.table.insert(source, command);
        self
    }

    pub fn unbind(&mut self, source: InputSource) -> Option<NavCommand> {
        self.table.remove(&source)
    }

    pub fn resolve(&self, source: InputSource) -> Option<NavCommand> {
        self.table.get(&source).copied()
    }

    /// Whether a key is bound (its default browser action should be prevented)
    pub fn handles_key(&self, key: Key) -> bool {
        self.table.contains_key(&InputSource::Key(key))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Horizontal swipe recognizer
///
/// Only touch-start and touch-end positions matter; the path in between is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: f64,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: 0.0,
        }
    }

    pub fn touch_start(&mut self, screen_x: f64) {
        self.start_x = screen_x;
    }

    /// Finish a gesture. Travel must exceed the threshold strictly.
    pub fn touch_end(&mut self, screen_x: f64) -> Option<InputSource> {
        let diff = self.start_x - screen_x;
        if diff.abs() > self.threshold {
            if diff > 0.0 {
                Some(InputSource::SwipeLeft)
            } else {
                Some(InputSource::SwipeRight)
            }
        } else {
            None
        }
    }
}

/// Decides which touch/wheel events to cancel so the page cannot be zoomed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomGuard {
    double_tap_ms: f64,
    last_touch_end: Option<f64>,
}

impl ZoomGuard {
    pub fn new(double_tap_ms: f64) -> Self {
        Self {
            double_tap_ms,
            last_touch_end: None,
        }
    }

    /// Pinch zoom starts with more than one finger down
    pub fn block_touch_start(&self, touch_count: u32) -> bool {
        touch_count > 1
    }

    /// Second tap of a double tap. Records `now_ms` either way.
    pub fn block_touch_end(&mut self, now_ms: f64) -> bool {
        let block = self
            .last_touch_end
            .is_some_and(|last| now_ms - last <= self.double_tap_ms);
        self.last_touch_end = Some(now_ms);
        block
    }

    /// Ctrl/Cmd + wheel zooms in desktop browsers
    pub fn block_wheel(&self, ctrl_key: bool, meta_key: bool) -> bool {
        ctrl_key || meta_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(Key::from_dom(" "), Some(Key::Space));
        assert_eq!(Key::from_dom("End"), Some(Key::End));
        assert_eq!(Key::from_dom("Enter"), None);
        assert_eq!(Key::from_dom("arrowleft"), None);
    }

    #[test]
    fn test_parse_goto_index() {
        assert_eq!(parse_goto_index(0.0), Some(0));
        assert_eq!(parse_goto_index(7.0), Some(7));
        assert_eq!(parse_goto_index(-0.0), Some(0));
        assert_eq!(parse_goto_index(-1.0), None);
        assert_eq!(parse_goto_index(2.5), None);
        assert_eq!(parse_goto_index(f64::NAN), None);
        assert_eq!(parse_goto_index(f64::INFINITY), None);
        assert_eq!(parse_goto_index(f64::NEG_INFINITY), None);
        assert_eq!(parse_goto_index(1e300), None);
    }

    #[test]
    fn test_standard_bindings() {
        let bindings = Bindings::standard(10);
        assert_eq!(
            bindings.resolve(InputSource::Key(Key::ArrowLeft)),
            Some(NavCommand::Previous)
        );
        assert_eq!(
            bindings.resolve(InputSource::Key(Key::Space)),
            Some(NavCommand::Next)
        );
        assert_eq!(
            bindings.resolve(InputSource::Key(Key::Home)),
            Some(NavCommand::First)
        );
        assert_eq!(
            bindings.resolve(InputSource::Key(Key::End)),
            Some(NavCommand::Last)
        );
        assert_eq!(bindings.resolve(InputSource::Dot(9)), Some(NavCommand::GoTo(9)));
        assert_eq!(bindings.resolve(InputSource::Dot(10)), None);
        assert_eq!(bindings.resolve(InputSource::Resize), Some(NavCommand::Refresh));
        assert!(bindings.handles_key(Key::Space));
    }

    #[test]
    fn test_rebind_and_unbind() {
        let mut bindings = Bindings::standard(3);
        let before = bindings.len();
        bindings.bind(InputSource::Key(Key::Space), NavCommand::Previous);
        assert_eq!(bindings.len(), before);
        assert_eq!(
            bindings.resolve(InputSource::Key(Key::Space)),
            Some(NavCommand::Previous)
        );

        assert_eq!(bindings.unbind(InputSource::Key(Key::Space)), Some(NavCommand::Previous));
        assert!(!bindings.handles_key(Key::Space));
    }

    #[test]
    fn test_swipe_left_past_threshold() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(240.0), Some(InputSource::SwipeLeft));
    }

    #[test]
    fn test_swipe_right_past_threshold() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(175.0), Some(InputSource::SwipeRight));
    }

    #[test]
    fn test_short_swipe_ignored() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(270.0), None);
        // Exactly the threshold is not enough
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(250.0), None);
    }

    #[test]
    fn test_double_tap_blocked() {
        let mut guard = ZoomGuard::new(300.0);
        assert!(!guard.block_touch_end(1000.0));
        assert!(guard.block_touch_end(1250.0));
        assert!(!guard.block_touch_end(1600.0));
    }

    #[test]
    fn test_pinch_and_wheel_blocked() {
        let guard = ZoomGuard::new(300.0);
        assert!(!guard.block_touch_start(1));
        assert!(guard.block_touch_start(2));
        assert!(guard.block_wheel(true, false));
        assert!(guard.block_wheel(false, true));
        assert!(!guard.block_wheel(false, false));
    }
}
