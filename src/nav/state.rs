//! Navigation state
//!
//! A single index into a fixed-length deck. Lives for the page lifetime.

use super::frame::Frame;

/// Owns the current slide index for a deck of fixed length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideNavigator {
    current: usize,
    total: usize,
}

impl SlideNavigator {
    /// Start at the first slide. A zero-length deck is treated as one slide.
    pub fn new(total: usize) -> Self {
        debug_assert!(total > 0, "deck must have at least one slide");
        Self {
            current: 0,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn last_index(&self) -> usize {
        self.total - 1
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == self.last_index()
    }

    /// Advance one slide. Returns false (no-op) on the last slide.
    pub fn next(&mut self) -> bool {
        if self.current < self.last_index() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one slide. Returns false (no-op) on the first slide.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `index`. Out-of-range indices are ignored and return false;
    /// a valid index returns true even if it is already current.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.total {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.last_index())
    }

    /// Project the current index onto slides, dots and controls
    pub fn frame(&self) -> Frame {
        Frame::project(self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_first_slide() {
        let nav = SlideNavigator::new(10);
        assert_eq!(nav.current(), 0);
        assert!(nav.is_first());
        assert!(!nav.is_last());
    }

    #[test]
    fn test_five_nexts_from_start() {
        let mut nav = SlideNavigator::new(10);
        for _ in 0..5 {
            assert!(nav.next());
        }
        assert_eq!(nav.current(), 5);

        let frame = nav.frame();
        assert!(!frame.prev_disabled);
        assert!(!frame.next_disabled);
    }

    #[test]
    fn test_next_on_last_is_noop() {
        let mut nav = SlideNavigator::new(10);
        assert!(nav.go_to(9));
        assert!(!nav.next());
        assert_eq!(nav.current(), 9);
        assert!(nav.frame().next_disabled);
    }

    #[test]
    fn test_previous_on_first_is_noop() {
        let mut nav = SlideNavigator::new(10);
        assert!(!nav.previous());
        assert_eq!(nav.current(), 0);
        assert!(nav.frame().prev_disabled);
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let mut nav = SlideNavigator::new(10);
        nav.go_to(4);
        assert!(!nav.go_to(10));
        assert!(!nav.go_to(usize::MAX));
        assert_eq!(nav.current(), 4);
    }

    #[test]
    fn test_go_to_current_still_accepted() {
        let mut nav = SlideNavigator::new(9);
        nav.go_to(3);
        assert!(nav.go_to(3));
        assert_eq!(nav.current(), 3);
    }

    #[test]
    fn test_first_and_last() {
        let mut nav = SlideNavigator::new(9);
        nav.last();
        assert_eq!(nav.current(), 8);
        nav.first();
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_single_slide_deck() {
        let mut nav = SlideNavigator::new(1);
        assert!(!nav.next());
        assert!(!nav.previous());
        let frame = nav.frame();
        assert!(frame.prev_disabled && frame.next_disabled);
    }

    proptest! {
        #[test]
        fn prop_index_stays_in_bounds(
            total in 1usize..20,
            steps in proptest::collection::vec(any::<bool>(), 0..100),
        ) {
            let mut nav = SlideNavigator::new(total);
            for forward in steps {
                if forward { nav.next(); } else { nav.previous(); }
                prop_assert!(nav.current() < total);
            }
        }

        #[test]
        fn prop_go_to_ignores_out_of_range(total in 1usize..20, start in 0usize..20, target in 0usize..40) {
            let mut nav = SlideNavigator::new(total);
            nav.go_to(start);
            let before = nav.current();
            let accepted = nav.go_to(target);
            if target < total {
                prop_assert!(accepted);
                prop_assert_eq!(nav.current(), target);
            } else {
                prop_assert!(!accepted);
                prop_assert_eq!(nav.current(), before);
            }
        }

        #[test]
        fn prop_frame_matches_index(total in 1usize..20, target in 0usize..20) {
            let mut nav = SlideNavigator::new(total);
            nav.go_to(target);
            let frame = nav.frame();
            let current = nav.current();

            let active: Vec<_> = frame.slides.iter().enumerate()
                .filter(|(_, s)| s.is_active())
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(active, vec![current]);

            let dots: Vec<_> = frame.dots.iter().enumerate()
                .filter(|(_, on)| **on)
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(dots, vec![current]);

            prop_assert_eq!(frame.prev_disabled, current == 0);
            prop_assert_eq!(frame.next_disabled, current == total - 1);
        }
    }
}
