//! Render projection
//!
//! A `Frame` is everything a view needs to show the current slide. Building
//! it twice from the same index yields the same frame.

/// Visual state of a slide relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideMark {
    /// The slide being shown
    Active,
    /// Already passed (styled for the backwards transition)
    Prev,
    /// Not reached yet
    Upcoming,
}

impl SlideMark {
    /// CSS class applied to the slide, if any
    pub fn class(&self) -> Option<&'static str> {
        match self {
            SlideMark::Active => Some("active"),
            SlideMark::Prev => Some("prev"),
            SlideMark::Upcoming => None,
        }
    }
}

/// Per-slide visual and accessibility state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideState {
    pub mark: SlideMark,
    /// Value for `aria-hidden`
    pub hidden: bool,
    /// Value for `tabindex`
    pub tab_index: i32,
}

impl SlideState {
    pub fn is_active(&self) -> bool {
        self.mark == SlideMark::Active
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub current: usize,
    pub total: usize,
    pub slides: Vec<SlideState>,
    /// One entry per dot, true for the selected one
    pub dots: Vec<bool>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Frame {
    pub fn project(current: usize, total: usize) -> Self {
        let slides = (0..total)
            .map(|i| {
                let mark = if i == current {
                    SlideMark::Active
                } else if i < current {
                    SlideMark::Prev
                } else {
                    SlideMark::Upcoming
                };
                let active = mark == SlideMark::Active;
                SlideState {
                    mark,
                    hidden: !active,
                    tab_index: if active { 0 } else { -1 },
                }
            })
            .collect();

        Self {
            current,
            total,
            slides,
            dots: (0..total).map(|i| i == current).collect(),
            prev_disabled: current == 0,
            next_disabled: current + 1 >= total,
        }
    }

    /// State for slide `index`; slides beyond the deck length are hidden
    pub fn slide(&self, index: usize) -> SlideState {
        self.slides.get(index).copied().unwrap_or(SlideState {
            mark: SlideMark::Upcoming,
            hidden: true,
            tab_index: -1,
        })
    }

    pub fn dot_selected(&self, index: usize) -> bool {
        self.dots.get(index).copied().unwrap_or(false)
    }

    /// Live-region text for the active slide
    pub fn announcement(&self, title: Option<&str>) -> String {
        announcement_text(title, self.current, self.total)
    }
}

/// "<title>. Slide k de N", with "Slide k" standing in for a missing title
pub fn announcement_text(title: Option<&str>, index: usize, total: usize) -> String {
    let ordinal = index + 1;
    match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => format!("{}. Slide {} de {}", title, ordinal, total),
        None => format!("Slide {}. Slide {} de {}", ordinal, ordinal, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_around_current() {
        let frame = Frame::project(2, 5);
        let marks: Vec<_> = frame.slides.iter().map(|s| s.mark).collect();
        assert_eq!(
            marks,
            vec![
                SlideMark::Prev,
                SlideMark::Prev,
                SlideMark::Active,
                SlideMark::Upcoming,
                SlideMark::Upcoming,
            ]
        );
    }

    #[test]
    fn test_aria_only_active_visible() {
        let frame = Frame::project(1, 3);
        assert_eq!(frame.slide(1).tab_index, 0);
        assert!(!frame.slide(1).hidden);
        for i in [0, 2] {
            assert!(frame.slide(i).hidden);
            assert_eq!(frame.slide(i).tab_index, -1);
        }
        // Extra markup slides stay hidden
        assert!(frame.slide(7).hidden);
    }

    #[test]
    fn test_dots_follow_current() {
        let frame = Frame::project(3, 4);
        assert_eq!(frame.dots, vec![false, false, false, true]);
        assert!(frame.dot_selected(3));
        assert!(!frame.dot_selected(9));
    }

    #[test]
    fn test_controls_at_edges() {
        let first = Frame::project(0, 10);
        assert!(first.prev_disabled);
        assert!(!first.next_disabled);

        let last = Frame::project(9, 10);
        assert!(!last.prev_disabled);
        assert!(last.next_disabled);
    }

    #[test]
    fn test_mark_classes() {
        assert_eq!(SlideMark::Active.class(), Some("active"));
        assert_eq!(SlideMark::Prev.class(), Some("prev"));
        assert_eq!(SlideMark::Upcoming.class(), None);
    }

    #[test]
    fn test_announcement_text() {
        let frame = Frame::project(4, 10);
        assert_eq!(
            frame.announcement(Some(" Checklist final ")),
            "Checklist final. Slide 5 de 10"
        );
        assert_eq!(frame.announcement(None), "Slide 5. Slide 5 de 10");
        assert_eq!(frame.announcement(Some("   ")), "Slide 5. Slide 5 de 10");
    }
}
