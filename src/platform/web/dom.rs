//! DOM view and notifications

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

use super::timers::after;
use crate::config::DeckConfig;
use crate::nav::{DeckView, Frame};
use crate::notify::{INJECTED_STYLES, Notification, SLIDE_OUT_ANIMATION};

/// All elements matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("Bad selector: {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First `h1`/`h2` inside a slide
fn slide_heading(slide: &Element) -> Option<HtmlElement> {
    slide
        .query_selector("h1, h2")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Add the deck's keyframes and `.sr-only` class to `<head>`
pub fn inject_styles(document: &Document) {
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(INJECTED_STYLES));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}

/// Projects frames onto `.slide`, `.dot`, `#prevBtn` and `#nextBtn`
pub struct DomView {
    document: Document,
    slides: Vec<Element>,
    dots: Vec<Element>,
    prev_btn: Option<HtmlButtonElement>,
    next_btn: Option<HtmlButtonElement>,
    focus_delay_ms: u32,
    announce_cleanup_ms: u32,
}

impl DomView {
    pub fn new(document: &Document, config: &DeckConfig) -> Self {
        let slides = query_all(document, ".slide");
        let dots = query_all(document, ".dot");
        if slides.len() != config.total_slides {
            log::warn!(
                "Deck has {} slides in markup, config says {}",
                slides.len(),
                config.total_slides
            );
        }

        let button = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        };

        Self {
            document: document.clone(),
            slides,
            dots,
            prev_btn: button("prevBtn"),
            next_btn: button("nextBtn"),
            focus_delay_ms: config.focus_delay_ms,
            announce_cleanup_ms: config.announce_cleanup_ms,
        }
    }

    pub fn dots(&self) -> &[Element] {
        &self.dots
    }

    pub fn prev_button(&self) -> Option<&HtmlButtonElement> {
        self.prev_btn.as_ref()
    }

    pub fn next_button(&self) -> Option<&HtmlButtonElement> {
        self.next_btn.as_ref()
    }

    fn update_slides(&self, frame: &Frame) {
        for (i, slide) in self.slides.iter().enumerate() {
            let state = frame.slide(i);
            let classes = slide.class_list();
            let _ = classes.remove_2("active", "prev");
            if let Some(class) = state.mark.class() {
                let _ = classes.add_1(class);
            }
        }
    }

    fn update_dots(&self, frame: &Frame) {
        for (i, dot) in self.dots.iter().enumerate() {
            let selected = frame.dot_selected(i);
            let _ = dot.class_list().toggle_with_force("active", selected);
            let _ = dot.set_attribute("aria-selected", if selected { "true" } else { "false" });
        }
    }

    fn update_controls(&self, frame: &Frame) {
        if let Some(btn) = &self.prev_btn {
            btn.set_disabled(frame.prev_disabled);
        }
        if let Some(btn) = &self.next_btn {
            btn.set_disabled(frame.next_disabled);
        }
    }

    fn update_aria(&self, frame: &Frame) {
        for (i, slide) in self.slides.iter().enumerate() {
            let state = frame.slide(i);
            let _ = slide.set_attribute("aria-hidden", if state.hidden { "true" } else { "false" });
            let _ = slide.set_attribute("tabindex", &state.tab_index.to_string());

            if state.is_active() {
                // Focus once the slide transition has settled
                if let Some(heading) = slide_heading(slide) {
                    after(self.focus_delay_ms, move || {
                        let _ = heading.focus();
                    });
                }
            }
        }
    }

    /// Polite live-region announcement, removed after a second
    fn announce(&self, frame: &Frame) {
        let title = self
            .slides
            .get(frame.current)
            .and_then(slide_heading)
            .and_then(|h| h.text_content());
        let text = frame.announcement(title.as_deref());

        let Some(body) = self.document.body() else {
            return;
        };
        let Ok(announcer) = self.document.create_element("div") else {
            return;
        };
        let _ = announcer.set_attribute("aria-live", "polite");
        let _ = announcer.set_attribute("aria-atomic", "true");
        announcer.set_class_name("sr-only");
        announcer.set_text_content(Some(&text));

        if body.append_child(&announcer).is_ok() {
            after(self.announce_cleanup_ms, move || announcer.remove());
        }
    }
}

impl DeckView for DomView {
    fn apply(&mut self, frame: &Frame) {
        self.update_slides(frame);
        self.update_dots(frame);
        self.update_controls(frame);
        self.update_aria(frame);
        self.announce(frame);
    }
}

/// Shows toasts at the top of the page
#[derive(Clone)]
pub struct Notifier {
    document: Document,
    visible_ms: u32,
    fade_ms: u32,
}

impl Notifier {
    pub fn new(document: &Document, config: &DeckConfig) -> Self {
        Self {
            document: document.clone(),
            visible_ms: config.notification_ms,
            fade_ms: config.notification_fade_ms,
        }
    }

    pub fn show(&self, notification: &Notification) {
        let Some(body) = self.document.body() else {
            log::warn!("No body for notification: {}", notification.message);
            return;
        };
        let Some(toast) = self
            .document
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        toast.set_class_name(&notification.class_name());
        toast.set_text_content(Some(&notification.message));
        toast.style().set_css_text(&notification.css_text());
        if body.append_child(&toast).is_err() {
            return;
        }

        let fade_ms = self.fade_ms;
        after(self.visible_ms, move || {
            let _ = toast.style().set_property("animation", SLIDE_OUT_ANIMATION);
            after(fade_ms, move || toast.remove());
        });
    }
}
