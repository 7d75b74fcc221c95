//! Navigator + view wiring
//!
//! Inputs go through the binding table, commands go to the navigator, and
//! every accepted command ends with the view receiving a fresh frame.

use super::frame::Frame;
use super::input::{Bindings, InputSource, NavCommand};
use super::state::SlideNavigator;

/// Something that can show a frame
pub trait DeckView {
    fn apply(&mut self, frame: &Frame);
}

pub struct Presenter<V: DeckView> {
    nav: SlideNavigator,
    bindings: Bindings,
    view: V,
}

impl<V: DeckView> Presenter<V> {
    /// Create a presenter and render the first slide
    pub fn new(total_slides: usize, bindings: Bindings, view: V) -> Self {
        let mut presenter = Self {
            nav: SlideNavigator::new(total_slides),
            bindings,
            view,
        };
        presenter.render();
        presenter
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn current(&self) -> usize {
        self.nav.current()
    }

    /// Resolve an input through the binding table and dispatch it.
    /// Returns the command if the source is bound.
    pub fn handle(&mut self, source: InputSource) -> Option<NavCommand> {
        let command = self.bindings.resolve(source)?;
        self.dispatch(command);
        Some(command)
    }

    /// Apply a command. Returns whether the view was re-rendered.
    pub fn dispatch(&mut self, command: NavCommand) -> bool {
        let accepted = match command {
            NavCommand::Next => self.nav.next(),
            NavCommand::Previous => self.nav.previous(),
            NavCommand::GoTo(index) => self.nav.go_to(index),
            NavCommand::First => self.nav.first(),
            NavCommand::Last => self.nav.last(),
            NavCommand::Refresh => true,
        };

        if accepted {
            self.render();
        } else {
            log::debug!("Ignored {:?} at slide {}", command, self.nav.current());
        }
        accepted
    }

    pub fn render(&mut self) {
        let frame = self.nav.frame();
        self.view.apply(&frame);
    }
}
