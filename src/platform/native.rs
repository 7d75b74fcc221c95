//! Native view: logs frames instead of touching a DOM

use std::path::PathBuf;

use clap::Parser;

use crate::nav::{DeckView, Frame, InputSource, Key, SlideMark};

/// Replay navigation steps against a deck and log every rendered frame
#[derive(Debug, Parser)]
#[command(name = "slide-deck", version, about)]
pub struct Args {
    /// JSON deck config (defaults to the standard 10-slide deck)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Steps: next, prev, home, end, space, swipe-left, swipe-right, resize or a dot number
    pub steps: Vec<String>,
}

/// Parse a replay step from the command line: `next`, `prev`, `home`,
/// `end`, `space`, `swipe-left`, `swipe-right`, `resize` or a dot number
pub fn parse_step(step: &str) -> Option<InputSource> {
    let source = match step.to_lowercase().as_str() {
        "next" | "right" => InputSource::Key(Key::ArrowRight),
        "prev" | "left" => InputSource::Key(Key::ArrowLeft),
        "home" => InputSource::Key(Key::Home),
        "end" => InputSource::Key(Key::End),
        "space" => InputSource::Key(Key::Space),
        "swipe-left" => InputSource::SwipeLeft,
        "swipe-right" => InputSource::SwipeRight,
        "resize" => InputSource::Resize,
        other => InputSource::Dot(other.parse().ok()?),
    };
    Some(source)
}

/// One character per slide: `*` active, `<` passed, `.` upcoming
pub fn strip(frame: &Frame) -> String {
    frame
        .slides
        .iter()
        .map(|s| match s.mark {
            SlideMark::Active => '*',
            SlideMark::Prev => '<',
            SlideMark::Upcoming => '.',
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct LogView {
    pub renders: usize,
}

impl DeckView for LogView {
    fn apply(&mut self, frame: &Frame) {
        self.renders += 1;
        log::info!(
            "[{}] {} (prev {}, next {})",
            strip(frame),
            frame.announcement(None),
            if frame.prev_disabled { "off" } else { "on" },
            if frame.next_disabled { "off" } else { "on" },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip() {
        assert_eq!(strip(&Frame::project(2, 5)), "<<*..");
        assert_eq!(strip(&Frame::project(0, 3)), "*..");
    }

    #[test]
    fn test_args_config_flag_and_steps() {
        let args = Args::try_parse_from(["slide-deck", "--config", "deck.conf", "end", "3"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("deck.conf")));
        assert_eq!(args.steps, vec!["end", "3"]);
    }

    #[test]
    fn test_args_steps_only() {
        let args = Args::try_parse_from(["slide-deck", "next", "next"]).unwrap();
        assert!(args.config.is_none());
        assert_eq!(args.steps.len(), 2);
    }

    #[test]
    fn test_args_help_is_not_a_step() {
        let err = Args::try_parse_from(["slide-deck", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_parse_step() {
        assert_eq!(parse_step("next"), Some(InputSource::Key(Key::ArrowRight)));
        assert_eq!(parse_step("END"), Some(InputSource::Key(Key::End)));
        assert_eq!(parse_step("swipe-left"), Some(InputSource::SwipeLeft));
        assert_eq!(parse_step("4"), Some(InputSource::Dot(4)));
        assert_eq!(parse_step("-1"), None);
        assert_eq!(parse_step("jump"), None);
    }

    #[test]
    fn test_counts_renders() {
        let mut view = LogView::default();
        view.apply(&Frame::project(0, 3));
        view.apply(&Frame::project(1, 3));
        assert_eq!(view.renders, 2);
    }
}
