//! Text styling: `(text, tone) -> decorated string`.
//!
//! Tones name what a piece of text is, not how it looks, so the color
//! choices stay in one place.

use crossterm::style::{Attribute, Color, Stylize, style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    AppTitle,
    Heading,
    Border,
    Caption,
    /// Questions asking for a file name.
    Ask,
    /// Content prompts, confirmations and the acknowledgement prompt.
    Note,
    /// The "contents of file" line above a displayed file.
    Header,
    Body,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A painter that returns text untouched.
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let content = style(text);
        let styled = match tone {
            Tone::Plain => return text.to_string(),
            Tone::AppTitle => content.with(Color::DarkRed).attribute(Attribute::Reverse),
            Tone::Heading => content
                .with(Color::DarkYellow)
                .attribute(Attribute::Underlined),
            Tone::Border => content.with(Color::DarkBlue),
            Tone::Caption | Tone::Body => content.with(Color::White),
            Tone::Ask | Tone::Success => content.with(Color::DarkGreen),
            Tone::Note => content.with(Color::DarkYellow),
            Tone::Header => content.with(Color::Green),
            Tone::Error => content.with(Color::White).on(Color::DarkRed),
        };
        styled.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_painter_is_identity() {
        let painter = Painter::plain();
        assert_eq!(painter.paint("hola", Tone::Error), "hola");
        assert_eq!(painter.paint("", Tone::AppTitle), "");
    }

    #[test]
    fn test_enabled_painter_wraps_text_in_escapes() {
        let painted = Painter::new(true).paint("hola", Tone::AppTitle);
        assert!(painted.contains("hola"));
        assert!(painted.starts_with('\u{1b}'));
        assert_ne!(painted, "hola");
    }

    #[test]
    fn test_plain_tone_is_never_styled() {
        assert_eq!(Painter::new(true).paint("hola", Tone::Plain), "hola");
    }

    #[test]
    fn test_tones_differ() {
        let painter = Painter::new(true);
        assert_ne!(
            painter.paint("x", Tone::AppTitle),
            painter.paint("x", Tone::Heading)
        );
    }
}
