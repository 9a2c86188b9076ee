//! Coloured command feedback

use owo_colors::{colors::css, OwoColorize};

/// The kinds of feedback a command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// A change was made to the book.
    Success,
    /// A read-only result, such as a listing summary.
    Info,
    /// Secondary detail, such as list numbering.
    Muted,
}

/// Renders `text` in `tone`, or leaves it plain when colour is off.
fn paint(text: &str, tone: Tone, colour: bool) -> String {
    if !colour {
        return text.to_string();
    }
    match tone {
        Tone::Success => text.fg::<css::Green>().to_string(),
        Tone::Info => text.fg::<css::LightBlue>().to_string(),
        Tone::Muted => text.dimmed().to_string(),
    }
}

fn stdout_has_colour() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Extension trait for colouring command feedback on stdout.
pub trait Colorize: AsRef<str> {
    /// Renders the text in `tone` if stdout supports colour.
    fn tone(&self, tone: Tone) -> String {
        paint(self.as_ref(), tone, stdout_has_colour())
    }

    /// Green.
    fn success(&self) -> String {
        self.tone(Tone::Success)
    }

    /// Light blue.
    fn info(&self) -> String {
        self.tone(Tone::Info)
    }

    /// Dimmed.
    fn dim(&self) -> String {
        self.tone(Tone::Muted)
    }
}

impl<T: AsRef<str> + ?Sized> Colorize for T {}
