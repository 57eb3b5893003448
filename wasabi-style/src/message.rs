use std::{
    fmt,
    str,
};

use crate::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageKind {
    Good,
    Fail,
    Warn,
    Info,
}

/// Icon glyph for every message kind, keyed by [`MessageKind::name`].
pub static ICONS: phf::Map<&'static str, char> = phf::phf_map! {
    "good" => '\u{2714}',
    "fail" => '\u{2718}',
    "warn" => '\u{26a0}',
    "info" => '\u{2139}',
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown message kind '{0}', expected one of good, fail, warn or info")]
pub struct UnknownMessageKind(pub String);

impl MessageKind {
    pub const ALL: [Self; 4] = [Self::Good, Self::Fail, Self::Warn, Self::Info];

    pub fn name(self) -> &'static str {
        match self {
            MessageKind::Good => "good",
            MessageKind::Fail => "fail",
            MessageKind::Warn => "warn",
            MessageKind::Info => "info",
        }
    }

    pub fn icon(self) -> char {
        match self {
            MessageKind::Good => '\u{2714}',
            MessageKind::Fail => '\u{2718}',
            MessageKind::Warn => '\u{26a0}',
            MessageKind::Info => '\u{2139}',
        }
    }

    pub fn color(self) -> Color {
        Color::from(self)
    }

    /// The kind's color as a bold [`yansi::Style`].
    pub fn style(self) -> yansi::Style {
        let style = yansi::Style::new().bold();

        match self.color().yansi() {
            Some(color) => style.fg(color),
            None => style,
        }
    }

    pub fn header(self, label: &'static str) -> yansi::Painted<&'static str> {
        crate::paint(label, self.style())
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, writer: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer.write_str(self.name())
    }
}

impl str::FromStr for MessageKind {
    type Err = UnknownMessageKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownMessageKind(s.to_owned()))
    }
}
