use std::{
    borrow::Cow,
    convert::Infallible,
    fmt,
    str,
};

use crate::MessageKind;

/// Symbolic color names and the 256-color palette codes they stand for.
pub static COLORS: phf::Map<&'static str, u16> = phf::phf_map! {
    "good" => 2,
    "fail" => 1,
    "warn" => 3,
    "info" => 4,
    "red" => 1,
    "green" => 2,
    "yellow" => 3,
    "blue" => 4,
    "pink" => 5,
    "cyan" => 6,
    "white" => 7,
    "grey" => 8,
};

/// A color given either by name or by palette code.
///
/// Names are looked up in [`COLORS`] when the color is resolved. Codes are
/// used as they are, and so are names the table does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Named(Cow<'static, str>),
    Code(u16),
}

/// A [`Color`] after the lookup in [`COLORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Code(u16),
    Verbatim(&'a str),
}

impl fmt::Display for Resolved<'_> {
    fn fmt(&self, writer: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Resolved::Code(code) => writer.write_str(itoa::Buffer::new().format(code)),
            Resolved::Verbatim(name) => writer.write_str(name),
        }
    }
}

impl Color {
    pub fn resolve(&self) -> Resolved<'_> {
        match self {
            Color::Code(code) => Resolved::Code(*code),

            Color::Named(name) => {
                match COLORS.get(name.as_ref()) {
                    Some(&code) => Resolved::Code(code),

                    None => {
                        log::debug!("color {name:?} is not in the color table, using it verbatim");
                        Resolved::Verbatim(name.as_ref())
                    },
                }
            },
        }
    }

    pub fn code(&self) -> Option<u16> {
        match self.resolve() {
            Resolved::Code(code) => Some(code),
            Resolved::Verbatim(_) => None,
        }
    }

    /// The palette color for [`yansi`], if the code fits in the 256-color
    /// palette.
    pub fn yansi(&self) -> Option<yansi::Color> {
        self.code()
            .and_then(|code| u8::try_from(code).ok())
            .map(yansi::Color::Fixed)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, writer: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => writer.write_str(name),
            Color::Code(code) => write!(writer, "{code}"),
        }
    }
}

impl str::FromStr for Color {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u16>() {
            Ok(code) => Color::Code(code),
            Err(_) => Color::Named(Cow::Owned(s.to_owned())),
        })
    }
}

// CONVERSIONS

impl From<&'static str> for Color {
    fn from(name: &'static str) -> Self {
        Color::Named(Cow::Borrowed(name))
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Color::Named(Cow::Owned(name))
    }
}

impl From<u8> for Color {
    fn from(code: u8) -> Self {
        Color::Code(code.into())
    }
}

impl From<u16> for Color {
    fn from(code: u16) -> Self {
        Color::Code(code)
    }
}

impl From<MessageKind> for Color {
    fn from(kind: MessageKind) -> Self {
        Color::Named(Cow::Borrowed(kind.name()))
    }
}
