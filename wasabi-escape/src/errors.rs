use std::{
    fmt::{
        self,
        Write as _,
    },
    str,
};

use crate::Encoding;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EscapeError {
    #[error("{encoding} can't encode character {character:?} at position {position}")]
    Unencodable {
        encoding: Encoding,
        character: char,
        position: usize,
    },

    #[error(
        "unknown error policy '{0}', expected one of strict, replace, ignore, backslashreplace or xmlcharrefreplace"
    )]
    UnknownPolicy(String),
}

/// What to do with characters the encoding can't represent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Errors {
    /// Fail with [`EscapeError::Unencodable`].
    Strict,
    /// Substitute `?`.
    #[default]
    Replace,
    /// Drop the character.
    Ignore,
    /// Substitute a `\xNN`, `\uNNNN` or `\UNNNNNNNN` escape.
    BackslashReplace,
    /// Substitute an XML character reference like `&#10004;`.
    XmlCharRefReplace,
}

pub(crate) type Substitute = fn(&mut String, char);

impl Errors {
    pub const ALL: [Self; 5] = [
        Self::Strict,
        Self::Replace,
        Self::Ignore,
        Self::BackslashReplace,
        Self::XmlCharRefReplace,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Errors::Strict => "strict",
            Errors::Replace => "replace",
            Errors::Ignore => "ignore",
            Errors::BackslashReplace => "backslashreplace",
            Errors::XmlCharRefReplace => "xmlcharrefreplace",
        }
    }

    pub(crate) fn substitute(self) -> Option<Substitute> {
        match self {
            Errors::Strict => None,
            Errors::Replace => Some(replace),
            Errors::Ignore => Some(ignore),
            Errors::BackslashReplace => Some(backslash_replace),
            Errors::XmlCharRefReplace => Some(xml_char_ref_replace),
        }
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, writer: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer.write_str(self.name())
    }
}

impl str::FromStr for Errors {
    type Err = EscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|errors| errors.name() == s)
            .ok_or_else(|| EscapeError::UnknownPolicy(s.to_owned()))
    }
}

pub(crate) fn replace(escaped: &mut String, _: char) {
    escaped.push('?');
}

fn ignore(_: &mut String, _: char) {}

fn backslash_replace(escaped: &mut String, c: char) {
    let code = u32::from(c);

    let written = match code {
        0..=0xFF => write!(escaped, "\\x{code:02x}"),
        0x100..=0xFFFF => write!(escaped, "\\u{code:04x}"),
        _ => write!(escaped, "\\U{code:08x}"),
    };

    written.ok();
}

fn xml_char_ref_replace(escaped: &mut String, c: char) {
    write!(escaped, "&#{code};", code = u32::from(c)).ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        for errors in Errors::ALL {
            assert_eq!(errors.name().parse(), Ok(errors));
        }

        assert_eq!(
            "loud".parse::<Errors>(),
            Err(EscapeError::UnknownPolicy("loud".to_owned()))
        );
        assert_eq!(Errors::default(), Errors::Replace);
    }

    #[test]
    fn substitutions() {
        let mut escaped = String::new();

        for c in ['é', '\u{2714}', '\u{1F600}'] {
            backslash_replace(&mut escaped, c);
        }
        assert_eq!(escaped, r"\xe9\u2714\U0001f600");

        escaped.clear();
        xml_char_ref_replace(&mut escaped, '\u{2714}');
        assert_eq!(escaped, "&#10004;");
    }
}
