//! Mangling of characters the terminal's locale can't encode.
//!
//! Printing an icon like `✔` to a terminal that expects ASCII either fails or
//! produces garbage. [`locale_escape`] replaces such characters before they
//! reach the terminal.

mod encoding;
mod errors;

use std::borrow::Cow;

use wasabi_text::IntoText;

pub use crate::{
    encoding::*,
    errors::*,
};

/// Replaces every character the preferred locale encoding can't represent
/// with `?`.
pub fn locale_escape<'a>(text: impl IntoText<'a>) -> Cow<'a, str> {
    escape_lossy(text, Encoding::preferred())
}

/// Replaces every character `encoding` can't represent with `?`.
pub fn escape_lossy<'a>(text: impl IntoText<'a>, encoding: Encoding) -> Cow<'a, str> {
    substitute(text.into_text(), encoding, errors::replace)
}

/// Like [`locale_escape`], but with the given error policy.
pub fn locale_escape_with<'a>(text: impl IntoText<'a>, errors: Errors) -> Result<Cow<'a, str>, EscapeError> {
    escape(text, Encoding::preferred(), errors)
}

pub fn escape<'a>(text: impl IntoText<'a>, encoding: Encoding, errors: Errors) -> Result<Cow<'a, str>, EscapeError> {
    let text = text.into_text();

    match errors.substitute() {
        Some(substitute_with) => Ok(substitute(text, encoding, substitute_with)),

        None => {
            let unencodable = text.chars().enumerate().find(|&(_, c)| !encoding.can_encode(c));

            match unencodable {
                Some((position, character)) => {
                    Err(EscapeError::Unencodable {
                        encoding,
                        character,
                        position,
                    })
                },

                None => Ok(text),
            }
        },
    }
}

fn substitute<'a>(text: Cow<'a, str>, encoding: Encoding, substitute_with: Substitute) -> Cow<'a, str> {
    let first = text
        .char_indices()
        .find_map(|(index, c)| (!encoding.can_encode(c)).then_some(index));

    let Some(index) = first else {
        return text;
    };

    let mut escaped = String::with_capacity(text.len());
    escaped.push_str(&text[..index]);

    for c in text[index..].chars() {
        if encoding.can_encode(c) {
            escaped.push(c);
        } else {
            substitute_with(&mut escaped, c);
        }
    }

    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        for encoding in [Encoding::Utf8, Encoding::Ascii, Encoding::Latin1] {
            for errors in Errors::ALL {
                let escaped = escape("plain ascii text", encoding, errors).unwrap();
                assert!(matches!(escaped, Cow::Borrowed("plain ascii text")));
            }
        }

        assert_eq!(locale_escape("plain ascii text"), "plain ascii text");
        assert_eq!(escape_lossy("plain ascii text", Encoding::Ascii), "plain ascii text");
    }

    #[test]
    fn replace() {
        assert_eq!(
            escape("\u{2714} done", Encoding::Ascii, Errors::Replace).unwrap(),
            "? done"
        );
        assert_eq!(
            escape("café \u{2714}", Encoding::Latin1, Errors::Replace).unwrap(),
            "café ?"
        );
        assert_eq!(
            escape("café \u{2714}", Encoding::Utf8, Errors::Replace).unwrap(),
            "café \u{2714}"
        );
        assert_eq!(escape_lossy("\u{2714} done", Encoding::Ascii), "? done");
    }

    #[test]
    fn other_policies() {
        assert_eq!(escape("a\u{2714}b", Encoding::Ascii, Errors::Ignore).unwrap(), "ab");
        assert_eq!(
            escape("é\u{2714}", Encoding::Ascii, Errors::BackslashReplace).unwrap(),
            r"\xe9\u2714"
        );
        assert_eq!(
            escape("\u{26a0} warn", Encoding::Ascii, Errors::XmlCharRefReplace).unwrap(),
            "&#9888; warn"
        );
    }

    #[test]
    fn strict() {
        assert_eq!(
            escape("ok\u{2714}", Encoding::Ascii, Errors::Strict),
            Err(EscapeError::Unencodable {
                encoding: Encoding::Ascii,
                character: '\u{2714}',
                position: 2,
            })
        );
        assert_eq!(escape("café", Encoding::Latin1, Errors::Strict).unwrap(), "café");
    }

    #[test]
    fn error_message() {
        let error = escape("\u{2139}", Encoding::Ascii, Errors::Strict).unwrap_err();

        assert_eq!(error.to_string(), "ASCII can't encode character 'ℹ' at position 0");
    }

    #[test]
    fn coerces_values() {
        assert_eq!(escape(42, Encoding::Ascii, Errors::Replace).unwrap(), "42");
    }
}
