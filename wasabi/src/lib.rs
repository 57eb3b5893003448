//! Terminal output formatting helpers.
//!
//! Colors text with ANSI escape sequences, wraps paragraphs, escapes
//! characters the terminal's locale can't show and guesses whether the
//! terminal understands escape sequences at all.

pub use wasabi_escape::{
    Encoding,
    Errors,
    EscapeError,
    escape,
    escape_lossy,
    locale_escape,
    locale_escape_with,
};
pub use wasabi_style::{
    AnsiStyle,
    COLORS,
    Color,
    ICONS,
    MessageKind,
    color,
    paint,
    supports_ansi,
    supports_ansi_on,
};
pub use wasabi_text::{
    Displayed,
    IntoText,
    to_text,
};
pub use wasabi_wrap::{
    INDENT,
    WRAP_MAX,
    Wrap,
    terminal_width,
    wrap,
};

/// Renders a status line made of the kind's icon and `title`.
///
/// The line is escaped for the locale's encoding, and painted bold in the
/// kind's color if the terminal supports ANSI escape sequences.
pub fn message<'a>(kind: MessageKind, title: impl IntoText<'a>) -> String {
    message_with(kind, title, Encoding::preferred(), supports_ansi())
}

pub fn message_with<'a>(kind: MessageKind, title: impl IntoText<'a>, encoding: Encoding, ansi: bool) -> String {
    let line = format!("{icon} {title}", icon = kind.icon(), title = title.into_text());

    let line = escape_lossy(line, encoding);

    if ansi {
        color(line, Some(kind.color()), None, true).into_owned()
    } else {
        line.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_colored() {
        assert_eq!(
            message_with(MessageKind::Good, "done", Encoding::Utf8, true),
            "\x1B[1;38;5;2m\u{2714} done\x1B[0m"
        );
        assert_eq!(
            message_with(MessageKind::Fail, "broke", Encoding::Utf8, true),
            "\x1B[1;38;5;1m\u{2718} broke\x1B[0m"
        );
    }

    #[test]
    fn message_without_ansi() {
        assert_eq!(
            message_with(MessageKind::Warn, "careful", Encoding::Utf8, false),
            "\u{26a0} careful"
        );
    }

    #[test]
    fn message_icon_is_escaped() {
        assert_eq!(
            message_with(MessageKind::Info, "café", Encoding::Ascii, false),
            "? caf?"
        );
        assert_eq!(
            message_with(MessageKind::Info, "café", Encoding::Latin1, false),
            "? café"
        );
    }

    #[test]
    fn message_coerces_titles() {
        assert_eq!(message_with(MessageKind::Good, 3, Encoding::Utf8, false), "\u{2714} 3");
    }
}
