use std::{
    borrow::Cow,
    fmt::{
        self,
        Write as _,
    },
};

use wasabi_text::IntoText;

use crate::Color;

pub const RESET: &str = "\x1B[0m";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnsiStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl AnsiStyle {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    #[must_use]
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !self.bold
    }

    /// Writes the escape sequence that switches to this style. Writes
    /// nothing for a plain style.
    pub fn write_prefix(&self, writer: &mut dyn fmt::Write) -> fmt::Result {
        struct Splicer {
            written: bool,
        }

        impl Splicer {
            fn splice(&mut self, writer: &mut dyn fmt::Write) -> fmt::Result {
                if self.written {
                    writer.write_char(';')
                } else {
                    self.written = true;
                    writer.write_str("\x1B[")
                }
            }

            fn finish(self, writer: &mut dyn fmt::Write) -> fmt::Result {
                if self.written {
                    writer.write_char('m')
                } else {
                    Ok(())
                }
            }
        }

        let mut splicer = Splicer { written: false };

        if self.bold {
            splicer.splice(writer)?;
            writer.write_char('1')?;
        }

        if let Some(fg) = &self.fg {
            splicer.splice(writer)?;
            write!(writer, "38;5;{code}", code = fg.resolve())?;
        }

        if let Some(bg) = &self.bg {
            splicer.splice(writer)?;
            write!(writer, "48;5;{code}", code = bg.resolve())?;
        }

        splicer.finish(writer)
    }

    /// Wraps `text` in this style's escape sequence and a reset. Plain
    /// styles return the text untouched.
    pub fn paint<'a>(&self, text: impl IntoText<'a>) -> Cow<'a, str> {
        let text = text.into_text();

        if self.is_plain() {
            return text;
        }

        let mut painted = String::with_capacity(text.len() + 24);

        self.write_prefix(&mut painted).ok();
        painted.push_str(&text);
        painted.push_str(RESET);

        Cow::Owned(painted)
    }

    pub fn yansi(&self) -> yansi::Style {
        let mut style = yansi::Style::new();

        if let Some(fg) = self.fg.as_ref().and_then(Color::yansi) {
            style = style.fg(fg);
        }

        if let Some(bg) = self.bg.as_ref().and_then(Color::yansi) {
            style = style.bg(bg);
        }

        if self.bold {
            style = style.bold();
        }

        style
    }
}

/// Colors `text` with the given foreground, background and boldness.
///
/// Colors are looked up in [`COLORS`](crate::COLORS) by name, codes pass
/// through. If nothing is set, `text` is returned as is.
pub fn color<'a>(text: impl IntoText<'a>, fg: Option<Color>, bg: Option<Color>, bold: bool) -> Cow<'a, str> {
    AnsiStyle { fg, bg, bold }.paint(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::COLORS;

    #[test]
    fn plain_is_identity() {
        assert!(matches!(color("x", None, None, false), Cow::Borrowed("x")));
        assert_eq!(color("", None, None, false), "");
    }

    #[test]
    fn foreground() {
        assert_eq!(color("x", Some("red".into()), None, false), "\x1B[38;5;1mx\x1B[0m");
    }

    #[test]
    fn bold_comes_first() {
        assert_eq!(
            color("x", Some("red".into()), None, true),
            "\x1B[1;38;5;1mx\x1B[0m"
        );
        assert_eq!(color("x", None, None, true), "\x1B[1mx\x1B[0m");
    }

    #[test]
    fn background_comes_last() {
        assert_eq!(
            color("x", Some(Color::Code(200)), Some("blue".into()), true),
            "\x1B[1;38;5;200;48;5;4mx\x1B[0m"
        );
        assert_eq!(color("x", None, Some("grey".into()), false), "\x1B[48;5;8mx\x1B[0m");
    }

    #[test]
    fn every_name_uses_its_code() {
        for (name, code) in &COLORS {
            assert_eq!(
                color("t", Some(Color::from(*name)), None, false),
                format!("\x1B[38;5;{code}mt\x1B[0m")
            );
        }
    }

    #[test]
    fn unknown_name_is_verbatim() {
        assert_eq!(
            color("x", Some("magenta".into()), None, false),
            "\x1B[38;5;magentamx\x1B[0m"
        );
    }

    #[test]
    fn builder() {
        let style = AnsiStyle::new().fg("good").bg(0u8).bold();

        assert!(!style.is_plain());
        assert_eq!(style.paint("ok"), "\x1B[1;38;5;2;48;5;0mok\x1B[0m");
        assert!(AnsiStyle::new().is_plain());
    }

    #[test]
    fn yansi() {
        let style = AnsiStyle::new().fg("yellow").yansi();

        assert_eq!(style.foreground, Some(yansi::Color::Fixed(3)));
        assert_eq!(style.background, None);
    }
}
