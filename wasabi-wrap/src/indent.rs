use std::fmt::{
    self,
    Write as _,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentPlace {
    Start,
    Middle,
    End,
}

/// A writer that prefixes every non-empty line with `count` spaces.
///
/// Line breaks are held back until something follows them, so that an
/// indent is never written in front of nothing. A pending line break is
/// written when the writer is finished or dropped.
pub struct IndentWriter<'a> {
    writer: &'a mut dyn fmt::Write,
    count: u16,
    place: IndentPlace,
}

impl Drop for IndentWriter<'_> {
    fn drop(&mut self) {
        self.finish().ok();
    }
}

impl fmt::Write for IndentWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut lines = s.split('\n').peekable();

        while let Some(line) = lines.next() {
            if !line.is_empty() {
                self.finish()?;

                if self.place == IndentPlace::Start {
                    self.write_indent()?;
                }

                self.writer.write_str(line)?;
            }

            if lines.peek().is_some() {
                self.finish()?;
                self.place = IndentPlace::End;
            }
        }

        Ok(())
    }
}

impl IndentWriter<'_> {
    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn place(&self) -> IndentPlace {
        self.place
    }

    pub fn write_indent(&mut self) -> fmt::Result {
        assert_eq!(self.place, IndentPlace::Start);

        write!(self.writer, "{:>count$}", "", count = self.count as usize)?;
        self.place = IndentPlace::Middle;

        Ok(())
    }

    /// Writes the pending line break, if there is one.
    pub fn finish(&mut self) -> fmt::Result {
        if self.place == IndentPlace::End {
            self.writer.write_char('\n')?;
            self.place = IndentPlace::Start;
        }

        Ok(())
    }
}

pub fn indent(writer: &mut dyn fmt::Write, count: u16) -> IndentWriter<'_> {
    IndentWriter {
        writer,
        count,
        place: IndentPlace::Start,
    }
}

#[macro_export]
macro_rules! indent {
    ($writer:ident, $count:expr) => {
        let $writer = &mut $crate::indent($writer, ($count) as u16);
    };
}

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;

    use super::*;

    fn indented(count: u16, parts: &[&str]) -> String {
        let mut output = String::new();

        {
            let writer: &mut dyn fmt::Write = &mut output;
            indent!(writer, count);

            for part in parts {
                writer.write_str(part).unwrap();
            }
        }

        output
    }

    #[test]
    fn lines_are_indented() {
        assert_eq!(indented(2, &["foo\nbar"]), "  foo\n  bar");
        assert_eq!(indented(2, &["foo", "\n", "bar"]), "  foo\n  bar");
        assert_eq!(indented(2, &["fo", "o\nb", "ar"]), "  foo\n  bar");
    }

    #[test]
    fn empty_lines_are_not_indented() {
        assert_eq!(indented(4, &["foo\n\nbar"]), "    foo\n\n    bar");
        assert_eq!(indented(4, &["\nfoo"]), "\n    foo");
    }

    #[test]
    fn trailing_line_break_is_kept() {
        assert_eq!(indented(1, &["foo\n"]), " foo\n");
        assert_eq!(indented(1, &[""]), "");
    }

    #[test]
    fn place() {
        let mut output = String::new();
        let mut writer = indent(&mut output, 3);

        assert_eq!(writer.count(), 3);
        assert_eq!(writer.place(), IndentPlace::Start);

        writer.write_str("x").unwrap();
        assert_eq!(writer.place(), IndentPlace::Middle);

        writer.write_str("\n").unwrap();
        assert_eq!(writer.place(), IndentPlace::End);

        writer.finish().unwrap();
        assert_eq!(writer.place(), IndentPlace::Start);

        drop(writer);
        assert_eq!(output, "   x\n");
    }
}
