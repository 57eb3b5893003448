use std::{
    fmt::{
        self,
        Write as _,
    },
    iter,
};

use wasabi_text::IntoText;

use crate::indent;

pub const WRAP_MAX: u16 = 80;
pub const INDENT: u16 = 4;

const TAB_SIZE: usize = 8;

/// Paragraph wrapping options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrap {
    /// Maximum line width. The indentation is subtracted from it once to get
    /// the width of a line, and that width includes the indentation again.
    pub max: u16,
    /// Number of spaces every line is prefixed with.
    pub indent: u16,
}

impl Default for Wrap {
    fn default() -> Self {
        Self {
            max: WRAP_MAX,
            indent: INDENT,
        }
    }
}

impl Wrap {
    pub fn new(max: u16, indent: u16) -> Self {
        Self { max, indent }
    }

    /// The width of a line, indentation included.
    pub fn width(self) -> usize {
        self.max.saturating_sub(self.indent).into()
    }

    /// The width left for words on a line.
    pub fn content_width(self) -> usize {
        self.width().saturating_sub(self.indent.into())
    }

    pub fn wrap<'a>(self, text: impl IntoText<'a>) -> String {
        let mut wrapped = String::new();
        self.wrap_into(&mut wrapped, text).ok();
        wrapped
    }

    /// Reflows `text` into indented lines separated by line breaks. Words,
    /// hyphenated ones included, are never split. A word that doesn't fit on
    /// a line goes alone on its own line.
    pub fn wrap_into<'a>(self, writer: &mut dyn fmt::Write, text: impl IntoText<'a>) -> fmt::Result {
        let text = normalize(&text.into_text());
        let content_width = self.content_width();

        indent!(writer, self.indent);

        let mut chunks = chunks(&text);
        chunks.reverse();

        let mut line = Vec::new();
        let mut wrote = false;

        while !chunks.is_empty() {
            line.clear();
            let mut line_width = 0;

            if wrote && chunks.last().is_some_and(|chunk| is_space(chunk)) {
                chunks.pop();
            }

            while let Some(&chunk) = chunks.last() {
                let chunk_width = chunk.chars().count();

                if line_width + chunk_width > content_width {
                    break;
                }

                line.push(chunk);
                line_width += chunk_width;
                chunks.pop();
            }

            if line.is_empty()
                && let Some(chunk) = chunks.pop()
            {
                line.push(chunk);
            }

            if line.last().is_some_and(|chunk| is_space(chunk)) {
                line.pop();
            }

            if line.is_empty() {
                continue;
            }

            if wrote {
                writer.write_char('\n')?;
            }

            for chunk in &line {
                writer.write_str(chunk)?;
            }

            wrote = true;
        }

        Ok(())
    }
}

/// Wraps `text` at `wrap_max` columns, indenting every line by `indent`
/// spaces.
pub fn wrap<'a>(text: impl IntoText<'a>, wrap_max: u16, indent: u16) -> String {
    Wrap::new(wrap_max, indent).wrap(text)
}

/// Expands tabs and turns every other whitespace character into a space.
fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut column = 0;

    for c in text.chars() {
        match c {
            '\t' => {
                let spaces = TAB_SIZE - column % TAB_SIZE;

                normalized.extend(iter::repeat_n(' ', spaces));
                column += spaces;
            },

            '\n' | '\r' => {
                normalized.push(' ');
                column = 0;
            },

            '\x0B' | '\x0C' => {
                normalized.push(' ');
                column += 1;
            },

            c => {
                normalized.push(c);
                column += 1;
            },
        }
    }

    normalized
}

fn is_space(chunk: &str) -> bool {
    chunk.starts_with(' ')
}

/// Splits normalized text into alternating runs of words and spaces.
fn chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut spaces = None;

    for (index, c) in text.char_indices() {
        let space = c == ' ';

        if spaces.is_some_and(|spaces| spaces != space) {
            chunks.push(&text[start..index]);
            start = index;
        }

        spaces = Some(space);
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}
