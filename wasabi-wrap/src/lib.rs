//! Paragraph wrapping with indentation.

mod indent;
mod wrap;

use std::sync::LazyLock;

pub use crate::{
    indent::*,
    wrap::*,
};

static TERMINAL_WIDTH: LazyLock<u16> =
    LazyLock::new(|| terminal_size::terminal_size().map_or(WRAP_MAX, |(width, _)| width.0));

/// Width of the attached terminal in columns, or [`WRAP_MAX`] when there is
/// no terminal to ask.
pub fn terminal_width() -> u16 {
    *TERMINAL_WIDTH
}
