//! Colors, message kinds and ANSI escape sequences.

mod ansi;
mod color;
mod message;
mod terminal;

pub use crate::{
    ansi::*,
    color::*,
    message::*,
    terminal::*,
};

pub fn paint<T>(value: T, style: yansi::Style) -> yansi::Painted<T> {
    let mut painted = yansi::Painted::new(value);
    painted.style = style;
    painted
}
