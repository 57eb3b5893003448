//! Coercion of arbitrary values to text.
//!
//! Every formatting helper in wasabi accepts `impl IntoText<'a>` so callers
//! can hand over string slices, owned strings, paths or plain numbers alike.
//! Values that already are text pass through without being copied.

use std::{
    borrow::Cow,
    ffi::{
        OsStr,
        OsString,
    },
    fmt,
    path::{
        Path,
        PathBuf,
    },
};

pub trait IntoText<'a> {
    fn into_text(self) -> Cow<'a, str>;
}

/// Coerces `value` to text. Text is returned unchanged, everything else goes
/// through its canonical string representation.
pub fn to_text<'a>(value: impl IntoText<'a>) -> Cow<'a, str> {
    value.into_text()
}

/// Wraps any [`fmt::Display`] value so it can be used where text is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displayed<T>(pub T);

impl<'a, T: fmt::Display> IntoText<'a> for Displayed<T> {
    fn into_text(self) -> Cow<'a, str> {
        Cow::Owned(self.0.to_string())
    }
}

// TEXT

impl<'a> IntoText<'a> for &'a str {
    fn into_text(self) -> Cow<'a, str> {
        Cow::Borrowed(self)
    }
}

impl<'a> IntoText<'a> for &'a String {
    fn into_text(self) -> Cow<'a, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<'a> IntoText<'a> for String {
    fn into_text(self) -> Cow<'a, str> {
        Cow::Owned(self)
    }
}

impl<'a> IntoText<'a> for Box<str> {
    fn into_text(self) -> Cow<'a, str> {
        Cow::Owned(self.into_string())
    }
}

impl<'a> IntoText<'a> for Cow<'a, str> {
    fn into_text(self) -> Cow<'a, str> {
        self
    }
}

impl<'a, 'b: 'a> IntoText<'a> for &'a Cow<'b, str> {
    fn into_text(self) -> Cow<'a, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<'a> IntoText<'a> for fmt::Arguments<'_> {
    fn into_text(self) -> Cow<'a, str> {
        match self.as_str() {
            Some(literal) => Cow::Borrowed(literal),
            None => Cow::Owned(self.to_string()),
        }
    }
}

// PATH CONVERSIONS

impl<'a> IntoText<'a> for &'a Path {
    fn into_text(self) -> Cow<'a, str> {
        self.to_string_lossy()
    }
}

impl<'a> IntoText<'a> for &'a PathBuf {
    fn into_text(self) -> Cow<'a, str> {
        self.as_path().to_string_lossy()
    }
}

impl<'a> IntoText<'a> for PathBuf {
    fn into_text(self) -> Cow<'a, str> {
        self.into_os_string().into_text()
    }
}

impl<'a> IntoText<'a> for &'a OsStr {
    fn into_text(self) -> Cow<'a, str> {
        self.to_string_lossy()
    }
}

impl<'a> IntoText<'a> for OsString {
    fn into_text(self) -> Cow<'a, str> {
        match self.into_string() {
            Ok(string) => Cow::Owned(string),
            Err(os) => Cow::Owned(os.to_string_lossy().into_owned()),
        }
    }
}

// DISPLAY CONVERSIONS

macro_rules! displayed {
    ($($type:ty),* $(,)?) => {
        $(
            impl<'a> IntoText<'a> for $type {
                fn into_text(self) -> Cow<'a, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

displayed! {
    bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
}
