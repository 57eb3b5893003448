use std::{
    env,
    fmt,
};

/// Environment variables consulted for the locale, in order of precedence.
pub const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// The character encodings a terminal might expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    Ascii,
    Latin1,
}

impl fmt::Display for Encoding {
    fn fmt(&self, writer: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer.write_str(self.name())
    }
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Ascii => "ASCII",
            Encoding::Latin1 => "ISO-8859-1",
        }
    }

    pub fn can_encode(self, c: char) -> bool {
        match self {
            Encoding::Utf8 => true,
            Encoding::Ascii => c.is_ascii(),
            Encoding::Latin1 => u32::from(c) <= 0xFF,
        }
    }

    /// Parses a codeset name such as `UTF-8`, `utf8` or `ANSI_X3.4-1968`.
    pub fn from_codeset(codeset: &str) -> Option<Self> {
        let normalized = codeset
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect::<String>();

        match normalized.as_str() {
            "utf8" => Some(Encoding::Utf8),
            "ascii" | "usascii" | "ansix3.41968" | "646" => Some(Encoding::Ascii),
            "iso88591" | "latin1" | "l1" => Some(Encoding::Latin1),
            _ => None,
        }
    }

    /// The encoding of a locale name like `en_US.UTF-8@euro`.
    ///
    /// `C` and `POSIX` are ASCII. A locale without a codeset uses Latin-1 like
    /// glibc does. Codesets that aren't known are treated as ASCII, the
    /// smallest encoding every terminal can show.
    pub fn from_locale(locale: &str) -> Self {
        let locale = locale.split_once('@').map_or(locale, |(locale, _)| locale);

        match locale.split_once('.') {
            Some((_, codeset)) => {
                Self::from_codeset(codeset).unwrap_or_else(|| {
                    log::debug!("unknown codeset {codeset:?} in locale {locale:?}, assuming ASCII");
                    Encoding::Ascii
                })
            },

            None if matches!(locale, "C" | "POSIX") => Encoding::Ascii,

            None => Encoding::Latin1,
        }
    }

    /// The encoding the environment prefers for terminal output.
    pub fn preferred() -> Self {
        Self::preferred_from(|name| env::var(name).ok())
    }

    pub fn preferred_from(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let locale = LOCALE_VARIABLES
            .into_iter()
            .find_map(|name| lookup(name).filter(|value| !value.is_empty()));

        let encoding = match locale {
            Some(locale) => Self::from_locale(&locale),

            None if cfg!(unix) => Encoding::Ascii,
            None => Encoding::Utf8,
        };

        log::trace!("preferred locale encoding is {encoding}");
        encoding
    }
}
