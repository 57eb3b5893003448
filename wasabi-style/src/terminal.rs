use std::env;

/// Platform identifier of the legacy handhelds that never render escapes.
pub const LEGACY_PLATFORM: &str = "Pocket PC";

pub const WINDOWS_PLATFORM: &str = "windows";

/// Environment variable set by the ANSICON console wrapper on Windows.
pub const ANSICON: &str = "ANSICON";

/// Returns whether the running system's terminal supports ANSI escape
/// sequences.
///
/// This is a rough approximation. The terminal is never queried, only the
/// platform and the `ANSICON` environment variable are checked.
pub fn supports_ansi() -> bool {
    supports_ansi_on(env::consts::OS, env::var_os(ANSICON).is_some())
}

pub fn supports_ansi_on(platform: &str, ansicon: bool) -> bool {
    platform != LEGACY_PLATFORM && (platform != WINDOWS_PLATFORM || ansicon)
}
