//! Path utilities for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! normally maps to the user's home directory.

use std::path::PathBuf;

/// Trace file name inside [`get_data_dir`].
pub const TRACE_FILE_NAME: &str = "zticker-otlp.json";

/// Returns the plugin's data directory, `/host/.local/share/zellij/zticker`.
///
/// # Examples
///
/// ```
/// use zticker::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/zticker");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zticker")
}

/// Location of the OTLP/JSON trace file.
#[must_use]
pub fn trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Maps a leading `~` to the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use zticker::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(
            trace_file(),
            PathBuf::from("/host/.local/share/zellij/zticker/zticker-otlp.json")
        );
    }

    #[test]
    fn only_leading_tilde_expands() {
        assert_eq!(expand_tilde("~/a/~/b"), "/host/a/~/b");
        assert_eq!(expand_tilde("relative/~"), "relative/~");
    }
}
