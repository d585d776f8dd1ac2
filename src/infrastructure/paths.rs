//! Path helpers for the Zellij sandbox, where the host home is mounted at `/host`.

use std::path::PathBuf;

/// File name of the OTLP trace export inside the data directory.
pub const OTLP_EXPORT_FILE: &str = "scentsphere-otlp.json";

/// Returns the plugin's data directory, `/host/.local/share/zellij/scentsphere`.
///
/// `/host` points at the cwd of the last focused terminal, or the folder
/// Zellij was started from. That is usually the user's home, making the real
/// path `~/.local/share/zellij/scentsphere`.
///
/// ```
/// use scentsphere::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/scentsphere"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("scentsphere")
}

/// Location of the OTLP trace export.
#[must_use]
pub fn otlp_export_path() -> PathBuf {
    get_data_dir().join(OTLP_EXPORT_FILE)
}

/// Maps a leading `~` onto the sandbox's `/host` mount.
///
/// ```
/// use scentsphere::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/vetiver.toml"), "/host/themes/vetiver.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
