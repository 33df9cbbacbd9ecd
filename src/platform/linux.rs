// Platform paths for Linux
// Data: ~/.local/share/recents

use std::env;
use std::path::PathBuf;

/// Returns the data directory on Linux.
/// Uses `$XDG_DATA_HOME/recents` if set, otherwise `~/.local/share/recents`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("recents")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("recents")
    }
}
