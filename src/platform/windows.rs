// Platform paths for Windows
// Data: %APPDATA%/Recents

use std::env;
use std::path::PathBuf;

/// Returns the data directory on Windows.
/// Uses `%APPDATA%/Recents`, falling back to the temp dir if APPDATA is unset.
pub fn get_data_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(appdata).join("Recents")
}
