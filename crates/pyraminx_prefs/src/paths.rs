use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

const PREFS_FILE_NAME: &str = "pyraminx-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

lazy_static! {
    static ref PREFS_FILE: Option<PathBuf> = prefs_file_path();
}

/// Returns the user preferences file in the platform config directory.
pub fn prefs_file() -> Result<&'static Path> {
    PREFS_FILE
        .as_deref()
        .ok_or_eyre("no config directory for user preferences")
}

fn prefs_file_path() -> Option<PathBuf> {
    match ProjectDirs::from("", "", "Pyraminx") {
        Some(dirs) => Some(
            dirs.config_dir()
                .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")),
        ),
        None => {
            log::error!("Error getting config directory");
            None
        }
    }
}
