use crate::core::error::Result;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "git-stager";

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Per-user configuration directory for git-stager
pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join(APP_DIR_NAME))
}

/// Location of the JSON config file, which may not exist
pub fn get_config_file() -> Result<PathBuf> {
    Ok(get_config_directory()?.join(CONFIG_FILE_NAME))
}
