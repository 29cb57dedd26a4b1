use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};

/// Returns the application directory under the platform config directory.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
}

/// Returns the platform-specific path for the config file.
///
/// # Returns
/// String containing the path to `config.toml` inside the application directory
pub fn get_config_path() -> String {
    app_dir()
        .join(CONFIG_FILE_NAME)
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
///
/// # Returns
/// String containing the path to the `logs` directory next to the config file
///
/// # Notes
/// - Used when neither `--log-file` nor `log_file_path` is set
pub fn get_log_dir_path() -> String {
    app_dir().join("logs").to_string_lossy().to_string()
}
