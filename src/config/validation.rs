use crate::constants::LOG_LEVELS;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
/// - Log level must be one of `trace`, `debug`, `info`, `warn`, `error`
pub fn validate_config(log_file_path: &Option<String>, log_level: &str) -> Result<(), AppError> {
    if !LOG_LEVELS.contains(&log_level) {
        return Err(AppError::config_error(format!(
            "Unknown log level '{log_level}', expected one of {}",
            LOG_LEVELS.join(", ")
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
