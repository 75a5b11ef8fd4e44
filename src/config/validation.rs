use std::path::Path;

use super::schema::Config;
use tracing_subscriber::EnvFilter;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.data_dir.as_os_str().is_empty() {
        errors.push("data_dir: must not be empty".to_string());
    }

    let master = config.master_file.trim();
    if master.is_empty() {
        errors.push("master_file: must not be empty".to_string());
    } else if Path::new(master).components().count() != 1 {
        errors.push(format!(
            "master_file: '{}' must be a plain file name inside data_dir",
            config.master_file
        ));
    }

    if config.report_prefix.trim().is_empty() {
        errors.push("report_prefix: must not be empty".to_string());
    } else if config
        .report_prefix
        .chars()
        .any(|c| std::path::is_separator(c) || c.is_control())
    {
        errors.push(format!(
            "report_prefix: '{}' must not contain path separators",
            config.report_prefix
        ));
    }

    if let Err(e) = EnvFilter::try_new(&config.log_level) {
        errors.push(format!(
            "log_level: invalid filter '{}' - {}",
            config.log_level, e
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
