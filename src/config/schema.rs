use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::report::{ReportFormat, DEFAULT_REPORT_PREFIX};

pub const DEFAULT_DATA_DIR: &str = "Data";
pub const DEFAULT_MASTER_FILE: &str = "MockData.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration.
///
/// Every field is optional; missing fields fall back to the defaults.
///
/// Example YAML:
/// ```yaml
/// data_dir: Data
/// master_file: MockData.json
/// report_prefix: CustomersCreditReport
/// report_format: xlsx
/// log_level: warn
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the master file and generated reports
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Master customer file name, relative to `data_dir`
    #[serde(default = "default_master_file")]
    pub master_file: String,

    /// File-name prefix for generated reports
    #[serde(default = "default_report_prefix")]
    pub report_prefix: String,

    /// Spreadsheet format: `xlsx` (default) or `csv`
    #[serde(default)]
    pub report_format: ReportFormat,

    /// Log filter used when RUST_LOG is unset (e.g. "warn", "credit_risk=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_master_file() -> String {
    DEFAULT_MASTER_FILE.to_string()
}

fn default_report_prefix() -> String {
    DEFAULT_REPORT_PREFIX.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            master_file: default_master_file(),
            report_prefix: default_report_prefix(),
            report_format: ReportFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Full path of the master customer file
    pub fn master_path(&self) -> PathBuf {
        self.data_dir.join(&self.master_file)
    }
}
