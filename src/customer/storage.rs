use super::types::Customer;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Load the customer list from a JSON master file.
///
/// A missing file or a top-level `null` yields an empty list.
/// Malformed JSON is an error.
pub fn load_customers(path: &Path) -> Result<Vec<Customer>> {
    if !path.exists() {
        debug!(path = %path.display(), "master file not found, starting empty");
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open customer file at {}", path.display()))?;

    let customers: Option<Vec<Customer>> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse customer file at {}", path.display()))?;

    let customers = customers.unwrap_or_default();
    debug!(path = %path.display(), count = customers.len(), "loaded customers");
    Ok(customers)
}

/// Write the whole customer list to the master file atomically.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_customers(path: &Path, customers: &[Customer]) -> Result<()> {
    write_json_atomic(path, customers)?;
    debug!(path = %path.display(), count = customers.len(), "saved customers");
    Ok(())
}

/// Serialize a customer list as pretty JSON into `path`, replacing any
/// existing file in one step.
pub(crate) fn write_json_atomic(path: &Path, customers: &[Customer]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, customers)
        .context("Failed to serialize customers")?;

    file.commit()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
