use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve a report path to the absolute path handed to the OS.
///
/// # Errors
/// Returns error if the file doesn't exist
pub fn resolve_report(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .with_context(|| format!("Report not found at {}", path.display()))
}

/// Open a report file with the system's default handler for its type
///
/// # Arguments
/// * `path` - The report file to open (e.g., the generated spreadsheet)
///
/// # Errors
/// Returns error if the file doesn't exist or no handler can be launched
pub fn open_report(path: &Path) -> Result<()> {
    let absolute = resolve_report(path)?;
    open::that(&absolute)
        .with_context(|| format!("Failed to open report at {}", absolute.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_report_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_report(&dir.path().join("missing.xlsx")).unwrap_err();
        assert!(err.to_string().contains("Report not found"));
    }

    #[test]
    fn test_resolve_report_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        std::fs::write(&path, b"").unwrap();

        let resolved = resolve_report(&path).unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved.file_name().unwrap(), "report.xlsx");
    }
}
