use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use super::naming::{report_file_name, DEFAULT_REPORT_PREFIX};
use super::tabular::{tabular_row, TabularWriter, XlsxWriter, TABULAR_HEADER};
use crate::customer::storage::write_json_atomic;
use crate::customer::Customer;
use crate::output::format_customer_line;

/// Writes enriched customer collections out as report files.
///
/// Both exports name their file `{prefix}{yyyyMMdd_HHmmss}.{ext}` inside the
/// output directory, overwrite an existing file of the same name, and are
/// independent of each other: a failed tabular export leaves a finished
/// structured export in place.
#[derive(Debug)]
pub struct ReportExporter {
    output_dir: PathBuf,
    prefix: String,
    tabular: Box<dyn TabularWriter>,
}

impl ReportExporter {
    /// Exporter writing into `output_dir` with the default prefix and Excel
    /// workbooks.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: DEFAULT_REPORT_PREFIX.to_string(),
            tabular: Box::new(XlsxWriter),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_tabular_writer(mut self, writer: Box<dyn TabularWriter>) -> Self {
        self.tabular = writer;
        self
    }

    /// Path a report with `extension` generated at `at` would be written to.
    pub fn report_path(&self, at: DateTime<Utc>, extension: &str) -> PathBuf {
        self.output_dir
            .join(report_file_name(&self.prefix, at, extension))
    }

    /// Export the full collection as JSON, timestamped now.
    ///
    /// Writes one summary line per customer to `out` before writing the file.
    pub fn export_structured<W: Write>(
        &self,
        customers: &[Customer],
        out: &mut W,
    ) -> Result<PathBuf> {
        self.export_structured_at(customers, Utc::now(), out)
    }

    pub fn export_structured_at<W: Write>(
        &self,
        customers: &[Customer],
        at: DateTime<Utc>,
        out: &mut W,
    ) -> Result<PathBuf> {
        for customer in customers {
            writeln!(out, "{}", format_customer_line(customer))
                .context("Failed to write report summary")?;
        }

        let path = self.report_path(at, "json");
        self.ensure_output_dir()?;
        write_json_atomic(&path, customers)
            .with_context(|| format!("Failed to export JSON report to {}", path.display()))?;

        info!(path = %path.display(), count = customers.len(), "wrote JSON report");
        Ok(path)
    }

    /// Export the collection as a spreadsheet, timestamped now.
    pub fn export_tabular(&self, customers: &[Customer]) -> Result<PathBuf> {
        self.export_tabular_at(customers, Utc::now())
    }

    pub fn export_tabular_at(&self, customers: &[Customer], at: DateTime<Utc>) -> Result<PathBuf> {
        let rows: Vec<Vec<String>> = customers.iter().map(tabular_row).collect();

        let path = self.report_path(at, self.tabular.extension());
        self.ensure_output_dir()?;
        self.tabular
            .write(&path, &TABULAR_HEADER, &rows)
            .with_context(|| format!("Failed to export spreadsheet report to {}", path.display()))?;

        info!(path = %path.display(), count = rows.len(), "wrote spreadsheet report");
        Ok(path)
    }

    fn ensure_output_dir(&self) -> Result<()> {
        if !self.output_dir.as_os_str().is_empty() && !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir).with_context(|| {
                format!(
                    "Failed to create report directory at {}",
                    self.output_dir.display()
                )
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::load_customers;
    use crate::report::tabular::{CsvWriter, WORKSHEET_NAME};
    use crate::scoring::BatchProcessor;
    use chrono::TimeZone;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use std::cell::RefCell;
    use std::io;
    use std::path::Path;
    use std::rc::Rc;

    fn create_enriched_customers() -> Vec<Customer> {
        let mut customers = vec![
            Customer::new(Some("Alice".to_string()), 90, 40, 5),
            Customer::new(Some("Bob".to_string()), 70, 90, 15),
            Customer::new(None, 100, 0, 12),
        ];
        BatchProcessor::default().process(&mut customers);
        customers
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 14, 3, 9).unwrap()
    }

    #[test]
    fn test_structured_path_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = ReportExporter::new(dir.path());

        let path = exporter
            .export_structured_at(&create_enriched_customers(), fixed_time(), &mut io::sink())
            .unwrap();

        assert_eq!(
            path,
            dir.path().join("CustomersCreditReport20240517_140309.json")
        );
        assert!(path.exists());
    }

    #[test]
    fn test_structured_writes_summary_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        ReportExporter::new(dir.path())
            .export_structured_at(&create_enriched_customers(), fixed_time(), &mut out)
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name: Alice, Credit Score: 55, Risk Status: Low Risk");
        assert_eq!(lines[1], "Name: Bob, Credit Score: 34, Risk Status: High Risk");
        assert_eq!(lines[2], "Name: (unnamed), Credit Score: 73, Risk Status: Low Risk");
    }

    #[test]
    fn test_structured_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let customers = create_enriched_customers();

        let path = ReportExporter::new(dir.path())
            .export_structured(&customers, &mut io::sink())
            .unwrap();
        let loaded = load_customers(&path).unwrap();

        assert_eq!(loaded.len(), customers.len());
        assert_eq!(loaded, customers);
    }

    #[test]
    fn test_default_tabular_is_xlsx_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let customers = create_enriched_customers();

        let path = ReportExporter::new(dir.path())
            .export_tabular_at(&customers, fixed_time())
            .unwrap();
        assert_eq!(
            path,
            dir.path().join("CustomersCreditReport20240517_140309.xlsx")
        );

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range(WORKSHEET_NAME).unwrap();
        let rows: Vec<&[Data]> = range.rows().collect();
        assert_eq!(rows.len(), customers.len() + 1);

        let header: Vec<String> = rows[0].iter().map(|cell| cell.to_string()).collect();
        assert_eq!(header, TABULAR_HEADER);
        for (row, customer) in rows[1..].iter().zip(&customers) {
            assert_eq!(row[0], Data::String(customer.id().to_string()));
            assert_eq!(row[5], Data::Float(f64::from(customer.credit_score())));
        }
        assert_eq!(rows[2][1], Data::String("Bob".to_string()));
        assert_eq!(rows[2][6], Data::String("High Risk".to_string()));
    }

    #[test]
    fn test_tabular_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let customers = create_enriched_customers();

        let path = ReportExporter::new(dir.path())
            .with_tabular_writer(Box::new(CsvWriter))
            .export_tabular_at(&customers, fixed_time())
            .unwrap();
        assert_eq!(
            path,
            dir.path().join("CustomersCreditReport20240517_140309.csv")
        );

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let header: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(header, TABULAR_HEADER);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), customers.len());
        for (row, customer) in rows.iter().zip(&customers) {
            assert_eq!(&row[0], customer.id().to_string());
            assert_eq!(&row[5], customer.credit_score().to_string());
        }
        assert_eq!(&rows[1][1], "Bob");
        assert_eq!(&rows[1][6], "High Risk");
        assert_eq!(&rows[2][1], "");
    }

    #[test]
    fn test_tabular_empty_collection_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = ReportExporter::new(dir.path())
            .with_tabular_writer(Box::new(CsvWriter))
            .export_tabular(&[])
            .unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap().len(), 7);
        assert_eq!(reader.records().count(), 0);
    }

    #[test]
    fn test_same_second_export_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = ReportExporter::new(dir.path());
        let customers = create_enriched_customers();

        let first = exporter
            .export_structured_at(&customers, fixed_time(), &mut io::sink())
            .unwrap();
        let second = exporter
            .export_structured_at(&customers[..1], fixed_time(), &mut io::sink())
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(load_customers(&second).unwrap().len(), 1);
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("Data");
        let path = ReportExporter::new(&nested)
            .export_structured(&create_enriched_customers(), &mut io::sink())
            .unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn test_custom_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = ReportExporter::new(dir.path()).with_prefix("Weekly");
        let path = exporter.report_path(fixed_time(), "json");
        assert_eq!(path, dir.path().join("Weekly20240517_140309.json"));
    }

    #[derive(Debug, Default, Clone)]
    struct RecordingWriter {
        written: Rc<RefCell<Vec<(PathBuf, usize, usize)>>>,
    }

    impl TabularWriter for RecordingWriter {
        fn extension(&self) -> &str {
            "xlsx"
        }

        fn write(&self, path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
            self.written
                .borrow_mut()
                .push((path.to_path_buf(), header.len(), rows.len()));
            Ok(())
        }
    }

    #[test]
    fn test_swapped_tabular_writer() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = RecordingWriter::default();
        let exporter =
            ReportExporter::new(dir.path()).with_tabular_writer(Box::new(recorder.clone()));

        let path = exporter
            .export_tabular_at(&create_enriched_customers(), fixed_time())
            .unwrap();

        assert_eq!(
            path,
            dir.path().join("CustomersCreditReport20240517_140309.xlsx")
        );
        let written = recorder.written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0], (path, 7, 3));
    }
}
