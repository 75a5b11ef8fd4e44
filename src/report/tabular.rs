use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::customer::Customer;

/// Column order of the tabular report.
pub const TABULAR_HEADER: [&str; 7] = [
    "CustomerId",
    "Name",
    "PaymentHistory",
    "CreditUtilization",
    "AgeOfCreditHistory",
    "CreditScore",
    "RiskStatus",
];

/// Worksheet holding the report inside the workbook.
pub const WORKSHEET_NAME: &str = "Customer Report";

/// Destination format for the tabular report.
///
/// Implementations receive a finished header and rows and only decide how
/// they are laid out on disk.
pub trait TabularWriter: fmt::Debug {
    /// File extension without the leading dot
    fn extension(&self) -> &str;

    /// Write `header` followed by `rows` to `path`, replacing any existing
    /// file.
    fn write(&self, path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<()>;
}

/// Spreadsheet format selected in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ReportFormat {
    pub fn writer(self) -> Box<dyn TabularWriter> {
        match self {
            ReportFormat::Xlsx => Box::new(XlsxWriter),
            ReportFormat::Csv => Box::new(CsvWriter),
        }
    }
}

/// Excel workbook with a single bold-headed worksheet.
///
/// Cells that parse as integers are written as numbers so the sheet can be
/// sorted and summed; everything else is text.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWriter;

impl TabularWriter for XlsxWriter {
    fn extension(&self) -> &str {
        "xlsx"
    }

    fn write(&self, path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(WORKSHEET_NAME)
            .context("Failed to name worksheet")?;

        for (col, title) in header.iter().enumerate() {
            let col = u16::try_from(col).context("Too many spreadsheet columns")?;
            worksheet
                .write_string_with_format(0, col, *title, &bold)
                .context("Failed to write spreadsheet header")?;
        }

        for (index, row) in rows.iter().enumerate() {
            let row_num = u32::try_from(index + 1).context("Too many spreadsheet rows")?;
            for (col, value) in row.iter().enumerate() {
                let col = u16::try_from(col).context("Too many spreadsheet columns")?;
                let written = match value.parse::<i32>() {
                    Ok(number) => worksheet.write_number(row_num, col, f64::from(number)),
                    Err(_) => worksheet.write_string(row_num, col, value.as_str()),
                };
                written.context("Failed to write spreadsheet row")?;
            }
        }
        worksheet.autofit();

        workbook
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Comma-separated values, one record per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriter;

impl TabularWriter for CsvWriter {
    fn extension(&self) -> &str {
        "csv"
    }

    fn write(&self, path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create spreadsheet at {}", path.display()))?;

        writer
            .write_record(header)
            .context("Failed to write spreadsheet header")?;
        for row in rows {
            writer
                .write_record(row)
                .context("Failed to write spreadsheet row")?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// One report row, aligned with [`TABULAR_HEADER`].
pub fn tabular_row(customer: &Customer) -> Vec<String> {
    vec![
        customer.id().to_string(),
        customer.name.clone().unwrap_or_default(),
        customer.payment_history.to_string(),
        customer.credit_utilization.to_string(),
        customer.age_of_credit_history.to_string(),
        customer.credit_score().to_string(),
        customer
            .risk_status()
            .map(|status| status.to_string())
            .unwrap_or_default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::BatchProcessor;
    use calamine::{open_workbook, Data, Reader, Xlsx};

    #[test]
    fn test_row_matches_header_order() {
        let mut customers = vec![Customer::new(Some("Alice".to_string()), 90, 40, 5)];
        BatchProcessor::default().process(&mut customers);

        let row = tabular_row(&customers[0]);
        assert_eq!(row.len(), TABULAR_HEADER.len());
        assert_eq!(row[0], customers[0].id().to_string());
        assert_eq!(row[1], "Alice");
        assert_eq!(row[2], "90");
        assert_eq!(row[3], "40");
        assert_eq!(row[4], "5");
        assert_eq!(row[5], "55");
        assert_eq!(row[6], "Low Risk");
    }

    #[test]
    fn test_row_for_unscored_unnamed_customer() {
        let customer = Customer::new(None, 10, 20, 3);
        let row = tabular_row(&customer);
        assert_eq!(row[1], "");
        assert_eq!(row[5], "0");
        assert_eq!(row[6], "");
    }

    #[test]
    fn test_xlsx_writer_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        let rows = vec![
            vec!["a".to_string(), "Smith, Jane".to_string(), "55".to_string()],
            vec!["b".to_string(), "Bob".to_string(), "34".to_string()],
        ];

        XlsxWriter
            .write(&path, &["Id", "Name", "CreditScore"], &rows)
            .unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec![WORKSHEET_NAME.to_string()]);

        let range = workbook.worksheet_range(WORKSHEET_NAME).unwrap();
        assert_eq!(range.height(), 3);
        let sheet: Vec<&[Data]> = range.rows().collect();
        assert_eq!(sheet[0][0], Data::String("Id".to_string()));
        assert_eq!(sheet[0][2], Data::String("CreditScore".to_string()));
        assert_eq!(sheet[1][1], Data::String("Smith, Jane".to_string()));
        assert_eq!(sheet[1][2], Data::Float(55.0));
        assert_eq!(sheet[2][0], Data::String("b".to_string()));
    }

    #[test]
    fn test_xlsx_writer_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("report.xlsx");
        assert!(XlsxWriter.write(&path, &TABULAR_HEADER, &[]).is_err());
    }

    #[test]
    fn test_csv_writer_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let rows = vec![
            vec!["a".to_string(), "Smith, Jane".to_string()],
            vec!["b".to_string(), "Bob".to_string()],
        ];

        CsvWriter.write(&path, &["Id", "Name"], &rows).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Id,Name\na,\"Smith, Jane\"\nb,Bob\n");
    }

    #[test]
    fn test_csv_writer_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("report.csv");
        assert!(CsvWriter.write(&path, &TABULAR_HEADER, &[]).is_err());
    }

    #[test]
    fn test_report_format_writers() {
        assert_eq!(ReportFormat::default(), ReportFormat::Xlsx);
        assert_eq!(ReportFormat::Xlsx.writer().extension(), "xlsx");
        assert_eq!(ReportFormat::Csv.writer().extension(), "csv");
    }
}
