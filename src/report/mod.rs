pub mod exporter;
pub mod naming;
pub mod tabular;

pub use exporter::ReportExporter;
pub use naming::{format_timestamp, report_file_name, DEFAULT_REPORT_PREFIX, TIMESTAMP_FORMAT};
pub use tabular::{
    tabular_row, CsvWriter, ReportFormat, TabularWriter, XlsxWriter, TABULAR_HEADER, WORKSHEET_NAME,
};
