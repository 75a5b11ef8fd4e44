use chrono::{DateTime, Utc};

/// Default file-name prefix for generated reports
pub const DEFAULT_REPORT_PREFIX: &str = "CustomersCreditReport";

/// `yyyyMMdd_HHmmss`, UTC, second resolution
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Build a report file name: `{prefix}{timestamp}.{extension}`.
///
/// Two reports of the same kind generated within one second get the same
/// name.
pub fn report_file_name(prefix: &str, at: DateTime<Utc>, extension: &str) -> String {
    format!("{}{}.{}", prefix, format_timestamp(at), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(format_timestamp(at), "20240307_090502");
    }

    #[test]
    fn test_report_file_name() {
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            report_file_name(DEFAULT_REPORT_PREFIX, at, "json"),
            "CustomersCreditReport20241231_235959.json"
        );
    }

    #[test]
    fn test_sub_second_times_share_a_name() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = at + chrono::Duration::milliseconds(900);
        assert_eq!(
            report_file_name("R", at, "csv"),
            report_file_name("R", later, "csv")
        );
    }
}
