use crate::domain::ports::ReportingSink;
use crate::domain::request::BillRequest;
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reporting sink that renders audit records as CSV files under a data directory.
///
/// Every processed request gets its own `invoice_<id>.csv`; the bulk export is
/// written to `daily_log.csv`, replacing any previous export.
pub struct CsvReportingSink {
    data_dir: PathBuf,
}

impl CsvReportingSink {
    /// Creates the sink, creating the data directory if it does not exist.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn write_records(&self, path: &Path, records: &[BillRequest]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl ReportingSink for CsvReportingSink {
    async fn record_invoice(&self, request: &BillRequest) -> Result<()> {
        let path = self.data_dir.join(format!("invoice_{}.csv", request.id));
        self.write_records(&path, std::slice::from_ref(request))
    }

    async fn write_daily_log(&self, history: &[BillRequest]) -> Result<()> {
        self.write_records(&self.data_dir.join("daily_log.csv"), history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::Amount;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn processed(id: &str, urgent: bool) -> BillRequest {
        let mut request =
            BillRequest::new(id, "electricity", Amount::new(dec!(55.5)).unwrap(), urgent);
        request.mark_processed(Utc::now());
        request
    }

    #[tokio::test]
    async fn test_invoice_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvReportingSink::new(dir.path()).unwrap();

        sink.record_invoice(&processed("42", true)).await.unwrap();

        let contents =
            std::fs::read_to_string(dir.path().join("invoice_42.csv")).unwrap();
        assert!(contents.starts_with("id,type,amount,timestamp,urgency"));
        assert!(contents.contains("42,electricity,55.5,"));
        assert!(contents.contains("Urgent"));
    }

    #[tokio::test]
    async fn test_daily_log_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvReportingSink::new(dir.path()).unwrap();

        let history = vec![processed("1", false), processed("2", true)];
        sink.write_daily_log(&history).await.unwrap();

        let contents =
            std::fs::read_to_string(dir.path().join("daily_log.csv")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,"));
        assert!(lines[2].starts_with("2,"));
        assert!(lines[1].ends_with("Normal"));
        assert!(lines[2].ends_with("Urgent"));
    }

    #[tokio::test]
    async fn test_creates_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("data");
        CsvReportingSink::new(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
