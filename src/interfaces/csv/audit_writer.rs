use crate::domain::request::BillRequest;
use crate::error::Result;
use std::io::Write;

/// Renders a history snapshot as CSV rows to any `Write` destination.
pub struct AuditWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AuditWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the snapshot in processing order, headers first.
    pub fn write_history(&mut self, history: &[BillRequest]) -> Result<()> {
        for request in history {
            self.writer.serialize(request)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
