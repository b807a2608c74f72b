use crate::domain::ports::ReportingSink;
use crate::domain::request::BillRequest;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory reporting sink.
///
/// Captures every invoice and daily-log handoff so callers can inspect what the
/// engine reported. Ideal for tests or embedded use where no files are wanted.
#[derive(Default, Clone)]
pub struct InMemorySink {
    invoices: Arc<RwLock<Vec<BillRequest>>>,
    daily_logs: Arc<RwLock<Vec<Vec<BillRequest>>>>,
}

impl InMemorySink {
    /// Creates a new, empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All invoices recorded so far, in handoff order.
    pub async fn invoices(&self) -> Vec<BillRequest> {
        self.invoices.read().await.clone()
    }

    /// All daily-log exports so far, most recent last.
    pub async fn daily_logs(&self) -> Vec<Vec<BillRequest>> {
        self.daily_logs.read().await.clone()
    }
}

#[async_trait]
impl ReportingSink for InMemorySink {
    async fn record_invoice(&self, request: &BillRequest) -> Result<()> {
        let mut invoices = self.invoices.write().await;
        invoices.push(request.clone());
        Ok(())
    }

    async fn write_daily_log(&self, history: &[BillRequest]) -> Result<()> {
        let mut daily_logs = self.daily_logs.write().await;
        daily_logs.push(history.to_vec());
        Ok(())
    }
}
