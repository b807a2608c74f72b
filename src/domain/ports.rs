use super::request::BillRequest;
use crate::error::Result;
use async_trait::async_trait;

/// Outbound port for audit-record creation.
///
/// Sink failures are the sink's concern: the engine never rolls back a state
/// transition because a sink call failed.
#[async_trait]
pub trait ReportingSink: Send + Sync {
    /// Renders a single audit record for a just-processed request.
    async fn record_invoice(&self, request: &BillRequest) -> Result<()>;

    /// Renders the full history snapshot as a bulk audit log.
    async fn write_daily_log(&self, history: &[BillRequest]) -> Result<()>;
}

pub type ReportingSinkBox = Box<dyn ReportingSink>;
