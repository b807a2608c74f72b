use crate::domain::history::TransactionHistory;
use crate::domain::ports::ReportingSinkBox;
use crate::domain::queue::{PendingQueue, QueueDiscipline, queue_for};
use crate::domain::request::BillRequest;
use crate::error::{BillingError, Result};
use chrono::Utc;
use log::warn;

/// The main entry point for the bill scheduling application.
///
/// `BillingEngine` owns the two pending pools and the transaction history and
/// drives every state transition sequentially: each operation runs to completion
/// before the next is considered.
pub struct BillingEngine {
    general: Box<dyn PendingQueue>,
    urgent: Box<dyn PendingQueue>,
    history: TransactionHistory,
    sink: ReportingSinkBox,
}

impl BillingEngine {
    /// Creates a new `BillingEngine` with the default pool disciplines:
    /// FIFO for general requests, priority-ordered for urgent ones.
    ///
    /// # Arguments
    ///
    /// * `sink` - The reporting sink receiving processed requests.
    pub fn new(sink: ReportingSinkBox) -> Self {
        Self::with_queues(
            queue_for(QueueDiscipline::Fifo),
            queue_for(QueueDiscipline::PriorityOrdered),
            sink,
        )
    }

    /// Creates an engine over explicitly configured pending pools.
    pub fn with_queues(
        general: Box<dyn PendingQueue>,
        urgent: Box<dyn PendingQueue>,
        sink: ReportingSinkBox,
    ) -> Self {
        Self {
            general,
            urgent,
            history: TransactionHistory::new(),
            sink,
        }
    }

    /// Admits a request into the pending pool matching its urgency flag.
    ///
    /// Admission always succeeds for a well-formed request; validation of inbound
    /// payloads happens before a `BillRequest` is constructed.
    pub fn submit(&mut self, request: BillRequest) {
        if request.urgent {
            self.urgent.admit(request);
        } else {
            self.general.admit(request);
        }
    }

    /// Processes the next pending request and returns its id.
    ///
    /// The urgent pool is exhausted before the general pool is consulted, checked
    /// per invocation. The processed request is stamped, handed to the reporting
    /// sink, and moved into the transaction history. A sink failure is logged and
    /// never rolls back the transition.
    pub async fn process_next(&mut self) -> Result<String> {
        let mut request = self
            .urgent
            .select_next()
            .or_else(|| self.general.select_next())
            .ok_or(BillingError::NoPendingRequests)?;

        request.mark_processed(Utc::now());
        if let Err(e) = self.sink.record_invoice(&request).await {
            warn!("reporting sink rejected invoice for {}: {}", request.id, e);
        }

        let id = request.id.clone();
        self.history.record(request);
        Ok(id)
    }

    /// Moves the most recently processed request back to pending and returns its id.
    ///
    /// The request re-enters its pool through the normal admission rule, so an
    /// undone urgent request lands in priority position rather than at the front.
    /// Repeated calls walk the history backward one step at a time.
    pub fn reverse_last(&mut self) -> Result<String> {
        let mut request = self.history.undo_last().ok_or(BillingError::NothingToUndo)?;
        request.clear_processed();
        let id = request.id.clone();
        self.submit(request);
        Ok(id)
    }

    /// Read-only view of the processed history in processing order.
    pub fn history(&self) -> &[BillRequest] {
        self.history.snapshot()
    }

    /// Hands the full history snapshot to the reporting sink's bulk renderer.
    ///
    /// Returns the number of entries written.
    pub async fn export_history(&self) -> Result<usize> {
        let history = self.history.snapshot();
        self.sink.write_daily_log(history).await?;
        Ok(history.len())
    }

    /// Total number of not-yet-processed requests across both pools.
    pub fn pending_requests(&self) -> usize {
        self.general.len() + self.urgent.len()
    }
}
