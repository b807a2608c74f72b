use super::request::BillRequest;

/// Ordered record of processed requests, most recent last.
///
/// Append-only except for [`undo_last`](Self::undo_last), which removes exactly the
/// newest entry. Read front-to-back the sequence always reflects actual processing
/// order and is the single source of truth for audit-log generation.
#[derive(Debug, Default)]
pub struct TransactionHistory {
    entries: Vec<BillRequest>,
}

impl TransactionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a processed request to the end of the history.
    pub fn record(&mut self, request: BillRequest) {
        self.entries.push(request);
    }

    /// Removes and returns the most recently recorded request.
    ///
    /// The caller must clear the returned request's processing timestamp before
    /// re-admitting it to a pending pool.
    pub fn undo_last(&mut self) -> Option<BillRequest> {
        self.entries.pop()
    }

    /// Read-only view of the full history in processing order.
    pub fn snapshot(&self) -> &[BillRequest] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
