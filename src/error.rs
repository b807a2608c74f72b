use thiserror::Error;

pub type Result<T> = std::result::Result<T, BillingError>;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("no pending requests")]
    NoPendingRequests,
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
