use thiserror::Error;

/// Errors from a ledger write attempt.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The ledger collaborator rejected or failed the write.
    #[error("ledger write failed: {0}")]
    Write(String),
}
