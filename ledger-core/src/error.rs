use thiserror::Error;

/// Errors a ledger lookup can produce. All of them are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Mock API error: the specified account was not found.")]
    AccountNotFound,

    #[error("Mock API error: the transaction hash does not exist or is invalid.")]
    TransactionNotFound,

    #[error("Endpoint not configured with mock data: {0}")]
    UnconfiguredEndpoint(String),
}

impl LedgerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::AccountNotFound | LedgerError::TransactionNotFound)
    }
}

/// Rejections raised before a lookup is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter an account address (try the sample address).")]
    EmptyAddress,

    #[error("Please enter a transaction hash (try the sample hash).")]
    EmptyHash,

    #[error("A transaction hash is 64 hex characters, got {0}.")]
    HashLength(usize),
}

/// Failure of a typed lookup through [`crate::LedgerClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The payload did not have the shape of the requested record.
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}
