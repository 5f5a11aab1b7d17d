use thiserror::Error;

/// Errors that can occur while numbering, validating, or exporting invoices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// The counter store could not be created, read, or written.
    #[error("counter store unavailable: {0}")]
    StoreUnavailable(#[from] std::io::Error),

    /// The stored counter is not a plain non-negative integer.
    #[error("corrupt counter value: {0:?}")]
    CorruptCounter(String),

    /// The counter cannot be advanced past `u64::MAX`.
    #[error("invoice counter overflow")]
    CounterOverflow,

    /// One or more export validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An amount does not fit in a `Decimal`.
    #[error("amount overflow in {0}")]
    AmountOverflow(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "client.name", "items[0].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
