use serde::{Deserialize, Serialize};

use super::error::InvoiceError;
use super::store::CounterStore;

/// Identifier of one invoice in the sequence, displayed as `INV-00042`.
///
/// The number is zero-padded to five digits; larger numbers widen the
/// identifier instead of wrapping.
///
/// Serializes as the display string so renderers can print it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct InvoiceId(u64);

impl InvoiceId {
    /// Identifier returned whenever the counter store fails.
    pub const FALLBACK: InvoiceId = InvoiceId(1);

    pub fn new(number: u64) -> Self {
        Self(number)
    }

    /// Raw sequence number.
    pub fn number(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "INV-{:05}", self.0)
    }
}

impl std::str::FromStr for InvoiceId {
    type Err = InvoiceError;

    /// Parse `INV-00042` back into an identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("INV-")
            .filter(|d| d.len() >= 5 && d.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| InvoiceError::Validation(format!("invalid invoice id '{s}'")))?;
        digits
            .parse()
            .map(InvoiceId)
            .map_err(|_| InvoiceError::Validation(format!("invalid invoice id '{s}'")))
    }
}

impl From<InvoiceId> for String {
    fn from(id: InvoiceId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for InvoiceId {
    type Error = InvoiceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Parse stored counter text. Surrounding whitespace is ignored; anything
/// other than a plain base-10 `u64` is [`InvoiceError::CorruptCounter`].
pub fn parse_counter(raw: &str) -> Result<u64, InvoiceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvoiceError::CorruptCounter(raw.to_string()));
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| InvoiceError::CorruptCounter(raw.to_string()))
}

/// Durable invoice number sequence backed by a [`CounterStore`].
///
/// The store holds the number of the invoice currently being drafted.
/// [`peek_current`](Self::peek_current) reads it, [`advance`](Self::advance)
/// moves to the next one after an export.
///
/// The public operations are fail-open: store failures are logged and
/// [`InvoiceId::FALLBACK`] is returned, so numbering never blocks an export.
/// The `try_` variants expose the underlying result.
///
/// Single writer only. Two processes advancing the same store race and the
/// last write wins; `&mut self` serializes callers within one process.
#[derive(Debug)]
pub struct SequenceAllocator<S> {
    store: S,
}

impl<S: CounterStore> SequenceAllocator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Current identifier without consuming it. Creates the store holding
    /// `1` on first use.
    pub fn peek_current(&mut self) -> InvoiceId {
        self.try_peek_current().unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to read invoice counter, using fallback id");
            InvoiceId::FALLBACK
        })
    }

    /// Move to the next identifier, persist it, and return it.
    pub fn advance(&mut self) -> InvoiceId {
        self.try_advance().unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to advance invoice counter, using fallback id");
            InvoiceId::FALLBACK
        })
    }

    /// Like [`peek_current`](Self::peek_current) but reports store failures.
    ///
    /// A corrupt or zero stored value reads as `1` and is left as is.
    pub fn try_peek_current(&mut self) -> Result<InvoiceId, InvoiceError> {
        let Some(raw) = self.store.load()? else {
            self.store.save(1)?;
            tracing::info!("initialized invoice counter");
            return Ok(InvoiceId(1));
        };

        let number = match parse_counter(&raw) {
            Ok(0) => 1,
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring corrupt invoice counter");
                1
            }
        };
        Ok(InvoiceId(number))
    }

    /// Like [`advance`](Self::advance) but reports store failures.
    ///
    /// A missing or corrupt stored value counts as `0`, so the store heals
    /// to `1`. On error the stored value is unchanged.
    pub fn try_advance(&mut self) -> Result<InvoiceId, InvoiceError> {
        let current = match self.store.load()? {
            Some(raw) => parse_counter(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "resetting corrupt invoice counter");
                0
            }),
            None => 0,
        };

        let next = current.checked_add(1).ok_or(InvoiceError::CounterOverflow)?;
        self.store.save(next)?;

        let id = InvoiceId(next);
        tracing::info!(invoice_id = %id, "advanced invoice counter");
        Ok(id)
    }
}
