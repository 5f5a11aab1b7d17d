//! Finalizing a draft for export.
//!
//! The snapshot is the one value both the on-screen preview and the document
//! renderer read, so the numbers they show cannot drift apart.

use chrono::NaiveDate;
use serde::Serialize;

use super::currencies::{Currency, CurrencyLookup};
use super::draft::InvoiceDraft;
use super::error::InvoiceError;
use super::numbering::{InvoiceId, SequenceAllocator};
use super::store::CounterStore;
use super::totals::{compute_item_total, format_amount, try_compute_totals};
use super::types::*;
use super::validation::check_for_export;

/// Immutable, numbered invoice ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceSnapshot {
    pub id: InvoiceId,
    pub issue_date: NaiveDate,
    pub client: Client,
    pub bank: BankDetails,
    pub currency: Currency,
    pub items: Vec<LineItem>,
    pub totals: Totals,
}

impl InvoiceSnapshot {
    /// Suggested file name for the exported document, e.g. `invoice-INV-00042.pdf`.
    pub fn file_name(&self) -> String {
        format!("invoice-{}.pdf", self.id)
    }

    /// Two-decimal gross total of one line, as shown next to the line.
    pub fn item_total_display(&self, item: &LineItem) -> String {
        format_amount(compute_item_total(item))
    }

    /// Amount prefixed with the currency symbol, e.g. `$23.60`.
    pub fn with_symbol(&self, amount: &str) -> String {
        format!("{}{}", self.currency.symbol, amount)
    }
}

/// Validate `draft` and freeze it under the allocator's current number.
///
/// Fails with [`InvoiceError::AmountOverflow`] if the totals do not fit, so
/// clamped preview amounts never reach a document.
///
/// Does not advance the counter; call [`complete_export`] once the document
/// has actually been written.
pub fn prepare_export<S: CounterStore>(
    draft: &InvoiceDraft,
    allocator: &mut SequenceAllocator<S>,
    currencies: &impl CurrencyLookup,
    issue_date: NaiveDate,
) -> Result<InvoiceSnapshot, InvoiceError> {
    let currency = check_for_export(draft, currencies).map_err(|errors| {
        let msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        InvoiceError::Validation(msg)
    })?;
    let totals = try_compute_totals(draft.items())?;

    let snapshot = InvoiceSnapshot {
        id: allocator.peek_current(),
        issue_date,
        client: draft.client.clone(),
        bank: draft.bank.clone(),
        currency,
        items: draft.items().to_vec(),
        totals,
    };
    tracing::debug!(invoice_id = %snapshot.id, items = snapshot.items.len(), "prepared invoice export");
    Ok(snapshot)
}

/// Finish an export. When the user asked for a fresh number, advance the
/// sequence and return the identifier for the next invoice.
pub fn complete_export<S: CounterStore>(
    allocator: &mut SequenceAllocator<S>,
    advance: bool,
) -> Option<InvoiceId> {
    advance.then(|| allocator.advance())
}
