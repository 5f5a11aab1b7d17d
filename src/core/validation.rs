use rust_decimal::Decimal;

use super::currencies::{Currency, CurrencyLookup};
use super::draft::InvoiceDraft;
use super::error::ValidationError;
use super::types::LineItem;

/// Check that a draft is ready for export.
///
/// Returns all errors found (empty if valid). The totals engine never calls
/// this; negative amounts are only flagged here.
pub fn validate_for_export(
    draft: &InvoiceDraft,
    currencies: &impl CurrencyLookup,
) -> Vec<ValidationError> {
    check_for_export(draft, currencies).err().unwrap_or_default()
}

/// Validate `draft` and resolve its currency in one lookup.
pub(crate) fn check_for_export(
    draft: &InvoiceDraft,
    currencies: &impl CurrencyLookup,
) -> Result<Currency, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if draft.client.name.trim().is_empty() {
        errors.push(ValidationError::new("client.name", "client name is required"));
    }
    if draft.bank.bank_name.trim().is_empty() {
        errors.push(ValidationError::new("bank.bank_name", "bank name is required"));
    }

    let currency = currencies.lookup(draft.currency_code());
    if currency.is_none() {
        errors.push(ValidationError::new(
            "currency_code",
            format!("unknown currency code '{}'", draft.currency_code()),
        ));
    }

    if draft.items().is_empty() {
        errors.push(ValidationError::new("items", "at least one line item is required"));
    }
    for (i, item) in draft.items().iter().enumerate() {
        validate_line(item, i, &mut errors);
    }

    match currency {
        Some(currency) if errors.is_empty() => Ok(currency),
        _ => Err(errors),
    }
}

fn validate_line(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.quantity < 0 {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must not be negative",
        ));
    }
    if item.unit_price < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            "unit price must not be negative",
        ));
    }
    if item.tax_rate < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.tax_rate"),
            "tax rate must not be negative",
        ));
    }
}
