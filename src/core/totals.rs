//! Pure totals computation over line items.
//!
//! Safe to call on every edit: no state, no I/O, no panics. Inputs are not
//! validated; negative values flow through the arithmetic unchanged.
//!
//! Amounts beyond `Decimal::MAX` are an error in the `try_` functions. The
//! display functions clamp to `Decimal::MIN..=Decimal::MAX` instead, so an
//! absurd keystroke shows a huge number rather than crashing the preview.
//! Export goes through [`try_compute_totals`] and refuses clamped values.

use rust_decimal::Decimal;

use super::error::InvoiceError;
use super::types::{LineItem, Totals};

/// Gross total of a single line: `unit_price * quantity * (1 + tax_rate / 100)`.
///
/// Not rounded. Use [`format_amount`] for display.
pub fn try_compute_item_total(item: &LineItem) -> Result<Decimal, InvoiceError> {
    item
        .checked_net_amount()
        .zip(item.checked_tax_amount())
        .and_then(|(net, tax)| net.checked_add(tax))
        .ok_or_else(|| overflow(format!("line {}", item.id)))
}

/// Like [`try_compute_item_total`], clamped on overflow.
pub fn compute_item_total(item: &LineItem) -> Decimal {
    try_compute_item_total(item).unwrap_or_else(|_| {
        item
            .saturating_net_amount()
            .saturating_add(item.saturating_tax_amount())
    })
}

/// Compute display totals for a list of line items.
///
/// Subtotal and tax are summed unrounded and rounded once at the end. The
/// grand total is the sum of the two rounded values, so the displayed figures
/// always add up.
pub fn try_compute_totals(items: &[LineItem]) -> Result<Totals, InvoiceError> {
    let mut subtotal = Decimal::ZERO;
    let mut tax_total = Decimal::ZERO;
    for item in items {
        let net = item
            .checked_net_amount()
            .ok_or_else(|| overflow(format!("net amount of line {}", item.id)))?;
        let tax = item
            .checked_tax_amount()
            .ok_or_else(|| overflow(format!("tax amount of line {}", item.id)))?;
        subtotal = subtotal
            .checked_add(net)
            .ok_or_else(|| overflow("subtotal".into()))?;
        tax_total = tax_total
            .checked_add(tax)
            .ok_or_else(|| overflow("tax total".into()))?;
    }

    let subtotal = round_half_up(subtotal, 2);
    let tax_total = round_half_up(tax_total, 2);
    let grand_total = subtotal
        .checked_add(tax_total)
        .ok_or_else(|| overflow("grand total".into()))?;

    Ok(Totals {
        subtotal: format_amount(subtotal),
        tax_total: format_amount(tax_total),
        grand_total: format_amount(grand_total),
    })
}

/// Like [`try_compute_totals`], but never fails: on overflow the sums are
/// clamped and a warning is logged.
pub fn compute_totals(items: &[LineItem]) -> Totals {
    try_compute_totals(items).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "totals overflowed, showing clamped amounts");
        saturating_totals(items)
    })
}

fn saturating_totals(items: &[LineItem]) -> Totals {
    let subtotal = items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.saturating_net_amount()));
    let tax_total = items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.saturating_tax_amount()));

    let subtotal = round_half_up(subtotal, 2);
    let tax_total = round_half_up(tax_total, 2);
    Totals {
        subtotal: format_amount(subtotal),
        tax_total: format_amount(tax_total),
        grand_total: format_amount(subtotal.saturating_add(tax_total)),
    }
}

fn overflow(what: String) -> InvoiceError {
    InvoiceError::AmountOverflow(what)
}

/// Format an amount with exactly two fraction digits, rounding half away from zero.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value, 2))
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
