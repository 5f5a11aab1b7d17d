use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque line identifier, unique within one draft and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineItemId(pub(crate) u64);

impl LineItemId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Invoice line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Line identifier, assigned by the draft.
    pub id: LineItemId,
    /// Product or service name.
    pub product_name: String,
    /// Invoiced quantity. Expected to be non-negative.
    pub quantity: i64,
    /// Net price per unit. Expected to be non-negative.
    pub unit_price: Decimal,
    /// Tax rate percentage for this line (e.g. 18 for 18%).
    pub tax_rate: Decimal,
}

impl LineItem {
    /// Net amount of the line, `unit_price * quantity`, or `None` on overflow.
    pub fn checked_net_amount(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// Tax amount of the line, unrounded, or `None` on overflow.
    pub fn checked_tax_amount(&self) -> Option<Decimal> {
        let rate = self.tax_rate.checked_div(Decimal::ONE_HUNDRED)?;
        self.checked_net_amount()?.checked_mul(rate)
    }

    /// Net amount clamped to `Decimal::MIN..=Decimal::MAX`.
    pub fn saturating_net_amount(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }

    /// Tax amount clamped to `Decimal::MIN..=Decimal::MAX`.
    pub fn saturating_tax_amount(&self) -> Decimal {
        let rate = self.tax_rate / Decimal::ONE_HUNDRED;
        self.saturating_net_amount().saturating_mul(rate)
    }
}

/// Billed client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Bank details printed on the invoice for payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    pub bank_name: String,
    pub account_number: String,
    pub iban: String,
    /// Free-text payment method (e.g. "Bank transfer").
    pub payment_method: String,
}

/// Display totals, each formatted with exactly two fraction digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all line net amounts.
    pub subtotal: String,
    /// Sum of all line tax amounts.
    pub tax_total: String,
    /// `subtotal + tax_total`.
    pub grand_total: String,
}
