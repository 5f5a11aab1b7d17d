//! In-session invoice draft.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::totals::compute_totals;
use super::types::*;
use crate::config::AppConfig;

/// The invoice being edited. Has no number of its own until exported.
///
/// Always holds at least one line item: a new draft starts with one and the
/// last item cannot be removed. Item ids come from a per-draft counter and
/// are never handed out twice, even across [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    pub client: Client,
    pub bank: BankDetails,
    currency_code: String,
    items: Vec<LineItem>,
    next_item_id: u64,
    default_currency: String,
    default_tax_rate: Decimal,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::with_defaults("USD".into(), dec!(18))
    }
}

impl InvoiceDraft {
    /// Empty draft in USD with one blank 18% line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty draft using the configured currency and tax rate.
    pub fn with_config(config: &AppConfig) -> Self {
        Self::with_defaults(config.default_currency.clone(), config.default_tax_rate)
    }

    fn with_defaults(currency: String, tax_rate: Decimal) -> Self {
        let mut draft = Self {
            client: Client::default(),
            bank: BankDetails::default(),
            currency_code: currency.clone(),
            items: Vec::new(),
            next_item_id: 1,
            default_currency: currency,
            default_tax_rate: tax_rate,
        };
        draft.add_item();
        draft
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn set_currency(&mut self, code: impl Into<String>) {
        self.currency_code = code.into();
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append a blank line (quantity 1, price 0, default tax rate).
    pub fn add_item(&mut self) -> LineItemId {
        self.push_item("", 1, Decimal::ZERO, self.default_tax_rate)
    }

    /// Append a filled-in line.
    pub fn push_item(
        &mut self,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
        tax_rate: Decimal,
    ) -> LineItemId {
        let id = LineItemId(self.next_item_id);
        self.next_item_id += 1;
        self.items.push(LineItem {
            id,
            product_name: product_name.into(),
            quantity,
            unit_price,
            tax_rate,
        });
        id
    }

    /// Id of the untouched starting line, if that is the only line: empty
    /// name, quantity 1, zero price, default tax rate.
    pub fn blank_line(&self) -> Option<LineItemId> {
        match self.items.as_slice() {
            [only]
                if only.product_name.is_empty()
                    && only.quantity == 1
                    && only.unit_price.is_zero()
                    && only.tax_rate == self.default_tax_rate =>
            {
                Some(only.id)
            }
            _ => None,
        }
    }

    /// Remove a line. Returns `false` if `id` is unknown or it is the only line.
    pub fn remove_item(&mut self, id: LineItemId) -> bool {
        if self.items.len() <= 1 {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Edit a line in place. The line keeps its id whatever `edit` does.
    /// Returns `false` if `id` is unknown.
    pub fn update_item(&mut self, id: LineItemId, edit: impl FnOnce(&mut LineItem)) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                edit(item);
                item.id = id;
                true
            }
            None => false,
        }
    }

    /// Clear all fields and start over with one blank line.
    pub fn reset(&mut self) {
        self.client = Client::default();
        self.bank = BankDetails::default();
        self.currency_code = self.default_currency.clone();
        self.items.clear();
        self.add_item();
    }

    /// Display totals for the current lines.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.items)
    }
}
