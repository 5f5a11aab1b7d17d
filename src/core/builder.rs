use rust_decimal::Decimal;

use super::draft::InvoiceDraft;
use super::types::*;

/// Builder for pre-filled drafts, e.g. when duplicating a past invoice.
///
/// ```
/// use invoicer::core::*;
/// use rust_decimal_macros::dec;
///
/// let draft = DraftBuilder::new()
///     .client(ClientBuilder::new("Kumar Traders").email("accounts@kumar.in").build())
///     .bank(BankDetailsBuilder::new("State Bank").iban("IN00SBIN0000000000").build())
///     .currency("INR")
///     .add_item("Web design", 2, dec!(10.00), dec!(18))
///     .build();
///
/// assert_eq!(draft.items().len(), 1);
/// assert_eq!(draft.totals().grand_total, "23.60");
/// ```
#[derive(Debug, Default)]
pub struct DraftBuilder {
    client: Option<Client>,
    bank: Option<BankDetails>,
    currency_code: Option<String>,
    items: Vec<(String, i64, Decimal, Decimal)>,
}

impl DraftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn bank(mut self, bank: BankDetails) -> Self {
        self.bank = Some(bank);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    pub fn add_item(
        mut self,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        self.items
            .push((product_name.into(), quantity, unit_price, tax_rate));
        self
    }

    /// Build the draft on top of `base` (for its currency and tax defaults).
    /// Added items replace `base`'s untouched starting line; lines the
    /// caller already edited are kept.
    pub fn build_on(self, mut base: InvoiceDraft) -> InvoiceDraft {
        if let Some(client) = self.client {
            base.client = client;
        }
        if let Some(bank) = self.bank {
            base.bank = bank;
        }
        if let Some(code) = self.currency_code {
            base.set_currency(code);
        }
        if !self.items.is_empty() {
            let blank = base.blank_line();
            for (name, quantity, unit_price, tax_rate) in self.items {
                base.push_item(name, quantity, unit_price, tax_rate);
            }
            if let Some(blank) = blank {
                base.remove_item(blank);
            }
        }
        base
    }

    pub fn build(self) -> InvoiceDraft {
        self.build_on(InvoiceDraft::new())
    }
}

/// Builder for Client.
pub struct ClientBuilder {
    name: String,
    email: String,
    phone: String,
    address: String,
}

impl ClientBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn build(self) -> Client {
        Client {
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
        }
    }
}

/// Builder for BankDetails.
pub struct BankDetailsBuilder {
    bank_name: String,
    account_number: String,
    iban: String,
    payment_method: String,
}

impl BankDetailsBuilder {
    pub fn new(bank_name: impl Into<String>) -> Self {
        Self {
            bank_name: bank_name.into(),
            account_number: String::new(),
            iban: String::new(),
            payment_method: String::new(),
        }
    }

    pub fn account_number(mut self, number: impl Into<String>) -> Self {
        self.account_number = number.into();
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = iban.into();
        self
    }

    pub fn payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = method.into();
        self
    }

    pub fn build(self) -> BankDetails {
        BankDetails {
            bank_name: self.bank_name,
            account_number: self.account_number,
            iban: self.iban,
            payment_method: self.payment_method,
        }
    }
}
