//! Currency lookup for presentation.
//!
//! Totals are currency-agnostic; the currency only decides which symbol and
//! name the preview and the exported document show.

use serde::Serialize;

/// Display information for one ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Source of currency display information, keyed by ISO 4217 code.
pub trait CurrencyLookup {
    fn lookup(&self, code: &str) -> Option<Currency>;
}

/// Built-in currency table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyTable;

impl CurrencyTable {
    /// All known currencies, sorted by code.
    pub fn all(&self) -> &'static [Currency] {
        CURRENCIES
    }
}

impl CurrencyLookup for CurrencyTable {
    fn lookup(&self, code: &str) -> Option<Currency> {
        CURRENCIES
            .binary_search_by(|c| c.code.cmp(code))
            .ok()
            .map(|i| CURRENCIES[i])
    }
}

/// Check whether `code` is in the built-in currency table.
pub fn is_known_currency_code(code: &str) -> bool {
    CurrencyTable.lookup(code).is_some()
}

const fn currency(code: &'static str, symbol: &'static str, name: &'static str) -> Currency {
    Currency { code, symbol, name }
}

/// Sorted for binary search.
static CURRENCIES: &[Currency] = &[
    currency("AED", "د.إ", "UAE Dirham"),
    currency("AUD", "A$", "Australian Dollar"),
    currency("BDT", "৳", "Bangladeshi Taka"),
    currency("BRL", "R$", "Brazilian Real"),
    currency("CAD", "C$", "Canadian Dollar"),
    currency("CHF", "CHF", "Swiss Franc"),
    currency("CNY", "¥", "Chinese Yuan"),
    currency("DKK", "kr", "Danish Krone"),
    currency("EUR", "€", "Euro"),
    currency("GBP", "£", "British Pound"),
    currency("HKD", "HK$", "Hong Kong Dollar"),
    currency("IDR", "Rp", "Indonesian Rupiah"),
    currency("INR", "₹", "Indian Rupee"),
    currency("JPY", "¥", "Japanese Yen"),
    currency("KRW", "₩", "South Korean Won"),
    currency("LKR", "Rs", "Sri Lankan Rupee"),
    currency("MXN", "MX$", "Mexican Peso"),
    currency("MYR", "RM", "Malaysian Ringgit"),
    currency("NOK", "kr", "Norwegian Krone"),
    currency("NPR", "रू", "Nepalese Rupee"),
    currency("NZD", "NZ$", "New Zealand Dollar"),
    currency("PHP", "₱", "Philippine Peso"),
    currency("PKR", "₨", "Pakistani Rupee"),
    currency("PLN", "zł", "Polish Zloty"),
    currency("QAR", "﷼", "Qatari Riyal"),
    currency("RUB", "₽", "Russian Ruble"),
    currency("SAR", "﷼", "Saudi Riyal"),
    currency("SEK", "kr", "Swedish Krona"),
    currency("SGD", "S$", "Singapore Dollar"),
    currency("THB", "฿", "Thai Baht"),
    currency("TRY", "₺", "Turkish Lira"),
    currency("USD", "$", "US Dollar"),
    currency("VND", "₫", "Vietnamese Dong"),
    currency("ZAR", "R", "South African Rand"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_currencies() {
        assert!(is_known_currency_code("USD"));
        assert!(is_known_currency_code("EUR"));
        assert!(is_known_currency_code("INR"));
        assert!(is_known_currency_code("GBP"));
    }

    #[test]
    fn unknown_currencies() {
        assert!(!is_known_currency_code("XYZ"));
        assert!(!is_known_currency_code(""));
        assert!(!is_known_currency_code("usd"));
        assert!(!is_known_currency_code("EURO"));
    }

    #[test]
    fn lookup_returns_display_info() {
        let inr = CurrencyTable.lookup("INR").unwrap();
        assert_eq!(inr.symbol, "₹");
        assert_eq!(inr.name, "Indian Rupee");
        assert_eq!(inr.code, "INR");
    }

    #[test]
    fn currency_list_is_sorted() {
        for window in CURRENCIES.windows(2) {
            assert!(
                window[0].code < window[1].code,
                "{} should come before {}",
                window[0].code,
                window[1].code
            );
        }
    }
}
