//! Property-based tests for totals and numbering.

use invoicer::core::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Generate a reasonable price (0.00 to 99999.99).
fn arb_price() -> impl Strategy<Value = Decimal> {
    (0u64..10_000_000u64).prop_map(|cents| Decimal::new(cents as i64, 2))
}

/// Generate a tax rate with up to two decimals (0.00% to 30.00%).
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (0u32..=3000u32).prop_map(|bp| Decimal::new(bp as i64, 2))
}

fn arb_lines() -> impl Strategy<Value = Vec<(i64, Decimal, Decimal)>> {
    prop::collection::vec((0i64..1000, arb_price(), arb_rate()), 1..20)
}

fn draft_with(lines: &[(i64, Decimal, Decimal)]) -> InvoiceDraft {
    let mut builder = DraftBuilder::new();
    for (i, (quantity, price, rate)) in lines.iter().enumerate() {
        builder = builder.add_item(format!("Item {i}"), *quantity, *price, *rate);
    }
    builder.build()
}

fn two_dp(s: &str) -> Decimal {
    let (_, frac) = s.split_once('.').expect("missing decimal point");
    assert_eq!(frac.len(), 2, "{s} should have two fraction digits");
    s.parse().unwrap()
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn grand_total_is_sum_of_parts(lines in arb_lines()) {
        let totals = draft_with(&lines).totals();
        let subtotal = two_dp(&totals.subtotal);
        let tax = two_dp(&totals.tax_total);
        let grand = two_dp(&totals.grand_total);
        prop_assert_eq!(subtotal + tax, grand);
    }

    #[test]
    fn subtotal_matches_exact_sum(lines in arb_lines()) {
        let exact: Decimal = lines.iter().map(|(q, p, _)| *p * Decimal::from(*q)).sum();
        let totals = draft_with(&lines).totals();
        // Prices have two decimals, so the subtotal needs no rounding.
        prop_assert_eq!(two_dp(&totals.subtotal), exact);
    }

    #[test]
    fn totals_are_order_independent(lines in arb_lines()) {
        let mut reversed = lines.clone();
        reversed.reverse();
        prop_assert_eq!(draft_with(&lines).totals(), draft_with(&reversed).totals());
    }

    #[test]
    fn item_total_equals_single_line_grand_total_before_rounding(
        quantity in 0i64..1000,
        price in arb_price(),
        rate in arb_rate(),
    ) {
        let draft = draft_with(&[(quantity, price, rate)]);
        let item = &draft.items()[0];
        let net = price * Decimal::from(quantity);
        prop_assert_eq!(compute_item_total(item), net + net * rate / Decimal::ONE_HUNDRED);
    }

    #[test]
    fn id_format(n in any::<u64>()) {
        let s = InvoiceId::new(n).to_string();
        let digits = s.strip_prefix("INV-").unwrap();
        prop_assert!(digits.len() >= 5);
        prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(digits.parse::<u64>().unwrap(), n);
    }

    #[test]
    fn advance_is_current_plus_one(start in 0u64..1_000_000_000) {
        let mut seq = SequenceAllocator::new(MemoryCounterStore::with_content(start.to_string()));
        let id = seq.try_advance().unwrap();
        prop_assert_eq!(id.number(), start + 1);
        let expected = (start + 1).to_string();
        prop_assert_eq!(seq.store().content(), Some(expected.as_str()));
    }

    #[test]
    fn parse_counter_never_panics(raw in "\\PC*") {
        let _ = parse_counter(&raw);
    }
}
