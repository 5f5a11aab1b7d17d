use chrono::Local;
use invoicer::core::*;
use invoicer::AppConfig;
use rust_decimal_macros::dec;

fn main() {
    // Keep demo runs away from the real counter unless INVOICER_DATA_DIR says otherwise.
    let config = match std::env::var_os(invoicer::config::DATA_DIR_ENV) {
        Some(_) => AppConfig::from_env(),
        None => AppConfig::default().with_data_dir(std::env::temp_dir().join("invoicer-demo")),
    };
    let mut numbers = SequenceAllocator::new(FileCounterStore::from_config(&config));

    let draft = DraftBuilder::new()
        .client(
            ClientBuilder::new("Kumar Traders")
                .email("accounts@kumartraders.in")
                .address("12 MG Road, Bengaluru")
                .build(),
        )
        .bank(
            BankDetailsBuilder::new("State Bank of India")
                .account_number("00000012345678901")
                .payment_method("Bank transfer")
                .build(),
        )
        .currency("INR")
        .add_item("Website design", 1, dec!(25000), dec!(18))
        .add_item("Hosting (12 months)", 12, dec!(499.50), dec!(12))
        .build_on(InvoiceDraft::with_config(&config));

    let snapshot = prepare_export(&draft, &mut numbers, &CurrencyTable, Local::now().date_naive())
        .expect("draft should be valid");

    println!("Invoice: {}", snapshot.id);
    println!("Date:    {}", snapshot.issue_date);
    println!("Client:  {}", snapshot.client.name);
    println!("File:    {}", snapshot.file_name());
    println!("---");
    for item in &snapshot.items {
        println!(
            "  {} x {} @ {} ({}% tax) = {}",
            item.quantity,
            item.product_name,
            snapshot.with_symbol(&format_amount(item.unit_price)),
            item.tax_rate,
            snapshot.with_symbol(&snapshot.item_total_display(item))
        );
    }
    println!("---");
    println!("Subtotal: {}", snapshot.with_symbol(&snapshot.totals.subtotal));
    println!("Tax:      {}", snapshot.with_symbol(&snapshot.totals.tax_total));
    println!("Total:    {}", snapshot.with_symbol(&snapshot.totals.grand_total));

    if let Some(next) = complete_export(&mut numbers, true) {
        println!("Next invoice will be {next}");
    }
}
