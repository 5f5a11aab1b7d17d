#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — corrupt counters are errors, not bugs.
        if let Ok(n) = invoicer::parse_counter(s) {
            let id = invoicer::InvoiceId::new(n).to_string();
            assert_eq!(id[4..].parse::<u64>().ok(), Some(n));
        }
    }
});
