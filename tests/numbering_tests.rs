//! Invoice numbering against a real counter file.

use std::fs;
use std::path::Path;

use invoicer::core::*;
use invoicer::AppConfig;

fn allocator_in(dir: &Path) -> SequenceAllocator<FileCounterStore> {
    let config = AppConfig::default().with_data_dir(dir.join("data"));
    SequenceAllocator::new(FileCounterStore::from_config(&config))
}

fn counter_file(dir: &Path) -> std::path::PathBuf {
    dir.join("data").join("invoice_counter.txt")
}

// --- First launch ---

#[test]
fn first_peek_creates_store_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut seq = allocator_in(dir.path());

    assert_eq!(seq.peek_current().to_string(), "INV-00001");
    assert_eq!(fs::read_to_string(counter_file(dir.path())).unwrap(), "1");
}

#[test]
fn peek_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut seq = allocator_in(dir.path());

    let first = seq.peek_current();
    let second = seq.peek_current();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(counter_file(dir.path())).unwrap(), "1");
}

// --- Advancing ---

#[test]
fn advance_from_41() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(counter_file(dir.path()), "41").unwrap();

    let mut seq = allocator_in(dir.path());
    assert_eq!(seq.advance().to_string(), "INV-00042");
    assert_eq!(fs::read_to_string(counter_file(dir.path())).unwrap(), "42");
}

#[test]
fn whitespace_in_store_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(counter_file(dir.path()), " 9\n").unwrap();

    let mut seq = allocator_in(dir.path());
    assert_eq!(seq.peek_current().to_string(), "INV-00009");
    assert_eq!(seq.advance().to_string(), "INV-00010");
    assert_eq!(fs::read_to_string(counter_file(dir.path())).unwrap(), "10");
}

#[test]
fn advance_on_missing_store_starts_at_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut seq = allocator_in(dir.path());

    assert_eq!(seq.advance().to_string(), "INV-00001");
    assert_eq!(fs::read_to_string(counter_file(dir.path())).unwrap(), "1");
}

#[test]
fn corrupt_store_self_heals() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(counter_file(dir.path()), "INV-00017").unwrap();

    let mut seq = allocator_in(dir.path());
    assert_eq!(seq.peek_current().to_string(), "INV-00001");
    assert_eq!(seq.advance().to_string(), "INV-00001");
    let stored = fs::read_to_string(counter_file(dir.path())).unwrap();
    assert_eq!(parse_counter(&stored).unwrap(), 1);
}

#[test]
fn sequence_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut seq = allocator_in(dir.path());
        seq.peek_current();
        seq.advance();
        seq.advance();
    }
    let mut seq = allocator_in(dir.path());
    assert_eq!(seq.peek_current().to_string(), "INV-00003");
}

#[test]
fn width_grows_past_five_digits() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(counter_file(dir.path()), "99999").unwrap();

    let mut seq = allocator_in(dir.path());
    assert_eq!(seq.advance().to_string(), "INV-100000");
}

// --- Fail-open ---

#[test]
fn unusable_store_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    // The parent of the counter file is a regular file, so nothing can be created.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();
    let mut seq = SequenceAllocator::new(FileCounterStore::new(blocker.join("invoice_counter.txt")));

    assert!(matches!(
        seq.try_peek_current(),
        Err(InvoiceError::StoreUnavailable(_))
    ));
    assert_eq!(seq.peek_current(), InvoiceId::FALLBACK);
    assert_eq!(seq.advance().to_string(), "INV-00001");
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "x");
}
