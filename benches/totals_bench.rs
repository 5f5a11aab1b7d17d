use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use invoicer::core::*;

fn build_draft(lines: usize) -> InvoiceDraft {
    let mut builder = DraftBuilder::new();
    for i in 0..lines {
        builder = builder.add_item(
            format!("Item {i}"),
            (i % 50) as i64 + 1,
            Decimal::new(1999 + i as i64, 2),
            dec!(18),
        );
    }
    builder.build()
}

fn bench_totals_10_lines(c: &mut Criterion) {
    let draft = build_draft(10);
    c.bench_function("compute_totals_10_lines", |b| {
        b.iter(|| black_box(compute_totals(black_box(draft.items()))));
    });
}

fn bench_totals_1000_lines(c: &mut Criterion) {
    let draft = build_draft(1000);
    c.bench_function("compute_totals_1000_lines", |b| {
        b.iter(|| black_box(compute_totals(black_box(draft.items()))));
    });
}

fn bench_advance_memory_store(c: &mut Criterion) {
    let mut seq = SequenceAllocator::new(MemoryCounterStore::new());
    c.bench_function("advance_memory_store", |b| {
        b.iter(|| black_box(seq.advance()));
    });
}

criterion_group!(
    benches,
    bench_totals_10_lines,
    bench_totals_1000_lines,
    bench_advance_memory_store,
);
criterion_main!(benches);
