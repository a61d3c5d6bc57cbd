//! Benchmarks for payfield performance testing.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use payfield::edit::{Alphabet, TextEdit};
use payfield::field::{CardNumberField, ExpiryField, IbanField, InputField};
use payfield::{iban, luhn, validate_card_number, CardNumberInput, CardType, EditSession, GroupingStyle};

// Test numbers
const VISA_16: &str = "4539260780952497";
const VISA_16_FORMATTED: &str = "4539 2607 8095 2497";
const AMEX: &str = "370355496876137";
const MAESTRO_19: &str = "6789123412341234129";

const IBAN_DE: &str = "DE91100000000123456789";
const IBAN_GB_FORMATTED: &str = "GB82 WEST 1234 5698 7654 32";
const IBAN_MT: &str = "MT84MALT011000012345MTLCAST001S";

const VISA_DIGITS: [u8; 16] = [4, 5, 3, 9, 2, 6, 0, 7, 8, 0, 9, 5, 2, 4, 9, 7];

/// Benchmark the Luhn checksum
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("scan_16", |b| b.iter(|| luhn::scan(black_box(VISA_16))));

    group.bench_function("scan_19", |b| b.iter(|| luhn::scan(black_box(MAESTRO_19))));

    group.bench_function("validate_formatted", |b| {
        b.iter(|| validate_card_number(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("check_digit_15", |b| {
        b.iter(|| luhn::generate_check_digit(black_box(&VISA_DIGITS[..15])))
    });

    group.bench_function("card_type_validate", |b| {
        b.iter(|| CardType::AmericanExpress.validate(black_box(AMEX)))
    });

    group.finish();
}

/// Benchmark the IBAN checksum at different lengths
fn bench_iban(c: &mut Criterion) {
    let mut group = c.benchmark_group("iban");

    for raw in [IBAN_DE, IBAN_GB_FORMATTED, IBAN_MT] {
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::new("checksum", raw.len()), raw, |b, raw| {
            b.iter(|| iban::checksum(black_box(raw)))
        });
    }

    group.finish();
}

/// Benchmark full reformatting
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let visa = GroupingStyle::fixed(4, 16);
    let amex = GroupingStyle::variable([4, 6, 5], 15);
    let iban = IbanField::style();

    group.bench_function("visa", |b| b.iter(|| visa.format(black_box(VISA_16), " ")));

    group.bench_function("visa_already_grouped", |b| {
        b.iter(|| visa.format(black_box(VISA_16_FORMATTED), " "))
    });

    group.bench_function("amex", |b| b.iter(|| amex.format(black_box(AMEX), " ")));

    group.bench_function("iban", |b| b.iter(|| iban.format(black_box(IBAN_DE), " ")));

    group.bench_function("card_input", |b| {
        b.iter(|| CardNumberInput::from_text(black_box(VISA_16_FORMATTED), " "))
    });

    group.finish();
}

/// Benchmark single edits and whole typing sessions
fn bench_handle_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_edit");

    let visa = GroupingStyle::fixed(4, 16);
    let insert = TextEdit::insert(3, "9");
    group.bench_function("engine_insert", |b| {
        b.iter(|| visa.handle_edit(black_box("453"), &insert, " ", Alphabet::Digits))
    });

    let delete = TextEdit::delete(4..5);
    group.bench_function("engine_delete_separator", |b| {
        b.iter(|| visa.handle_edit(black_box("4539 "), &delete, " ", Alphabet::Digits))
    });

    let paste = TextEdit::insert(0, VISA_16);
    group.bench_function("engine_paste", |b| {
        b.iter(|| visa.handle_edit(black_box(""), &paste, " ", Alphabet::Digits))
    });

    let field = CardNumberField::default();
    let switch = TextEdit::new(0..1, "3");
    group.bench_function("card_type_switch", |b| {
        b.iter(|| field.handle_edit(black_box("4539 2607 8095 2"), &switch))
    });

    group.bench_function("type_card_number", |b| {
        b.iter(|| {
            let mut session = EditSession::new(&field);
            session.type_str(black_box(VISA_16));
            session.input()
        })
    });

    let expiry = ExpiryField::new();
    group.bench_function("type_expiry", |b| {
        b.iter(|| {
            let mut session = EditSession::new(&expiry);
            session.type_str(black_box("1227"));
            session.input()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_luhn,
    bench_iban,
    bench_format,
    bench_handle_edit,
);

criterion_main!(benches);
