//! Benchmarks for the contrast engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use contrast::{calculate_contrast_ratio, classify, is_valid_color, Format};
use contrast::convert::{from_hex, to_hex};

// -- Validation benchmarks --

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("hex", |b| {
        b.iter(|| is_valid_color(black_box("#1e293b"), Format::Hex))
    });

    group.bench_function("rgba", |b| {
        b.iter(|| is_valid_color(black_box("rgba(30, 41, 59, 0.75)"), Format::Rgba))
    });

    group.bench_function("hsl", |b| {
        b.iter(|| is_valid_color(black_box("hsl(217, 33%, 17%)"), Format::Hsl))
    });

    group.finish();
}

// -- Conversion benchmarks --

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    group.bench_function("hsl_to_hex", |b| {
        b.iter(|| to_hex(black_box("hsl(217, 33%, 17%)"), Format::Hsl))
    });

    group.bench_function("hex_to_hsl", |b| {
        b.iter(|| from_hex(black_box("#1e293b"), Format::Hsl))
    });

    group.finish();
}

// -- Contrast benchmarks --

fn bench_contrast(c: &mut Criterion) {
    let mut group = c.benchmark_group("contrast");

    group.bench_function("hex_pair", |b| {
        b.iter(|| calculate_contrast_ratio(black_box("#1e293b"), black_box("#ffffff")))
    });

    group.bench_function("mixed_pair", |b| {
        b.iter(|| {
            calculate_contrast_ratio(black_box("rgb(30, 41, 59)"), black_box("hsl(0, 0%, 100%)"))
        })
    });

    group.bench_function("classify", |b| b.iter(|| classify(black_box("4.54:1"))));

    group.finish();
}

criterion_group!(benches, bench_validation, bench_conversion, bench_contrast);
criterion_main!(benches);
