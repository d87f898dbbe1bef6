use criterion::{criterion_group, criterion_main, Criterion};
use geohash_core::prelude::*;
use std::hint::black_box;

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode/12", |b| {
        b.iter(|| encode(black_box(57.64911), black_box(10.40744), black_box(12)))
    });
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_exactly/12", |b| {
        b.iter(|| decode_exactly(black_box("u4pruydqqvj8")))
    });
    c.bench_function("decode/12", |b| b.iter(|| decode(black_box("u4pruydqqvj8"))));
}

fn bench_claim(c: &mut Criterion) {
    let policy = ClaimPolicy::default();
    c.bench_function("claim_check", |b| {
        b.iter(|| policy.check(black_box("u33dc0"), black_box(52.5163), black_box(13.3777)))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_claim);
criterion_main!(benches);
