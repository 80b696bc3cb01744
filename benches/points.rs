use fa25519::hash::sha512;
use fa25519::ops::{edwards, ristretto, scalar};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_scalars(c: &mut Criterion) {
    let s = scalar::reduce(&sha512(b"scalar")).unwrap();
    let t = scalar::reduce(&sha512(b"other")).unwrap();

    c.bench_function("scalar reduce 64 bytes", |b| {
        b.iter(|| scalar::reduce(black_box(&[0xffu8; 64])))
    });
    c.bench_function("scalar mul", |b| b.iter(|| scalar::mul(black_box(&s), &t)));
    c.bench_function("scalar invert", |b| b.iter(|| scalar::invert(black_box(&s))));
}

pub fn bench_points(c: &mut Criterion) {
    let s = scalar::reduce(&sha512(b"scalar")).unwrap();
    let ed = edwards::base_mul(&s).unwrap();
    let r = ristretto::base_mul(&s).unwrap();
    let h = sha512(b"point");

    c.bench_function("edwards base_mul", |b| b.iter(|| edwards::base_mul(black_box(&s))));
    c.bench_function("edwards mul", |b| b.iter(|| edwards::mul(black_box(&s), &ed)));
    c.bench_function("edwards validate", |b| b.iter(|| edwards::validate(black_box(&ed))));
    c.bench_function("ristretto base_mul", |b| {
        b.iter(|| ristretto::base_mul(black_box(&s)))
    });
    c.bench_function("ristretto mul", |b| b.iter(|| ristretto::mul(black_box(&s), &r)));
    c.bench_function("ristretto from_hash", |b| {
        b.iter(|| ristretto::from_hash(black_box(&h)))
    });
}

criterion_group!(benches, bench_scalars, bench_points);
criterion_main!(benches);
