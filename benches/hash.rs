use fa25519::hash::{hmac_sha256, hmac_sha512, sha256, sha512};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha2(c: &mut Criterion) {
    let small = [0u8; 64];
    let large = vec![0x5au8; 16 * 1024];

    c.bench_function("sha256 64 bytes", |b| b.iter(|| sha256(black_box(&small))));
    c.bench_function("sha256 16 KiB", |b| b.iter(|| sha256(black_box(&large))));
    c.bench_function("sha512 64 bytes", |b| b.iter(|| sha512(black_box(&small))));
    c.bench_function("sha512 16 KiB", |b| b.iter(|| sha512(black_box(&large))));
}

pub fn bench_hmac(c: &mut Criterion) {
    let key = [0x0bu8; 32];
    let message = [0u8; 256];

    c.bench_function("hmac-sha256 256 bytes", |b| {
        b.iter(|| hmac_sha256(black_box(&message), black_box(&key)))
    });
    c.bench_function("hmac-sha512 256 bytes", |b| {
        b.iter(|| hmac_sha512(black_box(&message), black_box(&key)))
    });
}

criterion_group!(benches, bench_sha2, bench_hmac);
criterion_main!(benches);
