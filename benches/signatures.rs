use fa25519::signatures::{ed25519, ristretto};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_ed25519(c: &mut Criterion) {
    let kp = ed25519::keypair_from_seed(&[7u8; 32]).unwrap();
    let message = [0u8; 64];
    let sig = ed25519::sign(&message, &kp, None);
    let pk = kp.public_key();

    c.bench_function("ed25519 keypair", |b| {
        b.iter(|| ed25519::keypair_from_seed(black_box(&[7u8; 32])))
    });
    c.bench_function("ed25519 sign", |b| {
        b.iter(|| ed25519::sign(black_box(&message), &kp, None))
    });
    c.bench_function("ed25519 sign synthetic", |b| {
        b.iter(|| ed25519::sign(black_box(&message), &kp, Some(&[1u8; 32])))
    });
    c.bench_function("ed25519 verify", |b| {
        b.iter(|| ed25519::verify(black_box(sig.as_ref()), &message, &pk))
    });
}

pub fn bench_ristretto(c: &mut Criterion) {
    let kp = ristretto::keypair_from_seed(&[7u8; 32]).unwrap();
    let message = [0u8; 64];
    let sig = ristretto::sign(&message, &kp, None);
    let pk = kp.public_key();

    c.bench_function("ristretto sign", |b| {
        b.iter(|| ristretto::sign(black_box(&message), &kp, None))
    });
    c.bench_function("ristretto verify", |b| {
        b.iter(|| ristretto::verify(black_box(sig.as_ref()), &message, &pk))
    });
}

criterion_group!(benches, bench_ed25519, bench_ristretto);
criterion_main!(benches);
