// tests/benches/hybrid_bench.rs

//! Benchmarks for the composite KEM end to end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pkcrypt_hybrid::kem as composite;
use pkcrypt_params::CompositeKemAlgorithm;
use pkcrypt_tests::seeded_rng;

fn bench_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("Composite KEM");
    let mut rng = seeded_rng(42);
    let session_key = [0x42u8; 32];

    for algo in CompositeKemAlgorithm::ALL {
        let label = format!("{algo:?}");
        let kp = composite::generate(algo, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::new("encrypt", &label), &kp, |b, kp| {
            b.iter(|| {
                composite::encrypt(
                    algo,
                    &kp.ecc.public_key,
                    &kp.mlkem.public_key,
                    black_box(&session_key),
                    &mut rng,
                )
                .unwrap()
            });
        });

        let ct = composite::encrypt(
            algo,
            &kp.ecc.public_key,
            &kp.mlkem.public_key,
            &session_key,
            &mut rng,
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new("decrypt", &label), &ct, |b, ct| {
            b.iter(|| {
                composite::decrypt(
                    algo,
                    black_box(&ct.ecc_ciphertext),
                    black_box(&ct.mlkem_ciphertext),
                    &kp.ecc.secret_key,
                    &kp.ecc.public_key,
                    &kp.mlkem.secret_key,
                    &ct.wrapped_key,
                )
                .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_composite);
criterion_main!(benches);
