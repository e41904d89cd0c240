use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use bls_ffi::{
    aggregate, hash, private_key_generate, private_key_public_key, private_key_sign, verify,
};

fn boundary_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundary");
    group.sample_size(10);
    const NUM_SIGNERS: usize = 16;
    let rng = &mut rand::thread_rng();

    let message = (0..32).map(|_| rng.gen()).collect::<Vec<u8>>();
    let keys = (0..NUM_SIGNERS)
        .map(|_| private_key_generate())
        .collect::<Vec<_>>();
    let public_keys = keys.iter().map(private_key_public_key).collect::<Vec<_>>();
    let sigs = keys
        .iter()
        .map(|sk| private_key_sign(sk, &message).unwrap())
        .collect::<Vec<_>>();
    let digests = vec![hash(&message); NUM_SIGNERS];

    group.bench_function("hash", |b| b.iter(|| hash(&message)));

    group.bench_function("sign", |b| {
        b.iter(|| private_key_sign(&keys[0], &message).unwrap())
    });

    group.bench_function("public key", |b| {
        b.iter(|| private_key_public_key(&keys[0]))
    });

    group.bench_function("aggregation", |b| b.iter(|| aggregate(&sigs).unwrap()));

    let asig = aggregate(&sigs).unwrap();
    group.bench_function("aggregate verification", |b| {
        b.iter(|| assert!(verify(&asig, &digests, &public_keys)))
    });
}

criterion_group!(benches, boundary_calls);
criterion_main!(benches);
