use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use bls_crypto::{
    hash_to_curve::{wb::HASH_TO_G2, HashToCurve},
    PrivateKey, PublicKey, Signature,
};

fn aggregate_bls_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls");
    group.sample_size(10);
    // 100 signers over 10 distinct messages
    const NUM_MESSAGES: usize = 10;
    const NUM_SIGNERS: usize = 10;
    let rng = &mut rand::thread_rng();
    let hasher = &*HASH_TO_G2;

    let msgs = (0..NUM_MESSAGES)
        .map(|_| (0..32).map(|_| rng.gen()).collect::<Vec<u8>>())
        .collect::<Vec<_>>();

    let mut pubkeys = Vec::new();
    let mut hashes = Vec::new();
    let mut sigs = Vec::new();
    for msg in &msgs {
        let hash = hasher.hash(msg).unwrap();
        for _ in 0..NUM_SIGNERS {
            let sk = PrivateKey::generate(rng);
            pubkeys.push(sk.to_public());
            hashes.push(hash);
            sigs.push(sk.sign_hash(&hash));
        }
    }

    group.bench_function("individual verification", |b| {
        b.iter(|| {
            pubkeys
                .iter()
                .zip(&sigs)
                .zip(&hashes)
                .for_each(|((pk, sig), hash)| {
                    sig.verify_hashes(&[pk], &[*hash]).unwrap();
                })
        })
    });

    group.bench_function("aggregation", |b| {
        b.iter(|| Signature::aggregate(&sigs).unwrap())
    });

    let asig = Signature::aggregate(&sigs).unwrap();
    group.bench_function("aggregate verification", |b| {
        b.iter(|| asig.verify_hashes(&pubkeys, &hashes).unwrap())
    });

    group.bench_function("public key aggregation", |b| {
        b.iter(|| PublicKey::aggregate(&pubkeys))
    });
}

criterion_group!(benches, aggregate_bls_comparison);
criterion_main!(benches);
