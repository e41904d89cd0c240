use ark_bls12_381::{Fr, G1Projective, G2Projective};
use ark_ec::Group;
use ark_ff::{UniformRand, Zero};
use std::ops::Add;

// Same RNG for all tests
pub fn rng() -> rand::rngs::ThreadRng {
    rand::thread_rng()
}

/// generate a keypair
pub fn keygen() -> (Fr, G1Projective) {
    let rng = &mut rng();
    let generator = G1Projective::generator();

    let secret_key = Fr::rand(rng);
    let pubkey = generator * secret_key;
    (secret_key, pubkey)
}

/// generate N keypairs
pub fn keygen_mul(num: usize) -> (Vec<Fr>, Vec<G1Projective>) {
    (0..num).map(|_| keygen()).unzip()
}

/// generate `num_batches` sets of keypair vectors, each `num_per_batch` size
#[allow(clippy::type_complexity)]
pub fn keygen_batch(
    num_batches: usize,
    num_per_batch: usize,
) -> (Vec<Vec<Fr>>, Vec<Vec<G1Projective>>) {
    (0..num_batches).map(|_| keygen_mul(num_per_batch)).unzip()
}

/// sum the elements in the provided slice
pub fn sum<P: Zero + Copy + Add<Output = P>>(elements: &[P]) -> P {
    elements.iter().fold(P::zero(), |acc, el| acc + *el)
}

/// N message hashes get signed by N committees of varying sizes
/// N aggregate signatures are returned
pub fn sign_batch(secret_keys: &[Vec<Fr>], messages: &[G2Projective]) -> Vec<G2Projective> {
    secret_keys
        .iter()
        .zip(messages)
        .map(|(secret_keys, message)| {
            let (_, asig) = sign(*message, secret_keys);
            asig
        })
        .collect::<Vec<_>>()
}

// signs a message hash with a vector of secret keys and returns the list of sigs + the agg sig
pub fn sign(message_hash: G2Projective, secret_keys: &[Fr]) -> (Vec<G2Projective>, G2Projective) {
    let sigs = secret_keys
        .iter()
        .map(|key| message_hash * key)
        .collect::<Vec<_>>();
    let asig = sum(&sigs);
    (sigs, asig)
}
