use crate::boundary;
use crate::encoding::{flatten, unflatten, Digest, PrivateKey, PublicKey, Signature};
use crate::{Error, Result};
use log::{debug, warn};

/// Hashes a message to a curve point. Empty messages are allowed.
pub fn hash(message: &[u8]) -> Digest {
    boundary::hash(message).unwrap_or_else(|| contract_violation("hash"))
}

/// Verifies that a signature is the aggregated signature of digests - pubkeys.
///
/// The i-th digest is paired with the i-th public key. Malformed input and a signature which
/// does not match both return `false`.
pub fn verify(signature: &Signature, digests: &[Digest], public_keys: &[PublicKey]) -> bool {
    if digests.len() != public_keys.len() {
        warn!(
            "verify: {} digests but {} public keys",
            digests.len(),
            public_keys.len()
        );
        return false;
    }
    if digests.is_empty() {
        debug!("verify: nothing to verify against");
        return false;
    }

    boundary::verify(signature, &flatten(digests), &flatten(public_keys))
}

/// Aggregates signatures together into a new signature.
pub fn aggregate(signatures: &[Signature]) -> Result<Signature> {
    if signatures.is_empty() {
        return Err(Error::EmptyInput {
            operation: "aggregate",
        });
    }

    boundary::aggregate(&flatten(signatures)).ok_or(Error::EngineRejected {
        operation: "aggregate",
    })
}

/// Aggregates signatures received as one flattened buffer, as produced by [`flatten`].
pub fn aggregate_flattened(flattened_signatures: &[u8]) -> Result<Signature> {
    let signatures = unflatten::<Signature>(flattened_signatures)?;
    aggregate(&signatures)
}

/// Generates a private key from the engine's randomness source.
pub fn private_key_generate() -> PrivateKey {
    boundary::private_key_generate().unwrap_or_else(|| contract_violation("private_key_generate"))
}

/// Signs a message. Fails if the engine rejects the key.
pub fn private_key_sign(private_key: &PrivateKey, message: &[u8]) -> Result<Signature> {
    boundary::private_key_sign(private_key, message).ok_or(Error::EngineRejected {
        operation: "private_key_sign",
    })
}

/// Gets the public key for a private key.
pub fn private_key_public_key(private_key: &PrivateKey) -> PublicKey {
    boundary::private_key_public_key(private_key)
        .unwrap_or_else(|| contract_violation("private_key_public_key"))
}

// Hash, key generation and public key derivation have no failure path in the engine
fn contract_violation(operation: &str) -> ! {
    panic!("{}: engine returned a null response", operation)
}
