//! # BLS Cryptography
//!
//! This crate implements cryptographic operations for BLS signatures over the
//! BLS12-381 curve. Public keys live in G1, signatures and message digests in G2.
/// BLS signing
pub(crate) mod bls;
pub use bls::{digest_to_bytes, digests_from_flattened, PrivateKey, PublicKey, Signature};

/// Hashing to curve utilities
pub mod hash_to_curve;
pub use hash_to_curve::HashToCurve;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use thiserror::Error;

/// Convenience result alias
pub type BlsResult<T> = std::result::Result<T, BLSError>;

/// Domain separation tag for hashing messages to G2 (basic scheme, public keys in G1)
pub const SIG_DOMAIN: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// Length of a serialized private key
pub const PRIVATE_KEY_BYTES: usize = 32;

/// Length of a compressed public key (G1)
pub const PUBLIC_KEY_BYTES: usize = 48;

/// Length of a compressed signature (G2)
pub const SIGNATURE_BYTES: usize = 96;

/// Length of a compressed message digest (G2)
pub const DIGEST_BYTES: usize = 96;

#[derive(Debug, Error)]
/// Error type
pub enum BLSError {
    /// Error
    #[error("signature verification failed")]
    VerificationFailed,
    /// The number of public keys and message hashes differ
    #[error("number of public keys ({0}) and messages ({1}) differ")]
    UnevenNumKeysMessages(usize, usize),
    /// Nothing to aggregate or verify
    #[error("empty input")]
    EmptyInput,
    /// No signature was passed
    #[error("missing signature")]
    MissingSignature,
    /// The scalar is zero or its encoding is not canonical
    #[error("invalid private key")]
    InvalidPrivateKey,
    /// The identity point cannot be used as a public key
    #[error("public key is the point at infinity")]
    IdentityPublicKey,
    /// A flattened buffer is not a whole number of elements
    #[error("buffer of {len} bytes is not a multiple of {width}")]
    LengthMismatch { len: usize, width: usize },
    #[error("could not hash to curve: {0}")]
    HashToCurveError(String),
    #[error("{0}")]
    SerializationError(#[from] ark_serialize::SerializationError),
}
