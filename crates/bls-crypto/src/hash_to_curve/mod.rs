/// Implementation of the `hash_to_curve` suite `BLS12381G2_XMD:SHA-256_SSWU_RO_` from
/// [the IETF draft](https://datatracker.ietf.org/doc/html/draft-irtf-cfrg-hash-to-curve-16).
///
/// The message is expanded with SHA-256 into two field elements of Fq2, each one is mapped
/// to the 3-isogenous curve with the simplified SWU map, and the sum is sent back through
/// the isogeny and cleared of the cofactor.
///
/// # Examples
///
/// Hashing the data requires importing the `HashToCurve` trait and calling the `hash`
/// function on the lazily evaluated hasher
///
/// ```rust
/// use bls_crypto::hash_to_curve::{HashToCurve, wb::HASH_TO_G2};
///
/// let hasher = &*HASH_TO_G2;
/// let hash = hasher.hash(&b"some_data"[..]).expect("should not fail");
/// ```
///
/// A hasher for another domain can be built directly:
///
/// ```rust
/// use bls_crypto::hash_to_curve::{HashToCurve, wb::WbHashToG2};
///
/// let hasher = WbHashToG2::new(b"MY_APP_V1_").unwrap();
/// let hash = hasher.hash(&b"some_data"[..]).expect("should not fail");
/// ```
pub mod wb;

use crate::BLSError;

/// Trait for hashing arbitrary data to a group element on an elliptic curve
pub trait HashToCurve {
    /// The type of the curve being used.
    type Output;

    /// Given a message, produces a hash of it which is a curve point. The domain is fixed
    /// when the hasher is constructed.
    fn hash(&self, message: &[u8]) -> Result<Self::Output, BLSError>;
}
