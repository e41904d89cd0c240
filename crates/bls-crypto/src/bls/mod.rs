//! Implements BLS signatures as specified in https://crypto.stanford.edu/~dabo/pubs/papers/BLSmultisig.html.
mod secret;
pub use secret::PrivateKey;

mod public;
pub use public::PublicKey;

mod signature;
pub use signature::{digest_to_bytes, digests_from_flattened, Signature};

use crate::{BLSError, BlsResult};
use ark_serialize::CanonicalDeserialize;

/// Splits a flattened buffer into `width`-sized chunks and deserializes each one.
pub(crate) fn read_flattened<T, F>(bytes: &[u8], width: usize, read: F) -> BlsResult<Vec<T>>
where
    F: Fn(&[u8]) -> BlsResult<T>,
{
    if bytes.len() % width != 0 {
        return Err(BLSError::LengthMismatch {
            len: bytes.len(),
            width,
        });
    }
    bytes.chunks_exact(width).map(read).collect()
}

/// Deserializes a compressed point, checking that it is on the curve and in the subgroup.
pub(crate) fn read_compressed<T: CanonicalDeserialize>(bytes: &[u8]) -> BlsResult<T> {
    Ok(T::deserialize_compressed(bytes)?)
}
