//! # BLS FFI
//!
//! Typed host-side access to the native BLS engine exported by `bls-sys`.
//!
//! Values cross the boundary as fixed-width byte arrays. Collections are flattened into one
//! contiguous buffer, every request buffer lives for exactly one call, and every response
//! object the engine hands back is copied out once and released once.
//!
//! ```rust
//! let sk = bls_ffi::private_key_generate();
//! let pk = bls_ffi::private_key_public_key(&sk);
//! let sig = bls_ffi::private_key_sign(&sk, b"hello").unwrap();
//! assert!(bls_ffi::verify(&sig, &[bls_ffi::hash(b"hello")], &[pk]));
//! ```

/// Fixed width encodings and flattening
pub mod encoding;
pub use encoding::{
    flatten, unflatten, Digest, EncodingError, FixedBytes, PrivateKey, PublicKey, Signature,
    DIGEST_BYTES, PRIVATE_KEY_BYTES, PUBLIC_KEY_BYTES, SIGNATURE_BYTES,
};

/// Buffer ownership across the boundary
pub(crate) mod lifecycle;

pub(crate) mod boundary;

mod api;
pub use api::{
    aggregate, aggregate_flattened, hash, private_key_generate, private_key_public_key,
    private_key_sign, verify,
};

mod error;
pub use error::Error;

/// Convenience result alias
pub type Result<T> = std::result::Result<T, Error>;
