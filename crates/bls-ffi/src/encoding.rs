use std::convert::TryFrom;
use std::fmt;
use thiserror::Error;

/// Length of a BLS private key
pub const PRIVATE_KEY_BYTES: usize = 32;

/// Length of a compressed BLS public key
pub const PUBLIC_KEY_BYTES: usize = 48;

/// Length of a compressed BLS signature
pub const SIGNATURE_BYTES: usize = 96;

/// Length of a compressed BLS message hash/digest
pub const DIGEST_BYTES: usize = 96;

// The engine's response payloads must have exactly the widths above
const _: () = assert!(
    std::mem::size_of::<bls_sys::PrivateKeyGenerateResponse>() == PRIVATE_KEY_BYTES
);
const _: () = assert!(
    std::mem::size_of::<bls_sys::PrivateKeyPublicKeyResponse>() == PUBLIC_KEY_BYTES
);
const _: () = assert!(
    std::mem::size_of::<bls_sys::PrivateKeySignResponse>() == SIGNATURE_BYTES
);
const _: () = assert!(
    std::mem::size_of::<bls_sys::AggregateResponse>() == SIGNATURE_BYTES
);
const _: () = assert!(
    std::mem::size_of::<bls_sys::HashResponse>() == DIGEST_BYTES
);

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodingError {
    /// A fixed width value was built from a slice of the wrong size
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// A flattened buffer is not a whole number of records
    #[error("buffer of {len} bytes is not a multiple of the {width} byte record width")]
    LengthMismatch { len: usize, width: usize },
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// A value with a fixed width binary encoding.
pub trait FixedBytes: Sized + Copy {
    /// Encoded width in bytes
    const WIDTH: usize;

    /// The raw bytes, in their natural order
    fn as_bytes(&self) -> &[u8];

    /// Copies exactly `WIDTH` bytes out of `bytes`
    fn from_slice(bytes: &[u8]) -> Result<Self, EncodingError>;

    fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    fn from_hex<T: AsRef<[u8]>>(data: T) -> Result<Self, EncodingError> {
        Self::from_slice(&hex::decode(data)?)
    }
}

/// Concatenates the records in sequence order. An empty slice flattens to an empty buffer.
pub fn flatten<T: FixedBytes>(items: &[T]) -> Vec<u8> {
    let mut flattened = Vec::with_capacity(T::WIDTH * items.len());
    for item in items {
        flattened.extend_from_slice(item.as_bytes());
    }
    flattened
}

/// Splits a flattened buffer back into records of `T::WIDTH` bytes.
pub fn unflatten<T: FixedBytes>(bytes: &[u8]) -> Result<Vec<T>, EncodingError> {
    if bytes.len() % T::WIDTH != 0 {
        return Err(EncodingError::LengthMismatch {
            len: bytes.len(),
            width: T::WIDTH,
        });
    }
    bytes.chunks_exact(T::WIDTH).map(T::from_slice).collect()
}

macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $width:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub [u8; $width]);

        impl FixedBytes for $name {
            const WIDTH: usize = $width;

            fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            fn from_slice(bytes: &[u8]) -> Result<Self, EncodingError> {
                if bytes.len() != $width {
                    return Err(EncodingError::InvalidLength {
                        expected: $width,
                        actual: bytes.len(),
                    });
                }
                let mut out = [0u8; $width];
                out.copy_from_slice(bytes);
                Ok($name(out))
            }
        }

        impl From<[u8; $width]> for $name {
            fn from(bytes: [u8; $width]) -> Self {
                $name(bytes)
            }
        }

        impl From<$name> for [u8; $width] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = EncodingError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                <$name as FixedBytes>::from_slice(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

fixed_bytes!(
    /// A little-endian scalar
    PrivateKey,
    PRIVATE_KEY_BYTES
);
fixed_bytes!(
    /// A compressed affine G1 point
    PublicKey,
    PUBLIC_KEY_BYTES
);
fixed_bytes!(
    /// A compressed affine G2 point
    Signature,
    SIGNATURE_BYTES
);
fixed_bytes!(
    /// A compressed affine G2 point, the hash of a message
    Digest,
    DIGEST_BYTES
);

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

macro_rules! hex_fmt {
    ($($name:ident),*) => {
        $(
            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}(0x{}..)", stringify!($name), hex::encode(&self.0[..8]))
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&hex::encode(&self.0[..]))
                }
            }
        )*
    };
}

hex_fmt!(PublicKey, Signature, Digest);
