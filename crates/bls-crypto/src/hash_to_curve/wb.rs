use log::trace;

use super::HashToCurve;
use crate::{BLSError, SIG_DOMAIN};

use ark_bls12_381::{g2, G2Projective};
use ark_ec::hashing::{
    curve_maps::wb::WBMap, map_to_curve_hasher::MapToCurveBasedHasher,
    HashToCurve as ArkHashToCurve,
};
use ark_ec::AffineRepr;
use ark_ff::field_hashers::DefaultFieldHasher;
use sha2::Sha256;

use once_cell::sync::Lazy;

type G2Hasher = MapToCurveBasedHasher<G2Projective, DefaultFieldHasher<Sha256, 128>, WBMap<g2::Config>>;

/// SHA-256 / SSWU hasher to G2 for the signature domain.
pub static HASH_TO_G2: Lazy<WbHashToG2> =
    Lazy::new(|| WbHashToG2::new(SIG_DOMAIN).expect("signature domain fits in 255 bytes"));

/// Hashes messages to G2 with `expand_message_xmd` over SHA-256 and the Wahby-Boneh map.
pub struct WbHashToG2 {
    inner: G2Hasher,
}

impl WbHashToG2 {
    /// Instantiates a hasher for the provided domain separation tag
    pub fn new(domain: &[u8]) -> Result<Self, BLSError> {
        let inner = G2Hasher::new(domain)
            .map_err(|e| BLSError::HashToCurveError(format!("{:?}", e)))?;
        Ok(WbHashToG2 { inner })
    }
}

impl HashToCurve for WbHashToG2 {
    type Output = G2Projective;

    fn hash(&self, message: &[u8]) -> Result<Self::Output, BLSError> {
        let point = self
            .inner
            .hash(message)
            .map_err(|e| BLSError::HashToCurveError(format!("{:?}", e)))?;
        trace!("hashed \"{}\" to G2", hex::encode(message));
        Ok(point.into_group())
    }
}
