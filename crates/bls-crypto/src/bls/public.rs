use crate::{BlsResult, HashToCurve, Signature, PUBLIC_KEY_BYTES};

use ark_bls12_381::{G1Affine, G1Projective, G2Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::Zero;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError, Valid};

use std::{
    borrow::Borrow,
    hash::{Hash, Hasher},
    io::{Read, Write},
};

/// A BLS public key on G1
#[derive(Clone, Eq, Debug)]
pub struct PublicKey(G1Projective);

impl From<G1Projective> for PublicKey {
    fn from(pk: G1Projective) -> PublicKey {
        PublicKey(pk)
    }
}

impl AsRef<G1Projective> for PublicKey {
    fn as_ref(&self) -> &G1Projective {
        &self.0
    }
}

impl PublicKey {
    /// Sums the provided public keys
    pub fn aggregate<P: Borrow<PublicKey>>(public_keys: impl IntoIterator<Item = P>) -> PublicKey {
        public_keys
            .into_iter()
            .map(|pk| pk.borrow().0)
            .sum::<G1Projective>()
            .into()
    }

    /// Decompresses a public key, checking that the point is on the curve and in the
    /// prime order subgroup
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_BYTES]) -> BlsResult<PublicKey> {
        super::read_compressed::<G1Affine>(&bytes[..]).map(|p| PublicKey(p.into_group()))
    }

    /// Compressed encoding of the affine point
    pub fn to_bytes(&self) -> BlsResult<[u8; PUBLIC_KEY_BYTES]> {
        let mut out = [0u8; PUBLIC_KEY_BYTES];
        self.serialize_compressed(&mut out[..])?;
        Ok(out)
    }

    /// Reads `len / PUBLIC_KEY_BYTES` concatenated compressed keys
    pub fn from_flattened(bytes: &[u8]) -> BlsResult<Vec<PublicKey>> {
        super::read_flattened(bytes, PUBLIC_KEY_BYTES, |chunk| {
            super::read_compressed::<G1Affine>(chunk).map(|p| PublicKey(p.into_group()))
        })
    }

    /// The identity point is not a valid key: it verifies the identity signature for
    /// every message.
    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    pub fn verify<H: HashToCurve<Output = G2Projective>>(
        &self,
        message: &[u8],
        signature: &Signature,
        hash_to_g2: &H,
    ) -> BlsResult<()> {
        let hash = hash_to_g2.hash(message)?;
        signature.verify_hashes(&[self], &[hash])
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        // Projective coordinates are not unique, compare the normalized points
        self.0.into_affine() == other.0.into_affine()
    }
}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let affine = self.0.into_affine();
        affine.x.hash(state);
        affine.y.hash(state);
    }
}

impl Valid for PublicKey {
    fn check(&self) -> Result<(), SerializationError> {
        self.0.into_affine().check()
    }
}

impl CanonicalSerialize for PublicKey {
    fn serialize_with_mode<W: Write>(
        &self,
        writer: W,
        compress: ark_serialize::Compress,
    ) -> Result<(), SerializationError> {
        self.0.into_affine().serialize_with_mode(writer, compress)
    }

    fn serialized_size(&self, compress: ark_serialize::Compress) -> usize {
        self.0.into_affine().serialized_size(compress)
    }
}

impl CanonicalDeserialize for PublicKey {
    fn deserialize_with_mode<R: Read>(
        reader: R,
        compress: ark_serialize::Compress,
        validate: ark_serialize::Validate,
    ) -> Result<Self, SerializationError> {
        Ok(PublicKey::from(
            G1Affine::deserialize_with_mode(reader, compress, validate)?.into_group(),
        ))
    }
}
