use super::PublicKey;
use crate::{BLSError, BlsResult, DIGEST_BYTES, SIGNATURE_BYTES};

use ark_bls12_381::{Bls12_381, G1Affine, G2Affine, G2Projective};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::One;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError, Valid};

use std::{
    borrow::Borrow,
    io::{Read, Write},
    ops::Neg,
};

/// A BLS signature on G2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(G2Projective);

impl From<G2Projective> for Signature {
    fn from(sig: G2Projective) -> Signature {
        Signature(sig)
    }
}

impl AsRef<G2Projective> for Signature {
    fn as_ref(&self) -> &G2Projective {
        &self.0
    }
}

impl Valid for Signature {
    fn check(&self) -> Result<(), SerializationError> {
        self.0.into_affine().check()
    }
}

impl CanonicalSerialize for Signature {
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

impl CanonicalDeserialize for Signature {
    fn deserialize_with_mode<R: Read>(
        reader: R,
        compress: ark_serialize::Compress,
        validate: ark_serialize::Validate,
    ) -> Result<Self, SerializationError> {
        Ok(Signature::from(
            G2Affine::deserialize_with_mode(reader, compress, validate)?.into_group(),
        ))
    }
}

impl Signature {
    /// Sums the provided signatures to produce the aggregate signature.
    ///
    /// Fails on an empty input: the identity point is not a signature anybody produced.
    pub fn aggregate<S: Borrow<Signature>>(
        signatures: impl IntoIterator<Item = S>,
    ) -> BlsResult<Signature> {
        let mut iter = signatures.into_iter().peekable();
        if iter.peek().is_none() {
            return Err(BLSError::EmptyInput);
        }
        Ok(iter.map(|s| s.borrow().0).sum::<G2Projective>().into())
    }

    /// Decompresses a signature, checking that the point is on the curve and in the
    /// prime order subgroup
    pub fn from_bytes(bytes: &[u8; SIGNATURE_BYTES]) -> BlsResult<Signature> {
        super::read_compressed::<G2Affine>(&bytes[..]).map(|p| Signature(p.into_group()))
    }

    /// Compressed encoding of the affine point
    pub fn to_bytes(&self) -> BlsResult<[u8; SIGNATURE_BYTES]> {
        let mut out = [0u8; SIGNATURE_BYTES];
        self.serialize_compressed(&mut out[..])?;
        Ok(out)
    }

    /// Reads `len / SIGNATURE_BYTES` concatenated compressed signatures
    pub fn from_flattened(bytes: &[u8]) -> BlsResult<Vec<Signature>> {
        super::read_flattened(bytes, SIGNATURE_BYTES, |chunk| {
            super::read_compressed::<G2Affine>(chunk).map(|p| Signature(p.into_group()))
        })
    }

    /// Verifies the signature against a vector of pubkey & message hash tuples.
    ///
    /// Checks `e(g1, sig) == prod_i e(pk_i, H(m_i))` as a single product of pairings,
    /// see pg.11 of https://eprint.iacr.org/2018/483.pdf: "Batch verification"
    pub fn verify_hashes<P: Borrow<PublicKey>>(
        &self,
        pubkeys: &[P],
        message_hashes: &[G2Projective],
    ) -> BlsResult<()> {
        if pubkeys.len() != message_hashes.len() {
            return Err(BLSError::UnevenNumKeysMessages(
                pubkeys.len(),
                message_hashes.len(),
            ));
        }
        if pubkeys.is_empty() {
            return Err(BLSError::EmptyInput);
        }
        if pubkeys.iter().any(|pk| pk.borrow().is_identity()) {
            return Err(BLSError::IdentityPublicKey);
        }

        let mut g1s = Vec::with_capacity(pubkeys.len() + 1);
        let mut g2s = Vec::with_capacity(pubkeys.len() + 1);
        g1s.push(G1Affine::generator().neg());
        g2s.push(self.0.into_affine());
        let hashes = G2Projective::normalize_batch(message_hashes);
        for (pubkey, hash) in pubkeys.iter().zip(hashes) {
            g1s.push(pubkey.borrow().as_ref().into_affine());
            g2s.push(hash);
        }

        let pairing = Bls12_381::multi_pairing(g1s, g2s);
        if pairing.0.is_one() {
            Ok(())
        } else {
            Err(BLSError::VerificationFailed)
        }
    }
}

/// Reads `len / DIGEST_BYTES` concatenated compressed message hashes
pub fn digests_from_flattened(bytes: &[u8]) -> BlsResult<Vec<G2Projective>> {
    super::read_flattened(bytes, DIGEST_BYTES, |chunk| {
        super::read_compressed::<G2Affine>(chunk).map(|p| p.into_group())
    })
}

/// Compressed encoding of a message hash
pub fn digest_to_bytes(hash: &G2Projective) -> BlsResult<[u8; DIGEST_BYTES]> {
    let mut out = [0u8; DIGEST_BYTES];
    hash.into_affine().serialize_compressed(&mut out[..])?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        hash_to_curve::{wb::HASH_TO_G2, HashToCurve},
        test_helpers::{keygen_batch, sign_batch, sum},
        PrivateKey,
    };

    use ark_bls12_381::G1Projective;
    use ark_ff::UniformRand;
    use rand::thread_rng;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_aggregated_sig() {
        init();
        let message = b"hello";
        let rng = &mut thread_rng();
        let hasher = &*HASH_TO_G2;

        let sk1 = PrivateKey::generate(rng);
        let sk2 = PrivateKey::generate(rng);

        let sig1 = sk1.sign(&message[..], hasher).unwrap();
        let sig2 = sk2.sign(&message[..], hasher).unwrap();
        let sigs = &[sig1, sig2];

        let apk = PublicKey::aggregate(&[sk1.to_public(), sk2.to_public()]);
        let asig = Signature::aggregate(sigs).unwrap();
        apk.verify(&message[..], &asig, hasher).unwrap();
        apk.verify(&message[..], &sigs[0], hasher).unwrap_err();
        sk1.to_public().verify(&message[..], &asig, hasher).unwrap_err();
        let message2 = b"goodbye";
        apk.verify(&message2[..], &asig, hasher).unwrap_err();

        // the same check as a product of pairings over repeated hashes
        let hash = hasher.hash(&message[..]).unwrap();
        asig.verify_hashes(&[sk1.to_public(), sk2.to_public()], &[hash, hash])
            .unwrap();
    }

    #[test]
    fn aggregate_empty_fails() {
        init();
        let empty: Vec<Signature> = vec![];
        assert!(matches!(
            Signature::aggregate(&empty),
            Err(BLSError::EmptyInput)
        ));
    }

    #[test]
    fn verify_hashes_rejects_bad_shapes() {
        init();
        let rng = &mut thread_rng();
        let sk = PrivateKey::generate(rng);
        let hash = HASH_TO_G2.hash(b"x").unwrap();
        let sig = sk.sign_hash(&hash);

        let no_keys: Vec<PublicKey> = vec![];
        assert!(matches!(
            sig.verify_hashes(&no_keys, &[]),
            Err(BLSError::EmptyInput)
        ));
        assert!(matches!(
            sig.verify_hashes(&[sk.to_public()], &[hash, hash]),
            Err(BLSError::UnevenNumKeysMessages(1, 2))
        ));
        let identity = PublicKey::from(G1Projective::default());
        assert!(matches!(
            sig.verify_hashes(&[identity], &[hash]),
            Err(BLSError::IdentityPublicKey)
        ));
    }

    #[test]
    fn batch_verify_hashes() {
        init();
        // generate 5 (aggregate sigs, message hash pairs)
        // verify them all in 1 call
        let batch_size = 5;
        let num_keys = 7;
        let rng = &mut thread_rng();

        let messages = (0..batch_size)
            .map(|_| G2Projective::rand(rng))
            .collect::<Vec<_>>();

        // keygen for multiple rounds (7 keys per round)
        let (secret_keys, public_keys_batches) = keygen_batch(batch_size, num_keys);

        // get the aggregate public key for each rounds
        let aggregate_pubkeys = public_keys_batches
            .iter()
            .map(|pks| sum(pks))
            .map(PublicKey::from)
            .collect::<Vec<_>>();

        // the keys from each epoch sign the messages from the corresponding epoch
        let asigs = sign_batch(&secret_keys, &messages);

        // get the complete aggregate signature
        let asig = Signature::from(sum(&asigs));

        asig.verify_hashes(&aggregate_pubkeys, &messages).unwrap();
    }

    #[test]
    fn test_signature_serialization() {
        init();
        let rng = &mut thread_rng();

        for _ in 0..100 {
            let message = b"hello";
            let sk = PrivateKey::generate(rng);
            let sig = sk.sign(&message[..], &*HASH_TO_G2).unwrap();
            let sig_bytes = sig.to_bytes().unwrap();
            let de = Signature::from_bytes(&sig_bytes).unwrap();
            assert_eq!(sig.as_ref().into_affine(), de.as_ref().into_affine());
        }
    }

    #[test]
    fn flattened_signatures() {
        init();
        let rng = &mut thread_rng();
        let sigs = (0..3)
            .map(|_| PrivateKey::generate(rng).sign(b"m", &*HASH_TO_G2).unwrap())
            .collect::<Vec<_>>();
        let mut flat = vec![];
        for sig in &sigs {
            flat.extend_from_slice(&sig.to_bytes().unwrap());
        }
        let de = Signature::from_flattened(&flat).unwrap();
        assert_eq!(de.len(), 3);
        assert!(Signature::from_flattened(&flat[..SIGNATURE_BYTES + 1]).is_err());
    }

    #[test]
    fn digest_roundtrip() {
        init();
        let hash = HASH_TO_G2.hash(b"hello").unwrap();
        let bytes = digest_to_bytes(&hash).unwrap();
        let de = digests_from_flattened(&bytes).unwrap();
        assert_eq!(de[0].into_affine(), hash.into_affine());
    }
}
