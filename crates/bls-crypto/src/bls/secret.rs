use crate::{BLSError, BlsResult, HashToCurve, PRIVATE_KEY_BYTES};

use ark_bls12_381::{Fr, G1Projective, G2Projective};
use ark_ec::Group;
use ark_ff::{BigInteger, PrimeField, UniformRand, Zero};
use ark_serialize::CanonicalDeserialize;
use rand::Rng;

use super::{PublicKey, Signature};

/// A BLS private key, a scalar in Fr.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    sk: Fr,
}

impl PrivateKey {
    /// Samples a non-zero scalar from the provided randomness source
    pub fn generate<R: Rng>(rng: &mut R) -> PrivateKey {
        loop {
            let sk = Fr::rand(rng);
            if !sk.is_zero() {
                return PrivateKey { sk };
            }
        }
    }

    /// Parses a little-endian scalar, rejecting non-canonical encodings and zero
    pub fn from_bytes(bytes: &[u8; PRIVATE_KEY_BYTES]) -> BlsResult<PrivateKey> {
        let sk = Fr::deserialize_compressed(&bytes[..]).map_err(|_| BLSError::InvalidPrivateKey)?;
        if sk.is_zero() {
            return Err(BLSError::InvalidPrivateKey);
        }
        Ok(PrivateKey { sk })
    }

    /// Interprets the bytes as a little-endian integer reduced modulo the group order.
    /// Never fails.
    pub fn from_bytes_reduced(bytes: &[u8; PRIVATE_KEY_BYTES]) -> PrivateKey {
        PrivateKey {
            sk: Fr::from_le_bytes_mod_order(bytes),
        }
    }

    /// Little-endian encoding of the scalar
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_BYTES] {
        let mut out = [0u8; PRIVATE_KEY_BYTES];
        out.copy_from_slice(&self.sk.into_bigint().to_bytes_le());
        out
    }

    /// Hashes the message to G2 and multiplies it by the scalar
    pub fn sign<H: HashToCurve<Output = G2Projective>>(
        &self,
        message: &[u8],
        hash_to_g2: &H,
    ) -> BlsResult<Signature> {
        let hash = hash_to_g2.hash(message)?;
        Ok(self.sign_hash(&hash))
    }

    /// Signs an already hashed message
    pub fn sign_hash(&self, hash: &G2Projective) -> Signature {
        Signature::from(*hash * self.sk)
    }

    pub fn to_public(&self) -> PublicKey {
        PublicKey::from(G1Projective::generator() * self.sk)
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.to_public())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_to_curve::wb::HASH_TO_G2;
    use rand::{thread_rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    #[test]
    fn test_simple_sig() {
        let rng = &mut thread_rng();
        for _ in 0..10 {
            let message: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
            let sk = PrivateKey::generate(rng);

            let sig = sk.sign(&message[..], &*HASH_TO_G2).unwrap();
            let pk = sk.to_public();
            pk.verify(&message[..], &sig, &*HASH_TO_G2).unwrap();
            let message2 = b"goodbye";
            pk.verify(&message2[..], &sig, &*HASH_TO_G2).unwrap_err();
        }
    }

    #[test]
    fn bytes_roundtrip() {
        let rng = &mut XorShiftRng::seed_from_u64(7);
        for _ in 0..10 {
            let sk = PrivateKey::generate(rng);
            let bytes = sk.to_bytes();
            assert_eq!(PrivateKey::from_bytes(&bytes).unwrap(), sk);
            assert_eq!(PrivateKey::from_bytes_reduced(&bytes), sk);
        }
    }

    #[test]
    fn rejects_non_canonical_and_zero() {
        assert!(PrivateKey::from_bytes(&[0xff; PRIVATE_KEY_BYTES]).is_err());
        assert!(PrivateKey::from_bytes(&[0; PRIVATE_KEY_BYTES]).is_err());
        // the reduced form always yields a key
        let reduced = PrivateKey::from_bytes_reduced(&[0xff; PRIVATE_KEY_BYTES]);
        assert_ne!(reduced.to_bytes(), [0xff; PRIVATE_KEY_BYTES]);
    }

    #[test]
    fn public_key_is_deterministic() {
        let rng = &mut XorShiftRng::seed_from_u64(42);
        let sk = PrivateKey::generate(rng);
        assert_eq!(
            sk.to_public().to_bytes().unwrap(),
            sk.to_public().to_bytes().unwrap()
        );
    }
}
