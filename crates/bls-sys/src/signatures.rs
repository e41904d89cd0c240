use crate::{
    convert_result_to_bool, convert_result_to_ptr, read_array, read_bytes, AggregateResponse,
    HashResponse, PrivateKeyGenerateResponse, PrivateKeyPublicKeyResponse,
    PrivateKeySignResponse,
};
use bls_crypto::{
    digest_to_bytes, digests_from_flattened, hash_to_curve::wb::HASH_TO_G2, BLSError,
    HashToCurve, PrivateKey, PublicKey, Signature, PRIVATE_KEY_BYTES, SIGNATURE_BYTES,
};
use std::os::raw::c_int;

/// Hashes a message to a compressed G2 point.
///
/// # Safety
///
/// `message_ptr` must point to `message_len` readable bytes (or be null with a zero length).
#[no_mangle]
pub unsafe extern "C" fn hash(message_ptr: *const u8, message_len: usize) -> *mut HashResponse {
    let message = read_bytes(message_ptr, message_len);
    convert_result_to_ptr::<_, BLSError, _>(|| {
        let digest = digest_to_bytes(&HASH_TO_G2.hash(message)?)?;
        Ok(HashResponse { digest })
    })
}

#[no_mangle]
/// Checks that `signature` is the aggregate of the signatures of each digest by the public
/// key at the same index. Returns 1 on success, 0 on any failure, including malformed input.
///
/// The verification equation can be found in pg.11 from
/// https://eprint.iacr.org/2018/483.pdf: "Batch verification"
///
/// # Safety
///
/// `signature_ptr` must point to 96 readable bytes, and each flattened buffer to its
/// length in readable bytes.
pub unsafe extern "C" fn verify(
    signature_ptr: *const u8,
    flattened_digests_ptr: *const u8,
    flattened_digests_len: usize,
    flattened_public_keys_ptr: *const u8,
    flattened_public_keys_len: usize,
) -> c_int {
    let signature = read_array::<SIGNATURE_BYTES>(signature_ptr);
    let digests = read_bytes(flattened_digests_ptr, flattened_digests_len);
    let public_keys = read_bytes(flattened_public_keys_ptr, flattened_public_keys_len);

    let verified = convert_result_to_bool::<_, BLSError, _>(|| {
        let signature = Signature::from_bytes(&signature.ok_or(BLSError::MissingSignature)?)?;
        let digests = digests_from_flattened(digests)?;
        let public_keys = PublicKey::from_flattened(public_keys)?;
        signature.verify_hashes(&public_keys, &digests)
    });

    verified as c_int
}

/// Sums the flattened compressed signatures. Returns null on an empty input, a length which
/// is not a multiple of 96, or an invalid signature.
///
/// # Safety
///
/// `flattened_signatures_ptr` must point to `flattened_signatures_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn aggregate(
    flattened_signatures_ptr: *const u8,
    flattened_signatures_len: usize,
) -> *mut AggregateResponse {
    let flattened = read_bytes(flattened_signatures_ptr, flattened_signatures_len);
    convert_result_to_ptr::<_, BLSError, _>(|| {
        let signatures = Signature::from_flattened(flattened)?;
        let aggregated = Signature::aggregate(&signatures)?;
        Ok(AggregateResponse {
            signature: aggregated.to_bytes()?,
        })
    })
}

#[no_mangle]
pub extern "C" fn private_key_generate() -> *mut PrivateKeyGenerateResponse {
    let mut rng = rand::thread_rng();
    let key = PrivateKey::generate(&mut rng);
    Box::into_raw(Box::new(PrivateKeyGenerateResponse {
        private_key: key.to_bytes(),
    }))
}

/// Signs the message. Returns null if the key is not a canonical non-zero scalar.
///
/// # Safety
///
/// `raw_private_key_ptr` must point to 32 readable bytes and `message_ptr` to
/// `message_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn private_key_sign(
    raw_private_key_ptr: *const u8,
    message_ptr: *const u8,
    message_len: usize,
) -> *mut PrivateKeySignResponse {
    let raw_private_key = read_array::<PRIVATE_KEY_BYTES>(raw_private_key_ptr);
    let message = read_bytes(message_ptr, message_len);
    convert_result_to_ptr::<_, BLSError, _>(|| {
        let raw_private_key = raw_private_key.ok_or(BLSError::InvalidPrivateKey)?;
        let private_key = PrivateKey::from_bytes(&raw_private_key)?;
        let signature = private_key.sign(message, &*HASH_TO_G2)?;
        Ok(PrivateKeySignResponse {
            signature: signature.to_bytes()?,
        })
    })
}

/// Derives the public key. Key bytes are reduced modulo the group order, so every input
/// has a public key.
///
/// # Safety
///
/// `raw_private_key_ptr` must point to 32 readable bytes.
#[no_mangle]
pub unsafe extern "C" fn private_key_public_key(
    raw_private_key_ptr: *const u8,
) -> *mut PrivateKeyPublicKeyResponse {
    let raw_private_key = read_array::<PRIVATE_KEY_BYTES>(raw_private_key_ptr);
    convert_result_to_ptr::<_, BLSError, _>(|| {
        let raw_private_key = raw_private_key.ok_or(BLSError::InvalidPrivateKey)?;
        let public_key = PrivateKey::from_bytes_reduced(&raw_private_key).to_public();
        Ok(PrivateKeyPublicKeyResponse {
            public_key: public_key.to_bytes()?,
        })
    })
}
