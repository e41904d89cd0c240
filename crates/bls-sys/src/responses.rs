use bls_crypto::{DIGEST_BYTES, PRIVATE_KEY_BYTES, PUBLIC_KEY_BYTES, SIGNATURE_BYTES};

/// Compressed G2 hash of a message
#[repr(C)]
pub struct HashResponse {
    pub digest: [u8; DIGEST_BYTES],
}

/// Compressed G2 sum of the input signatures
#[repr(C)]
pub struct AggregateResponse {
    pub signature: [u8; SIGNATURE_BYTES],
}

#[repr(C)]
pub struct PrivateKeyGenerateResponse {
    pub private_key: [u8; PRIVATE_KEY_BYTES],
}

#[repr(C)]
pub struct PrivateKeySignResponse {
    pub signature: [u8; SIGNATURE_BYTES],
}

#[repr(C)]
pub struct PrivateKeyPublicKeyResponse {
    pub public_key: [u8; PUBLIC_KEY_BYTES],
}

// Destructors

/// # Safety
///
/// This function must only be called on a valid HashResponse pointer, at most once.
#[no_mangle]
pub unsafe extern "C" fn destroy_hash_response(ptr: *mut HashResponse) {
    destroy(ptr)
}

/// # Safety
///
/// This function must only be called on a valid AggregateResponse pointer, at most once.
#[no_mangle]
pub unsafe extern "C" fn destroy_aggregate_response(ptr: *mut AggregateResponse) {
    destroy(ptr)
}

/// # Safety
///
/// This function must only be called on a valid PrivateKeyGenerateResponse pointer, at
/// most once.
#[no_mangle]
pub unsafe extern "C" fn destroy_private_key_generate_response(
    ptr: *mut PrivateKeyGenerateResponse,
) {
    destroy(ptr)
}

/// # Safety
///
/// This function must only be called on a valid PrivateKeySignResponse pointer, at most
/// once.
#[no_mangle]
pub unsafe extern "C" fn destroy_private_key_sign_response(ptr: *mut PrivateKeySignResponse) {
    destroy(ptr)
}

/// # Safety
///
/// This function must only be called on a valid PrivateKeyPublicKeyResponse pointer, at
/// most once.
#[no_mangle]
pub unsafe extern "C" fn destroy_private_key_public_key_response(
    ptr: *mut PrivateKeyPublicKeyResponse,
) {
    destroy(ptr)
}

unsafe fn destroy<T>(ptr: *mut T) {
    if ptr.is_null() {
        return;
    }
    drop(Box::from_raw(ptr));
}
