//! One function per engine export. Each builds its request buffers, makes the call, and
//! converts the response back into host owned storage. `None` means the engine returned null.

use crate::encoding::{Digest, PrivateKey, PublicKey, Signature};
use crate::lifecycle::{RequestBuffer, Response};

pub(crate) fn hash(message: &[u8]) -> Option<Digest> {
    let message = RequestBuffer::copy_from(message);

    let response = unsafe { Response::from_raw(bls_sys::hash(message.as_ptr(), message.len())) }?;

    Some(response.copy_out(|res| Digest(res.digest)))
}

pub(crate) fn verify(
    signature: &Signature,
    flattened_digests: &[u8],
    flattened_public_keys: &[u8],
) -> bool {
    let signature = RequestBuffer::copy_from(&signature.0);
    let digests = RequestBuffer::copy_from(flattened_digests);
    let public_keys = RequestBuffer::copy_from(flattened_public_keys);

    let res = unsafe {
        bls_sys::verify(
            signature.as_ptr(),
            digests.as_ptr(),
            digests.len(),
            public_keys.as_ptr(),
            public_keys.len(),
        )
    };

    res > 0
}

pub(crate) fn aggregate(flattened_signatures: &[u8]) -> Option<Signature> {
    let signatures = RequestBuffer::copy_from(flattened_signatures);

    let response = unsafe {
        Response::from_raw(bls_sys::aggregate(signatures.as_ptr(), signatures.len()))
    }?;

    Some(response.copy_out(|res| Signature(res.signature)))
}

pub(crate) fn private_key_generate() -> Option<PrivateKey> {
    let response = unsafe { Response::from_raw(bls_sys::private_key_generate()) }?;

    Some(response.copy_out(|res| PrivateKey(res.private_key)))
}

pub(crate) fn private_key_sign(private_key: &PrivateKey, message: &[u8]) -> Option<Signature> {
    let private_key = RequestBuffer::copy_from(&private_key.0);
    let message = RequestBuffer::copy_from(message);

    let response = unsafe {
        Response::from_raw(bls_sys::private_key_sign(
            private_key.as_ptr(),
            message.as_ptr(),
            message.len(),
        ))
    }?;

    Some(response.copy_out(|res| Signature(res.signature)))
}

pub(crate) fn private_key_public_key(private_key: &PrivateKey) -> Option<PublicKey> {
    let private_key = RequestBuffer::copy_from(&private_key.0);

    let response =
        unsafe { Response::from_raw(bls_sys::private_key_public_key(private_key.as_ptr())) }?;

    Some(response.copy_out(|res| PublicKey(res.public_key)))
}
