use log::trace;
use std::ptr::NonNull;

/// A host owned copy of the bytes handed to the engine for a single call.
///
/// The buffer is released when it goes out of scope, so every exit path of the calling
/// function frees it, including early returns.
pub(crate) struct RequestBuffer {
    bytes: Box<[u8]>,
}

impl RequestBuffer {
    pub(crate) fn copy_from(bytes: &[u8]) -> Self {
        RequestBuffer {
            bytes: bytes.to_vec().into_boxed_slice(),
        }
    }

    pub(crate) fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl Drop for RequestBuffer {
    fn drop(&mut self) {
        trace!("releasing {} byte request buffer", self.bytes.len());
    }
}

/// An engine allocated response object and the function that frees it.
pub(crate) trait NativeResponse {
    /// Name used in logs and errors
    const OPERATION: &'static str;

    /// Releases the response.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by the engine and not released yet.
    unsafe fn destroy(ptr: *mut Self);
}

/// Scoped ownership of a non-null engine response.
///
/// The payload can be read exactly once with [`Response::copy_out`], which consumes the guard
/// and releases the response. A guard dropped without being read still releases it.
pub(crate) struct Response<T: NativeResponse> {
    ptr: NonNull<T>,
}

impl<T: NativeResponse> Response<T> {
    /// Takes ownership of `ptr`. A null pointer is the engine's failure signal: there is
    /// nothing to read and nothing to release.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a live response that nobody else will release.
    pub(crate) unsafe fn from_raw(ptr: *mut T) -> Option<Self> {
        let ptr = NonNull::new(ptr)?;
        trace!("acquired {} response", T::OPERATION);
        Some(Response { ptr })
    }

    /// Copies the payload into host memory, then releases the response.
    pub(crate) fn copy_out<P, F: FnOnce(&T) -> P>(self, f: F) -> P {
        // Safety: the pointer is non-null and owned by this guard until it drops below
        f(unsafe { self.ptr.as_ref() })
    }
}

impl<T: NativeResponse> Drop for Response<T> {
    fn drop(&mut self) {
        trace!("releasing {} response", T::OPERATION);
        unsafe { T::destroy(self.ptr.as_ptr()) }
    }
}

impl NativeResponse for bls_sys::HashResponse {
    const OPERATION: &'static str = "hash";

    unsafe fn destroy(ptr: *mut Self) {
        bls_sys::destroy_hash_response(ptr)
    }
}

impl NativeResponse for bls_sys::AggregateResponse {
    const OPERATION: &'static str = "aggregate";

    unsafe fn destroy(ptr: *mut Self) {
        bls_sys::destroy_aggregate_response(ptr)
    }
}

impl NativeResponse for bls_sys::PrivateKeyGenerateResponse {
    const OPERATION: &'static str = "private_key_generate";

    unsafe fn destroy(ptr: *mut Self) {
        bls_sys::destroy_private_key_generate_response(ptr)
    }
}

impl NativeResponse for bls_sys::PrivateKeySignResponse {
    const OPERATION: &'static str = "private_key_sign";

    unsafe fn destroy(ptr: *mut Self) {
        bls_sys::destroy_private_key_sign_response(ptr)
    }
}

impl NativeResponse for bls_sys::PrivateKeyPublicKeyResponse {
    const OPERATION: &'static str = "private_key_public_key";

    unsafe fn destroy(ptr: *mut Self) {
        bls_sys::destroy_private_key_public_key_response(ptr)
    }
}
