//! FFI Bindings for BLS Signatures over the BLS12-381 Curve
//!
//! Every function that produces a payload hands out a heap allocated `#[repr(C)]` response
//! which the caller must release with the matching `destroy_*` function once it has copied
//! the payload. Functions that can fail return a null pointer instead.

use bls_crypto::hash_to_curve::wb::HASH_TO_G2;
use core::fmt::Display;
use once_cell::sync::Lazy;
use std::{ptr, slice};

pub mod responses;
pub mod signatures;

pub use responses::*;
pub use signatures::*;

pub fn convert_result_to_bool<T, E: Display, F: FnOnce() -> Result<T, E>>(f: F) -> bool {
    if let Err(e) = f() {
        log::error!("BLS library error: {}", e);
        return false;
    }
    true
}

/// Boxes the successful result for the caller, or logs the error and returns null.
pub(crate) fn convert_result_to_ptr<T, E: Display, F: FnOnce() -> Result<T, E>>(
    f: F,
) -> *mut T {
    match f() {
        Ok(response) => Box::into_raw(Box::new(response)),
        Err(e) => {
            log::error!("BLS library error: {}", e);
            ptr::null_mut()
        }
    }
}

/// Borrows `len` bytes at `ptr`. A null pointer or a zero length reads as the empty slice.
///
/// # Safety
///
/// If non-null, `ptr` must be valid for reads of `len` bytes for the lifetime `'a`.
pub(crate) unsafe fn read_bytes<'a>(ptr: *const u8, len: usize) -> &'a [u8] {
    if ptr.is_null() || len == 0 {
        return &[];
    }
    slice::from_raw_parts(ptr, len)
}

/// Copies a fixed width input out of caller memory.
///
/// # Safety
///
/// If non-null, `ptr` must be valid for reads of `N` bytes.
pub(crate) unsafe fn read_array<const N: usize>(ptr: *const u8) -> Option<[u8; N]> {
    if ptr.is_null() {
        return None;
    }
    let mut out = [0u8; N];
    out.copy_from_slice(slice::from_raw_parts(ptr, N));
    Some(out)
}

#[no_mangle]
/// Initializes the lazily evaluated hasher.
pub extern "C" fn init() {
    Lazy::force(&HASH_TO_G2);
}
