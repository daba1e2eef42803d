// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **gahshomar**, Gregorian/Jalaali/Islamic calendar conversion.
//!
//! This crate exposes a flat C-compatible API over plain
//! `(year, month, day)` structs: direct conversions between the Gregorian,
//! Jalaali and tabular Islamic calendars, a generic tagged conversion, and
//! the validation helpers.

mod date;
mod error;

pub use date::*;
pub use error::*;

/// Run `$body`, mapping a caught panic to `$status`.
///
/// Unwinding across `extern "C"` is undefined behaviour, so every function
/// that returns a status goes through this guard.
#[macro_export]
#[doc(hidden)]
macro_rules! catch_panic {
    ($status:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(result) => result,
            Err(_) => $status,
        }
    };
}

/// Returns the gahshomar-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn gahshomar_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
