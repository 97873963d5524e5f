//! C API over the conversion functions.
//!
//! Strings returned to the caller are owned by Rust and must be released with
//! [`bilang_string_free`].

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use tracing::debug;

use bilang_core::{parse_phrase, render_number, Input};

#[cfg(test)]
mod tests;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Hand a Rust string to the caller. Null if it contains an interior NUL.
fn owned_cstring(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn bilang_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Render a signed integer. Invalid values yield the validator's message.
#[no_mangle]
pub extern "C" fn bilang_render(value: i64) -> *mut c_char {
    owned_cstring(render_number(value))
}

/// Render a floating-point value. Always the "must be an integer" message,
/// matching the validator's treatment of non-integer input.
#[no_mangle]
pub extern "C" fn bilang_render_real(value: f64) -> *mut c_char {
    owned_cstring(render_number(value))
}

/// Render decimal text (e.g. "1234"). Null pointer or invalid UTF-8 yields null.
#[no_mangle]
pub extern "C" fn bilang_render_text(text: *const c_char) -> *mut c_char {
    let Some(text) = (unsafe { cptr_to_str(text) }) else {
        return ptr::null_mut();
    };
    owned_cstring(render_number(Input::from_text(text)))
}

/// Parse a phrase. Returns `true` and writes `*out` on success; returns
/// `false` (leaving `*out` untouched) when there is no result.
#[no_mangle]
pub extern "C" fn bilang_parse(phrase: *const c_char, out: *mut u64) -> bool {
    if out.is_null() {
        return false;
    }
    let Some(phrase) = (unsafe { cptr_to_str(phrase) }) else {
        return false;
    };
    match parse_phrase(phrase) {
        Some(v) => {
            // SAFETY: `out` was checked for null above.
            unsafe { *out = v };
            true
        }
        None => {
            debug!("bilang_parse: no result");
            false
        }
    }
}

/// Free a string returned by this library. No-op on null.
#[no_mangle]
pub extern "C" fn bilang_string_free(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: `s` was produced by `CString::into_raw` in this module.
        unsafe { drop(CString::from_raw(s)) };
    }
}

/// Load custom settings TOML before the first parse. Returns `false` on a
/// parse/validation error or if settings were already initialized.
#[no_mangle]
pub extern "C" fn bilang_settings_init(toml: *const c_char) -> bool {
    let Some(toml) = (unsafe { cptr_to_str(toml) }) else {
        return false;
    };
    bilang_core::settings::init_custom(toml.to_string()).is_ok()
}

/// Enable JSONL tracing under `log_dir` (no-op without the `trace` feature).
#[no_mangle]
pub extern "C" fn bilang_trace_init(log_dir: *const c_char) {
    if let Some(dir) = unsafe { cptr_to_str(log_dir) } {
        crate::init_tracing(Path::new(dir));
    }
}
