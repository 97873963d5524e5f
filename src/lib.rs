//! Tagalog number words: engine facade and C API.
//!
//! Re-exports the `bilang-core` conversion API and exposes it over a small
//! C ABI for hosts that link the static or dynamic library.

// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
mod trace_init;

pub use bilang_core::converter;
pub use bilang_core::reverse;
pub use bilang_core::settings;
pub use bilang_core::validate;
pub use bilang_core::{
    parse_phrase, parse_phrase_with, render_number, render_value, Input, ValidationError,
    MAX_SUPPORTED,
};

pub use ffi::*;
pub use trace_init::init_tracing;
