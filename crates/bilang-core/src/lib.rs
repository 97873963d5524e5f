//! Tagalog number words.
//!
//! `render_number` turns an integer in `0..=999_999_999_999` into its
//! Tagalog phrase; `parse_phrase` recovers a value from a phrase on a
//! best-effort basis.

pub mod converter;
pub(crate) mod phonetics;
pub mod reverse;
pub mod settings;
pub mod validate;

pub use converter::{render_number, render_value};
pub use reverse::{parse_phrase, parse_phrase_with};
pub use validate::{validate, Input, ValidationError, MAX_SUPPORTED};
