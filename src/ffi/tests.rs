use super::*;
use std::ffi::{CStr, CString};

fn take(s: *mut c_char) -> String {
    assert!(!s.is_null());
    let out = unsafe { CStr::from_ptr(s) }.to_str().unwrap().to_string();
    bilang_string_free(s);
    out
}

#[test]
fn test_ffi_version() {
    let v = unsafe { CStr::from_ptr(bilang_engine_version()) };
    assert_eq!(v.to_str().unwrap(), "0.1.0");
}

#[test]
fn test_ffi_render() {
    assert_eq!(take(bilang_render(1234)), "isang libo't dalawang daan at tatlumpu't apat");
    assert_eq!(take(bilang_render(0)), "sero");
    assert_eq!(take(bilang_render(-1)), "Negative numbers are not supported.");
    assert_eq!(
        take(bilang_render(1_000_000_000_000)),
        "Numbers above 999,999,999,999 are not supported."
    );
    assert_eq!(take(bilang_render_real(1.5)), "Input must be an integer.");
}

#[test]
fn test_ffi_render_text() {
    let text = CString::new("25").unwrap();
    assert_eq!(take(bilang_render_text(text.as_ptr())), "dalawampu't lima");
    let text = CString::new("dalawa").unwrap();
    assert_eq!(take(bilang_render_text(text.as_ptr())), "Input must be an integer.");
    assert!(bilang_render_text(ptr::null()).is_null());
}

#[test]
fn test_ffi_parse() {
    let phrase = CString::new("isang daan at dalawampu't tatlo").unwrap();
    let mut out = 0u64;
    assert!(bilang_parse(phrase.as_ptr(), &mut out));
    assert_eq!(out, 123);

    let mut untouched = 7u64;
    assert!(!bilang_parse(ptr::null(), &mut untouched));
    assert_eq!(untouched, 7);
    assert!(!bilang_parse(phrase.as_ptr(), ptr::null_mut()));
}

#[test]
fn test_ffi_parse_overflow_is_false() {
    let phrase = CString::new(vec!["daan"; 12].join(" ")).unwrap();
    let mut out = 0u64;
    assert!(!bilang_parse(phrase.as_ptr(), &mut out));
}

#[test]
fn test_ffi_settings_init_rejects_invalid() {
    let bad = CString::new("[parser]\nmax_tokens = 0\n").unwrap();
    assert!(!bilang_settings_init(bad.as_ptr()));
    assert!(!bilang_settings_init(ptr::null()));
}

#[test]
fn test_ffi_string_free_null() {
    bilang_string_free(ptr::null_mut());
}
