//! Input validation for the forward converter.
//!
//! Accepts loosely-typed input (integers, floats, command-line text) and
//! either yields a value in `0..=MAX_SUPPORTED` or the reason it was rejected.
//! Each rejection displays as the fixed user-facing message.

/// Largest value the converter renders (just under one trillion).
pub const MAX_SUPPORTED: u64 = 999_999_999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Input must be an integer.")]
    NotAnInteger,
    #[error("Negative numbers are not supported.")]
    Negative,
    #[error("Numbers above 999,999,999,999 are not supported.")]
    TooLarge,
}

/// A value handed to the validator before its type is known to be acceptable.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Integer(i128),
    /// Floating-point input is never an integer, even `1.0`.
    Real(f64),
    Text(String),
}

impl Input {
    /// Classify command-line text.
    ///
    /// An optional sign followed by ASCII digits is an `Integer`; anything
    /// `f64` accepts is `Real`; everything else stays `Text`. Digit strings
    /// too long for `i128` are kept as `Integer(i128::MAX)` / `MIN` so they
    /// are rejected as out of range rather than as non-integers.
    pub fn from_text(text: &str) -> Self {
        let t = text.trim();
        let digits = t.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(t);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return match t.parse::<i128>() {
                Ok(v) => Input::Integer(v),
                Err(_) if t.starts_with('-') => Input::Integer(i128::MIN),
                Err(_) => Input::Integer(i128::MAX),
            };
        }
        match t.parse::<f64>() {
            Ok(v) => Input::Real(v),
            Err(_) => Input::Text(text.to_string()),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Input {
                fn from(v: $t) -> Self {
                    Input::Integer(i128::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<usize> for Input {
    fn from(v: usize) -> Self {
        Input::Integer(i128::try_from(v).unwrap_or(i128::MAX))
    }
}

impl From<isize> for Input {
    fn from(v: isize) -> Self {
        Input::Integer(v as i128)
    }
}

impl From<f32> for Input {
    fn from(v: f32) -> Self {
        Input::Real(f64::from(v))
    }
}

impl From<f64> for Input {
    fn from(v: f64) -> Self {
        Input::Real(v)
    }
}

impl From<&str> for Input {
    fn from(v: &str) -> Self {
        Input::Text(v.to_string())
    }
}

impl From<String> for Input {
    fn from(v: String) -> Self {
        Input::Text(v)
    }
}

/// Validate an input, returning the accepted value.
///
/// Checks run in order: not an integer, negative, too large.
pub fn validate(input: &Input) -> Result<u64, ValidationError> {
    let value = match input {
        Input::Integer(v) => *v,
        Input::Real(_) | Input::Text(_) => return Err(ValidationError::NotAnInteger),
    };
    if value < 0 {
        return Err(ValidationError::Negative);
    }
    if value > i128::from(MAX_SUPPORTED) {
        return Err(ValidationError::TooLarge);
    }
    u64::try_from(value).map_err(|_| ValidationError::TooLarge)
}
