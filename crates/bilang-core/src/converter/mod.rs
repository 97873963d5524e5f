//! Integer-to-Tagalog conversion.
//!
//! Splits a validated value into billions, millions, thousands and units
//! blocks, renders each block as hundreds / "at" / tens-units, ligatures the
//! scaled blocks before their suffix word, and joins everything left to
//! right. "libo" takes the contraction "'t" when more words follow it.

mod block;
pub mod ligature;
pub mod vocab;


use tracing::{debug, debug_span};

use crate::validate::{validate, Input, ValidationError, MAX_SUPPORTED};

pub use block::{render_block, render_tens_units};
pub use ligature::{ligature, HundredWord, Ligatured};
pub use vocab::{Magnitude, Ones, Teen, Tens, ZERO_WORD};

use vocab::CONTRACTION;

/// A non-zero magnitude block and its rendered phrase, suffix included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub magnitude: Magnitude,
    pub value: u64,
    pub phrase: String,
}

/// Split `n` into `(magnitude, block)` pairs, largest magnitude first.
///
/// Every block is in `0..=999` except the billions block, which absorbs
/// anything above; validated input keeps it below 1000.
pub fn decompose(n: u64) -> [(Magnitude, u64); 4] {
    let mut rest = n;
    Magnitude::DESCENDING.map(|m| {
        let block = rest / m.scale();
        rest %= m.scale();
        (m, block)
    })
}

/// Render each non-zero block of `n`, largest magnitude first.
///
/// `n` must already be validated.
pub(crate) fn render_blocks(n: u64) -> Vec<RenderedBlock> {
    debug_assert!(n <= MAX_SUPPORTED, "unvalidated value: {n}");
    decompose(n)
        .into_iter()
        .filter(|&(_, value)| value != 0)
        .map(|(magnitude, value)| {
            let body = render_block(value);
            let phrase = match magnitude.suffix() {
                Some(suffix) => format!("{} {suffix}", ligature(&body, false).phrase),
                None => body,
            };
            RenderedBlock {
                magnitude,
                value,
                phrase,
            }
        })
        .collect()
}

/// Convert a value in `0..=MAX_SUPPORTED` to its Tagalog phrase.
pub fn render_value(n: u64) -> Result<String, ValidationError> {
    let _span = debug_span!("render_value", n).entered();
    let n = validate(&Input::from(n))?;
    if n == 0 {
        return Ok(ZERO_WORD.to_string());
    }

    let blocks = render_blocks(n);
    debug!(blocks = blocks.len());

    let mut out = String::new();
    let mut prev: Option<Magnitude> = None;
    for block in &blocks {
        match prev {
            Some(Magnitude::Thousand) => {
                out.push_str(CONTRACTION);
                out.push(' ');
            }
            Some(_) => out.push(' '),
            None => {}
        }
        out.push_str(&block.phrase);
        prev = Some(block.magnitude);
    }
    Ok(out)
}

/// Convert any input to a Tagalog phrase, or to the validator's message.
///
/// Validation failures share the return channel with phrases:
///
/// ```
/// use bilang_core::render_number;
///
/// assert_eq!(render_number(25), "dalawampu't lima");
/// assert_eq!(render_number(-1), "Negative numbers are not supported.");
/// assert_eq!(render_number(1.5), "Input must be an integer.");
/// ```
pub fn render_number(input: impl Into<Input>) -> String {
    let input = input.into();
    match validate(&input).and_then(render_value) {
        Ok(phrase) => phrase,
        Err(e) => {
            debug!(?input, error = %e, "rejected");
            e.to_string()
        }
    }
}
