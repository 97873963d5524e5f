//! Tagalog phrase-to-number parsing (best effort).
//!
//! Tokenizes a phrase such as "isang libo't dalawang daan at tatlumpu't apat"
//! and accumulates a value the way the words are spoken. This is not an
//! inverse of the renderer: unknown words are skipped, word order is not
//! checked, and ligatured teen/tens forms ("labing-isang", "dalawampung",
//! "sampung") are not recognized, so phrases containing them come back with
//! the wrong value.

use tracing::{debug, debug_span};

use crate::converter::vocab::{Magnitude, CONJUNCTION, CONTRACTION};
use crate::settings::{settings, ParserSettings};

/// Parse a Tagalog number phrase using the global settings.
///
/// Returns `None` if the phrase has more tokens than `parser.max_tokens` or
/// the accumulated value overflows. Anything else yields a number, including
/// `Some(0)` for an empty phrase or one made only of unknown words.
pub fn parse_phrase(phrase: &str) -> Option<u64> {
    parse_phrase_with(phrase, &settings().parser)
}

/// Parse a Tagalog number phrase with explicit parser settings.
pub fn parse_phrase_with(phrase: &str, cfg: &ParserSettings) -> Option<u64> {
    let _span = debug_span!("parse_phrase", len = phrase.len()).entered();

    let folded;
    let phrase = if cfg.fold_case {
        folded = phrase.to_lowercase();
        folded.as_str()
    } else {
        phrase
    };
    let normalized = phrase.replace(&format!("{CONTRACTION} "), " ");
    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|t| *t != CONJUNCTION)
        .collect();
    if tokens.len() > cfg.max_tokens {
        debug!(tokens = tokens.len(), max = cfg.max_tokens, "too many tokens");
        return None;
    }

    let mut total: u64 = 0;
    let mut current: u64 = 0;
    for token in tokens {
        if token == "daan" || token == "raan" {
            current = if current == 0 {
                100
            } else {
                current.checked_mul(100)?
            };
        } else if let Some(m) = Magnitude::from_suffix(token) {
            // A bare suffix stands for its own scale, then gets scaled again:
            // "libo" alone is 1000 * 1000.
            if current == 0 {
                current = m.scale();
            }
            total = total.checked_add(current.checked_mul(m.scale())?)?;
            current = 0;
        } else if let Some(v) = word_value(token) {
            current = current.checked_add(v)?;
        } else {
            debug!(token, "skipped");
        }
    }

    let result = total.checked_add(current)?;
    debug!(result);
    Some(result)
}

/// Value of a single numeral token, including the "-ng" ligatured ones.
fn word_value(token: &str) -> Option<u64> {
    let v = match token {
        "sero" => 0,
        "isa" | "isang" => 1,
        "dalawa" | "dalawang" => 2,
        "tatlo" | "tatlong" => 3,
        "apat" => 4,
        "lima" | "limang" => 5,
        "anim" => 6,
        "pito" | "pitong" => 7,
        "walo" | "walong" => 8,
        "siyam" => 9,
        "sampu" => 10,
        "labing-isa" => 11,
        "labindalawa" => 12,
        "labintatlo" => 13,
        "labing-apat" => 14,
        "labinlima" => 15,
        "labing-anim" => 16,
        "labimpito" => 17,
        "labingwalo" => 18,
        "labinsiyam" => 19,
        "dalawampu" => 20,
        "tatlumpu" => 30,
        "apatnapu" => 40,
        "limampu" => 50,
        "animnapu" => 60,
        "pitumpu" => 70,
        "walumpu" => 80,
        "siyamnapu" => 90,
        _ => return None,
    };
    Some(v)
}
