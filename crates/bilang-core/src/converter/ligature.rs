use crate::phonetics::{ends_open, last_word};

use super::vocab::{Ones, Tens};

/// The word for "hundred", whose initial consonant alternates with the
/// preceding ligature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HundredWord {
    Daan,
    Raan,
}

impl HundredWord {
    pub fn as_str(self) -> &'static str {
        match self {
            HundredWord::Daan => "daan",
            HundredWord::Raan => "raan",
        }
    }
}

/// A phrase with its ligature applied, plus the matching hundred word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ligatured {
    pub phrase: String,
    pub hundred: HundredWord,
}

/// Attach the "ng" / "na" ligature to a numeral phrase.
///
/// `hundred_prefix` marks a bare ones word that is about to be followed by
/// the hundred word; only "isa" behaves differently in that position.
pub fn ligature(phrase: &str, hundred_prefix: bool) -> Ligatured {
    if phrase.is_empty() {
        return Ligatured {
            phrase: String::new(),
            hundred: HundredWord::Daan,
        };
    }
    if hundred_prefix && phrase == Ones::Isa.word() {
        return Ligatured {
            phrase: "isang".to_string(),
            hundred: HundredWord::Daan,
        };
    }

    let last = last_word(phrase);
    if ends_open(last) || last == Ones::Sampu.word() || Tens::takes_ng(last) {
        Ligatured {
            phrase: format!("{phrase}ng"),
            hundred: HundredWord::Daan,
        }
    } else {
        Ligatured {
            phrase: format!("{phrase} na"),
            hundred: HundredWord::Raan,
        }
    }
}
