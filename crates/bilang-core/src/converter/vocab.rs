//! Fixed Tagalog numeral vocabulary.
//!
//! Teen and tens words are irregular (elision, assimilated nasals), so every
//! form is a literal table entry rather than something derived from the
//! ones words.

/// The ones vocabulary, 1 through 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ones {
    Isa = 1,
    Dalawa,
    Tatlo,
    Apat,
    Lima,
    Anim,
    Pito,
    Walo,
    Siyam,
    Sampu,
}

impl Ones {
    pub const ALL: [Ones; 10] = [
        Ones::Isa,
        Ones::Dalawa,
        Ones::Tatlo,
        Ones::Apat,
        Ones::Lima,
        Ones::Anim,
        Ones::Pito,
        Ones::Walo,
        Ones::Siyam,
        Ones::Sampu,
    ];

    /// `None` outside `1..=10`.
    pub fn from_value(n: u64) -> Option<Self> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    pub fn value(self) -> u64 {
        self as u64
    }

    pub fn word(self) -> &'static str {
        match self {
            Ones::Isa => "isa",
            Ones::Dalawa => "dalawa",
            Ones::Tatlo => "tatlo",
            Ones::Apat => "apat",
            Ones::Lima => "lima",
            Ones::Anim => "anim",
            Ones::Pito => "pito",
            Ones::Walo => "walo",
            Ones::Siyam => "siyam",
            Ones::Sampu => "sampu",
        }
    }
}

/// 11 through 19.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Teen {
    LabingIsa = 11,
    Labindalawa,
    Labintatlo,
    LabingApat,
    Labinlima,
    LabingAnim,
    Labimpito,
    Labingwalo,
    Labinsiyam,
}

impl Teen {
    pub const ALL: [Teen; 9] = [
        Teen::LabingIsa,
        Teen::Labindalawa,
        Teen::Labintatlo,
        Teen::LabingApat,
        Teen::Labinlima,
        Teen::LabingAnim,
        Teen::Labimpito,
        Teen::Labingwalo,
        Teen::Labinsiyam,
    ];

    /// `None` outside `11..=19`.
    pub fn from_value(n: u64) -> Option<Self> {
        let idx = usize::try_from(n).ok()?.checked_sub(11)?;
        Self::ALL.get(idx).copied()
    }

    pub fn value(self) -> u64 {
        self as u64
    }

    pub fn word(self) -> &'static str {
        match self {
            Teen::LabingIsa => "labing-isa",
            Teen::Labindalawa => "labindalawa",
            Teen::Labintatlo => "labintatlo",
            Teen::LabingApat => "labing-apat",
            Teen::Labinlima => "labinlima",
            Teen::LabingAnim => "labing-anim",
            Teen::Labimpito => "labimpito",
            Teen::Labingwalo => "labingwalo",
            Teen::Labinsiyam => "labinsiyam",
        }
    }
}

/// Multiples of ten from 20 to 90, keyed by tens digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tens {
    Dalawampu = 2,
    Tatlumpu,
    Apatnapu,
    Limampu,
    Animnapu,
    Pitumpu,
    Walumpu,
    Siyamnapu,
}

impl Tens {
    pub const ALL: [Tens; 8] = [
        Tens::Dalawampu,
        Tens::Tatlumpu,
        Tens::Apatnapu,
        Tens::Limampu,
        Tens::Animnapu,
        Tens::Pitumpu,
        Tens::Walumpu,
        Tens::Siyamnapu,
    ];

    /// `None` unless `digit` is in `2..=9`.
    pub fn from_digit(digit: u64) -> Option<Self> {
        let idx = usize::try_from(digit).ok()?.checked_sub(2)?;
        Self::ALL.get(idx).copied()
    }

    pub fn value(self) -> u64 {
        self as u64 * 10
    }

    pub fn word(self) -> &'static str {
        match self {
            Tens::Dalawampu => "dalawampu",
            Tens::Tatlumpu => "tatlumpu",
            Tens::Apatnapu => "apatnapu",
            Tens::Limampu => "limampu",
            Tens::Animnapu => "animnapu",
            Tens::Pitumpu => "pitumpu",
            Tens::Walumpu => "walumpu",
            Tens::Siyamnapu => "siyamnapu",
        }
    }

    /// Tens words that take the suffixed "ng" ligature.
    ///
    /// "apatnapu" and "animnapu" are absent; every entry also ends in a
    /// vowel, so the list never changes the outcome on its own.
    pub fn takes_ng(word: &str) -> bool {
        matches!(
            word,
            "dalawampu" | "tatlumpu" | "limampu" | "pitumpu" | "walumpu" | "siyamnapu"
        )
    }
}

/// Power-of-1000 scales, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    Billion,
    Million,
    Thousand,
    Units,
}

impl Magnitude {
    /// Order in which blocks are rendered and joined.
    pub const DESCENDING: [Magnitude; 4] = [
        Magnitude::Billion,
        Magnitude::Million,
        Magnitude::Thousand,
        Magnitude::Units,
    ];

    pub fn scale(self) -> u64 {
        match self {
            Magnitude::Billion => 1_000_000_000,
            Magnitude::Million => 1_000_000,
            Magnitude::Thousand => 1_000,
            Magnitude::Units => 1,
        }
    }

    /// Suffix word appended after a ligatured block; `None` for units.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Magnitude::Billion => Some("bilyon"),
            Magnitude::Million => Some("milyon"),
            Magnitude::Thousand => Some("libo"),
            Magnitude::Units => None,
        }
    }

    pub fn from_suffix(word: &str) -> Option<Self> {
        match word {
            "bilyon" => Some(Magnitude::Billion),
            "milyon" => Some(Magnitude::Million),
            "libo" => Some(Magnitude::Thousand),
            _ => None,
        }
    }
}

pub const ZERO_WORD: &str = "sero";

/// The conjunction between a hundreds part and its remainder.
pub const CONJUNCTION: &str = "at";

/// Contracted conjunction, attached to the preceding word.
pub const CONTRACTION: &str = "'t";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ones_lookup() {
        assert_eq!(Ones::from_value(0), None);
        assert_eq!(Ones::from_value(1), Some(Ones::Isa));
        assert_eq!(Ones::from_value(10), Some(Ones::Sampu));
        assert_eq!(Ones::from_value(11), None);
        for (i, o) in Ones::ALL.iter().enumerate() {
            assert_eq!(o.value(), i as u64 + 1);
        }
    }

    #[test]
    fn test_teen_lookup() {
        assert_eq!(Teen::from_value(10), None);
        assert_eq!(Teen::from_value(12).map(Teen::word), Some("labindalawa"));
        assert_eq!(Teen::from_value(17).map(Teen::word), Some("labimpito"));
        assert_eq!(Teen::from_value(20), None);
        assert_eq!(Teen::Labinsiyam.value(), 19);
    }

    #[test]
    fn test_tens_lookup() {
        assert_eq!(Tens::from_digit(1), None);
        assert_eq!(Tens::from_digit(4), Some(Tens::Apatnapu));
        assert_eq!(Tens::from_digit(10), None);
        assert_eq!(Tens::Siyamnapu.value(), 90);
        assert!(Tens::takes_ng("walumpu"));
        assert!(!Tens::takes_ng("apatnapu"));
    }

    #[test]
    fn test_magnitudes() {
        let scales: Vec<u64> = Magnitude::DESCENDING.iter().map(|m| m.scale()).collect();
        assert_eq!(scales, vec![1_000_000_000, 1_000_000, 1_000, 1]);
        assert_eq!(Magnitude::from_suffix("libo"), Some(Magnitude::Thousand));
        assert_eq!(Magnitude::from_suffix("daan"), None);
        assert_eq!(Magnitude::Units.suffix(), None);
    }
}
