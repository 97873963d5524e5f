use super::ligature::ligature;
use super::vocab::{Ones, Teen, Tens, CONJUNCTION, CONTRACTION};

/// Render a magnitude block (`0..=999`) as hundreds, "at", then tens-units.
///
/// Returns an empty string for 0. `n` must be a decomposed block; larger
/// values are a caller bug.
pub fn render_block(n: u64) -> String {
    debug_assert!(n <= 999, "block out of range: {n}");
    if n == 0 {
        return String::new();
    }

    let hundreds = match Ones::from_value(n / 100) {
        None => String::new(),
        Some(Ones::Isa) => "isang daan".to_string(),
        Some(h) => {
            let l = ligature(h.word(), true);
            format!("{} {}", l.phrase, l.hundred.as_str())
        }
    };
    let rest = render_tens_units(n % 100);

    match (hundreds.is_empty(), rest.is_empty()) {
        (false, false) => format!("{hundreds} {CONJUNCTION} {rest}"),
        (false, true) => hundreds,
        (true, _) => rest,
    }
}

/// Render `0..=99`. Returns an empty string for 0 and for anything above 99.
pub fn render_tens_units(r: u64) -> String {
    if let Some(o) = Ones::from_value(r) {
        return o.word().to_string();
    }
    if let Some(t) = Teen::from_value(r) {
        return t.word().to_string();
    }
    let Some(tens) = Tens::from_digit(r / 10).filter(|_| r < 100) else {
        return String::new();
    };
    match Ones::from_value(r % 10) {
        Some(unit) => format!("{}{CONTRACTION} {}", tens.word(), unit.word()),
        None => tens.word().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tens_units_ranges() {
        assert_eq!(render_tens_units(0), "");
        assert_eq!(render_tens_units(1), "isa");
        assert_eq!(render_tens_units(10), "sampu");
        assert_eq!(render_tens_units(13), "labintatlo");
        assert_eq!(render_tens_units(16), "labing-anim");
        assert_eq!(render_tens_units(40), "apatnapu");
        assert_eq!(render_tens_units(61), "animnapu't isa");
        assert_eq!(render_tens_units(100), "");
    }

    #[test]
    fn test_block_hundreds() {
        assert_eq!(render_block(0), "");
        assert_eq!(render_block(100), "isang daan");
        assert_eq!(render_block(300), "tatlong daan");
        assert_eq!(render_block(400), "apat na raan");
        assert_eq!(render_block(600), "anim na raan");
        assert_eq!(render_block(900), "siyam na raan");
    }

    #[test]
    fn test_block_with_remainder() {
        assert_eq!(render_block(101), "isang daan at isa");
        assert_eq!(render_block(110), "isang daan at sampu");
        assert_eq!(render_block(419), "apat na raan at labinsiyam");
        assert_eq!(render_block(999), "siyam na raan at siyamnapu't siyam");
        assert_eq!(render_block(42), "apatnapu't dalawa");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "block out of range")]
    fn test_block_rejects_oversized_value() {
        render_block(1000);
    }
}
