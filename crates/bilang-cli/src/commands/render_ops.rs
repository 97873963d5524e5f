use std::process;

use serde::Serialize;

use bilang_engine::{parse_phrase, render_number, validate, Input};

use super::die;

/// One rendered command-line value.
#[derive(Debug, Serialize)]
pub struct RenderRecord {
    pub input: String,
    pub output: String,
    pub valid: bool,
}

pub fn render_record(raw: &str) -> RenderRecord {
    let input = Input::from_text(raw);
    let valid = validate(&input).is_ok();
    RenderRecord {
        input: raw.to_string(),
        output: render_number(input),
        valid,
    }
}

pub fn render_cmd(values: &[String], json: bool) {
    let records: Vec<RenderRecord> = values.iter().map(|v| render_record(v)).collect();

    if json {
        println!(
            "{}",
            die!(
                serde_json::to_string_pretty(&records),
                "JSON serialization failed: {}"
            )
        );
    } else {
        for r in &records {
            println!("{}", r.output);
        }
    }

    if records.iter().any(|r| !r.valid) {
        process::exit(1);
    }
}

pub fn parse_cmd(phrase: &str) {
    match parse_phrase(phrase) {
        Some(v) => println!("{v}"),
        None => {
            println!("(no result)");
            process::exit(1);
        }
    }
}

/// Render-then-parse outcome for a single value.
#[derive(Debug, Serialize)]
pub struct RoundTrip {
    pub value: u64,
    pub phrase: String,
    pub parsed: Option<u64>,
}

impl RoundTrip {
    pub fn matches(&self) -> bool {
        self.parsed == Some(self.value)
    }
}

/// Render `raw` and parse the phrase back. `Err` carries the validator's message.
pub fn round_trip(raw: &str) -> Result<RoundTrip, String> {
    let value = validate(&Input::from_text(raw)).map_err(|e| e.to_string())?;
    let phrase = render_number(value);
    let parsed = parse_phrase(&phrase);
    Ok(RoundTrip {
        value,
        phrase,
        parsed,
    })
}

pub fn roundtrip_cmd(values: &[String]) {
    let mut ok = 0usize;
    let mut mismatched = 0usize;
    let mut invalid = 0usize;

    for raw in values {
        match round_trip(raw) {
            Ok(rt) if rt.matches() => {
                ok += 1;
                println!("  \u{2713} {} \u{2192} {}", rt.value, rt.phrase);
            }
            Ok(rt) => {
                mismatched += 1;
                let parsed = rt
                    .parsed
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "(no result)".to_string());
                println!(
                    "  \u{2717} {} \u{2192} {} (parsed: {})",
                    rt.value, rt.phrase, parsed
                );
            }
            Err(msg) => {
                invalid += 1;
                println!("  - {raw} [{msg}]");
            }
        }
    }

    println!();
    println!("=== Summary ===");
    println!("  Match:     {ok:>3}");
    println!("  Mismatch:  {mismatched:>3}");
    println!("  Invalid:   {invalid:>3}");

    if mismatched > 0 || invalid > 0 {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_record() {
        let r = render_record("25");
        assert_eq!(r.output, "dalawampu't lima");
        assert!(r.valid);

        let r = render_record("-3");
        assert_eq!(r.output, "Negative numbers are not supported.");
        assert!(!r.valid);

        let r = render_record("2.5");
        assert_eq!(r.output, "Input must be an integer.");
        assert!(!r.valid);
    }

    #[test]
    fn test_render_record_json_shape() {
        let json = serde_json::to_value(render_record("1000")).unwrap();
        assert_eq!(json["input"], "1000");
        assert_eq!(json["output"], "isang libo");
        assert_eq!(json["valid"], true);
    }

    #[test]
    fn test_round_trip() {
        let rt = round_trip("1234").unwrap();
        assert!(rt.matches());
        assert_eq!(rt.phrase, "isang libo't dalawang daan at tatlumpu't apat");

        let rt = round_trip("10000").unwrap();
        assert!(!rt.matches());
        assert_eq!(rt.parsed, Some(1_000_000));

        assert_eq!(
            round_trip("1000000000000").unwrap_err(),
            "Numbers above 999,999,999,999 are not supported."
        );
    }
}
