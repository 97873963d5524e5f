use std::collections::BTreeMap;
use std::fs;
use std::process;

use serde::{Deserialize, Serialize};

use bilang_engine::{parse_phrase, render_number, validate, Input};

use super::die;

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

/// Corpus value: an integer, a float, or text classified like a CLI argument.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CaseValue {
    Int(i64),
    Real(f64),
    Text(String),
}

impl CaseValue {
    fn to_input(&self) -> Input {
        match self {
            CaseValue::Int(v) => Input::from(*v),
            CaseValue::Real(v) => Input::from(*v),
            CaseValue::Text(s) => Input::from_text(s),
        }
    }

    fn label(&self) -> String {
        match self {
            CaseValue::Int(v) => v.to_string(),
            CaseValue::Real(v) => v.to_string(),
            CaseValue::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub value: CaseValue,
    pub expected: String,
    pub category: String,
    /// Also require the rendered phrase to parse back to `value`.
    #[serde(default)]
    pub roundtrip: bool,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub value: String,
    pub expected: String,
    pub actual: String,
    pub status: AccuracyStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

pub fn parse_corpus(toml_str: &str) -> Result<AccuracyCorpus, toml::de::Error> {
    toml::from_str(toml_str)
}

fn run_case(case: &AccuracyCase) -> AccuracyResult {
    let mut result = AccuracyResult {
        value: case.value.label(),
        expected: case.expected.clone(),
        actual: String::new(),
        status: AccuracyStatus::Skip,
        category: case.category.clone(),
        parsed: None,
        note: case.note.clone(),
    };
    if case.skip {
        return result;
    }

    let input = case.value.to_input();
    let validated = validate(&input).ok();
    result.actual = render_number(input);

    let mut pass = result.actual == case.expected;
    if case.roundtrip {
        result.parsed = parse_phrase(&result.actual);
        pass &= validated.is_some() && result.parsed == validated;
    }
    result.status = if pass {
        AccuracyStatus::Pass
    } else {
        AccuracyStatus::Fail
    };
    result
}

/// Run every case (optionally only one category) and summarize.
pub fn run_corpus(corpus: &AccuracyCorpus, category: Option<&str>) -> AccuracyReport {
    let results: Vec<AccuracyResult> = corpus
        .cases
        .iter()
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .map(run_case)
        .collect();

    let count = |s: AccuracyStatus| results.iter().filter(|r| r.status == s).count();
    let total = results.len();
    let pass = count(AccuracyStatus::Pass);
    let fail = count(AccuracyStatus::Fail);
    let skip = count(AccuracyStatus::Skip);
    let tested = total - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };

    AccuracyReport {
        results,
        summary: AccuracySummary {
            total,
            pass,
            fail,
            skip,
            pass_rate: format!("{:.1}%", rate),
        },
    }
}

pub fn accuracy_cmd(corpus_file: &str, category: Option<&str>, verbose: bool, json: bool) {
    let content = die!(
        fs::read_to_string(corpus_file),
        "Failed to read corpus file {corpus_file}: {}"
    );
    let corpus = die!(parse_corpus(&content), "Failed to parse corpus TOML: {}");

    let report = run_corpus(&corpus, category);
    if report.results.is_empty() {
        eprintln!("No cases match the given filters");
        process::exit(1);
    }

    if json {
        println!(
            "{}",
            die!(
                serde_json::to_string_pretty(&report),
                "JSON serialization failed: {}"
            )
        );
    } else {
        print_report(&report, verbose);
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}

fn print_report(report: &AccuracyReport, verbose: bool) {
    let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
    for r in &report.results {
        grouped.entry(&r.category).or_default().push(r);
    }

    for (cat, group) in &grouped {
        println!("\n=== {} ({} cases) ===", cat, group.len());
        for r in group {
            match r.status {
                AccuracyStatus::Pass => {
                    if verbose {
                        println!("  \u{2713} {} \u{2192} {}", r.value, r.expected);
                    }
                }
                AccuracyStatus::Fail => {
                    if r.actual != r.expected {
                        println!(
                            "  \u{2717} {} \u{2192} {} (got: {})",
                            r.value, r.expected, r.actual
                        );
                    } else {
                        let parsed = r
                            .parsed
                            .map(|p| p.to_string())
                            .unwrap_or_else(|| "(no result)".to_string());
                        println!(
                            "  \u{2717} {} \u{2192} {} (parsed back: {})",
                            r.value, r.expected, parsed
                        );
                    }
                }
                AccuracyStatus::Skip => {
                    let reason = r.note.as_deref().unwrap_or("known failure");
                    println!("  - {} [skip: {}]", r.value, reason);
                }
            }
        }
    }

    let s = &report.summary;
    println!();
    println!("=== Summary ===");
    println!("  Total:     {}", s.total);
    println!("  Pass:      {:>3}", s.pass);
    println!("  Fail:      {:>3}", s.fail);
    println!("  Skip:      {:>3}", s.skip);
    println!("  Pass rate: {} ({}/{})", s.pass_rate, s.pass, s.total - s.skip);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUNDLED: &str = include_str!("../../testdata/accuracy.toml");

    #[test]
    fn bundled_corpus_passes() {
        let corpus = parse_corpus(BUNDLED).unwrap();
        let report = run_corpus(&corpus, None);
        let failures: Vec<_> = report
            .results
            .iter()
            .filter(|r| r.status == AccuracyStatus::Fail)
            .map(|r| format!("{} -> {} (parsed {:?})", r.value, r.actual, r.parsed))
            .collect();
        assert!(failures.is_empty(), "failures: {failures:#?}");
        assert!(report.summary.skip >= 1);
    }

    #[test]
    fn category_filter() {
        let corpus = parse_corpus(BUNDLED).unwrap();
        let report = run_corpus(&corpus, Some("teens"));
        assert!(!report.results.is_empty());
        assert!(report.results.iter().all(|r| r.category == "teens"));
        assert!(run_corpus(&corpus, Some("no-such-category")).results.is_empty());
    }

    #[test]
    fn mixed_value_types() {
        let corpus = parse_corpus(
            r#"
[[cases]]
value = 7
expected = "pito"
category = "ones"

[[cases]]
value = 1.5
expected = "Input must be an integer."
category = "invalid"

[[cases]]
value = "42"
expected = "apatnapu't dalawa"
category = "tens"
roundtrip = true

[[cases]]
value = 3
expected = "apat"
category = "ones"
"#,
        )
        .unwrap();
        let report = run_corpus(&corpus, None);
        let statuses: Vec<AccuracyStatus> = report.results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                AccuracyStatus::Pass,
                AccuracyStatus::Pass,
                AccuracyStatus::Pass,
                AccuracyStatus::Fail,
            ]
        );
        assert_eq!(report.summary.pass_rate, "75.0%");
    }

    #[test]
    fn roundtrip_failure_is_reported() {
        let corpus = parse_corpus(
            r#"
[[cases]]
value = 10000
expected = "sampung libo"
category = "thousands"
roundtrip = true
"#,
        )
        .unwrap();
        let report = run_corpus(&corpus, None);
        assert_eq!(report.results[0].status, AccuracyStatus::Fail);
        assert_eq!(report.results[0].parsed, Some(1_000_000));
    }
}
