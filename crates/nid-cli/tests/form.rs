//! Integration tests for the terminal form.

use std::fs;
use std::io::Cursor;

use nid_cli::form::{FORM_TITLE, FormSummary, PROMPT, ValidationForm};
use nid_model::{CasePolicy, RegionCodeSet, VerdictStyle};
use nid_standards::load_region_codes;
use nid_validate::{Validator, check_character};

fn regions() -> RegionCodeSet {
    RegionCodeSet::from_codes(["110101", "110105"])
}

fn valid_id() -> String {
    let body = "11010119900307743";
    format!("{body}{}", check_character(body).unwrap())
}

/// Run the form over `input` and return the verdict lines it printed.
fn run_form(form: &ValidationForm<'_>, input: &str) -> (FormSummary, Vec<String>) {
    let mut output = Vec::new();
    let summary = form.run(Cursor::new(input), &mut output).expect("run form");
    let text = String::from_utf8(output).expect("utf-8 output");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(FORM_TITLE));
    let verdicts = lines
        .flat_map(|line| line.split(PROMPT))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();
    (summary, verdicts)
}

#[test]
fn test_form_reports_each_submission() {
    let regions = regions();
    let form = ValidationForm::new(Validator::new(&regions));
    let input = format!("{}\n\n000000199003077432\n  11010519491231002x  \n", valid_id());

    let (summary, verdicts) = run_form(&form, &input);

    assert_eq!(
        verdicts,
        vec![
            "✓ validation passed",
            "✗ region code 000000 is not valid",
            "✓ validation passed",
        ]
    );
    assert_eq!(
        summary,
        FormSummary {
            submitted: 3,
            passed: 2
        }
    );
}

#[test]
fn test_form_stops_at_quit() {
    let regions = regions();
    let form = ValidationForm::new(Validator::new(&regions));
    let input = format!("123\nQUIT\n{}\n", valid_id());

    let (summary, verdicts) = run_form(&form, &input);

    assert_eq!(verdicts, vec!["✗ length must be 18"]);
    assert_eq!(summary.submitted, 1);
    assert_eq!(summary.passed, 0);
}

#[test]
fn test_form_uses_case_policy() {
    let regions = regions();
    let strict =
        ValidationForm::new(Validator::new(&regions).with_case_policy(CasePolicy::Strict));

    let display = strict.submit("11010519491231002x");

    assert_eq!(display.style, VerdictStyle::Failure);
    assert_eq!(display.message, "checksum letter X must be upper-case");
}

#[test]
fn test_form_over_loaded_region_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("areas.csv");
    fs::write(&path, "code,name\n110101,Dongcheng\n").unwrap();
    let regions = load_region_codes(&path).expect("load areas");
    let form = ValidationForm::new(Validator::new(&regions));

    let display = form.submit(&valid_id());

    assert_eq!(display.style, VerdictStyle::Success);
    assert_eq!(display.message, "validation passed");
}
