use std::io;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use nid_cli::form::{FormSummary, ValidationForm};
use nid_cli::logging::redact_value;
use nid_cli::regions::load_regions;
use nid_model::Verdict;
use nid_validate::{Validator, check_character};

use crate::cli::{CheckArgs, ChecksumArgs, FormArgs, RegionsArgs};
use crate::summary::{print_region_lookup, print_region_summary, print_verdict};

pub fn run_check(args: &CheckArgs) -> Result<Verdict> {
    let regions = load_regions(&args.source.regions)?;
    let validator = Validator::new(&regions).with_case_policy(args.policy.case_policy());
    let verdict = validator.validate(&args.id);
    info!(
        candidate = redact_value(&args.id),
        passed = verdict.passed(),
        "validated candidate"
    );
    if args.json {
        let json = serde_json::to_string_pretty(&verdict).context("serialize verdict")?;
        println!("{json}");
    } else {
        print_verdict(args.id.trim(), &verdict);
    }
    Ok(verdict)
}

pub fn run_form(args: &FormArgs) -> Result<FormSummary> {
    let regions = load_regions(&args.source.regions)?;
    let span = info_span!("form", regions = regions.len());
    let _guard = span.enter();
    let validator = Validator::new(&regions).with_case_policy(args.policy.case_policy());
    let form = ValidationForm::new(validator);
    let stdin = io::stdin();
    let stdout = io::stdout();
    form.run(stdin.lock(), stdout.lock()).context("read from terminal")
}

pub fn run_checksum(args: &ChecksumArgs) -> Result<char> {
    let body = args.body.trim();
    let check = check_character(body)
        .ok_or_else(|| anyhow!("body must be exactly 17 digits, got {body:?}"))?;
    println!("{check}");
    Ok(check)
}

/// Returns whether the looked-up code is present (always true for a summary).
pub fn run_regions(args: &RegionsArgs) -> Result<bool> {
    let path = &args.source.regions;
    let regions = load_regions(path)?;
    match args.code.as_deref().map(str::trim) {
        Some(code) => {
            let present = regions.contains(code);
            print_region_lookup(code, present);
            Ok(present)
        }
        None => {
            print_region_summary(path, &regions);
            Ok(true)
        }
    }
}
