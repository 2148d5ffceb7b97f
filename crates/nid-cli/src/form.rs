//! Terminal form for interactive validation.
//!
//! The form reads one candidate per line, hands it to the validator and
//! writes back the verdict message with a success/failure mark. It holds no
//! validation logic of its own.

use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};

use nid_model::VerdictStyle;
use nid_validate::Validator;
use tracing::{debug, error, info};

use crate::logging::redact_value;

/// Shown once when the form opens.
pub const FORM_TITLE: &str = "National ID validator";
/// Shown before each candidate is read.
pub const PROMPT: &str = "Enter an 18-character ID number: ";
/// Reported when validation faults instead of returning a verdict.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error during validation";

const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

/// What the form shows for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDisplay {
    pub message: String,
    pub style: VerdictStyle,
}

impl FormDisplay {
    /// Single-line rendering with a leading mark for the style.
    pub fn render(&self) -> String {
        let mark = match self.style {
            VerdictStyle::Success => '✓',
            VerdictStyle::Failure => '✗',
        };
        format!("{mark} {}", self.message)
    }
}

/// Totals for one form session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSummary {
    pub submitted: usize,
    pub passed: usize,
}

pub struct ValidationForm<'a> {
    validator: Validator<'a>,
}

impl<'a> ValidationForm<'a> {
    pub fn new(validator: Validator<'a>) -> Self {
        Self { validator }
    }

    /// Validate one entry, turning a fault into a failure display.
    pub fn submit(&self, text: &str) -> FormDisplay {
        self.submit_with(text, |candidate| self.validator.validate(candidate))
    }

    fn submit_with<F>(&self, text: &str, validate: F) -> FormDisplay
    where
        F: FnOnce(&str) -> nid_model::Verdict,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| validate(text))) {
            Ok(verdict) => {
                debug!(
                    candidate = redact_value(text),
                    passed = verdict.passed(),
                    "validated candidate"
                );
                FormDisplay {
                    message: verdict.message(),
                    style: verdict.style(),
                }
            }
            Err(_) => {
                error!(candidate = redact_value(text), "validation faulted");
                FormDisplay {
                    message: INTERNAL_ERROR_MESSAGE.to_string(),
                    style: VerdictStyle::Failure,
                }
            }
        }
    }

    /// Run the prompt loop until end of input or a quit command.
    ///
    /// Blank lines re-prompt without counting as a submission.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<FormSummary> {
        let mut summary = FormSummary::default();
        writeln!(output, "{FORM_TITLE}")?;
        let mut lines = input.lines();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }
            if QUIT_COMMANDS.contains(&entry.to_ascii_lowercase().as_str()) {
                break;
            }
            let display = self.submit(entry);
            summary.submitted += 1;
            if display.style == VerdictStyle::Success {
                summary.passed += 1;
            }
            writeln!(output, "{}", display.render())?;
        }
        info!(
            submitted = summary.submitted,
            passed = summary.passed,
            "form closed"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nid_model::RegionCodeSet;

    #[test]
    fn fault_becomes_failure_display() {
        let regions = RegionCodeSet::default();
        let form = ValidationForm::new(Validator::new(&regions));

        let display = form.submit_with("anything", |_| panic!("boom"));

        assert_eq!(display.message, INTERNAL_ERROR_MESSAGE);
        assert_eq!(display.style, VerdictStyle::Failure);
    }

    #[test]
    fn render_marks_style() {
        let passed = FormDisplay {
            message: "validation passed".to_string(),
            style: VerdictStyle::Success,
        };
        assert_eq!(passed.render(), "✓ validation passed");
        let failed = FormDisplay {
            message: "length must be 18".to_string(),
            style: VerdictStyle::Failure,
        };
        assert_eq!(failed.render(), "✗ length must be 18");
    }
}
