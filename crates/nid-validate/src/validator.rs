use std::borrow::Cow;

use nid_model::{CasePolicy, Failure, RegionCodeSet, Verdict};

use crate::checksum::{BODY_LENGTH, CHECK_LETTER, check_character};
use crate::date::is_valid_birth_date;

/// Total length of an identifier.
pub const ID_LENGTH: usize = 18;

/// Length of the leading region code.
pub const REGION_LENGTH: usize = 6;

const BIRTH_DATE_END: usize = REGION_LENGTH + 8;

/// Validate a candidate with the default [`CasePolicy::Normalize`] policy.
pub fn validate_identifier(candidate: &str, regions: &RegionCodeSet) -> Verdict {
    Validator::new(regions).validate(candidate)
}

/// Identifier validator bound to a region code set.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    regions: &'a RegionCodeSet,
    case_policy: CasePolicy,
}

impl<'a> Validator<'a> {
    pub fn new(regions: &'a RegionCodeSet) -> Self {
        Self {
            regions,
            case_policy: CasePolicy::default(),
        }
    }

    pub fn with_case_policy(mut self, case_policy: CasePolicy) -> Self {
        self.case_policy = case_policy;
        self
    }

    pub fn case_policy(&self) -> CasePolicy {
        self.case_policy
    }

    /// Run every check in order, stopping at the first failure.
    pub fn validate(&self, candidate: &str) -> Verdict {
        match self.check(candidate) {
            Ok(()) => Verdict::Passed,
            Err(failure) => Verdict::Failed(failure),
        }
    }

    fn check(&self, candidate: &str) -> Result<(), Failure> {
        let normalized = normalize(candidate, self.case_policy);
        let chars: Vec<char> = normalized.chars().collect();
        if chars.len() != ID_LENGTH {
            return Err(Failure::Length {
                actual: chars.len(),
            });
        }

        let (body, last) = (&chars[..BODY_LENGTH], chars[BODY_LENGTH]);
        if !body.iter().all(char::is_ascii_digit) {
            return Err(Failure::BodyNotDigits);
        }
        if last == CHECK_LETTER.to_ascii_lowercase() && self.case_policy == CasePolicy::Strict {
            return Err(Failure::LowercaseCheckLetter);
        }
        if !(last.is_ascii_digit() || last == CHECK_LETTER) {
            return Err(Failure::TerminalCharacter);
        }

        // The body is ASCII from here on, so byte slicing is safe.
        let body: String = body.iter().collect();
        let region = &body[..REGION_LENGTH];
        if !self.regions.contains(region) {
            return Err(Failure::UnknownRegion {
                code: region.to_string(),
            });
        }

        let birth_date = &body[REGION_LENGTH..BIRTH_DATE_END];
        if !is_valid_birth_date(birth_date) {
            return Err(Failure::InvalidBirthDate {
                date: birth_date.to_string(),
            });
        }

        let expected = check_character(&body).ok_or(Failure::BodyNotDigits)?;
        if last != expected {
            return Err(Failure::ChecksumMismatch {
                expected,
                actual: last,
            });
        }
        Ok(())
    }
}

/// Trim surrounding whitespace and, under the normalize policy, upper-case
/// a trailing check letter.
fn normalize(candidate: &str, case_policy: CasePolicy) -> Cow<'_, str> {
    let trimmed = candidate.trim();
    let lower = CHECK_LETTER.to_ascii_lowercase();
    match trimmed.strip_suffix(lower) {
        Some(head) if case_policy == CasePolicy::Normalize => {
            Cow::Owned(format!("{head}{CHECK_LETTER}"))
        }
        _ => Cow::Borrowed(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_upper_cases() {
        assert_eq!(normalize("  12x \n", CasePolicy::Normalize), "12X");
        assert_eq!(normalize("  12x \n", CasePolicy::Strict), "12x");
        assert_eq!(normalize("x1", CasePolicy::Normalize), "x1");
    }

    #[test]
    fn builder_sets_policy() {
        let regions = RegionCodeSet::default();
        let validator = Validator::new(&regions);
        assert_eq!(validator.case_policy(), CasePolicy::Normalize);
        let validator = validator.with_case_policy(CasePolicy::Strict);
        assert_eq!(validator.case_policy(), CasePolicy::Strict);
    }
}
