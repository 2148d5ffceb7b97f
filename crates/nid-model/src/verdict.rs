use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Message reported when every check succeeds.
pub const PASSED_MESSAGE: &str = "validation passed";

/// How a lower-case trailing check letter is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    /// Upper-case a trailing `x` before any check runs.
    #[default]
    Normalize,
    /// Reject a trailing `x` with a dedicated diagnostic.
    Strict,
}

/// The first check an identifier failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Not exactly 18 characters after trimming.
    Length { actual: usize },
    /// One of the first 17 characters is not a decimal digit.
    BodyNotDigits,
    /// The 18th character is neither a digit nor the check letter.
    TerminalCharacter,
    /// The 18th character is a lower-case check letter under [`CasePolicy::Strict`].
    LowercaseCheckLetter,
    /// The 6-digit prefix is not in the region set.
    UnknownRegion { code: String },
    /// Characters 7-14 are not a calendar date.
    InvalidBirthDate { date: String },
    /// The 18th character differs from the computed checksum.
    ChecksumMismatch { expected: char, actual: char },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { .. } => f.write_str("length must be 18"),
            Self::BodyNotDigits => f.write_str("first 17 characters must be digits"),
            Self::TerminalCharacter => {
                f.write_str("last character must be a digit or the checksum letter")
            }
            Self::LowercaseCheckLetter => f.write_str("checksum letter X must be upper-case"),
            Self::UnknownRegion { code } => write!(f, "region code {code} is not valid"),
            Self::InvalidBirthDate { .. } => f.write_str("birth date is invalid"),
            Self::ChecksumMismatch { expected, .. } => {
                write!(f, "checksum incorrect, expected {expected}")
            }
        }
    }
}

/// Style hint the presentation layer pairs with a verdict message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStyle {
    Success,
    Failure,
}

/// Outcome of validating one candidate.
///
/// Serializes as `{"passed": bool, "message": string}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed(Failure),
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Passed => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Passed => PASSED_MESSAGE.to_string(),
            Self::Failed(failure) => failure.to_string(),
        }
    }

    pub fn style(&self) -> VerdictStyle {
        if self.passed() {
            VerdictStyle::Success
        } else {
            VerdictStyle::Failure
        }
    }

    /// The `(passed, message)` pair consumed by display code.
    pub fn into_pair(self) -> (bool, String) {
        (self.passed(), self.message())
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Verdict", 2)?;
        state.serialize_field("passed", &self.passed())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}
