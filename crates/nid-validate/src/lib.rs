//! Validation of 18-character national ID numbers.
//!
//! A number is six region digits, an eight digit `YYYYMMDD` birth date, a
//! three digit sequence and one check character derived from the preceding
//! 17 digits by a weighted modulo-11 sum.
//!
//! Checks run in a fixed order and stop at the first failure, so every call
//! yields exactly one diagnostic. Validation never fails for malformed input;
//! a bad candidate is a [`Verdict::Failed`] value.
//!
//! # Example
//!
//! ```ignore
//! use nid_model::RegionCodeSet;
//! use nid_validate::validate_identifier;
//!
//! let regions = RegionCodeSet::from_codes(["110105"]);
//! let verdict = validate_identifier("11010519491231002X", &regions);
//! assert!(verdict.passed());
//! ```

#![deny(unsafe_code)]

mod checksum;
mod date;
mod validator;

pub use checksum::{
    BODY_LENGTH, CHECK_LETTER, CHECK_SYMBOLS, WEIGHTS, check_character, remainder_symbol,
};
pub use date::{is_valid_birth_date, parse_birth_date};
pub use validator::{ID_LENGTH, REGION_LENGTH, Validator, validate_identifier};

pub use nid_model::{CasePolicy, Failure, RegionCodeSet, Verdict, VerdictStyle};
