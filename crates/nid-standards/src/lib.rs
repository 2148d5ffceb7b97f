//! Reference data for national ID validation.
//!
//! Loads the set of permissible region codes from a CSV file with a `code`
//! column. The set is loaded once at startup and handed to the validator by
//! reference.
//!
//! # Example
//!
//! ```ignore
//! use nid_standards::{default_regions_path, load_region_codes};
//!
//! let regions = load_region_codes(&default_regions_path())?;
//! assert!(regions.contains("110101"));
//! ```

#![deny(unsafe_code)]

mod error;
mod paths;
mod regions;

pub use error::{RegionError, RegionErrorKind, Result};
pub use paths::{DEFAULT_REGIONS_FILE, default_regions_path, standards_root};
pub use regions::{CODE_COLUMN, load_region_codes, load_region_codes_from_reader};
