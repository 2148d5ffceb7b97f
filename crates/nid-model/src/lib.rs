pub mod region;
pub mod verdict;

pub use region::RegionCodeSet;
pub use verdict::{CasePolicy, Failure, Verdict, VerdictStyle};
