//! CLI library components for the national ID validator.

pub mod form;
pub mod logging;
pub mod regions;
