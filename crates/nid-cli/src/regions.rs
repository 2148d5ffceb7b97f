//! Startup loading of the region code table.

use std::path::Path;

use anyhow::{Context, Result, bail};

use nid_model::RegionCodeSet;
use nid_standards::load_region_codes;

/// Load the region table, refusing a table with no codes.
///
/// Validation must never run against an empty set, so this is the only way
/// the commands obtain one.
pub fn load_regions(path: &Path) -> Result<RegionCodeSet> {
    let regions = load_region_codes(path)
        .with_context(|| format!("load region codes from {}", path.display()))?;
    if regions.is_empty() {
        bail!("region code file {} lists no codes", path.display());
    }
    Ok(regions)
}
