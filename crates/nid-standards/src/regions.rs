//! Region code table loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use nid_model::RegionCodeSet;

use crate::error::{RegionError, Result};

/// Header of the column holding region codes.
pub const CODE_COLUMN: &str = "code";

/// Load the region codes listed in a CSV file.
///
/// Any other columns (names, parent codes) are ignored. Code cells are
/// trimmed and blank cells skipped; the digit format of codes is not checked
/// here since a malformed code can never match a candidate prefix.
pub fn load_region_codes(path: &Path) -> Result<RegionCodeSet> {
    let file = File::open(path).map_err(|source| RegionError::open(path, source))?;
    let regions = load_region_codes_from_reader(file, path)?;
    info!(
        path = %path.display(),
        codes = regions.len(),
        "loaded region codes"
    );
    Ok(regions)
}

/// Load region codes from any reader; `source` names it in errors.
pub fn load_region_codes_from_reader<R: Read>(reader: R, source: &Path) -> Result<RegionCodeSet> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|err| RegionError::csv(source, &err))?
        .clone();
    let code_index = headers
        .iter()
        .position(|name| name.trim_matches('\u{feff}').trim() == CODE_COLUMN)
        .ok_or_else(|| RegionError::MissingColumn {
            column: CODE_COLUMN.to_string(),
            path: source.to_path_buf(),
        })?;

    let mut codes = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|err| RegionError::csv(source, &err))?;
        match record.get(code_index).map(str::trim) {
            Some(code) if !code.is_empty() => codes.push(code.to_string()),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, source = %source.display(), "skipped rows without a region code");
    }
    Ok(RegionCodeSet::from_codes(codes))
}
