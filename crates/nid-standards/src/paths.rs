//! Reference file path resolution.

use std::path::PathBuf;

/// File name the command line falls back to when no path is given.
pub const DEFAULT_REGIONS_FILE: &str = "areas.csv";

/// The `standards/` directory at the workspace root.
pub fn standards_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// Region code table bundled with the workspace.
pub fn default_regions_path() -> PathBuf {
    standards_root().join(DEFAULT_REGIONS_FILE)
}
