use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Marker a test script carries when it needs to run as root.
const REQUIRE_ROOT_MARKER: &str = "require_root_";

/// Test scripts live one suite directory below the corpus root, in three
/// flavors distinguished only by extension.
const SCRIPT_PATTERNS: [&str; 3] = ["*/*.sh", "*/*.pl", "*/*.xpl"];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Corpus path is not valid UTF-8: {path}")]
    NonUtf8Path { path: String },
}

pub type ScanResult<T> = Result<T, ScanError>;

/// Enumerate every test script under `base`.
///
/// The three patterns are disjoint by extension, so concatenating their
/// matches cannot produce duplicates. Individual unreadable directory
/// entries are skipped, not fatal.
pub fn scan(base: &Path) -> ScanResult<Vec<PathBuf>> {
    let mut found = Vec::new();

    for pattern in SCRIPT_PATTERNS {
        let full = base.join(pattern);
        let full = full.to_str().ok_or_else(|| ScanError::NonUtf8Path {
            path: full.to_string_lossy().into_owned(),
        })?;

        for entry in glob(full)? {
            match entry {
                Ok(path) => found.push(path),
                Err(e) => warn!("Skipping unreadable corpus entry: {}", e),
            }
        }
    }

    debug!("Found {} test scripts under {}", found.len(), base.display());
    Ok(found)
}

/// Byte size of a test file, queried on demand.
///
/// A file that vanished between scan and presentation sizes as 0 rather
/// than aborting the run.
pub fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Whether the script contains the `require_root_` marker.
///
/// An unreadable file counts as not requiring root: the flag only feeds a
/// cosmetic annotation and must never abort the run.
pub fn requires_root(path: &Path) -> bool {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).contains(REQUIRE_ROOT_MARKER),
        Err(_) => false,
    }
}
