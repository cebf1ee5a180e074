use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use log::{debug, warn};

/// Filenames the catalog picks up. Not configurable.
pub const SEARCH_PATTERN: &str = "*duplicates_marked*.bam";

/// Shell-style matching: case sensitive, `*` never crosses a `/` and never
/// matches a leading `.`.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// List the direct children of `dir` whose names match [`SEARCH_PATTERN`].
///
/// Only the entry name is matched, so the directory path itself is never
/// interpreted as a pattern. Names are returned sorted; entries that cannot
/// be read or whose names are not UTF-8 are skipped with a warning.
pub fn scan_dir(dir: &Path) -> Result<Vec<String>> {
    let pattern = Pattern::new(SEARCH_PATTERN)
        .with_context(|| format!("invalid glob pattern '{SEARCH_PATTERN}'"))?;
    let entries = fs::read_dir(dir)
        .with_context(|| format!("listing directory {}", dir.display()))?;

    let mut filenames = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            warn!("skipping non-UTF-8 filename {}", entry.path().display());
            continue;
        };
        if pattern.matches_with(name, MATCH_OPTIONS) {
            debug!("matched {name}");
            filenames.push(name.to_string());
        }
    }

    filenames.sort();
    Ok(filenames)
}

/// [`scan_dir`] on the process working directory.
pub fn scan_current_dir() -> Result<Vec<String>> {
    scan_dir(Path::new(".")).context("scanning current directory")
}
