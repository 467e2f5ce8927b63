use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::harness::Suite;

// Load suites from a file or, recursively, from a directory
pub fn load_path(path: &Path) -> Result<Vec<Suite>> {
    if path.is_dir() {
        scan_directory(path)
    } else if path.is_file() {
        match parse_file(path)? {
            Some(suites) => Ok(suites),
            None => bail!("Not a suite file (expected .json): {}", path.display()),
        }
    } else {
        bail!("No such file or directory: {}", path.display());
    }
}

// Parse a file and return its suites, or None if it is not a suite file
pub fn parse_file(path: &Path) -> Result<Option<Vec<Suite>>> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "json" => parse_json_file(path).map(Some),
        _ => {
            warn!(path = %path.display(), "skipping file with unsupported extension");
            Ok(None)
        }
    }
}

// Scan a directory for suite files, in path order
pub fn scan_directory(dir: &Path) -> Result<Vec<Suite>> {
    let mut results = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            if let Some(suites) = parse_file(path)? {
                results.extend(suites);
            }
        }
    }

    Ok(results)
}

fn parse_json_file(path: &Path) -> Result<Vec<Suite>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let context = || format!("Failed to parse suite file {}", path.display());

    // A suite file holds one suite or a list of them
    let value: Value = serde_json::from_str(&source).with_context(context)?;
    let suites = if value.is_array() {
        serde_json::from_value::<Vec<Suite>>(value).with_context(context)?
    } else {
        vec![serde_json::from_value::<Suite>(value).with_context(context)?]
    };
    debug!(path = %path.display(), count = suites.len(), "loaded suites");
    Ok(suites)
}

/// Keep only the suites named in `names` (case-insensitive).
///
/// An empty `names` keeps everything. Naming a suite that does not exist is
/// an error, so a typo never silently runs nothing.
pub fn filter_suites(suites: Vec<Suite>, names: &[String]) -> Result<Vec<Suite>> {
    if names.is_empty() {
        return Ok(suites);
    }

    for name in names {
        if !suites.iter().any(|s| s.name.eq_ignore_ascii_case(name)) {
            bail!("No suite named {}", name);
        }
    }

    Ok(suites
        .into_iter()
        .filter(|s| names.iter().any(|n| s.name.eq_ignore_ascii_case(n)))
        .collect())
}
