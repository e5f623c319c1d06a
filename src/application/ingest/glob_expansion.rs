use crate::shared::error::SbomError;
use std::path::PathBuf;

/// Expands an input that is not an existing path as a glob pattern.
///
/// Matches come back in the order the `glob` crate yields them (sorted by
/// path). Directories matched by the pattern are dropped; only files are
/// ingested through a glob.
///
/// # Errors
/// `SbomError::Build` if the pattern is malformed, a match cannot be read,
/// or nothing matches.
pub fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>, SbomError> {
    let build_error = |reason: String| SbomError::Build {
        pattern: pattern.to_string(),
        reason,
    };

    let entries = glob::glob(pattern).map_err(|e| build_error(e.to_string()))?;

    let mut matches = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| build_error(e.to_string()))?;
        if !path.is_dir() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(build_error(
            "path does not exist and no file matches it as a glob pattern".to_string(),
        ));
    }
    Ok(matches)
}
