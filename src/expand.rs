use crate::MuxError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

const GLOB_METACHARS: &[char] = &['*', '?', '['];

/// Strips a leading `./` from walked paths so `filemux .` lists `a.txt`
/// rather than `./a.txt`.
pub fn normalize_path(path: &Path) -> String {
    let path = path.strip_prefix(".").unwrap_or(path);
    path.to_string_lossy().to_string()
}

pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(GLOB_METACHARS)
}

/// Resolves every input argument into an ordered list of file paths.
///
/// Directories are walked recursively in file-name order, anything else is
/// treated as a glob pattern. Paths reachable through several arguments are
/// listed once per argument.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<String>, MuxError> {
    let mut files = Vec::new();

    for pattern in patterns {
        match fs::metadata(pattern) {
            Ok(metadata) if metadata.is_dir() => match walk_directory(Path::new(pattern)) {
                Ok(found) => {
                    debug!("Directory {} contributed {} files", pattern, found.len());
                    files.extend(found);
                }
                Err(e) => warn!("Error walking directory {}: {}", pattern, e),
            },
            Ok(_) => match glob_matches(pattern) {
                Some(matches) if !matches.is_empty() => files.extend(matches),
                // The literal file exists even when its name reads as an
                // unmatched or malformed pattern.
                _ => files.push(pattern.clone()),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if !is_glob(pattern) {
                    return Err(MuxError::PathNotFound(pattern.clone()));
                }
                match glob_matches(pattern) {
                    Some(matches) if matches.is_empty() => {
                        return Err(MuxError::NoMatches(pattern.clone()));
                    }
                    Some(matches) => {
                        debug!("Pattern {} matched {} paths", pattern, matches.len());
                        files.extend(matches);
                    }
                    None => continue,
                }
            }
            Err(e) => return Err(MuxError::PathAccess(pattern.clone(), e.to_string())),
        }
    }

    if files.is_empty() {
        return Err(MuxError::NoFilesFound);
    }
    Ok(files)
}

/// Every non-directory entry beneath `root`. Any walk error discards the
/// whole directory.
fn walk_directory(root: &Path) -> Result<Vec<String>, walkdir::Error> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            trace!("Found {}", entry.path().display());
            found.push(normalize_path(entry.path()));
        }
    }
    Ok(found)
}

/// Expands a shell-style pattern. `None` when the pattern itself is invalid.
fn glob_matches(pattern: &str) -> Option<Vec<String>> {
    let paths = match glob::glob(pattern) {
        Ok(paths) => paths,
        Err(e) => {
            warn!("Error processing pattern {}: {}", pattern, e);
            return None;
        }
    };

    let mut matches = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => matches.push(path.to_string_lossy().to_string()),
            Err(e) => warn!("Error processing pattern {}: {}", pattern, e),
        }
    }
    Some(matches)
}
