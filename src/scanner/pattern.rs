//! Path pattern expansion.
//!
//! Catalog patterns are plain paths with a `~` home placeholder and
//! optionally a `*` wildcard in the final segment. Wildcard matching is
//! anchored, case-sensitive and never crosses a path separator: the leaf
//! pattern is matched against the direct children of the parent directory.

use std::fs;
use std::path::{Path, PathBuf};

/// Replace the `~` home placeholder at the start of a pattern.
pub fn expand_home(pattern: &str, home: &Path) -> PathBuf {
    if pattern == "~" {
        home.to_path_buf()
    } else if let Some(rest) = pattern.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(pattern)
    }
}

/// Split a wildcard pattern into (parent pattern, leaf pattern).
///
/// Returns `None` when the pattern has no wildcard and should be checked
/// for existence directly.
pub fn split_wildcard(pattern: &str) -> Option<(&str, &str)> {
    if !pattern.contains('*') {
        return None;
    }
    pattern.rsplit_once('/')
}

/// Anchored glob match of `name` against `pattern`.
///
/// `*` matches zero or more characters; everything else is literal and
/// case-sensitive. `name` is a single path segment, so a match can never
/// span directories.
pub fn wildcard_match(pattern: &str, name: &str) -> bool {
    if !pattern.contains('*') {
        return pattern == name;
    }

    let mut parts = pattern.split('*');
    let first = parts.next().unwrap_or("");
    if !name.starts_with(first) {
        return false;
    }
    let mut rest = &name[first.len()..];

    let mut middle: Vec<&str> = parts.collect();
    let last = middle.pop().unwrap_or("");

    for part in middle {
        if part.is_empty() {
            continue;
        }
        match rest.find(part) {
            Some(idx) => rest = &rest[idx + part.len()..],
            None => return false,
        }
    }

    rest.ends_with(last)
}

/// Expand one catalog pattern to the concrete paths it matches.
///
/// Without a wildcard this is an existence check. With one, the parent
/// directory's direct children are matched against the leaf pattern; a
/// missing parent is not an error, it simply yields nothing.
pub fn expand_pattern(pattern: &str, home: &Path) -> Vec<PathBuf> {
    let Some((parent_pattern, leaf)) = split_wildcard(pattern) else {
        let path = expand_home(pattern, home);
        return if path.exists() { vec![path] } else { Vec::new() };
    };

    let parent = expand_home(parent_pattern, home);
    let entries = match fs::read_dir(&parent) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            tracing::warn!(path = %parent.display(), %err, "Skipping unreadable parent directory");
            return Vec::new();
        }
    };

    let mut matches = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(path = %parent.display(), %err, "Skipping unreadable directory entry");
                continue;
            }
        };
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if wildcard_match(leaf, name) {
            matches.push(entry.path());
        }
    }

    matches
}
