//! Cache scanner.

use crate::catalog::{self, CleanCategory, OsFamily};
use crate::error::{Result, SweepError};
use crate::scanner::item::CleaningItem;
use crate::scanner::pattern::expand_pattern;
use crate::scanner::size::path_size;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Retention window for system temp files.
const TEMP_FILE_MAX_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Temp files at or below this size are likely in active use and are left alone.
const TEMP_FILE_MIN_SIZE: u64 = 1024 * 1024;

/// Discovers cleanable cache entries for one user.
///
/// Scanning is read-only and tolerant of missing paths: every catalog
/// pattern that matches nothing is silently skipped, and a failure on one
/// pattern or candidate never aborts the scan.
pub struct CacheScanner {
    home: PathBuf,
    os: OsFamily,
    temp_roots: Vec<PathBuf>,
}

impl CacheScanner {
    /// Create a scanner for the given home directory and OS family.
    pub fn new(home: impl Into<PathBuf>, os: OsFamily) -> Self {
        Self {
            home: home.into(),
            os,
            temp_roots: catalog::temp_roots(os),
        }
    }

    /// Create a scanner for the current user on the host OS.
    pub fn for_current_user() -> Result<Self> {
        let home = dirs::home_dir().ok_or(SweepError::HomeNotFound)?;
        Ok(Self::new(home, OsFamily::detect()))
    }

    /// Replace the system temp directories scanned with the age filter.
    pub fn with_temp_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.temp_roots = roots;
        self
    }

    /// Scan all categories and the system temp directories.
    ///
    /// Returns a fresh inventory on every call. Sizes are measured eagerly
    /// so the caller sees accurate numbers before deciding what to delete.
    pub fn scan(&self) -> Vec<CleaningItem> {
        tracing::info!(home = %self.home.display(), "Starting cache scan");

        let mut seq = 0u64;
        let mut items = Vec::new();
        for category in CleanCategory::ALL {
            items.extend(self.scan_category(category, &mut seq));
        }
        items.extend(self.scan_temp_files(&mut seq));

        tracing::info!(items = items.len(), "Cache scan completed");
        items
    }

    fn scan_category(&self, category: CleanCategory, seq: &mut u64) -> Vec<CleaningItem> {
        let mut found = Vec::new();
        for pattern in catalog::cache_patterns(self.os, category) {
            for path in expand_pattern(pattern, &self.home) {
                if let Some(item) = self.build_item(path, category, seq) {
                    found.push(item);
                }
            }
        }
        found
    }

    fn scan_temp_files(&self, seq: &mut u64) -> Vec<CleaningItem> {
        let cutoff = SystemTime::now() - TEMP_FILE_MAX_AGE;

        let mut found = Vec::new();
        for root in &self.temp_roots {
            for path in collect_old_temp_files(root, cutoff, TEMP_FILE_MIN_SIZE) {
                if let Some(item) = self.build_item(path, CleanCategory::System, seq) {
                    found.push(item);
                }
            }
        }
        found
    }

    /// Build an item for a path that matched a pattern or the temp filter.
    ///
    /// Every match produces an item, zero-byte entries included.
    fn build_item(
        &self,
        path: PathBuf,
        category: CleanCategory,
        seq: &mut u64,
    ) -> Option<CleaningItem> {
        let metadata = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "Skipping unreadable candidate");
                return None;
            }
        };

        let entry_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let id = format!("{}-{}", category.token(), seq);
        *seq += 1;

        Some(CleaningItem {
            id,
            name: format!("{}: {}", category.display_name(), entry_name),
            category,
            size: path_size(&path),
            is_directory: metadata.is_dir(),
            description: format!("{} cache files", category.display_name()),
            path,
        })
    }
}

/// Direct children of `root` that are plain files modified before `cutoff`
/// and strictly larger than `min_size`. Directories are never temp-reaped.
fn collect_old_temp_files(root: &Path, cutoff: SystemTime, min_size: u64) -> Vec<PathBuf> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            tracing::warn!(path = %root.display(), %err, "Skipping unreadable temp directory");
            return Vec::new();
        }
    };

    let mut old = Vec::new();
    for entry in entries.flatten() {
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if !metadata.is_file() || metadata.len() <= min_size {
            continue;
        }
        let Ok(modified) = metadata.modified() else {
            continue;
        };
        if modified < cutoff {
            old.push(entry.path());
        }
    }
    old
}
