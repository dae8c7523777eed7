//! Executor for cleaning discovered cache entries.

use crate::cleaner::outcome::{delete_recursively, ItemOutcome};
use crate::cleaner::result::{CleaningResult, ResultAggregator};
use crate::scanner::{path_size, CleaningItem};
use std::fs;
use std::io;
use std::time::Instant;

/// Options for the cleaner.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// If true, measure and report but don't actually delete anything.
    pub dry_run: bool,
}

/// Deletes an inventory of items, one at a time.
///
/// Items are processed independently: a missing path is skipped, a failed
/// deletion becomes an error entry in the result, and neither stops the
/// batch. The caller supplies exactly the subset of items to delete.
pub struct Cleaner {
    options: CleanOptions,
}

impl Cleaner {
    /// Create a cleaner with the given options.
    pub fn new(options: CleanOptions) -> Self {
        Self { options }
    }

    /// Delete the given items and summarize the run.
    pub fn clean_items(&self, items: &[CleaningItem]) -> CleaningResult {
        let start = Instant::now();
        tracing::info!(
            items = items.len(),
            dry_run = self.options.dry_run,
            "Starting clean"
        );

        let mut aggregator = ResultAggregator::new(items);
        for item in items {
            let outcome = self.clean_item(item);
            match &outcome {
                ItemOutcome::Cleaned { freed } => {
                    tracing::info!(path = %item.path.display(), freed, "Cleaned");
                }
                ItemOutcome::Missing => {
                    tracing::debug!(path = %item.path.display(), "Already gone, skipping");
                }
                ItemOutcome::Failed { error } => {
                    tracing::warn!(path = %item.path.display(), %error, "Clean failed");
                }
            }
            aggregator.record(item, &outcome);
        }

        let result = aggregator.finish(start.elapsed());
        tracing::info!(
            cleaned = result.cleaned_items,
            freed = result.freed_space,
            errors = result.errors.len(),
            "Clean completed"
        );
        result
    }

    fn clean_item(&self, item: &CleaningItem) -> ItemOutcome {
        let metadata = match fs::symlink_metadata(&item.path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return ItemOutcome::Missing,
            Err(err) => {
                return ItemOutcome::Failed {
                    error: format!("Error cleaning {}: {}", item.path.display(), err),
                }
            }
        };

        // Re-measure: the scan-time size may be stale.
        let freed = path_size(&item.path);

        if self.options.dry_run {
            return ItemOutcome::Cleaned { freed };
        }

        match delete_recursively(&item.path, &metadata) {
            Ok(()) => ItemOutcome::Cleaned { freed },
            Err(err) => {
                tracing::debug!(path = %item.path.display(), %err, "Deletion error");
                ItemOutcome::Failed {
                    error: format!("Failed to delete: {}", item.path.display()),
                }
            }
        }
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleanOptions::default())
    }
}
