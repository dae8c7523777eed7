//! Aggregation of per-item outcomes into a run summary.

use crate::cleaner::outcome::ItemOutcome;
use crate::scanner::CleaningItem;
use std::collections::BTreeMap;
use std::time::Duration;

/// Per-category tally accumulated during one clean run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCleanStats {
    pub items_cleaned: usize,
    pub space_freed: u64,
}

/// Immutable summary of one clean run.
#[derive(Debug, Clone)]
pub struct CleaningResult {
    /// Number of items handed to the cleaner.
    pub total_items: usize,
    /// Items actually deleted.
    pub cleaned_items: usize,
    /// Sum of the scan-time sizes of all supplied items, failures included.
    pub total_size: u64,
    /// Sum of the freshly measured sizes of deleted items only.
    pub freed_space: u64,
    /// Wall-clock time of the run.
    pub duration: Duration,
    /// Human-readable failure descriptions, in item order.
    pub errors: Vec<String>,
    /// True iff `errors` is empty.
    pub success: bool,
    /// Per-category tallies, keyed by the category display label.
    pub category_stats: BTreeMap<&'static str, CategoryCleanStats>,
}

/// Folds item outcomes into a [`CleaningResult`].
#[derive(Debug)]
pub struct ResultAggregator {
    total_items: usize,
    total_size: u64,
    cleaned_items: usize,
    freed_space: u64,
    errors: Vec<String>,
    category_stats: BTreeMap<&'static str, CategoryCleanStats>,
}

impl ResultAggregator {
    /// Start an aggregation over the supplied inventory.
    ///
    /// `total_size` is fixed here, from the scan-time item sizes; freed
    /// space is accumulated from fresh measurements as items are recorded.
    /// The two are not required to agree.
    pub fn new(items: &[CleaningItem]) -> Self {
        Self {
            total_items: items.len(),
            total_size: items.iter().map(|item| item.size).sum(),
            cleaned_items: 0,
            freed_space: 0,
            errors: Vec::new(),
            category_stats: BTreeMap::new(),
        }
    }

    /// Record the outcome of one item.
    pub fn record(&mut self, item: &CleaningItem, outcome: &ItemOutcome) {
        match outcome {
            ItemOutcome::Cleaned { freed } => {
                self.cleaned_items += 1;
                self.freed_space += freed;

                let stats = self
                    .category_stats
                    .entry(item.category.display_name())
                    .or_default();
                stats.items_cleaned += 1;
                stats.space_freed += freed;
            }
            ItemOutcome::Missing => {}
            ItemOutcome::Failed { error } => {
                self.errors.push(error.clone());
            }
        }
    }

    /// Finish the run and produce the summary.
    pub fn finish(self, duration: Duration) -> CleaningResult {
        CleaningResult {
            total_items: self.total_items,
            cleaned_items: self.cleaned_items,
            total_size: self.total_size,
            freed_space: self.freed_space,
            duration,
            success: self.errors.is_empty(),
            errors: self.errors,
            category_stats: self.category_stats,
        }
    }
}
