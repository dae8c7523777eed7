//! Deletion of discovered cache entries.
//!
//! This module provides:
//! - Recursive, per-item-isolated deletion of an inventory
//! - Aggregation of outcomes into a run summary

mod executor;
mod outcome;
mod result;

pub use executor::{CleanOptions, Cleaner};
pub use outcome::ItemOutcome;
pub use result::{CategoryCleanStats, CleaningResult, ResultAggregator};
