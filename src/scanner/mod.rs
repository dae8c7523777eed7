//! Cache discovery.
//!
//! This module provides:
//! - Expansion of catalog patterns against the real filesystem
//! - Recursive size accounting for discovered entries
//! - Age-based filtering of system temp files

mod item;
mod pattern;
mod scan;
mod size;

pub use item::CleaningItem;
pub use pattern::{expand_home, split_wildcard, wildcard_match};
pub use scan::CacheScanner;
pub use size::path_size;
