//! Devsweep - A cross-platform developer tool cache cleanup utility
//!
//! This crate provides functionality for:
//! - Discovering stale developer-tool caches (Android Studio, Gradle,
//!   Kotlin/Java, emulator, Dart/Flutter, browser and IDE caches, plus
//!   aged system temp files)
//! - Measuring their disk usage before anything is touched
//! - Deleting a chosen subset with per-item failure isolation

pub mod catalog;
pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod scanner;

// Re-export commonly used types
pub use catalog::{CleanCategory, OsFamily};
pub use cleaner::{CleanOptions, Cleaner, CleaningResult};
pub use config::Config;
pub use error::{Result, SweepError};
pub use scanner::{CacheScanner, CleaningItem};
