use crate::catalog::CleanCategory;
use serde::Serialize;
use std::path::PathBuf;

/// One discovered filesystem entry that can be cleaned.
///
/// Created by the scanner and read-only afterward; the cleaner consumes
/// items without mutating them. The path existed at discovery time, but
/// `size` is a snapshot and may be stale by the time deletion happens.
#[derive(Debug, Clone, Serialize)]
pub struct CleaningItem {
    /// Scan-session-unique token (`<category>-<n>`)
    pub id: String,

    /// Display label (`<category>: <entry name>`)
    pub name: String,

    /// Which cache source this entry belongs to
    pub category: CleanCategory,

    /// Absolute path of the entry
    pub path: PathBuf,

    /// Size in bytes, measured at discovery time
    pub size: u64,

    /// True if the entry is a directory
    pub is_directory: bool,

    /// Short description of what the entry holds
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_creation() {
        let item = CleaningItem {
            id: "gradle-0".to_string(),
            name: "Gradle: caches".to_string(),
            category: CleanCategory::Gradle,
            path: PathBuf::from("/home/user/.gradle/caches"),
            size: 4096,
            is_directory: true,
            description: "Gradle cache files".to_string(),
        };
        assert_eq!(item.category, CleanCategory::Gradle);
        assert!(item.is_directory);
        assert_eq!(item.size, 4096);
    }

    #[test]
    fn item_serializes_to_json() {
        let item = CleaningItem {
            id: "dart-3".to_string(),
            name: "Dart: .pub-cache".to_string(),
            category: CleanCategory::Dart,
            path: PathBuf::from("/home/user/.pub-cache"),
            size: 0,
            is_directory: true,
            description: "Dart cache files".to_string(),
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"category\":\"dart\""));
        assert!(json.contains("\"size\":0"));
    }
}
