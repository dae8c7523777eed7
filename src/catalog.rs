//! Catalog of cleanable cache locations.
//!
//! Pure data: which path patterns belong to which category on which
//! operating system. Patterns use `~` as the home-directory placeholder
//! and may contain a single `*` wildcard standing in for a
//! version-dependent directory name. Adding a category or OS means adding
//! entries here, not logic elsewhere.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Operating system family, as far as cache locations are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    MacOs,
    Unix,
}

impl OsFamily {
    /// Detect the family of the host operating system.
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "windows" => OsFamily::Windows,
            "macos" => OsFamily::MacOs,
            _ => OsFamily::Unix,
        }
    }
}

/// Fixed classification of cache sources.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CleanCategory {
    AndroidStudio,
    Emulator,
    Dart,
    Kotlin,
    Java,
    Gradle,
    System,
    Browser,
    Ide,
    Other,
}

impl CleanCategory {
    /// All categories, in scan order.
    pub const ALL: [CleanCategory; 10] = [
        CleanCategory::AndroidStudio,
        CleanCategory::Emulator,
        CleanCategory::Dart,
        CleanCategory::Kotlin,
        CleanCategory::Java,
        CleanCategory::Gradle,
        CleanCategory::System,
        CleanCategory::Browser,
        CleanCategory::Ide,
        CleanCategory::Other,
    ];

    /// Stable identifier used in item IDs, config files and CLI flags.
    pub fn token(&self) -> &'static str {
        match self {
            CleanCategory::AndroidStudio => "android-studio",
            CleanCategory::Emulator => "emulator",
            CleanCategory::Dart => "dart",
            CleanCategory::Kotlin => "kotlin",
            CleanCategory::Java => "java",
            CleanCategory::Gradle => "gradle",
            CleanCategory::System => "system",
            CleanCategory::Browser => "browser",
            CleanCategory::Ide => "ide",
            CleanCategory::Other => "other",
        }
    }

    /// Human-readable label. Per-category statistics are keyed by this.
    pub fn display_name(&self) -> &'static str {
        match self {
            CleanCategory::AndroidStudio => "Android Studio",
            CleanCategory::Emulator => "Emulator",
            CleanCategory::Dart => "Dart",
            CleanCategory::Kotlin => "Kotlin",
            CleanCategory::Java => "Java",
            CleanCategory::Gradle => "Gradle",
            CleanCategory::System => "System",
            CleanCategory::Browser => "Browser",
            CleanCategory::Ide => "IDE",
            CleanCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for CleanCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Path patterns for a category's cache locations on the given OS.
///
/// `System` has no patterns; its temp directories are scanned with an age
/// filter instead (see [`temp_roots`]). `Other` is a classification bucket
/// with no scan sources of its own.
pub fn cache_patterns(os: OsFamily, category: CleanCategory) -> &'static [&'static str] {
    match category {
        CleanCategory::AndroidStudio => match os {
            OsFamily::Windows => &[
                "~/AppData/Local/Google/AndroidStudio*/caches",
                "~/AppData/Roaming/Google/AndroidStudio*/logs",
                "~/AppData/Local/Google/AndroidStudio*/temp",
            ],
            OsFamily::MacOs => &[
                "~/Library/Caches/Google/AndroidStudio*",
                "~/Library/Logs/Google/AndroidStudio*",
                "~/Library/Application Support/Google/AndroidStudio*/temp",
            ],
            OsFamily::Unix => &[
                "~/.cache/Google/AndroidStudio*",
                "~/.config/Google/AndroidStudio*/logs",
                "~/.config/Google/AndroidStudio*/temp",
            ],
        },
        // The AVD and emulator state lives under ~/.android on every OS.
        CleanCategory::Emulator => &["~/.android/avd", "~/.android/cache", "~/.android/logs"],
        CleanCategory::Dart => match os {
            OsFamily::Windows => &[
                "~/AppData/Roaming/Pub/Cache",
                "~/AppData/Local/Pub/Cache",
                "~/AppData/Local/Dart",
                "~/AppData/Local/Flutter",
            ],
            _ => &["~/.pub-cache", "~/.dart", "~/.flutter"],
        },
        CleanCategory::Kotlin => match os {
            OsFamily::Windows => &[
                "~/.kotlin",
                "~/.gradle/caches/modules-2/files-2.1/org.jetbrains.kotlin",
            ],
            _ => &[
                "~/.kotlin",
                "~/.gradle/caches/modules-2/files-2.1/org.jetbrains.kotlin",
                "~/.kotlin/cache",
                "~/.kotlin/temp",
            ],
        },
        CleanCategory::Java => match os {
            OsFamily::Windows => &[
                "~/.gradle/caches/modules-2/files-2.1/org.jetbrains.kotlin",
                "~/.m2/repository",
            ],
            _ => &[
                "~/.gradle/caches/modules-2/files-2.1/org.jetbrains.kotlin",
                "~/.m2/repository",
                "~/.ivy2/cache",
                "~/.sbt",
                "~/.cache/coursier",
            ],
        },
        CleanCategory::Gradle => &[
            "~/.gradle/caches",
            "~/.gradle/wrapper/dists",
            "~/.gradle/daemon",
            "~/.gradle/native",
            "~/.gradle/notifications",
            "~/.gradle/workers",
            "~/.gradle/buildOutputCleanup",
        ],
        CleanCategory::System => &[],
        CleanCategory::Browser => match os {
            OsFamily::Windows => &[
                "~/AppData/Local/Google/Chrome/User Data/Default/Cache",
                "~/AppData/Local/Mozilla/Firefox/Profiles/*.default*/cache2",
            ],
            OsFamily::MacOs => &[
                "~/Library/Caches/Google/Chrome/Default/Cache",
                "~/Library/Caches/Firefox/Profiles/*.default*/cache2",
            ],
            OsFamily::Unix => &[
                "~/.cache/google-chrome",
                "~/.cache/mozilla",
                "~/.cache/chromium",
                "~/.mozilla/firefox/*.default*/cache2",
                "~/.config/google-chrome/Default/Cache",
            ],
        },
        CleanCategory::Ide => match os {
            OsFamily::Windows => &[
                "~/AppData/Roaming/JetBrains/IntelliJIdea*/caches",
                "~/AppData/Local/JetBrains/IntelliJIdea*/system/caches",
            ],
            OsFamily::MacOs => &[
                "~/Library/Caches/JetBrains/IntelliJIdea*",
                "~/Library/Logs/JetBrains/IntelliJIdea*",
            ],
            OsFamily::Unix => &[
                "~/.IntelliJIdea*/config/caches",
                "~/.IntelliJIdea*/system/caches",
                "~/.IntelliJIdea*/config/logs",
                "~/.IntelliJIdea*/system/logs",
            ],
        },
        CleanCategory::Other => &[],
    }
}

/// System temp directories scanned with the age filter, deduplicated.
///
/// `std::env::temp_dir()` usually resolves to one of the fixed entries
/// (e.g. `/tmp` on Linux); scanning it twice would produce duplicate items.
pub fn temp_roots(os: OsFamily) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = match os {
        OsFamily::Windows => vec![],
        OsFamily::MacOs => vec![PathBuf::from("/tmp")],
        OsFamily::Unix => vec![PathBuf::from("/tmp"), PathBuf::from("/var/tmp")],
    };

    let env_tmp = std::env::temp_dir();
    if !roots.contains(&env_tmp) {
        roots.push(env_tmp);
    }

    roots
}
