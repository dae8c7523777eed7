use std::fs::Metadata;
use std::io;
use std::path::Path;

/// Outcome of processing one inventory item.
///
/// Failures are values, not panics or propagated errors: one bad item must
/// never abort the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The item was deleted (or would have been, in a dry run).
    Cleaned {
        /// Size measured immediately before deletion.
        freed: u64,
    },
    /// The path no longer existed; skipped without counting as a failure.
    Missing,
    /// Deletion or a pre-deletion check failed.
    Failed { error: String },
}

/// Delete the entry at `path`, recursively for directories.
///
/// Children are removed depth-first before the directory itself. Symlinks
/// are unlinked, never followed into.
pub fn delete_recursively(path: &Path, metadata: &Metadata) -> io::Result<()> {
    if metadata.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn deletes_plain_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("cache.bin");
        fs::write(&file, "data").unwrap();

        let metadata = fs::symlink_metadata(&file).unwrap();
        delete_recursively(&file, &metadata).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn deletes_nested_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("caches");
        fs::create_dir_all(dir.join("a/b")).unwrap();
        fs::write(dir.join("a/b/file"), "data").unwrap();

        let metadata = fs::symlink_metadata(&dir).unwrap();
        delete_recursively(&dir, &metadata).unwrap();
        assert!(!dir.exists());
    }

    #[cfg(unix)]
    #[test]
    fn unlinks_symlink_without_touching_target() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "data").unwrap();

        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let metadata = fs::symlink_metadata(&link).unwrap();
        delete_recursively(&link, &metadata).unwrap();

        assert!(!link.exists());
        assert!(target.join("keep").exists());
    }
}
