use std::path::Path;
use walkdir::WalkDir;

/// Total size in bytes of the entry at `path`.
///
/// A plain file reports its own length; a directory reports the sum of all
/// regular file lengths below it. Symlinks are not followed, so cycles
/// cannot occur. Unreadable entries contribute 0 instead of failing the
/// calculation — a size error must never block discovery.
pub fn path_size(path: &Path) -> u64 {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => return 0,
    };

    if metadata.is_file() {
        return metadata.len();
    }
    if !metadata.is_dir() {
        // Symlinks and special files count as zero-size entries.
        return 0;
    }

    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .flatten()
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_reports_own_length() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("data.bin");
        fs::write(&file, "x".repeat(1234)).unwrap();

        assert_eq!(path_size(&file), 1234);
    }

    #[test]
    fn directory_sums_nested_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a"), "x".repeat(100)).unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/b"), "x".repeat(200)).unwrap();
        fs::create_dir(tmp.path().join("sub/deeper")).unwrap();
        fs::write(tmp.path().join("sub/deeper/c"), "x".repeat(300)).unwrap();

        assert_eq!(path_size(tmp.path()), 600);
    }

    #[test]
    fn empty_directory_is_zero() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(path_size(tmp.path()), 0);
    }

    #[test]
    fn missing_path_is_zero() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(path_size(&tmp.path().join("nope")), 0);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("big"), "x".repeat(5000)).unwrap();

        let holder = tmp.path().join("holder");
        fs::create_dir(&holder).unwrap();
        std::os::unix::fs::symlink(&target, holder.join("link")).unwrap();

        // The link itself contributes nothing; the target is not traversed.
        assert_eq!(path_size(&holder), 0);
        assert_eq!(path_size(&holder.join("link")), 0);
    }
}
