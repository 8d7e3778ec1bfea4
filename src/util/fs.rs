//! Filesystem utilities.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Remove a directory tree, logging instead of failing.
///
/// Every entry that can be removed is removed; the first failure is
/// reported and the rest of the tree is still attempted. Returns whether
/// the directory is gone afterwards.
pub fn remove_dir_all_best_effort(path: &Path) -> bool {
    if !path.exists() {
        return true;
    }

    if let Err(e) = fs::remove_dir_all(path) {
        tracing::warn!("error removing {}: {}", path.display(), e);
        remove_entries_best_effort(path);
    }

    !path.exists()
}

fn remove_entries_best_effort(dir: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("error reading {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        let result = if is_dir {
            remove_entries_best_effort(&path);
            fs::remove_dir(&path)
        } else {
            fs::remove_file(&path)
        };
        if let Err(e) = result {
            tracing::warn!("error removing {}: {}", path.display(), e);
        }
    }

    if let Err(e) = fs::remove_dir(dir) {
        tracing::warn!("error removing {}: {}", dir.display(), e);
    }
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Write a file atomically inside its (existing) parent directory.
///
/// The contents go to a temporary file next to `path` which then replaces
/// the destination, so readers never observe a half-written file. The file
/// gets the same mode a plain create would (0666 less the umask).
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Make a path absolute against the current directory without touching
/// the filesystem.
pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_dir_all_best_effort() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("project");
        fs::create_dir_all(dir.join("nested/deeper")).unwrap();
        fs::write(dir.join("nested/file.txt"), "content").unwrap();

        assert!(remove_dir_all_best_effort(&dir));
        assert!(!dir.exists());

        // Missing directories count as removed.
        assert!(remove_dir_all_best_effort(&dir));
    }

    #[test]
    fn test_write_atomic_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("build.gradle");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    #[cfg(unix)]
    fn test_write_atomic_mode_follows_umask() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let reference = tmp.path().join("plain.txt");
        fs::write(&reference, "x").unwrap();
        let path = tmp.path().join("build.gradle");
        write_atomic(&path, "x").unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }

    #[test]
    fn test_write_atomic_missing_parent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("build.gradle");
        assert!(write_atomic(&path, "x").is_err());
    }

    #[test]
    fn test_ensure_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a/b/c");
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
