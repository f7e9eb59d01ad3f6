//! Filesystem probes that tell "absent" apart from "could not look".
//!
//! Probes follow symlinks: a plugin repository commonly links shared
//! bundles in from elsewhere.

use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::Path;

use crate::errors::{GuardError, Result};

/// Metadata for `path`, or `None` if nothing is there.
///
/// `NotFound` and `NotADirectory` (a path component is a file) mean absent.
/// Any other failure, such as permission denied, is a [`GuardError::Probe`].
pub(crate) fn probe(path: &Path) -> Result<Option<Metadata>> {
    match std::fs::metadata(path) {
        Ok(m) => Ok(Some(m)),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(None),
        Err(source) => Err(GuardError::Probe {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Returns `true` if `path` is a regular file.
pub(crate) fn is_file(path: &Path) -> Result<bool> {
    Ok(probe(path)?.is_some_and(|m| m.is_file()))
}

/// Returns `true` if `path` is a directory.
pub(crate) fn is_dir(path: &Path) -> Result<bool> {
    Ok(probe(path)?.is_some_and(|m| m.is_dir()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_file_true_for_regular_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("admin.smx");
        fs::write(&file, "x").unwrap();
        assert!(is_file(&file).unwrap());
        assert!(!is_dir(&file).unwrap());
    }

    #[test]
    fn is_dir_true_for_directory() {
        let dir = tempdir().unwrap();
        assert!(is_dir(dir.path()).unwrap());
        assert!(!is_file(dir.path()).unwrap());
    }

    #[test]
    fn nonexistent_is_absent_not_error() {
        let path = Path::new("/nonexistent/path/file.smx");
        assert!(probe(path).unwrap().is_none());
        assert!(!is_file(path).unwrap());
        assert!(!is_dir(path).unwrap());
    }

    #[test]
    fn file_as_parent_component_is_absent() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plugins");
        fs::write(&file, "not a dir").unwrap();
        assert!(probe(&file.join("admin.smx")).unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlink_to_dir() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("shared");
        fs::create_dir(&target).unwrap();
        let link = dir.path().join("linked");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert!(is_dir(&link).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_absent() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("dangling.smx");
        std::os::unix::fs::symlink(dir.path().join("gone.smx"), &link).unwrap();
        assert!(!is_file(&link).unwrap());
    }
}
